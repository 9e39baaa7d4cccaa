/// Gallopics state service
///
/// Serves the marketplace stores over HTTP for the web client.

use anyhow::Context;
use gallopics::{config::LoggingConfig, server, AppConfig, AppContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env included) before logging so it can pick the format
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    print_banner();

    let ctx = AppContext::new(config)
        .await
        .context("Failed to initialise application context")?;

    server::serve(ctx).await.context("Server terminated")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level)
        .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_banner() {
    println!(
        r#"
   ______      ____            _
  / ____/___ _/ / /___  ____  (_)_________
 / / __/ __ `/ / / __ \/ __ \/ / ___/ ___/
/ /_/ / /_/ / / / /_/ / /_/ / / /__(__  )
\____/\__,_/_/_/\____/ .___/_/\___/____/
                    /_/
        Photo marketplace state service v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
