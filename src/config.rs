/// Configuration management for the Gallopics state service
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub workspace: WorkspaceConfig,
    pub checkout: CheckoutConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
    pub version: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_directory: PathBuf,
    /// JSON file backing the durable ("local") key/value scope
    pub local_storage_file: PathBuf,
}

/// Fixture generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Seed for the mock photo generator, random when unset
    pub seed: Option<u64>,
    pub photo_count: usize,
}

/// Photographer workspace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub photographer_id: String,
    /// Simulated upload tick interval in milliseconds
    pub upload_tick_ms: u64,
}

/// Checkout OTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Accept the fixed demo code `123456` in addition to the generated one
    pub otp_fallback_enabled: bool,
    pub max_attempts: u32,
    pub resend_cooldown_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "gallopics=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: None,
            photo_count: 1000,
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            photographer_id: "klara-fors".to_string(),
            upload_tick_ms: 800,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            otp_fallback_enabled: true,
            max_attempts: 5,
            resend_cooldown_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let hostname = env::var("GALLOPICS_HOSTNAME").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("GALLOPICS_PORT")
            .unwrap_or_else(|_| "4173".to_string())
            .parse()
            .map_err(|_| AppError::Validation("Invalid port number".to_string()))?;
        let version = env::var("GALLOPICS_VERSION")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let data_directory: PathBuf = env::var("GALLOPICS_DATA_DIRECTORY")
            .unwrap_or_else(|_| "./data".to_string())
            .into();
        let local_storage_file = env::var("GALLOPICS_LOCAL_STORAGE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_directory.join("local_storage.json"));

        let seed = match env::var("GALLOPICS_CATALOG_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| AppError::Validation("Invalid catalog seed".to_string()))?,
            ),
            Err(_) => None,
        };
        let photo_count = env::var("GALLOPICS_CATALOG_PHOTO_COUNT")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);

        let photographer_id = env::var("GALLOPICS_PHOTOGRAPHER_ID")
            .unwrap_or_else(|_| "klara-fors".to_string());
        let upload_tick_ms = env::var("GALLOPICS_UPLOAD_TICK_MS")
            .unwrap_or_else(|_| "800".to_string())
            .parse()
            .unwrap_or(800);

        let otp_fallback_enabled = env::var("GALLOPICS_OTP_FALLBACK_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);
        let max_attempts = env::var("GALLOPICS_OTP_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);
        let resend_cooldown_secs = env::var("GALLOPICS_OTP_RESEND_COOLDOWN")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let logging = LoggingConfig {
            level: env::var("RUST_LOG").unwrap_or_else(|_| LoggingConfig::default().level),
            json: env::var("GALLOPICS_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };

        Ok(AppConfig {
            service: ServiceConfig {
                hostname,
                port,
                version,
            },
            storage: StorageConfig {
                data_directory,
                local_storage_file,
            },
            catalog: CatalogConfig { seed, photo_count },
            workspace: WorkspaceConfig {
                photographer_id,
                upload_tick_ms,
            },
            checkout: CheckoutConfig {
                otp_fallback_enabled,
                max_attempts,
                resend_cooldown_secs,
            },
            logging,
        })
    }

    /// Configuration rooted at a data directory, everything else defaulted
    pub fn for_data_directory(data_directory: PathBuf) -> Self {
        Self {
            service: ServiceConfig {
                hostname: "127.0.0.1".to_string(),
                port: 4173,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            storage: StorageConfig {
                local_storage_file: data_directory.join("local_storage.json"),
                data_directory,
            },
            catalog: CatalogConfig::default(),
            workspace: WorkspaceConfig::default(),
            checkout: CheckoutConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.service.hostname.is_empty() {
            return Err(AppError::Validation("Hostname cannot be empty".to_string()));
        }

        if self.catalog.photo_count == 0 {
            return Err(AppError::Validation(
                "Catalog photo count must be positive".to_string(),
            ));
        }

        if self.workspace.photographer_id.trim().is_empty() {
            return Err(AppError::Validation(
                "Photographer id cannot be empty".to_string(),
            ));
        }

        if self.workspace.upload_tick_ms == 0 {
            return Err(AppError::Validation(
                "Upload tick interval must be positive".to_string(),
            ));
        }

        if self.checkout.max_attempts == 0 {
            return Err(AppError::Validation(
                "OTP max attempts must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::for_data_directory(PathBuf::from("/tmp/gallopics"));
        assert!(config.validate().is_ok());
        assert_eq!(
            config.storage.local_storage_file,
            PathBuf::from("/tmp/gallopics/local_storage.json")
        );
        assert!(config.checkout.otp_fallback_enabled);
        assert_eq!(config.workspace.upload_tick_ms, 800);
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let mut config = AppConfig::for_data_directory(PathBuf::from("./data"));
        config.workspace.upload_tick_ms = 0;
        assert!(config.validate().is_err());
    }
}
