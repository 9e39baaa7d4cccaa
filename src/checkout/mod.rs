/// Checkout e-mail verification and payment
///
/// A buyer proves an e-mail address with a six-digit code before paying. The
/// code is never delivered anywhere; it is written to the log.

use crate::{
    cart::{CartItem, CartStore},
    config::CheckoutConfig,
    error::{AppError, AppResult},
    storage::{self, KeyValueStorage, VERIFIED_EMAIL_KEY},
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::Arc, time::Duration};
use tokio::{sync::RwLock, time::Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Always-accepted demo code while the fallback is enabled
pub const FALLBACK_CODE: &str = "123456";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Input,
    Verify,
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Swish,
    Klarna,
    Card,
    Digital,
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swish" => Ok(PaymentMethod::Swish),
            "klarna" => Ok(PaymentMethod::Klarna),
            "card" => Ok(PaymentMethod::Card),
            "digital" => Ok(PaymentMethod::Digital),
            other => Err(AppError::Validation(format!(
                "Unknown payment method: {}",
                other
            ))),
        }
    }
}

/// Completed purchase
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: String,
    pub email: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartItem>,
    pub total: u32,
    pub paid_at: DateTime<Utc>,
}

/// Client-visible checkout state; the secret code is never exposed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub step: CheckoutStep,
    pub email: String,
    pub attempts: u32,
    pub resend_in_secs: u64,
}

#[derive(Debug)]
struct CheckoutState {
    step: CheckoutStep,
    email: String,
    secret: String,
    attempts: u32,
    resend_at: Option<Instant>,
}

impl CheckoutState {
    fn empty() -> Self {
        Self {
            step: CheckoutStep::Input,
            email: String::new(),
            secret: String::new(),
            attempts: 0,
            resend_at: None,
        }
    }

    fn resend_in(&self) -> Duration {
        self.resend_at
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or_default()
    }
}

/// Checkout flow for the current buyer
pub struct CheckoutStore {
    state: RwLock<CheckoutState>,
    config: CheckoutConfig,
    cart: Arc<CartStore>,
    local: Arc<dyn KeyValueStorage>,
    session: Arc<dyn KeyValueStorage>,
}

impl CheckoutStore {
    pub fn new(
        config: CheckoutConfig,
        cart: Arc<CartStore>,
        local: Arc<dyn KeyValueStorage>,
        session: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let mut state = CheckoutState::empty();

        let saved = read_email(session.as_ref()).or_else(|| read_email(local.as_ref()));
        if let Some(email) = saved {
            debug!("Restored verified checkout email {}", email);
            state.email = email;
            state.step = CheckoutStep::Verified;
        }

        if config.otp_fallback_enabled {
            warn!("Checkout accepts the fixed code {}; do not use in production", FALLBACK_CODE);
        }

        Self {
            state: RwLock::new(state),
            config,
            cart,
            local,
            session,
        }
    }

    pub async fn view(&self) -> CheckoutView {
        let state = self.state.read().await;
        CheckoutView {
            step: state.step,
            email: state.email.clone(),
            attempts: state.attempts,
            resend_in_secs: state.resend_in().as_secs(),
        }
    }

    /// Issue a code for `email` and move to the verify step
    pub async fn send_code(&self, email: &str) -> AppResult<CheckoutView> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("Please enter a valid email".to_string()));
        }

        {
            let mut state = self.state.write().await;
            state.email = email.to_string();
            state.step = CheckoutStep::Verify;
            self.issue_code(&mut state);
        }

        Ok(self.view().await)
    }

    /// Issue a fresh code once the cooldown has passed
    pub async fn resend(&self) -> AppResult<CheckoutView> {
        {
            let mut state = self.state.write().await;

            if state.step != CheckoutStep::Verify {
                return Err(AppError::Conflict("No code has been sent".to_string()));
            }

            let wait = state.resend_in();
            if !wait.is_zero() {
                return Err(AppError::Conflict(format!(
                    "Resend available in {}s",
                    wait.as_secs().max(1)
                )));
            }

            self.issue_code(&mut state);
        }

        Ok(self.view().await)
    }

    /// Check a submitted code
    pub async fn verify(&self, code: &str) -> AppResult<CheckoutView> {
        {
            let mut state = self.state.write().await;

            if state.step != CheckoutStep::Verify {
                return Err(AppError::Conflict("No code has been sent".to_string()));
            }

            if state.attempts >= self.config.max_attempts {
                return Err(AppError::TooManyAttempts(
                    "Too many failed attempts. Please resend code.".to_string(),
                ));
            }

            let code = code.trim();
            let fallback = self.config.otp_fallback_enabled && code == FALLBACK_CODE;

            if code != state.secret && !fallback {
                state.attempts += 1;
                debug!("Incorrect checkout code, attempt {}", state.attempts);
                return Err(AppError::Validation("Incorrect code. Try again.".to_string()));
            }

            if fallback && code != state.secret {
                warn!("Checkout email {} verified with the fallback code", state.email);
            }

            state.step = CheckoutStep::Verified;
            for scope in [&self.session, &self.local] {
                if let Err(e) = scope.set(VERIFIED_EMAIL_KEY, &state.email) {
                    warn!("Failed to persist verified email: {}", e);
                }
            }
            info!("Checkout email {} verified", state.email);
        }

        Ok(self.view().await)
    }

    /// Go back to e-mail entry, keeping the typed address
    pub async fn change_email(&self) -> CheckoutView {
        {
            let mut state = self.state.write().await;
            state.step = CheckoutStep::Input;
            state.attempts = 0;
        }
        self.view().await
    }

    /// Forget the verified address everywhere
    pub async fn clear_verified(&self) -> CheckoutView {
        {
            let mut state = self.state.write().await;
            state.step = CheckoutStep::Input;
            state.email.clear();
            state.attempts = 0;
            storage::remove_key(self.session.as_ref(), VERIFIED_EMAIL_KEY);
            storage::remove_key(self.local.as_ref(), VERIFIED_EMAIL_KEY);
        }
        self.view().await
    }

    /// Pay for the whole cart
    pub async fn pay(&self, method: PaymentMethod) -> AppResult<Receipt> {
        let state = self.state.read().await;

        if state.step != CheckoutStep::Verified {
            return Err(AppError::Conflict("Verify your email before paying".to_string()));
        }

        let items = self.cart.drain().await;
        if items.is_empty() {
            return Err(AppError::Conflict("Cart is empty".to_string()));
        }

        let receipt = Receipt {
            order_id: Uuid::new_v4().to_string(),
            email: state.email.clone(),
            payment_method: method,
            total: items.iter().map(|i| i.price).sum(),
            items,
            paid_at: Utc::now(),
        };

        info!(
            "Processed {:?} payment of {} SEK for {}, order {}",
            receipt.payment_method, receipt.total, receipt.email, receipt.order_id
        );

        Ok(receipt)
    }

    fn issue_code(&self, state: &mut CheckoutState) {
        let code = rand::thread_rng().gen_range(100_000..=999_999u32).to_string();
        info!("Checkout code for {}: {}", state.email, code);

        state.secret = code;
        state.attempts = 0;
        state.resend_at = Some(Instant::now() + Duration::from_secs(self.config.resend_cooldown_secs));
    }
}

fn read_email(storage: &dyn KeyValueStorage) -> Option<String> {
    match storage.get(VERIFIED_EMAIL_KEY) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!("Failed to read verified email: {}", e);
            None
        }
    }
}
