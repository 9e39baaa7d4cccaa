/// Mock authentication session
///
/// There is no backend: `login` trusts whatever profile it is handed and the
/// flag plus profile are written to local storage so a restart keeps the
/// session.

pub mod forms;

use crate::{
    error::{AppError, AppResult},
    storage::{self, KeyValueStorage, AUTH_FLAG_KEY, AUTH_USER_KEY},
};
use forms::{ProfileForm, RegisterForm, SignInForm};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Avatar used by the prototype account
pub const PROTOTYPE_AVATAR_URL: &str = "/images/Klara Fors.jpg";

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub display_name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub has_completed_onboarding: bool,
}

/// The profile used when `login` is called without one
pub fn prototype_user() -> UserProfile {
    UserProfile {
        id: Some("klara-fors".to_string()),
        display_name: "Klara Fors".to_string(),
        city: "Stockholm".to_string(),
        avatar_url: Some(PROTOTYPE_AVATAR_URL.to_string()),
        has_completed_onboarding: false,
    }
}

/// Partial profile update; unset fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub city: Option<String>,
    pub avatar_url: Option<String>,
    /// Drop the avatar entirely
    #[serde(default)]
    pub clear_avatar: bool,
    pub has_completed_onboarding: Option<bool>,
}

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

/// Authentication store
pub struct AuthStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStorage>,
}

impl AuthStore {
    /// Build the store, restoring a persisted session if any
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let is_authenticated = storage::load_flag(storage.as_ref(), AUTH_FLAG_KEY);
        let user: Option<UserProfile> = storage::load_json(storage.as_ref(), AUTH_USER_KEY);

        if is_authenticated {
            debug!("Restored session for {:?}", user.as_ref().map(|u| &u.display_name));
        }

        Self {
            state: RwLock::new(Session {
                is_authenticated,
                user,
            }),
            storage,
        }
    }

    pub async fn session(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.state.read().await.user.clone()
    }

    /// Mark the session authenticated, replacing the user
    pub async fn login(&self, profile: Option<UserProfile>) -> UserProfile {
        let user = profile.unwrap_or_else(prototype_user);

        let mut state = self.state.write().await;
        state.is_authenticated = true;
        state.user = Some(user.clone());
        self.persist(&state);

        info!("Logged in as {}", user.display_name);
        user
    }

    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.is_authenticated = false;
        state.user = None;
        self.persist(&state);

        info!("Logged out");
    }

    /// Merge changes into the current user
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<UserProfile> {
        let mut state = self.state.write().await;

        let user = match state.user.as_mut() {
            Some(user) => user,
            None => {
                warn!("Profile update without a signed-in user");
                return Err(AppError::Authentication("No user is signed in".to_string()));
            }
        };

        if let Some(display_name) = update.display_name {
            user.display_name = display_name;
        }
        if let Some(city) = update.city {
            user.city = city;
        }
        if update.clear_avatar {
            user.avatar_url = None;
        } else if let Some(avatar_url) = update.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        if let Some(done) = update.has_completed_onboarding {
            user.has_completed_onboarding = done;
        }

        let updated = user.clone();
        self.persist(&state);

        debug!("Updated profile for {}", updated.display_name);
        Ok(updated)
    }

    /// Validate the sign-in form and log in as the returning prototype user
    pub async fn sign_in(&self, form: SignInForm) -> AppResult<UserProfile> {
        let form = form.normalized();
        forms::check(&form)?;

        let profile = UserProfile {
            has_completed_onboarding: true,
            ..prototype_user()
        };
        Ok(self.login(Some(profile)).await)
    }

    /// Validate the registration form and log in as a fresh photographer
    pub async fn register(&self, form: RegisterForm) -> AppResult<UserProfile> {
        let form = form.normalized();
        forms::check(&form)?;

        let profile = UserProfile {
            id: None,
            display_name: format!("{} {}", form.first_name, form.last_name),
            city: prototype_user().city,
            avatar_url: Some(PROTOTYPE_AVATAR_URL.to_string()),
            has_completed_onboarding: false,
        };
        Ok(self.login(Some(profile)).await)
    }

    /// Validate the edit-profile form and apply it
    ///
    /// Country is required by the form but not stored on the profile.
    pub async fn edit_profile(&self, form: ProfileForm) -> AppResult<UserProfile> {
        let form = form.normalized();
        forms::check(&form)?;

        self.update_profile(ProfileUpdate {
            display_name: Some(form.display_name),
            city: Some(form.city),
            avatar_url: form.avatar_url,
            ..Default::default()
        })
        .await
    }

    fn persist(&self, state: &Session) {
        storage::save_flag(self.storage.as_ref(), AUTH_FLAG_KEY, state.is_authenticated);
        match &state.user {
            Some(user) => storage::save_json(self.storage.as_ref(), AUTH_USER_KEY, user),
            None => storage::remove_key(self.storage.as_ref(), AUTH_USER_KEY),
        }
    }
}
