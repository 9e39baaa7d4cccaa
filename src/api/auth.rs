/// Session endpoints
use crate::{
    auth::{
        forms::{ProfileForm, RegisterForm, SignInForm},
        ProfileUpdate, Session, UserProfile,
    },
    context::AppContext,
    error::{AppError, AppResult},
};
use axum::{
    body::Bytes,
    extract::State,
    routing::{get, patch, post},
    Json, Router,
};

/// Build auth routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/auth/session", get(get_session))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/profile", patch(update_profile).put(edit_profile))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/register", post(register))
}

async fn get_session(State(ctx): State<AppContext>) -> Json<Session> {
    Json(ctx.auth.session().await)
}

/// Log in with the posted profile, or the prototype profile when the body is empty
///
/// A body that is present but not a valid profile is rejected rather than
/// treated as absent.
async fn login(State(ctx): State<AppContext>, body: Bytes) -> AppResult<Json<Session>> {
    let profile = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let profile: UserProfile = serde_json::from_slice(&body)
            .map_err(|e| AppError::Validation(format!("Invalid profile: {}", e)))?;
        Some(profile)
    };

    ctx.auth.login(profile).await;
    Ok(Json(ctx.auth.session().await))
}

async fn logout(State(ctx): State<AppContext>) -> Json<Session> {
    ctx.auth.logout().await;
    Json(ctx.auth.session().await)
}

async fn update_profile(
    State(ctx): State<AppContext>,
    Json(update): Json<ProfileUpdate>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(ctx.auth.update_profile(update).await?))
}

async fn edit_profile(
    State(ctx): State<AppContext>,
    Json(form): Json<ProfileForm>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(ctx.auth.edit_profile(form).await?))
}

async fn sign_in(
    State(ctx): State<AppContext>,
    Json(form): Json<SignInForm>,
) -> AppResult<Json<Session>> {
    ctx.auth.sign_in(form).await?;
    Ok(Json(ctx.auth.session().await))
}

async fn register(
    State(ctx): State<AppContext>,
    Json(form): Json<RegisterForm>,
) -> AppResult<Json<Session>> {
    ctx.auth.register(form).await?;
    Ok(Json(ctx.auth.session().await))
}
