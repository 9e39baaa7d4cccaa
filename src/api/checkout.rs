/// Checkout endpoints
use crate::{
    checkout::{CheckoutView, PaymentMethod, Receipt},
    context::AppContext,
    error::AppResult,
};
use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

/// Build checkout routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/checkout", get(get_checkout))
        .route("/api/checkout/code", post(send_code))
        .route("/api/checkout/resend", post(resend))
        .route("/api/checkout/verify", post(verify))
        .route("/api/checkout/change-email", post(change_email))
        .route("/api/checkout/verified", delete(clear_verified))
        .route("/api/checkout/pay", post(pay))
}

async fn get_checkout(State(ctx): State<AppContext>) -> Json<CheckoutView> {
    Json(ctx.checkout.view().await)
}

#[derive(Debug, Deserialize)]
struct SendCodeRequest {
    email: String,
}

async fn send_code(
    State(ctx): State<AppContext>,
    Json(req): Json<SendCodeRequest>,
) -> AppResult<Json<CheckoutView>> {
    Ok(Json(ctx.checkout.send_code(&req.email).await?))
}

async fn resend(State(ctx): State<AppContext>) -> AppResult<Json<CheckoutView>> {
    Ok(Json(ctx.checkout.resend().await?))
}

#[derive(Debug, Deserialize)]
struct VerifyRequest {
    code: String,
}

async fn verify(
    State(ctx): State<AppContext>,
    Json(req): Json<VerifyRequest>,
) -> AppResult<Json<CheckoutView>> {
    Ok(Json(ctx.checkout.verify(&req.code).await?))
}

async fn change_email(State(ctx): State<AppContext>) -> Json<CheckoutView> {
    Json(ctx.checkout.change_email().await)
}

async fn clear_verified(State(ctx): State<AppContext>) -> Json<CheckoutView> {
    Json(ctx.checkout.clear_verified().await)
}

#[derive(Debug, Deserialize)]
struct PayRequest {
    method: String,
}

async fn pay(
    State(ctx): State<AppContext>,
    Json(req): Json<PayRequest>,
) -> AppResult<Json<Receipt>> {
    let method: PaymentMethod = req.method.parse()?;
    Ok(Json(ctx.checkout.pay(method).await?))
}
