/// Cart endpoints
use crate::{
    cart::{CartItem, Quality},
    context::AppContext,
    error::{AppError, AppResult},
};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Build cart routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/cart", get(get_cart).post(add_to_cart).delete(clear_cart))
        .route("/api/cart/:cart_id", delete(remove_item))
        .route("/api/cart/photo/:photo_id", delete(remove_photo))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub count: usize,
    /// SEK
    pub total: u32,
}

async fn snapshot(ctx: &AppContext) -> CartResponse {
    let items = ctx.cart.items().await;
    CartResponse {
        count: items.len(),
        total: items.iter().map(|i| i.price).sum(),
        items,
    }
}

async fn get_cart(State(ctx): State<AppContext>) -> Json<CartResponse> {
    Json(snapshot(&ctx).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartRequest {
    photo_id: String,
    /// Parsed here so unknown tiers get a proper error body
    quality: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartResponse {
    added: bool,
    cart: CartResponse,
}

async fn add_to_cart(
    State(ctx): State<AppContext>,
    Json(req): Json<AddToCartRequest>,
) -> AppResult<Json<AddToCartResponse>> {
    let quality: Quality = req.quality.parse()?;
    let photo = ctx
        .catalog
        .photo(&req.photo_id)
        .ok_or_else(|| AppError::NotFound(format!("Photo not found: {}", req.photo_id)))?;

    let added = ctx
        .cart
        .add_to_cart(photo, quality, quality.label(), quality.price())
        .await;

    Ok(Json(AddToCartResponse {
        added,
        cart: snapshot(&ctx).await,
    }))
}

async fn clear_cart(State(ctx): State<AppContext>) -> Json<CartResponse> {
    ctx.cart.clear_cart().await;
    Json(snapshot(&ctx).await)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveResponse {
    removed: usize,
    cart: CartResponse,
}

async fn remove_item(
    State(ctx): State<AppContext>,
    Path(cart_id): Path<String>,
) -> Json<RemoveResponse> {
    let removed = usize::from(ctx.cart.remove_from_cart(&cart_id).await);
    Json(RemoveResponse {
        removed,
        cart: snapshot(&ctx).await,
    })
}

async fn remove_photo(
    State(ctx): State<AppContext>,
    Path(photo_id): Path<String>,
) -> Json<RemoveResponse> {
    let removed = ctx.cart.remove_from_cart_by_photo_id(&photo_id).await;
    Json(RemoveResponse {
        removed,
        cart: snapshot(&ctx).await,
    })
}
