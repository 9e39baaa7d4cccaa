/// API routes and handlers
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod preferences;
pub mod workspace;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(catalog::routes())
        .merge(cart::routes())
        .merge(auth::routes())
        .merge(checkout::routes())
        .merge(preferences::routes())
        .merge(workspace::routes())
}
