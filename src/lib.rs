/// Gallopics - horse-show photo marketplace state service
///
/// Public catalog, cart, mock session, checkout and photographer workspace
/// stores behind a JSON API.

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod preferences;
pub mod search;
pub mod server;
pub mod storage;
pub mod workspace;

pub use config::AppConfig;
pub use context::AppContext;
pub use error::{AppError, AppResult};
