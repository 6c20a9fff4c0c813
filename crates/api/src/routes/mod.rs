//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod blog;
pub mod health;
pub mod home;
pub mod properties;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(home::routes())
        .merge(properties::routes())
        .merge(blog::routes())
}
