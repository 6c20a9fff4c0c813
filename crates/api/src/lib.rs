//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for listings, the ROI calculator, and the blog
//! - Error-to-response mapping
//! - Response types

pub mod error;
pub mod routes;

use axum::Router;
use safal_core::blog::{BlogRepository, InMemoryBlogRepository};
use safal_core::listing::{InMemoryPropertyRepository, PropertyRepository};
use safal_shared::CalculatorConfig;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Property listings.
    pub properties: Arc<dyn PropertyRepository>,
    /// Blog posts.
    pub blog: Arc<dyn BlogRepository>,
    /// ROI calculator defaults.
    pub calculator: CalculatorConfig,
    /// Calendar year lease figures are reported against.
    pub as_of_year: i32,
}

impl AppState {
    /// State backed by the site's built-in listings and posts.
    #[must_use]
    pub fn with_catalog(calculator: CalculatorConfig, as_of_year: i32) -> Self {
        Self {
            properties: Arc::new(InMemoryPropertyRepository::with_catalog()),
            blog: Arc::new(InMemoryBlogRepository::with_catalog()),
            calculator,
            as_of_year,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
