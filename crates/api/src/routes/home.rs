//! Landing page route.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use safal_core::session::SessionFlags;
use safal_core::view::HomeView;
use safal_shared::AppError;
use serde::Deserialize;
use tracing::debug;

use super::properties::PropertyCard;
use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Query parameters for the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// `true` once the visitor has watched the intro splash.
    pub splash_seen: Option<String>,
}

impl HomeQuery {
    fn flags(&self) -> ApiResult<SessionFlags> {
        let splash_seen = match self.splash_seen.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(raw) => raw.parse::<bool>().map_err(|_| {
                ApiError(AppError::Validation(format!(
                    "Invalid value for splash_seen: {raw:?}"
                )))
            })?,
        };
        Ok(SessionFlags { splash_seen })
    }
}

/// Landing page response.
#[derive(Debug, serde::Serialize)]
pub struct HomeResponse {
    /// Whether the client should play the intro splash.
    pub show_splash: bool,
    /// Listing cards.
    pub properties: Vec<PropertyCard>,
}

/// GET /home?splash_seen=
async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> ApiResult<Json<HomeResponse>> {
    let view = HomeView::build(query.flags()?, state.properties.as_ref(), None);
    debug!(show_splash = view.show_splash, listings = view.properties.len(), "Built home view");

    Ok(Json(HomeResponse {
        show_splash: view.show_splash,
        properties: view
            .properties
            .iter()
            .map(|p| PropertyCard::new(p, state.as_of_year))
            .collect(),
    }))
}

/// Creates landing page routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/home", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get_json, state};
    use axum::http::StatusCode;
    use rstest::rstest;

    #[rstest]
    #[case("/home", true)]
    #[case("/home?splash_seen=false", true)]
    #[case("/home?splash_seen=true", false)]
    #[case("/home?splash_seen=", true)]
    #[tokio::test]
    async fn test_home_splash(#[case] uri: &str, #[case] show_splash: bool) {
        let app = Router::new().merge(routes()).with_state(state());

        let (status, body) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["show_splash"], show_splash);
        assert_eq!(body["properties"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_home_rejects_non_boolean_splash_flag() {
        let app = Router::new().merge(routes()).with_state(state());

        let (status, body) = get_json(app, "/home?splash_seen=yes").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
