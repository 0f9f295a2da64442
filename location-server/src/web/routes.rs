//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::LocationSuggestion;
use crate::geocoding::Geocoder;
use crate::search::{LocationError, LocationQuery, SearchResponse};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<G: Geocoder + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations/categories", get(list_categories::<G>))
        .route("/api/locations/search", post(search_locations::<G>))
        .route("/api/locations/gazetteer/:id", get(gazetteer_location::<G>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All search categories.
async fn list_categories<G: Geocoder>(State(state): State<AppState<G>>) -> Json<CategoriesResponse> {
    let categories = state
        .search
        .categories()
        .iter()
        .map(CategoryResult::from)
        .collect();

    Json(CategoriesResponse { categories })
}

/// Run a location search.
async fn search_locations<G: Geocoder>(
    State(state): State<AppState<G>>,
    Json(request): Json<LocationQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let data = state.search.execute(&request).await?;
    Ok(Json(SearchResponse::ok(data)))
}

/// Look up a gazetteer airport or station.
async fn gazetteer_location<G: Geocoder>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<LocationSuggestion>, AppError> {
    Ok(Json(state.search.location(&id)?))
}

/// Application error type.
///
/// Rendered as the failure envelope with a status matching the error kind.
#[derive(Debug)]
pub struct AppError(LocationError);

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LocationError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            LocationError::CategoryNotFound(_) | LocationError::LocationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            LocationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LocationError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            warn!(%status, error = %self.0, "request failed");
        } else {
            debug!(%status, error = %self.0, "request rejected");
        }

        (status, Json(SearchResponse::failed(&self.0))).into_response()
    }
}
