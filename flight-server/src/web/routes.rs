//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::planner::{FlightEventsProvider, JourneyRecord, SearchError};

use super::dto::{ErrorResponse, SearchJourneysRequest};
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: FlightEventsProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/journeys/search", get(search_journeys))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search journeys for a date and route.
async fn search_journeys<P>(
    State(state): State<AppState<P>>,
    Query(req): Query<SearchJourneysRequest>,
) -> Result<Json<Vec<JourneyRecord>>, AppError>
where
    P: FlightEventsProvider + Send + Sync,
{
    let journeys = state
        .search
        .execute(&req.date, &req.departure_city, &req.arrival_city)
        .await?;

    Ok(Json(journeys))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidCity(e) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Provider(e) => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
