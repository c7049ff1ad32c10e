//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::Journey;
use crate::ranking::{RankError, Ranker};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/algorithms", get(list_algorithms))
        .route("/journeyplanner/desirability", post(rank_desirability))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List registered algorithms and the default.
async fn list_algorithms(State(state): State<AppState>) -> Json<AlgorithmsResponse> {
    Json(AlgorithmsResponse {
        algorithms: state
            .registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default: state.config.default_algorithm.clone(),
    })
}

/// Rank a short list of journeys, most desirable first.
///
/// The body is a JSON array of journeys. `algorithmName` picks the
/// strategy and falls back to the configured default.
async fn rank_desirability(
    State(state): State<AppState>,
    Query(query): Query<DesirabilityQuery>,
    body: Bytes,
) -> Result<Json<Vec<JourneyDto>>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let request: Vec<JourneyDto> = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected journey payload");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let algorithm = query
        .algorithm_name
        .unwrap_or_else(|| state.config.default_algorithm.clone());

    let journeys: Vec<Journey> = request.into_iter().map(Journey::from).collect();
    let count = journeys.len();

    let mut ranker = Ranker::new(&state.registry);
    let ranked = ranker
        .rank_with(journeys, &algorithm)
        .map_err(|e| AppError::ranking_failed(e, &algorithm))?;

    info!(algorithm = %algorithm, journeys = count, "ranked journeys");

    Ok(Json(ranked.iter().map(JourneyDto::from_journey).collect()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The request can be fixed by the caller.
    BadRequest { message: String },
    /// Something went wrong on our side; `detail` is logged, not returned.
    Internal { message: String, detail: String },
}

impl AppError {
    /// Map a ranking failure for `algorithm` to a transport error.
    pub fn ranking_failed(err: RankError, algorithm: &str) -> Self {
        if err.is_caller_error() {
            AppError::BadRequest {
                message: err.to_string(),
            }
        } else {
            AppError::Internal {
                message: format!(
                    "An error occurred while processing your request to use the journey algorithm {algorithm}"
                ),
                detail: err.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(status = %StatusCode::BAD_REQUEST, %message, "request rejected");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message, detail } => {
                error!(status = %StatusCode::INTERNAL_SERVER_ERROR, %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
