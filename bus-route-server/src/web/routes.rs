//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::StationId;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/direct", get(direct_connection))
        .route("/api/stats", get(stats))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Is there a direct bus route from `dep_sid` to `arr_sid`?
///
/// Unknown stations are answered with `false`, never with an error.
async fn direct_connection(
    State(state): State<AppState>,
    query: Result<Query<DirectRequest>, QueryRejection>,
) -> Result<Json<DirectResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let exists = state
        .routes
        .is_direct_connection(StationId::new(req.dep_sid), StationId::new(req.arr_sid));
    info!(
        dep_sid = req.dep_sid,
        arr_sid = req.arr_sid,
        "connection between {} and {} {}exists",
        req.dep_sid,
        req.arr_sid,
        if exists { "" } else { "doesn't " }
    );

    Ok(Json(DirectResponse {
        dep_sid: req.dep_sid,
        arr_sid: req.arr_sid,
        direct_bus_route: exists,
    }))
}

/// Size of the loaded index.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        routes: state.routes.total_routes(),
        stations: state.routes.total_stations(),
    })
}

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such endpoint".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
