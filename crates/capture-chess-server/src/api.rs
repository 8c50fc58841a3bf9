//! HTTP API route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use capture_chess::{MoveError, ShakmatyRules, Snapshot, TurnController};
use serde::{Deserialize, Serialize};

/// Shared application state: the one match this server hosts.
pub type AppState = Arc<TurnController<ShakmatyRules>>;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
}

/// Request body for playing a move.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Move in UCI notation (e.g., "e2e4"). Missing and `null` are both
    /// treated as no move.
    #[serde(default, rename = "move")]
    pub uci_move: Option<String>,
}

/// Create the HTTP router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/game_state", get(game_state))
        .route("/api/new_game", post(new_game))
        .route("/api/move", post(make_move))
        .with_state(state)
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Current match state.
pub async fn game_state(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.get_state())
}

/// Start a new match.
pub async fn new_game(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.new_game())
}

/// Play a move for the side to move.
pub async fn make_move(
    State(state): State<AppState>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let snapshot = state.apply_move(body.uci_move.as_deref())?;
    Ok(Json(snapshot))
}

/// A rejected move, rendered as `400 {"error": "..."}`.
#[derive(Debug)]
pub struct AppError(MoveError);

impl AppError {
    /// The underlying rejection.
    pub fn kind(&self) -> &MoveError {
        &self.0
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = %self.0, "move request rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}

impl From<MoveError> for AppError {
    fn from(err: MoveError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_request_field_is_named_move() {
        let body: MoveRequest = serde_json::from_str(r#"{"move": "e2e4"}"#).unwrap();
        assert_eq!(body.uci_move.as_deref(), Some("e2e4"));

        let body: MoveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(body.uci_move, None);

        let body: MoveRequest = serde_json::from_str(r#"{"move": null}"#).unwrap();
        assert_eq!(body.uci_move, None);
    }

    #[test]
    fn errors_render_as_bad_request() {
        let response = AppError::from(MoveError::GameOver).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
