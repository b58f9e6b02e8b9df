//! Health check service.

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a liveness payload carrying the current scoreboard counts.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let (teams, games) = state
        .read_scoreboard(|board| (board.teams().len(), board.games().len()))
        .await;
    HealthResponse::ok(teams, games)
}
