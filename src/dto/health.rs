//! Health check response payload.

use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving requests.
    pub status: String,
    /// Number of live teams on the scoreboard.
    pub teams: usize,
    /// Number of saved games.
    pub games: usize,
}

impl HealthResponse {
    /// Create a health response carrying the current scoreboard counts.
    pub fn ok(teams: usize, games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            teams,
            games,
        }
    }
}
