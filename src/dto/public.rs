//! DTO definitions for the public read-only views.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::game::{GameSummary, TeamSummary};

/// Live teams in creation order, as shown in the roster list.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamsResponse {
    /// Teams in creation order.
    pub teams: Vec<TeamSummary>,
}

/// Live teams ordered by score descending, stable on ties.
#[derive(Debug, Serialize, ToSchema)]
pub struct RankingResponse {
    /// Teams from highest to lowest score.
    pub ranking: Vec<TeamSummary>,
}

/// Saved games in creation order.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameHistoryResponse {
    /// Every saved game, oldest first.
    pub games: Vec<GameSummary>,
}

/// The point-delta presets the operator console should render as buttons.
#[derive(Debug, Serialize, ToSchema)]
pub struct PointPresetsResponse {
    /// Configured deltas, e.g. `[10, 20, -10, -20]`.
    pub presets: Vec<i32>,
}
