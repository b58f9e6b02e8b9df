//! DTO definitions used by the operator REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload registering a new team on the scoreboard.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeamRequest {
    /// Team display name; trimmed server-side, must be unique case-insensitively.
    pub name: String,
}

/// Request to adjust a team's score by a signed delta.
///
/// Any integer is accepted; the configured presets only drive which buttons
/// the operator console renders.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreAdjustmentRequest {
    /// Signed number of points to add to the current score.
    pub delta: i32,
}

/// Result of a score adjustment, returning the updated tally.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreUpdateResponse {
    /// Identifier of the adjusted team.
    pub team_id: u32,
    /// Score after applying the delta.
    pub score: i32,
}
