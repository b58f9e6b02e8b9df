//! Event payloads carried over the SSE streams.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::game::{GameSummary, TeamSummary};

#[derive(Clone, Debug)]
/// Dispatched payload carried across SSE channels.
pub struct ServerEvent {
    /// Optional SSE event name.
    pub event: Option<String>,
    /// Serialized data field.
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Initial metadata sent to an SSE client when it connects.
pub struct Handshake {
    /// Identifier of the SSE stream (`public` or `admin`).
    pub stream: String,
    /// Human-readable message confirming the subscription.
    pub message: String,
    /// Operator token returned when the stream is privileged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
/// Event emitted when a new team joins the scoreboard.
pub struct TeamCreatedEvent {
    /// The freshly created team.
    pub team: TeamSummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Event emitted when an existing team's score was adjusted.
pub struct TeamUpdatedEvent {
    /// The team after the adjustment.
    pub team: TeamSummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Event emitted when a team has been removed.
pub struct TeamDeletedEvent {
    /// Identifier of the removed team.
    pub team_id: u32,
}

#[derive(Debug, Serialize, ToSchema)]
/// Event emitted when a game snapshot has been saved.
pub struct GameSavedEvent {
    /// The saved game.
    pub game: GameSummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Event emitted after every mutation that may reorder the ranking.
pub struct RankingChangedEvent {
    /// Fresh ranking, highest score first.
    pub ranking: Vec<TeamSummary>,
}
