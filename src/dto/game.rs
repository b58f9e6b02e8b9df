//! Projections of teams and saved games shared by REST and SSE payloads.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::format_system_time,
    state::{Game, SnapshotEntry, Team},
};

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Public projection of a live team exposed to REST/SSE clients.
pub struct TeamSummary {
    /// Stable identifier, never reused across the lifetime of the service.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: i32,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// One ranked line of a saved game.
pub struct SnapshotLine {
    /// Team name at save time.
    pub name: String,
    /// Team score at save time.
    pub score: i32,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Summary returned once a game has been saved, and listed in the history view.
pub struct GameSummary {
    /// Stable identifier of the saved game.
    pub id: u32,
    /// Sequential display label ("Game 1", "Game 2", ...).
    pub label: String,
    /// RFC 3339 save timestamp.
    pub created_at: String,
    /// Ranked name/score lines captured at save time.
    pub snapshot: Vec<SnapshotLine>,
}

impl From<(u32, Team)> for TeamSummary {
    fn from((id, team): (u32, Team)) -> Self {
        Self {
            id,
            name: team.name,
            score: team.score,
        }
    }
}

impl From<SnapshotEntry> for SnapshotLine {
    fn from(entry: SnapshotEntry) -> Self {
        Self {
            name: entry.name,
            score: entry.score,
        }
    }
}

impl From<(u32, Game)> for GameSummary {
    fn from((id, game): (u32, Game)) -> Self {
        Self {
            id,
            label: game.label,
            created_at: format_system_time(game.created_at),
            snapshot: game.snapshot.into_iter().map(Into::into).collect(),
        }
    }
}
