//! Named SSE events broadcast after scoreboard mutations.

use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        game::{GameSummary, TeamSummary},
        sse::{
            GameSavedEvent, RankingChangedEvent, ServerEvent, TeamCreatedEvent, TeamDeletedEvent,
            TeamUpdatedEvent,
        },
    },
    state::SharedState,
};

const EVENT_TEAM_CREATED: &str = "team.created";
const EVENT_TEAM_UPDATED: &str = "team.updated";
const EVENT_TEAM_DELETED: &str = "team.deleted";
const EVENT_GAME_SAVED: &str = "game.saved";
const EVENT_RANKING_CHANGED: &str = "ranking.changed";

/// Broadcast the creation of a new team to displays and the operator.
pub fn broadcast_team_created(state: &SharedState, team: TeamSummary) {
    let payload = TeamCreatedEvent { team };
    send_public_event(state, EVENT_TEAM_CREATED, &payload);
    send_admin_event(state, EVENT_TEAM_CREATED, &payload);
}

/// Broadcast a score adjustment for a specific team.
pub fn broadcast_team_updated(state: &SharedState, team: TeamSummary) {
    let payload = TeamUpdatedEvent { team };
    send_public_event(state, EVENT_TEAM_UPDATED, &payload);
}

/// Broadcast that a team has been removed.
pub fn broadcast_team_deleted(state: &SharedState, team_id: u32) {
    let payload = TeamDeletedEvent { team_id };
    send_public_event(state, EVENT_TEAM_DELETED, &payload);
}

/// Broadcast a freshly saved game to displays and the operator.
pub fn broadcast_game_saved(state: &SharedState, game: GameSummary) {
    let payload = GameSavedEvent { game };
    send_public_event(state, EVENT_GAME_SAVED, &payload);
    send_admin_event(state, EVENT_GAME_SAVED, &payload);
}

/// Broadcast the recomputed ranking after a mutation.
pub fn broadcast_ranking_changed(state: &SharedState, ranking: Vec<TeamSummary>) {
    let payload = RankingChangedEvent { ranking };
    send_public_event(state, EVENT_RANKING_CHANGED, &payload);
}

fn send_public_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.public_sse().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize public SSE payload"),
    }
}

fn send_admin_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.admin_sse().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize admin SSE payload"),
    }
}
