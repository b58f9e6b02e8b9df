//! Operator-facing mutations: team management and game snapshots.
//!
//! Every mutation runs inside a single scoreboard critical section that also
//! captures the fresh ranking, then broadcasts the outcome to SSE clients.

use tracing::{debug, info};

use crate::{
    dto::{
        admin::{CreateTeamRequest, ScoreAdjustmentRequest, ScoreUpdateResponse},
        game::{GameSummary, TeamSummary},
    },
    error::ServiceError,
    services::sse_events,
    state::{Scoreboard, SharedState},
};

/// Register a new team with a zeroed score.
pub async fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<TeamSummary, ServiceError> {
    let CreateTeamRequest { name } = request;

    let (summary, ranking) = state
        .with_scoreboard_mut(|board| {
            let (team_id, team) = board.add_team(&name)?;
            let summary = TeamSummary::from((team_id, team));
            Ok::<_, ServiceError>((summary, ranking_summaries(board)))
        })
        .await?;

    info!(team_id = summary.id, name = %summary.name, "team created");
    sse_events::broadcast_team_created(state, summary.clone());
    sse_events::broadcast_ranking_changed(state, ranking);

    Ok(summary)
}

/// Apply a signed delta to a team's score.
pub async fn adjust_score(
    state: &SharedState,
    team_id: u32,
    request: ScoreAdjustmentRequest,
) -> Result<ScoreUpdateResponse, ServiceError> {
    let ScoreAdjustmentRequest { delta } = request;

    if !state.config().point_presets().contains(&delta) {
        debug!(team_id, delta, "delta outside the configured presets");
    }

    let (summary, ranking) = state
        .with_scoreboard_mut(|board| {
            let team = board.adjust_score(team_id, delta)?;
            let summary = TeamSummary::from((team_id, team));
            Ok::<_, ServiceError>((summary, ranking_summaries(board)))
        })
        .await?;

    let score = summary.score;
    sse_events::broadcast_team_updated(state, summary);
    sse_events::broadcast_ranking_changed(state, ranking);

    Ok(ScoreUpdateResponse { team_id, score })
}

/// Remove a team from the live roster.
///
/// Removing an id that is no longer present is a successful no-op, so the
/// operator can retry freely; events only fire when something was removed.
pub async fn delete_team(state: &SharedState, team_id: u32) {
    let (removed, ranking) = state
        .with_scoreboard_mut(|board| (board.remove_team(team_id), ranking_summaries(board)))
        .await;

    if removed {
        info!(team_id, "team removed");
        sse_events::broadcast_team_deleted(state, team_id);
        sse_events::broadcast_ranking_changed(state, ranking);
    } else {
        debug!(team_id, "removal of unknown team ignored");
    }
}

/// Freeze the current ranking into a new saved game.
pub async fn save_game(state: &SharedState) -> Result<GameSummary, ServiceError> {
    let summary = state
        .with_scoreboard_mut(|board| {
            let (game_id, game) = board.save_game()?;
            Ok::<_, ServiceError>(GameSummary::from((game_id, game)))
        })
        .await?;

    info!(label = %summary.label, entries = summary.snapshot.len(), "game saved");
    sse_events::broadcast_game_saved(state, summary.clone());

    Ok(summary)
}

fn ranking_summaries(board: &Scoreboard) -> Vec<TeamSummary> {
    board.ranking().into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    fn fresh_state() -> SharedState {
        AppState::new(AppConfig::default())
    }

    #[tokio::test]
    async fn create_adjust_and_save_round() {
        let state = fresh_state();

        let red = create_team(
            &state,
            CreateTeamRequest {
                name: "Red".into(),
            },
        )
        .await
        .unwrap();
        create_team(
            &state,
            CreateTeamRequest {
                name: "Blue".into(),
            },
        )
        .await
        .unwrap();

        let update = adjust_score(&state, red.id, ScoreAdjustmentRequest { delta: 20 })
            .await
            .unwrap();
        assert_eq!(update.score, 20);

        let game = save_game(&state).await.unwrap();
        assert_eq!(game.label, "Game 1");
        assert_eq!(game.snapshot[0].name, "Red");
    }

    #[tokio::test]
    async fn duplicate_team_maps_to_conflict() {
        let state = fresh_state();
        create_team(
            &state,
            CreateTeamRequest {
                name: "Red".into(),
            },
        )
        .await
        .unwrap();

        let err = create_team(
            &state,
            CreateTeamRequest {
                name: "red".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn deleting_an_unknown_team_is_quiet() {
        let state = fresh_state();
        delete_team(&state, 42).await;
        delete_team(&state, 42).await;
    }

    #[tokio::test]
    async fn saving_with_no_teams_maps_to_conflict() {
        let state = fresh_state();
        let err = save_game(&state).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
