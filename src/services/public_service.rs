//! Service helpers that expose read-only projections of the scoreboard.

use crate::{
    dto::{
        game::{GameSummary, TeamSummary},
        public::{GameHistoryResponse, PointPresetsResponse, RankingResponse, TeamsResponse},
    },
    state::SharedState,
};

/// Return the live teams in creation order.
pub async fn team_list(state: &SharedState) -> TeamsResponse {
    let teams = state
        .read_scoreboard(|board| {
            board
                .teams()
                .iter()
                .map(|(id, team)| TeamSummary::from((*id, team.clone())))
                .collect()
        })
        .await;
    TeamsResponse { teams }
}

/// Return the live teams ordered by score descending, stable on ties.
pub async fn ranking(state: &SharedState) -> RankingResponse {
    let ranking = state
        .read_scoreboard(|board| board.ranking().into_iter().map(TeamSummary::from).collect())
        .await;
    RankingResponse { ranking }
}

/// Return every saved game, oldest first.
pub async fn game_history(state: &SharedState) -> GameHistoryResponse {
    let games = state
        .read_scoreboard(|board| {
            board
                .games()
                .iter()
                .map(|(id, game)| GameSummary::from((*id, game.clone())))
                .collect()
        })
        .await;
    GameHistoryResponse { games }
}

/// Return the configured point-delta presets.
pub fn point_presets(state: &SharedState) -> PointPresetsResponse {
    PointPresetsResponse {
        presets: state.config().point_presets().to_vec(),
    }
}
