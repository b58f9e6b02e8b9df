//! Public read-only endpoints that expose the derived scoreboard views.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::public::{GameHistoryResponse, PointPresetsResponse, RankingResponse, TeamsResponse},
    services::public_service,
    state::SharedState,
};

/// Configure the public routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/public/teams", get(get_teams))
        .route("/public/ranking", get(get_ranking))
        .route("/public/games", get(get_game_history))
        .route("/public/presets", get(get_point_presets))
}

#[utoipa::path(
    get,
    path = "/public/teams",
    tag = "public",
    responses((status = 200, description = "Live teams in creation order", body = TeamsResponse))
)]
/// Return the live teams in creation order.
pub async fn get_teams(State(state): State<SharedState>) -> Json<TeamsResponse> {
    Json(public_service::team_list(&state).await)
}

#[utoipa::path(
    get,
    path = "/public/ranking",
    tag = "public",
    responses((status = 200, description = "Teams ordered by score descending", body = RankingResponse))
)]
/// Return the current ranking, stable on ties.
pub async fn get_ranking(State(state): State<SharedState>) -> Json<RankingResponse> {
    Json(public_service::ranking(&state).await)
}

#[utoipa::path(
    get,
    path = "/public/games",
    tag = "public",
    responses((status = 200, description = "Saved games, oldest first", body = GameHistoryResponse))
)]
/// Return the saved game history in creation order.
pub async fn get_game_history(State(state): State<SharedState>) -> Json<GameHistoryResponse> {
    Json(public_service::game_history(&state).await)
}

#[utoipa::path(
    get,
    path = "/public/presets",
    tag = "public",
    responses((status = 200, description = "Configured point-delta presets", body = PointPresetsResponse))
)]
/// Return the point-delta presets the operator console should render.
pub async fn get_point_presets(State(state): State<SharedState>) -> Json<PointPresetsResponse> {
    Json(public_service::point_presets(&state))
}
