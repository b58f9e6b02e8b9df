//! Operator endpoints mutating the scoreboard.

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, post},
};

use crate::{
    dto::{
        admin::{CreateTeamRequest, ScoreAdjustmentRequest, ScoreUpdateResponse},
        game::{GameSummary, TeamSummary},
    },
    error::AppError,
    services::admin_service,
    state::SharedState,
};

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Operator-only endpoints for managing teams and saving games.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/teams", post(create_team))
        .route("/admin/teams/{id}/score", post(adjust_score))
        .route("/admin/teams/{id}", delete(delete_team))
        .route("/admin/games", post(save_game))
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
}

#[utoipa::path(
    post,
    path = "/admin/teams",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Operator token issued by the /sse/admin stream")),
    request_body = CreateTeamRequest,
    responses(
        (status = 200, description = "Team created", body = TeamSummary),
        (status = 400, description = "Empty team name"),
        (status = 409, description = "Duplicate team name")
    )
)]
/// Register a new team on the scoreboard.
pub async fn create_team(
    State(state): State<SharedState>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(admin_service::create_team(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/admin/teams/{id}/score",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Operator token issued by the /sse/admin stream"),
    ("id" = u32, Path, description = "Identifier of the team to adjust")),
    request_body = ScoreAdjustmentRequest,
    responses(
        (status = 200, description = "Score adjusted", body = ScoreUpdateResponse),
        (status = 404, description = "Team not found")
    )
)]
/// Apply a signed point delta to a team.
pub async fn adjust_score(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(payload): Json<ScoreAdjustmentRequest>,
) -> Result<Json<ScoreUpdateResponse>, AppError> {
    Ok(Json(admin_service::adjust_score(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/teams/{id}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Operator token issued by the /sse/admin stream"),
    ("id" = u32, Path, description = "Identifier of the team to remove")),
    responses((status = 204, description = "Team removed (or was already gone)"))
)]
/// Remove a team; removing an unknown id succeeds quietly.
pub async fn delete_team(State(state): State<SharedState>, Path(id): Path<u32>) -> StatusCode {
    admin_service::delete_team(&state, id).await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    post,
    path = "/admin/games",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Operator token issued by the /sse/admin stream")),
    responses(
        (status = 200, description = "Game saved", body = GameSummary),
        (status = 409, description = "No teams to save")
    )
)]
/// Freeze the current ranking into a new saved game.
pub async fn save_game(State(state): State<SharedState>) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(admin_service::save_game(&state).await?))
}

async fn require_admin_token(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
        .ok_or_else(|| {
            AppError::Unauthorized("missing operator token header `X-Admin-Token`".into())
        })?;

    let expected = {
        let guard = state.admin_token().lock().await;
        guard.clone()
    };

    match expected {
        Some(token) if token == provided => Ok(next.run(req).await),
        Some(_) => Err(AppError::Unauthorized("invalid operator token".into())),
        None => Err(AppError::Unauthorized(
            "operator SSE stream not initialised yet".into(),
        )),
    }
}
