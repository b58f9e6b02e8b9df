//! Aggregated OpenAPI specification.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Tally Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::public_stream,
        crate::routes::sse::admin_stream,
        crate::routes::public::get_teams,
        crate::routes::public::get_ranking,
        crate::routes::public::get_game_history,
        crate::routes::public::get_point_presets,
        crate::routes::admin::create_team,
        crate::routes::admin::adjust_score,
        crate::routes::admin::delete_team,
        crate::routes::admin::save_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::TeamSummary,
            crate::dto::game::SnapshotLine,
            crate::dto::game::GameSummary,
            crate::dto::public::TeamsResponse,
            crate::dto::public::RankingResponse,
            crate::dto::public::GameHistoryResponse,
            crate::dto::public::PointPresetsResponse,
            crate::dto::admin::CreateTeamRequest,
            crate::dto::admin::ScoreAdjustmentRequest,
            crate::dto::admin::ScoreUpdateResponse,
            crate::dto::sse::Handshake,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events streams"),
        (name = "public", description = "Read-only scoreboard views"),
        (name = "admin", description = "Operator endpoints mutating the scoreboard"),
    )
)]
pub struct ApiDoc;
