use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::utils::{authorization_header, is_json_content_type};
use crate::auth::AccessTier;
use crate::models::v1_api::{AddEntryPayload, LeaderboardEntryResponse, LeaderboardResponse};

/// POST /leaderboard
/// Records a score and returns the stored entry
/// Authentication: public tier
#[tracing::instrument(skip(state, headers, body), fields(endpoint = "add_entry"))]
pub async fn add_entry_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<LeaderboardEntryResponse>> {
    state
        .tokens
        .authorize(authorization_header(&headers), AccessTier::Public)?;

    if !is_json_content_type(&headers) {
        return Err(ApiError::BadRequest(
            "Content-Type must be application/json".to_string(),
        ));
    }
    let payload: AddEntryPayload = serde_json::from_slice(&body)?;

    let entry = state
        .leaderboard
        .add_entry(&payload.name, payload.score)
        .await?;

    info!(entry_id = %entry.id, score = entry.score, "Score submitted");
    Ok(Json(entry.into()))
}

/// GET /leaderboard
/// Returns every entry, highest score first, as a single page
/// Authentication: public tier
#[tracing::instrument(skip(state, headers), fields(endpoint = "get_leaderboard"))]
pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<LeaderboardResponse>> {
    state
        .tokens
        .authorize(authorization_header(&headers), AccessTier::Public)?;

    let entries = state.leaderboard.get_all_entries().await?;

    info!(entries = entries.len(), "Leaderboard loaded");
    Ok(Json(LeaderboardResponse::single_page(entries)))
}

/// DELETE /leaderboard
/// Removes every entry
/// Authentication: protected tier
#[tracing::instrument(skip(state, headers), fields(endpoint = "clear_leaderboard"))]
pub async fn clear_leaderboard_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    state
        .tokens
        .authorize(authorization_header(&headers), AccessTier::Protected)?;

    state.leaderboard.clear_all_entries().await?;

    Ok(StatusCode::OK)
}
