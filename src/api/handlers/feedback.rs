use axum::{extract::State, http::HeaderMap, Json};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::utils::authorization_header;
use crate::auth::AccessTier;
use crate::models::v1_api::FeedbackResponse;

/// GET /feedback
/// Returns the feedback-form link, 404 when none is configured
/// Authentication: public tier
#[tracing::instrument(skip(state, headers), fields(endpoint = "feedback"))]
pub async fn feedback_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<FeedbackResponse>> {
    state
        .tokens
        .authorize(authorization_header(&headers), AccessTier::Public)?;

    match state.feedback.get_feedback_form_url().await {
        Some(link) => Ok(Json(FeedbackResponse { link })),
        None => Err(ApiError::NotFound("No feedback form available".to_string())),
    }
}
