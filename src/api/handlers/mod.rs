// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Authorize the bearer token for the route's tier
// 2. Check and parse the request
// 3. Call the domain service
// 4. Transform the domain result to an HTTP response

pub mod feedback;
pub mod leaderboard;

pub use feedback::feedback_handler;
pub use leaderboard::{add_entry_handler, clear_leaderboard_handler, get_leaderboard_handler};

use axum::http::StatusCode;

/// GET /healthcheck - no authentication
pub async fn healthcheck_handler() -> StatusCode {
    StatusCode::OK
}
