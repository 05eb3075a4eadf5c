use crate::auth::AccessTokens;
use crate::domain::{FeedbackService, LeaderboardService};

/// Everything handlers need, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: LeaderboardService,
    pub feedback: FeedbackService,
    pub tokens: AccessTokens,
}
