// Domain layer - leaderboard business rules with no HTTP concerns.
// Services own policy only; data lives behind the store traits in `db`.

pub mod feedback;
pub mod leaderboard;

pub use feedback::FeedbackService;
pub use leaderboard::{AddEntryError, DataAccessError, LeaderboardPolicy, LeaderboardService};
