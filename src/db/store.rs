use async_trait::async_trait;

use crate::db::errors::Result;
use crate::models::{FeedbackLink, LeaderboardEntry, NewEntry};

/// Storage contract for leaderboard rows.
///
/// Implementations wrap every underlying failure into [`DatabaseError`] and
/// make a single attempt per call; retry policy, if any, belongs to callers.
///
/// [`DatabaseError`]: crate::db::DatabaseError
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Insert the entry, then read it back by id.
    ///
    /// A successful insert followed by an empty read-back is an error, not a
    /// partial success.
    async fn insert_entry(&self, entry: NewEntry) -> Result<LeaderboardEntry>;

    /// Every entry, highest score first
    async fn fetch_all_entries(&self) -> Result<Vec<LeaderboardEntry>>;

    /// Remove every entry, returning how many rows were deleted
    async fn delete_all_entries(&self) -> Result<u64>;
}

/// Storage contract for the feedback-form link
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// The first stored link, if any
    async fn first_feedback_link(&self) -> Result<Option<FeedbackLink>>;
}
