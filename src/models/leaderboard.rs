use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-generated identity of a leaderboard entry.
///
/// Backed by a random (v4) UUID, so two entries with the same name and score
/// never share a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub name: String,
    pub score: i64,
    #[sqlx(rename = "creation")]
    pub created_at: DateTime<Utc>,
}

/// Everything the store needs to persist a new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub id: EntryId,
    pub name: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl NewEntry {
    /// The entry exactly as it would look once stored, before any storage-side defaults
    pub fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            id: self.id,
            name: self.name,
            score: self.score,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedbackLink {
    pub link: String,
}
