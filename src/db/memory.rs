use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::errors::Result;
use crate::db::store::{FeedbackStore, LeaderboardStore};
use crate::models::{FeedbackLink, LeaderboardEntry, NewEntry};

/// Process-local leaderboard storage, used by tests
#[derive(Debug, Default)]
pub struct InMemoryLeaderboardStore {
    entries: RwLock<Vec<LeaderboardEntry>>,
}

impl InMemoryLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LeaderboardStore for InMemoryLeaderboardStore {
    async fn insert_entry(&self, entry: NewEntry) -> Result<LeaderboardEntry> {
        let entry = entry.into_entry();
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn fetch_all_entries(&self) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.entries.read().await.clone();
        // Stable sort: ties keep insertion order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(entries)
    }

    async fn delete_all_entries(&self) -> Result<u64> {
        let mut entries = self.entries.write().await;
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }
}

/// Fixed feedback links held in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryFeedbackStore {
    links: Vec<String>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            links: vec![link.into()],
        }
    }

    pub fn with_links(links: Vec<String>) -> Self {
        Self { links }
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn first_feedback_link(&self) -> Result<Option<FeedbackLink>> {
        Ok(self.links.first().map(|link| FeedbackLink { link: link.clone() }))
    }
}
