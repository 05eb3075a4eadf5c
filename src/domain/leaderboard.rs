use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::clock::Clock;
use crate::config::DEFAULT_STORAGE_TIMEOUT_MS;
use crate::db::{self, LeaderboardStore};
use crate::models::{EntryId, LeaderboardEntry, NewEntry};

/// Storage failed; the cause is logged where it happened, never returned
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Data access error")]
pub struct DataAccessError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEntryError {
    #[error("Name exceeds the maximum length of {maximum_length} characters")]
    NameTooLong { maximum_length: usize },

    #[error(transparent)]
    DataAccess(#[from] DataAccessError),
}

/// Rules applied before anything reaches storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardPolicy {
    /// Maximum name length in characters; `None` means unbounded
    pub max_name_length: Option<usize>,
    /// Upper bound on a single storage call
    pub storage_timeout: Duration,
}

impl Default for LeaderboardPolicy {
    fn default() -> Self {
        Self {
            max_name_length: None,
            storage_timeout: Duration::from_millis(DEFAULT_STORAGE_TIMEOUT_MS),
        }
    }
}

impl LeaderboardPolicy {
    fn check_name(&self, name: &str) -> Result<(), AddEntryError> {
        match self.max_name_length {
            Some(maximum_length) if name.chars().count() > maximum_length => {
                Err(AddEntryError::NameTooLong { maximum_length })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct LeaderboardService {
    store: Arc<dyn LeaderboardStore>,
    clock: Arc<dyn Clock>,
    policy: LeaderboardPolicy,
}

impl LeaderboardService {
    pub fn new(
        store: Arc<dyn LeaderboardStore>,
        clock: Arc<dyn Clock>,
        policy: LeaderboardPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    /// Record a new score.
    ///
    /// The returned entry is the one read back from storage, so storage-side
    /// normalization (timestamp precision, for one) is authoritative.
    #[tracing::instrument(skip(self, name), fields(name_len = name.chars().count()))]
    pub async fn add_entry(
        &self,
        name: &str,
        score: i64,
    ) -> Result<LeaderboardEntry, AddEntryError> {
        self.policy.check_name(name)?;

        let entry = NewEntry {
            id: EntryId::generate(),
            name: name.to_string(),
            score,
            created_at: self.clock.now(),
        };
        let entry_id = entry.id;

        let inserted = self
            .guarded("insert_entry", self.store.insert_entry(entry))
            .await?;

        info!(entry_id = %entry_id, "Leaderboard entry added");
        Ok(inserted)
    }

    /// All entries, highest score first. Tie order is whatever storage yields.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_entries(&self) -> Result<Vec<LeaderboardEntry>, DataAccessError> {
        self.guarded("fetch_all_entries", self.store.fetch_all_entries())
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn clear_all_entries(&self) -> Result<(), DataAccessError> {
        let removed = self
            .guarded("delete_all_entries", self.store.delete_all_entries())
            .await?;

        info!(removed = removed, "Leaderboard cleared");
        Ok(())
    }

    /// Run one storage call under the policy timeout, collapsing any failure
    /// into [`DataAccessError`] after logging it.
    async fn guarded<T, F>(&self, operation: &'static str, call: F) -> Result<T, DataAccessError>
    where
        F: Future<Output = db::Result<T>>,
    {
        match tokio::time::timeout(self.policy.storage_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!(
                    operation = operation,
                    error = %e,
                    connection_error = e.is_connection_error(),
                    "Storage call failed"
                );
                Err(DataAccessError)
            }
            Err(_) => {
                error!(
                    operation = operation,
                    timeout_ms = self.policy.storage_timeout.as_millis() as u64,
                    "Storage call timed out"
                );
                Err(DataAccessError)
            }
        }
    }
}
