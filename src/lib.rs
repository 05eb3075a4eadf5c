pub mod api;
pub mod auth;
pub mod clock;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use models::{EntryId, FeedbackLink, LeaderboardEntry, NewEntry};

pub use clock::{Clock, FixedClock, SystemClock};

pub use config::{Config, ConfigError, DatabaseConfig};

pub use db::{
    create_pool, DatabaseError, FeedbackStore, InMemoryFeedbackStore,
    InMemoryLeaderboardStore, LeaderboardStore, PostgresStore,
};

pub use domain::{
    AddEntryError, DataAccessError, FeedbackService, LeaderboardPolicy, LeaderboardService,
};
