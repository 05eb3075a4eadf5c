pub mod leaderboard;
pub mod v1_api;

pub use leaderboard::*;
pub use v1_api::*;
