pub mod bearer;

pub use bearer::{AccessTier, AccessTokens};
