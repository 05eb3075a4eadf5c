pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod utils;

pub use error::{ApiError, ApiResult};
pub use server::{build_state, create_app};
pub use state::AppState;
