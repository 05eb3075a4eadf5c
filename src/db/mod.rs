pub mod connection;
pub mod errors;
pub mod memory;
pub mod postgres;
pub mod store;

#[cfg(test)]
mod tests;

pub use connection::*;
pub use errors::*;
pub use memory::*;
pub use postgres::*;
pub use store::*;
