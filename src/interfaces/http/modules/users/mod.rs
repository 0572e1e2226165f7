//! Users module: registration, lookup and profile updates

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
