//! Storage implementations

mod memory;

pub use memory::{InMemoryRepository, InMemoryRepositoryProvider};
