//! Infrastructure layer: storage and process plumbing

pub mod server;
pub mod storage;

pub use server::{ShutdownCoordinator, ShutdownSignal};
pub use storage::{InMemoryRepository, InMemoryRepositoryProvider};
