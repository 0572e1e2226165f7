//! Application layer: the facade every adapter goes through.

pub mod facade;

pub use facade::{HbnbFacade, SharedFacade};
