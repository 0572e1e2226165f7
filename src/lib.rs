//! # HBnB Service
//!
//! Backend for a short-term-rental domain: users list places, guests review
//! them, and places advertise amenities.
//!
//! ## Architecture
//!
//! - **domain**: entities, their validation rules and the repository ports
//! - **application**: the facade enforcing cross-entity rules
//! - **infrastructure**: in-memory storage and shutdown handling
//! - **interfaces**: REST API with an OpenAPI document
//! - **config** / **server**: configuration loading and server lifecycle

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export the facade and API router
pub use application::{HbnbFacade, SharedFacade};
pub use interfaces::http::create_api_router;
