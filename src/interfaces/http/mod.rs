//! HTTP REST API interfaces
//!
//! - `common`: response envelope and JSON extractor
//! - `error`: domain error to status code mapping
//! - `modules`: request bodies and handlers per resource
//! - `router`: API router with the OpenAPI document

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use error::{ApiError, ApiResult};
pub use router::{create_api_router, ApiDoc, AppState};
