//! Response envelope and request extractors shared by every module

mod json;

pub use json::{ApiJson, ApiJsonRejection};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ApiResult};
use crate::domain::DomainError;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "reason"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Failure reason, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Confirmation returned by operations without a resource to show
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rejects an update body whose `id` names another resource than the path.
pub fn ensure_unchanged_id<I>(kind: &str, body_id: Option<&str>, path_id: &I) -> ApiResult<()>
where
    I: FromStr<Err = DomainError> + PartialEq,
{
    if let Some(raw) = body_id {
        if raw.parse::<I>()? != *path_id {
            return Err(ApiError::bad_request(format!("{kind} ID cannot be modified")));
        }
    }
    Ok(())
}
