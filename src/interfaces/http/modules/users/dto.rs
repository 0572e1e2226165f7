//! User request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CreateUserDto, UpdateUserDto};

/// Create user request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Defaults to `false`
    pub is_admin: Option<bool>,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: req.is_admin,
        }
    }
}

/// Update user request. Only supplied fields change.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Must equal the path id when present
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: req.is_admin,
        }
    }
}
