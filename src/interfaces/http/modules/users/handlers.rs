//! User API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, UpdateUserRequest};
use crate::application::SharedFacade;
use crate::domain::{User, UserId};
use crate::interfaces::http::common::{ensure_unchanged_id, ApiJson, ApiResponse};
use crate::interfaces::http::error::{ApiError, ApiResult};

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Invalid input or email already registered")
    )
)]
pub async fn create_user(
    State(facade): State<SharedFacade>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = facade.create_user(request.into())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<User>>)
    )
)]
pub async fn list_users(State(facade): State<SharedFacade>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(facade.get_all_users()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<User>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let id: UserId = id.parse()?;
    let user = facade
        .get_user(&id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(ApiResponse::success(user)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<User>),
        (status = 400, description = "Invalid input, id change or email taken"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let id: UserId = id.parse()?;
    ensure_unchanged_id("User", request.id.as_deref(), &id)?;

    let user = facade
        .update_user(&id, request.into())?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(ApiResponse::success(user)))
}
