//! Amenity API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateAmenityRequest, UpdateAmenityRequest};
use crate::application::SharedFacade;
use crate::domain::{Amenity, AmenityId};
use crate::interfaces::http::common::{ensure_unchanged_id, ApiJson, ApiResponse};
use crate::interfaces::http::error::{ApiError, ApiResult};

#[utoipa::path(
    post,
    path = "/api/v1/amenities",
    tag = "Amenities",
    request_body = CreateAmenityRequest,
    responses(
        (status = 201, description = "Amenity created", body = ApiResponse<Amenity>),
        (status = 400, description = "Invalid input or name already used"),
        (status = 404, description = "Linked place not found")
    )
)]
pub async fn create_amenity(
    State(facade): State<SharedFacade>,
    ApiJson(request): ApiJson<CreateAmenityRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Amenity>>)> {
    let amenity = facade.create_amenity(request.try_into()?)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(amenity))))
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities",
    tag = "Amenities",
    responses(
        (status = 200, description = "All amenities", body = ApiResponse<Vec<Amenity>>)
    )
)]
pub async fn list_amenities(
    State(facade): State<SharedFacade>,
) -> Json<ApiResponse<Vec<Amenity>>> {
    Json(ApiResponse::success(facade.get_all_amenities()))
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities/{id}",
    tag = "Amenities",
    params(("id" = String, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "Amenity details", body = ApiResponse<Amenity>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_amenity(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Amenity>>> {
    let id: AmenityId = id.parse()?;
    let amenity = facade
        .get_amenity(&id)
        .ok_or_else(|| ApiError::not_found("Amenity not found"))?;
    Ok(Json(ApiResponse::success(amenity)))
}

#[utoipa::path(
    put,
    path = "/api/v1/amenities/{id}",
    tag = "Amenities",
    params(("id" = String, Path, description = "Amenity ID")),
    request_body = UpdateAmenityRequest,
    responses(
        (status = 200, description = "Amenity updated", body = ApiResponse<Amenity>),
        (status = 400, description = "Invalid input, id change or name already used"),
        (status = 404, description = "Amenity or linked place not found")
    )
)]
pub async fn update_amenity(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateAmenityRequest>,
) -> ApiResult<Json<ApiResponse<Amenity>>> {
    let id: AmenityId = id.parse()?;
    ensure_unchanged_id("Amenity", request.id.as_deref(), &id)?;

    let amenity = facade
        .update_amenity(&id, request.try_into()?)?
        .ok_or_else(|| ApiError::not_found("Amenity not found"))?;
    Ok(Json(ApiResponse::success(amenity)))
}
