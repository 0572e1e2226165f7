//! Place API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::dto::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::application::SharedFacade;
use crate::domain::{Place, PlaceDetails, PlaceId, Review, UserId};
use crate::interfaces::http::common::{ensure_unchanged_id, ApiJson, ApiResponse};
use crate::interfaces::http::error::{ApiError, ApiResult};

#[utoipa::path(
    post,
    path = "/api/v1/places",
    tag = "Places",
    request_body = CreatePlaceRequest,
    responses(
        (status = 201, description = "Place created", body = ApiResponse<Place>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn create_place(
    State(facade): State<SharedFacade>,
    ApiJson(request): ApiJson<CreatePlaceRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Place>>)> {
    let place = facade.create_place(request.try_into()?)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(place))))
}

#[utoipa::path(
    get,
    path = "/api/v1/places",
    tag = "Places",
    responses(
        (status = 200, description = "All places", body = ApiResponse<Vec<Place>>)
    )
)]
pub async fn list_places(State(facade): State<SharedFacade>) -> Json<ApiResponse<Vec<Place>>> {
    Json(ApiResponse::success(facade.get_all_places()))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    tag = "Places",
    params(("id" = String, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Place with owner and amenities", body = ApiResponse<PlaceDetails>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_place(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<PlaceDetails>>> {
    let id: PlaceId = id.parse()?;
    Ok(Json(ApiResponse::success(facade.get_place(&id)?)))
}

#[utoipa::path(
    put,
    path = "/api/v1/places/{id}",
    tag = "Places",
    params(("id" = String, Path, description = "Place ID")),
    request_body = UpdatePlaceRequest,
    responses(
        (status = 200, description = "Place updated", body = ApiResponse<Place>),
        (status = 400, description = "Empty body, invalid input, id or owner change"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_place(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePlaceRequest>,
) -> ApiResult<Json<ApiResponse<Place>>> {
    let id: PlaceId = id.parse()?;
    ensure_unchanged_id("Place", request.id.as_deref(), &id)?;

    if request.is_empty() {
        facade.get_place(&id)?;
        return Err(ApiError::bad_request("No data provided"));
    }

    if let Some(raw) = request.owner_id.as_deref() {
        let owner_id: UserId = raw.parse()?;
        let current = facade.get_place(&id)?;
        if current.place.owner_id() != &owner_id {
            debug!(place_id = %id, "Rejected owner change");
            return Err(ApiError::bad_request("Owner cannot be modified"));
        }
    }

    let place = facade.update_place(&id, request.into())?;
    Ok(Json(ApiResponse::success(place)))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/reviews",
    tag = "Places",
    params(("id" = String, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Reviews of the place, possibly empty", body = ApiResponse<Vec<Review>>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn list_place_reviews(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Review>>>> {
    let id: PlaceId = id.parse()?;
    Ok(Json(ApiResponse::success(facade.get_reviews_by_place(&id)?)))
}
