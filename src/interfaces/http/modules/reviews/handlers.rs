//! Review API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateReviewRequest, UpdateReviewRequest};
use crate::application::SharedFacade;
use crate::domain::{Review, ReviewId};
use crate::interfaces::http::common::{ensure_unchanged_id, ApiJson, ApiResponse, MessageResponse};
use crate::interfaces::http::error::ApiResult;

#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "Reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<Review>),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Author owns the place"),
        (status = 404, description = "Author or place not found")
    )
)]
pub async fn create_review(
    State(facade): State<SharedFacade>,
    ApiJson(request): ApiJson<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Review>>)> {
    let review = facade.create_review(request.try_into()?)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(review))))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "Reviews",
    responses(
        (status = 200, description = "All reviews", body = ApiResponse<Vec<Review>>)
    )
)]
pub async fn list_reviews(State(facade): State<SharedFacade>) -> Json<ApiResponse<Vec<Review>>> {
    Json(ApiResponse::success(facade.get_all_reviews()))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = ApiResponse<Review>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_review(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Review>>> {
    let id: ReviewId = id.parse()?;
    Ok(Json(ApiResponse::success(facade.get_review(&id)?)))
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review ID")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<Review>),
        (status = 400, description = "Invalid input or id change"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_review(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateReviewRequest>,
) -> ApiResult<Json<ApiResponse<Review>>> {
    let id: ReviewId = id.parse()?;
    ensure_unchanged_id("Review", request.id.as_deref(), &id)?;
    Ok(Json(ApiResponse::success(facade.update_review(&id, request.into())?)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse<MessageResponse>),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_review(
    State(facade): State<SharedFacade>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let id: ReviewId = id.parse()?;
    facade.delete_review(&id)?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "Review deleted successfully",
    ))))
}
