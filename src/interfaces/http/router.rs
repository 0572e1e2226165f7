//! API router and OpenAPI document

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::common::{ApiResponse, MessageResponse};
use super::modules::{amenities, health, places, reviews, users};
use crate::application::SharedFacade;
use crate::domain::{Amenity, AmenityId, Place, PlaceDetails, PlaceId, Review, ReviewId, User, UserId};

/// State shared by every route. Handlers extract the part they need via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub facade: SharedFacade,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for SharedFacade {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.facade)
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            facade: Arc::clone(&s.facade),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        // Places
        places::create_place,
        places::list_places,
        places::get_place,
        places::update_place,
        places::list_place_reviews,
        // Amenities
        amenities::create_amenity,
        amenities::list_amenities,
        amenities::get_amenity,
        amenities::update_amenity,
        // Reviews
        reviews::create_review,
        reviews::list_reviews,
        reviews::get_review,
        reviews::update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            MessageResponse,
            health::HealthResponse,
            health::StoreCounts,
            // Entities
            UserId,
            PlaceId,
            ReviewId,
            AmenityId,
            User,
            Place,
            PlaceDetails,
            Review,
            Amenity,
            // Requests
            users::CreateUserRequest,
            users::UpdateUserRequest,
            places::CreatePlaceRequest,
            places::UpdatePlaceRequest,
            amenities::CreateAmenityRequest,
            amenities::UpdateAmenityRequest,
            reviews::CreateReviewRequest,
            reviews::UpdateReviewRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Users", description = "User registration and profile updates"),
        (name = "Places", description = "Rental listings with their owner, amenities and reviews"),
        (name = "Amenities", description = "Amenities that can be listed on a place"),
        (name = "Reviews", description = "Guest reviews of places"),
    ),
    info(
        title = "HBnB API",
        version = "1.0.0",
        description = "REST API for users, places, amenities and reviews",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn fallback() -> (axum::http::StatusCode, Json<ApiResponse<()>>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Resource not found")),
    )
}

/// Create the API router with all routes
pub fn create_api_router(facade: SharedFacade) -> Router {
    let state = AppState {
        facade,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route("/{id}", get(users::get_user).put(users::update_user));

    let place_routes = Router::new()
        .route("/", post(places::create_place).get(places::list_places))
        .route("/{id}", get(places::get_place).put(places::update_place))
        .route("/{id}/reviews", get(places::list_place_reviews));

    let amenity_routes = Router::new()
        .route("/", post(amenities::create_amenity).get(amenities::list_amenities))
        .route(
            "/{id}",
            get(amenities::get_amenity).put(amenities::update_amenity),
        );

    let review_routes = Router::new()
        .route("/", post(reviews::create_review).get(reviews::list_reviews))
        .route(
            "/{id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        );

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // OpenAPI document
        .route("/api/v1/openapi.json", get(openapi_json))
        // Resources
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/places", place_routes)
        .nest("/api/v1/amenities", amenity_routes)
        .nest("/api/v1/reviews", review_routes)
        .fallback(fallback)
        .with_state(state)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
