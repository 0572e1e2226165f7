//! Domain layer: entities, their validation rules, and repository ports.

pub mod amenity;
pub mod entity;
pub mod error;
pub mod place;
pub mod repositories;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use amenity::{Amenity, CreateAmenityDto, UpdateAmenityDto};
pub use entity::{AmenityId, Entity, PlaceId, ReviewId, UserId};
pub use error::{DomainError, DomainResult};
pub use place::{CreatePlaceDto, Place, PlaceDetails, UpdatePlaceDto};
pub use repositories::{Repository, RepositoryProvider};
pub use review::{CreateReviewDto, Review, UpdateReviewDto};
pub use user::{CreateUserDto, UpdateUserDto, User};
