//! Amenity aggregate

pub mod model;

mod dto;

pub use dto::{CreateAmenityDto, UpdateAmenityDto};
pub use model::{name_key, Amenity};
