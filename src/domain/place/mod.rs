//! Place aggregate
//!
//! Contains the Place entity, its read model and request DTOs.

pub mod model;

mod dto_create;
mod dto_update;

pub use model::{Place, PlaceDetails};

pub use dto_create::CreatePlaceDto;
pub use dto_update::UpdatePlaceDto;
