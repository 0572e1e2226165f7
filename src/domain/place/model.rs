//! Place domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{CreatePlaceDto, UpdatePlaceDto};
use crate::domain::entity::{next_update, Entity, PlaceId, UserId};
use crate::domain::{Amenity, DomainError, DomainResult, User};
use crate::shared::validations::{bounded_text, in_range, non_negative, require};

/// Maximum title length in characters, surrounding whitespace included.
pub const TITLE_MAX_CHARS: usize = 100;

fn validate_price(price: f64) -> DomainResult<f64> {
    non_negative("Price", price)
}

fn validate_latitude(latitude: f64) -> DomainResult<f64> {
    in_range("Latitude", latitude, -90.0, 90.0)
}

fn validate_longitude(longitude: f64) -> DomainResult<f64> {
    in_range("Longitude", longitude, -180.0, 180.0)
}

/// A rental listing owned by a user.
///
/// The owner is fixed at construction; there is no setter for it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Place {
    id: PlaceId,
    title: String,
    /// `null` when not provided
    description: Option<String>,
    /// Price per night
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Place {
    pub fn new(
        title: &str,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: UserId,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: PlaceId::new(),
            title: bounded_text("Title", title, TITLE_MAX_CHARS)?,
            description,
            price: validate_price(price)?,
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }

    pub fn with_title(mut self, title: &str) -> DomainResult<Self> {
        self.title = bounded_text("Title", title, TITLE_MAX_CHARS)?;
        Ok(self.touched())
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self.touched()
    }

    pub fn with_price(mut self, price: f64) -> DomainResult<Self> {
        self.price = validate_price(price)?;
        Ok(self.touched())
    }

    pub fn with_latitude(mut self, latitude: f64) -> DomainResult<Self> {
        self.latitude = validate_latitude(latitude)?;
        Ok(self.touched())
    }

    pub fn with_longitude(mut self, longitude: f64) -> DomainResult<Self> {
        self.longitude = validate_longitude(longitude)?;
        Ok(self.touched())
    }

    /// Apply every supplied field of `dto`, or none of them.
    pub fn apply(self, dto: &UpdatePlaceDto) -> DomainResult<Self> {
        let mut place = self;
        if let Some(title) = &dto.title {
            place = place.with_title(title)?;
        }
        if let Some(description) = &dto.description {
            place = place.with_description(Some(description.clone()));
        }
        if let Some(price) = dto.price {
            place = place.with_price(price)?;
        }
        if let Some(latitude) = dto.latitude {
            place = place.with_latitude(latitude)?;
        }
        if let Some(longitude) = dto.longitude {
            place = place.with_longitude(longitude)?;
        }
        Ok(place)
    }

    fn touched(mut self) -> Self {
        self.updated_at = next_update(self.updated_at);
        self
    }
}

impl TryFrom<CreatePlaceDto> for Place {
    type Error = DomainError;

    fn try_from(dto: CreatePlaceDto) -> DomainResult<Self> {
        let title = require("Title", dto.title)?;
        let price = require("Price", dto.price)?;
        let latitude = require("Latitude", dto.latitude)?;
        let longitude = require("Longitude", dto.longitude)?;
        let owner_id = require("Owner", dto.owner_id)?;
        Self::new(
            &title,
            dto.description,
            price,
            latitude,
            longitude,
            owner_id,
        )
    }
}

impl Entity for Place {
    type Id = PlaceId;
    const KIND: &'static str = "Place";

    fn id(&self) -> &PlaceId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A place as returned by a single-place lookup: the stored record joined
/// with its owner and the amenities currently linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    pub owner: User,
    pub amenities: Vec<Amenity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cozy() -> Place {
        Place::new("Cozy", None, 120.0, 45.7, 4.8, UserId::new()).unwrap()
    }

    #[test]
    fn new_place_keeps_fields() {
        let owner = UserId::new();
        let place = Place::new("Cozy", Some("Near the river".into()), 120.0, 45.7, 4.8, owner)
            .unwrap();
        assert_eq!(place.title(), "Cozy");
        assert_eq!(place.description(), Some("Near the river"));
        assert_eq!(place.price(), 120.0);
        assert_eq!(place.latitude(), 45.7);
        assert_eq!(place.longitude(), 4.8);
        assert!(place.is_owned_by(&owner));
        assert_eq!(place.created_at(), place.updated_at());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let owner = UserId::new();
        assert!(Place::new("Cozy", None, -1.0, 45.7, 4.8, owner).is_err());
        assert!(Place::new("Cozy", None, 10.0, 90.5, 4.8, owner).is_err());
        assert!(Place::new("Cozy", None, 10.0, -90.5, 4.8, owner).is_err());
        assert!(Place::new("Cozy", None, 10.0, 45.7, 180.5, owner).is_err());
        assert!(Place::new("Cozy", None, 10.0, 45.7, -180.5, owner).is_err());
        assert!(Place::new("  ", None, 10.0, 45.7, 4.8, owner).is_err());
        assert!(Place::new(&"t".repeat(101), None, 10.0, 45.7, 4.8, owner).is_err());
    }

    #[test]
    fn title_is_stored_as_given() {
        let owner = UserId::new();
        let place = Place::new("  Cozy ", None, 120.0, 45.7, 4.8, owner).unwrap();
        assert_eq!(place.title(), "  Cozy ");

        let padded = format!(" {}", "t".repeat(100));
        assert!(Place::new(&padded, None, 120.0, 45.7, 4.8, owner).is_err());
        assert!(cozy().with_title("   ").is_err());
    }

    #[test]
    fn boundary_values_are_accepted() {
        let owner = UserId::new();
        assert!(Place::new("Edge", None, 0.0, 90.0, 180.0, owner).is_ok());
        assert!(Place::new("Edge", None, 0.0, -90.0, -180.0, owner).is_ok());
    }

    #[test]
    fn longitude_setter_validates_longitude_range() {
        let place = cozy();
        let moved = place.clone().with_longitude(-179.0).unwrap();
        assert_eq!(moved.longitude(), -179.0);
        assert_eq!(moved.latitude(), place.latitude());
        assert!(place.with_longitude(181.0).is_err());
    }

    #[test]
    fn apply_keeps_owner_and_rejects_partial_updates() {
        let place = cozy();
        let owner = *place.owner_id();

        let dto = UpdatePlaceDto {
            title: Some("Cozier".into()),
            price: Some(-5.0),
            ..Default::default()
        };
        assert!(place.clone().apply(&dto).is_err());

        let dto = UpdatePlaceDto {
            title: Some("Cozier".into()),
            price: Some(99.5),
            ..Default::default()
        };
        let updated = place.apply(&dto).unwrap();
        assert_eq!(updated.title(), "Cozier");
        assert_eq!(updated.price(), 99.5);
        assert_eq!(*updated.owner_id(), owner);
    }

    #[test]
    fn create_dto_requires_coordinates() {
        let dto = CreatePlaceDto {
            title: Some("Cozy".into()),
            price: Some(120.0),
            latitude: Some(45.7),
            longitude: None,
            owner_id: Some(UserId::new()),
            ..Default::default()
        };
        let err = Place::try_from(dto).unwrap_err();
        assert_eq!(err, DomainError::Validation("Longitude is required".into()));
    }

    #[test]
    fn missing_description_serializes_as_null() {
        let value = serde_json::to_value(cozy()).unwrap();
        assert_eq!(value["description"], serde_json::Value::Null);
        assert!(value.get("owner_id").is_some());
    }
}
