//! Amenity domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{CreateAmenityDto, UpdateAmenityDto};
use crate::domain::entity::{next_update, AmenityId, Entity, PlaceId};
use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{require, trimmed_text};

pub const NAME_MAX_CHARS: usize = 50;

/// Key used for case-insensitive name comparison.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A feature a place can offer ("WiFi", "Pool").
///
/// Names are unique across the whole collection, ignoring case.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Amenity {
    id: AmenityId,
    name: String,
    /// Place this amenity is listed on, if any
    place_id: Option<PlaceId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: &str, place_id: Option<PlaceId>) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: AmenityId::new(),
            name: trimmed_text("Name", name, NAME_MAX_CHARS)?,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn place_id(&self) -> Option<&PlaceId> {
        self.place_id.as_ref()
    }

    /// Whether `other` names the same amenity, ignoring case and surrounding spaces.
    pub fn has_name(&self, other: &str) -> bool {
        name_key(&self.name) == name_key(other)
    }

    pub fn is_listed_on(&self, place_id: &PlaceId) -> bool {
        self.place_id.as_ref() == Some(place_id)
    }

    pub fn with_name(mut self, name: &str) -> DomainResult<Self> {
        self.name = trimmed_text("Name", name, NAME_MAX_CHARS)?;
        Ok(self.touched())
    }

    pub fn with_place(mut self, place_id: PlaceId) -> Self {
        self.place_id = Some(place_id);
        self.touched()
    }

    /// Apply every supplied field of `dto`, or none of them.
    pub fn apply(self, dto: &UpdateAmenityDto) -> DomainResult<Self> {
        let mut amenity = self;
        if let Some(name) = &dto.name {
            amenity = amenity.with_name(name)?;
        }
        if let Some(place_id) = dto.place_id {
            amenity = amenity.with_place(place_id);
        }
        Ok(amenity)
    }

    fn touched(mut self) -> Self {
        self.updated_at = next_update(self.updated_at);
        self
    }
}

impl TryFrom<CreateAmenityDto> for Amenity {
    type Error = DomainError;

    fn try_from(dto: CreateAmenityDto) -> DomainResult<Self> {
        let name = require("Name", dto.name)?;
        Self::new(&name, dto.place_id)
    }
}

impl Entity for Amenity {
    type Id = AmenityId;
    const KIND: &'static str = "Amenity";

    fn id(&self) -> &AmenityId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
