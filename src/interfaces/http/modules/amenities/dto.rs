//! Amenity request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CreateAmenityDto, DomainError, PlaceId, UpdateAmenityDto};

fn parse_place(raw: Option<&str>) -> Result<Option<PlaceId>, DomainError> {
    raw.map(str::parse).transpose()
}

/// Create amenity request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateAmenityRequest {
    pub name: Option<String>,
    /// Place to list the amenity on
    pub place_id: Option<String>,
}

impl TryFrom<CreateAmenityRequest> for CreateAmenityDto {
    type Error = DomainError;

    fn try_from(req: CreateAmenityRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            place_id: parse_place(req.place_id.as_deref())?,
            name: req.name,
        })
    }
}

/// Update amenity request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAmenityRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub place_id: Option<String>,
}

impl TryFrom<UpdateAmenityRequest> for UpdateAmenityDto {
    type Error = DomainError;

    fn try_from(req: UpdateAmenityRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            place_id: parse_place(req.place_id.as_deref())?,
            name: req.name,
        })
    }
}
