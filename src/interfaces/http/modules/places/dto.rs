//! Place request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CreatePlaceDto, DomainError, UpdatePlaceDto, UserId};

/// Create place request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePlaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Id of an existing user
    pub owner_id: Option<String>,
}

impl TryFrom<CreatePlaceRequest> for CreatePlaceDto {
    type Error = DomainError;

    fn try_from(req: CreatePlaceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            owner_id: req.owner_id.as_deref().map(str::parse::<UserId>).transpose()?,
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
        })
    }
}

/// Update place request
///
/// `id` and `owner_id` are accepted only when they repeat the stored values.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePlaceRequest {
    pub id: Option<String>,
    pub owner_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdatePlaceRequest {
    /// True when the body named no field at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.owner_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }
}

impl From<UpdatePlaceRequest> for UpdatePlaceDto {
    fn from(req: UpdatePlaceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}
