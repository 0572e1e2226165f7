use crate::domain::entity::UserId;

/// Input for listing a new place.
#[derive(Debug, Clone, Default)]
pub struct CreatePlaceDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<UserId>,
}
