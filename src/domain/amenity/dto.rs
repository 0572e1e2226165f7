use crate::domain::entity::PlaceId;

#[derive(Debug, Clone, Default)]
pub struct CreateAmenityDto {
    pub name: Option<String>,
    /// Optional place to list the amenity on
    pub place_id: Option<PlaceId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAmenityDto {
    pub name: Option<String>,
    pub place_id: Option<PlaceId>,
}
