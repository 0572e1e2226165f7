//! Place use-cases

use tracing::info;

use super::HbnbFacade;
use crate::domain::{
    Amenity, CreatePlaceDto, DomainResult, Entity, Place, PlaceDetails, PlaceId,
    UpdatePlaceDto,
};

impl HbnbFacade {
    /// List a new place. The owner must be an existing user.
    pub fn create_place(&self, dto: CreatePlaceDto) -> DomainResult<Place> {
        let place = Place::try_from(dto)?;

        let _guard = self.write_guard();
        self.require_user(place.owner_id(), "owner_id")?;
        self.repos.places().add(place.clone());

        info!(place_id = %place.id(), owner_id = %place.owner_id(), "Place created");
        Ok(place)
    }

    /// Fetch a place joined with its owner and the amenities listed on it.
    ///
    /// The amenity list is computed on every call, never stored.
    pub fn get_place(&self, id: &PlaceId) -> DomainResult<PlaceDetails> {
        let place = self.require_place(id, "id")?;
        let owner = self.require_user(place.owner_id(), "owner_id")?;
        let amenities = self
            .repos
            .amenities()
            .find_all(&|amenity: &Amenity| amenity.is_listed_on(id));

        Ok(PlaceDetails {
            place,
            owner,
            amenities,
        })
    }

    pub fn get_all_places(&self) -> Vec<Place> {
        self.repos.places().get_all()
    }

    pub fn update_place(&self, id: &PlaceId, dto: UpdatePlaceDto) -> DomainResult<Place> {
        let _guard = self.write_guard();
        let current = self.require_place(id, "id")?;

        let updated = current.apply(&dto)?;
        self.repos.places().add(updated.clone());

        info!(place_id = %id, "Place updated");
        Ok(updated)
    }
}
