//! Amenity use-cases

use tracing::{debug, info};

use super::HbnbFacade;
use crate::domain::{
    Amenity, AmenityId, CreateAmenityDto, DomainError, DomainResult, Entity, UpdateAmenityDto,
};

impl HbnbFacade {
    /// Create an amenity. Names are trimmed and must be unique ignoring case.
    pub fn create_amenity(&self, dto: CreateAmenityDto) -> DomainResult<Amenity> {
        let amenity = Amenity::try_from(dto)?;

        let _guard = self.write_guard();
        self.ensure_name_available(&amenity)?;
        if let Some(place_id) = amenity.place_id() {
            self.require_place(place_id, "place_id")?;
        }
        self.repos.amenities().add(amenity.clone());

        info!(amenity_id = %amenity.id(), name = %amenity.name(), "Amenity created");
        Ok(amenity)
    }

    pub fn get_amenity(&self, id: &AmenityId) -> Option<Amenity> {
        self.repos.amenities().get(id)
    }

    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.repos.amenities().get_all()
    }

    /// Replace the supplied fields. Returns `Ok(None)` for an unknown id.
    pub fn update_amenity(
        &self,
        id: &AmenityId,
        dto: UpdateAmenityDto,
    ) -> DomainResult<Option<Amenity>> {
        let _guard = self.write_guard();
        let Some(current) = self.repos.amenities().get(id) else {
            return Ok(None);
        };

        let updated = current.apply(&dto)?;
        if dto.name.is_some() {
            self.ensure_name_available(&updated)?;
        }
        if let Some(place_id) = &dto.place_id {
            self.require_place(place_id, "place_id")?;
        }
        self.repos.amenities().add(updated.clone());

        info!(amenity_id = %id, "Amenity updated");
        Ok(Some(updated))
    }

    /// Fails if a *different* amenity already uses `amenity`'s name.
    fn ensure_name_available(&self, amenity: &Amenity) -> DomainResult<()> {
        let clash = self.repos.amenities().find_first(&|other: &Amenity| {
            other.id() != amenity.id() && other.has_name(amenity.name())
        });
        if clash.is_some() {
            debug!(name = %amenity.name(), "Rejected duplicate amenity name");
            return Err(DomainError::Conflict("Amenity already exists".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::domain::PlaceId;

    fn named(name: &str) -> CreateAmenityDto {
        CreateAmenityDto {
            name: Some(name.into()),
            place_id: None,
        }
    }

    #[test]
    fn duplicate_name_ignoring_case_conflicts() {
        let facade = HbnbFacade::in_memory();
        facade.create_amenity(named("WiFi")).unwrap();

        let err = facade.create_amenity(named("wifi")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        let err = facade.create_amenity(named("  WIFI ")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(facade.get_all_amenities().len(), 1);
    }

    #[test]
    fn renaming_onto_another_amenity_conflicts() {
        let facade = HbnbFacade::in_memory();
        facade.create_amenity(named("WiFi")).unwrap();
        let pool = facade.create_amenity(named("Pool")).unwrap();

        let err = facade
            .update_amenity(
                pool.id(),
                UpdateAmenityDto {
                    name: Some("wifi".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(facade.get_amenity(pool.id()).unwrap().name(), "Pool");
    }

    #[test]
    fn renaming_to_own_name_in_other_case_is_allowed() {
        let facade = HbnbFacade::in_memory();
        let wifi = facade.create_amenity(named("WiFi")).unwrap();

        let updated = facade
            .update_amenity(
                wifi.id(),
                UpdateAmenityDto {
                    name: Some("WIFI".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.name(), "WIFI");
    }

    #[test]
    fn blank_name_is_rejected() {
        let facade = HbnbFacade::in_memory();
        assert!(matches!(
            facade.create_amenity(named("   ")),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            facade.create_amenity(CreateAmenityDto::default()),
            Err(DomainError::Validation(_))
        ));

        let gym = facade.create_amenity(named("Gym")).unwrap();
        let err = facade
            .update_amenity(
                gym.id(),
                UpdateAmenityDto {
                    name: Some("".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn name_is_trimmed_before_storage() {
        let facade = HbnbFacade::in_memory();
        let created = facade.create_amenity(named("  Parking  ")).unwrap();
        assert_eq!(created.name(), "Parking");
        assert_eq!(facade.get_amenity(created.id()), Some(created));
    }

    #[test]
    fn unknown_amenity_is_none() {
        let facade = HbnbFacade::in_memory();
        assert!(facade.get_amenity(&AmenityId::new()).is_none());
        let result = facade
            .update_amenity(&AmenityId::new(), UpdateAmenityDto::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn linked_place_must_exist() {
        let facade = HbnbFacade::in_memory();
        let err = facade
            .create_amenity(CreateAmenityDto {
                name: Some("Pool".into()),
                place_id: Some(PlaceId::new()),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Place", .. }));
        assert!(facade.get_all_amenities().is_empty());

        let owner = jane(&facade);
        let place = cozy(&facade, &owner);
        let pool = facade
            .create_amenity(CreateAmenityDto {
                name: Some("Pool".into()),
                place_id: Some(*place.id()),
            })
            .unwrap();
        assert_eq!(pool.place_id(), Some(place.id()));
    }

    #[test]
    fn relinking_to_unknown_place_is_not_found_and_changes_nothing() {
        let facade = HbnbFacade::in_memory();
        let pool = facade.create_amenity(named("Pool")).unwrap();

        let err = facade
            .update_amenity(
                pool.id(),
                UpdateAmenityDto {
                    name: Some("Spa".into()),
                    place_id: Some(PlaceId::new()),
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Place", .. }));

        let stored = facade.get_amenity(pool.id()).unwrap();
        assert_eq!(stored.name(), "Pool");
        assert_eq!(stored.place_id(), None);
    }
}
