//! HBnB facade: the single entry point to the domain
//!
//! Every entity is created and mutated here, never directly by the HTTP
//! layer. The facade enforces the rules that span more than one entity:
//! email and amenity-name uniqueness, owner/author/place references, and the
//! self-review prohibition.
//!
//! Mutations hold `write_lock` across the whole check-then-store sequence so
//! concurrent requests cannot both pass a uniqueness check. Reads go straight
//! to the repositories.

mod amenities;
mod places;
mod reviews;
mod users;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{DomainError, DomainResult, Place, PlaceId, RepositoryProvider, User, UserId};
use crate::infrastructure::storage::InMemoryRepositoryProvider;

/// Facade over all repositories.
pub struct HbnbFacade {
    repos: Arc<dyn RepositoryProvider>,
    write_lock: Mutex<()>,
}

/// Facade shared between request handlers.
pub type SharedFacade = Arc<HbnbFacade>;

impl HbnbFacade {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            write_lock: Mutex::new(()),
        }
    }

    /// Facade backed by fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    pub fn shared(self) -> SharedFacade {
        Arc::new(self)
    }

    pub fn repositories(&self) -> &dyn RepositoryProvider {
        self.repos.as_ref()
    }

    /// The lock guards no data, only the check-then-act sequence, so a
    /// poisoned lock is still usable.
    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn require_user(&self, id: &UserId, field: &'static str) -> DomainResult<User> {
        self.repos.users().get(id).ok_or_else(|| DomainError::NotFound {
            entity: "User",
            field,
            value: id.to_string(),
        })
    }

    fn require_place(&self, id: &PlaceId, field: &'static str) -> DomainResult<Place> {
        self.repos.places().get(id).ok_or_else(|| DomainError::NotFound {
            entity: "Place",
            field,
            value: id.to_string(),
        })
    }
}

impl Default for HbnbFacade {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::HbnbFacade;
    use crate::domain::{CreatePlaceDto, CreateUserDto, Place, User, UserId};

    pub fn user_dto(first: &str, last: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(email.into()),
            is_admin: None,
        }
    }

    pub fn place_dto(title: &str, owner: UserId) -> CreatePlaceDto {
        CreatePlaceDto {
            title: Some(title.into()),
            description: None,
            price: Some(120.0),
            latitude: Some(45.7),
            longitude: Some(4.8),
            owner_id: Some(owner),
        }
    }

    pub fn jane(facade: &HbnbFacade) -> User {
        facade
            .create_user(user_dto("Jane", "Doe", "jane@x.com"))
            .unwrap()
    }

    pub fn john(facade: &HbnbFacade) -> User {
        facade
            .create_user(user_dto("John", "Smith", "john@x.com"))
            .unwrap()
    }

    pub fn cozy(facade: &HbnbFacade, owner: &User) -> Place {
        use crate::domain::Entity;
        facade.create_place(place_dto("Cozy", *owner.id())).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::{CreateReviewDto, Entity};

    #[test]
    fn end_to_end_booking_scenario() {
        let facade = HbnbFacade::in_memory();

        let jane = jane(&facade);
        let cozy = facade
            .create_place(place_dto("Cozy", *jane.id()))
            .unwrap();
        let john = john(&facade);

        let review = facade
            .create_review(CreateReviewDto {
                text: Some("Great!".into()),
                rating: Some(5),
                user_id: Some(*john.id()),
                place_id: Some(*cozy.id()),
            })
            .unwrap();

        let self_review = facade.create_review(CreateReviewDto {
            text: Some("Great!".into()),
            rating: Some(5),
            user_id: Some(*jane.id()),
            place_id: Some(*cozy.id()),
        });
        assert!(matches!(self_review, Err(DomainError::Forbidden(_))));

        assert_eq!(facade.get_reviews_by_place(cozy.id()).unwrap().len(), 1);
        facade.delete_review(review.id()).unwrap();
        assert!(facade.get_reviews_by_place(cozy.id()).unwrap().is_empty());
    }

    #[test]
    fn concurrent_creates_with_same_email_admit_one() {
        let facade = HbnbFacade::in_memory();

        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let facade = &facade;
                    scope.spawn(move || {
                        facade
                            .create_user(user_dto(&format!("User{i}"), "Race", "race@x.com"))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
        assert_eq!(facade.get_all_users().len(), 1);
    }

    #[test]
    fn poisoned_write_lock_is_recovered() {
        let facade = HbnbFacade::in_memory();

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = facade.write_guard();
            panic!("handler crashed mid-write");
        }));
        assert!(panicked.is_err());
        assert!(facade.write_lock.is_poisoned());

        let gym = facade.create_amenity(crate::domain::CreateAmenityDto {
            name: Some("Gym".into()),
            place_id: None,
        });
        assert!(gym.is_ok());
        assert_eq!(facade.get_all_amenities().len(), 1);
    }

    #[test]
    fn injected_repositories_are_used() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let facade = HbnbFacade::new(repos.clone());
        jane(&facade);
        assert_eq!(repos.users().len(), 1);
    }
}
