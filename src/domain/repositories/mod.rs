//! Repository traits for the domain layer
//!
//! Contains:
//! - `Repository<T>`: generic keyed store, one instance per entity kind
//! - `RepositoryProvider`: unified access to all per-kind repositories
//!
//! Repositories know nothing about cross-entity rules; uniqueness and
//! referential checks live in the facade.

use super::entity::Entity;
use super::{Amenity, Place, Review, User};

/// Keyed storage for one entity kind.
///
/// Listing operations return entities in insertion order. Re-adding an
/// existing id replaces the value but keeps its position.
pub trait Repository<T: Entity>: Send + Sync {
    /// Store `entity` under its id, replacing any previous value.
    fn add(&self, entity: T);

    fn get(&self, id: &T::Id) -> Option<T>;

    /// First entity (in insertion order) matching `predicate`.
    fn find_first(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T>;

    /// Every entity matching `predicate`, in insertion order.
    fn find_all(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;

    fn get_all(&self) -> Vec<T>;

    /// Remove and return the entity; a missing id is a no-op.
    fn delete(&self, id: &T::Id) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides access to all domain repositories.
///
/// ```ignore
/// fn owner_of(repos: &dyn RepositoryProvider, place: &Place) -> Option<User> {
///     repos.users().get(place.owner_id())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn Repository<User>;
    fn places(&self) -> &dyn Repository<Place>;
    fn reviews(&self) -> &dyn Repository<Review>;
    fn amenities(&self) -> &dyn Repository<Amenity>;
}
