//! In-memory storage implementation

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{Amenity, Entity, Place, Repository, RepositoryProvider, Review, User};

struct Slot<T> {
    /// Insertion order, fixed on first add
    seq: u64,
    entity: T,
}

/// Volatile keyed store for one entity kind.
pub struct InMemoryRepository<T: Entity> {
    entries: DashMap<T::Id, Slot<T>>,
    sequence: AtomicU64,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Snapshot of all entities, oldest first.
    fn ordered(&self) -> Vec<T> {
        let mut slots: Vec<(u64, T)> = self
            .entries
            .iter()
            .map(|e| (e.seq, e.entity.clone()))
            .collect();
        slots.sort_by_key(|(seq, _)| *seq);
        slots.into_iter().map(|(_, entity)| entity).collect()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&self, entity: T) {
        match self.entries.entry(*entity.id()) {
            Entry::Occupied(mut slot) => slot.get_mut().entity = entity,
            Entry::Vacant(slot) => {
                let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
                slot.insert(Slot { seq, entity });
            }
        }
    }

    fn get(&self, id: &T::Id) -> Option<T> {
        self.entries.get(id).map(|slot| slot.entity.clone())
    }

    fn find_first(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T> {
        self.ordered().into_iter().find(|entity| predicate(entity))
    }

    fn find_all(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.ordered()
            .into_iter()
            .filter(|entity| predicate(entity))
            .collect()
    }

    fn get_all(&self) -> Vec<T> {
        self.ordered()
    }

    fn delete(&self, id: &T::Id) -> Option<T> {
        self.entries.remove(id).map(|(_, slot)| slot.entity)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One in-memory repository per entity kind.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    users: InMemoryRepository<User>,
    places: InMemoryRepository<Place>,
    reviews: InMemoryRepository<Review>,
    amenities: InMemoryRepository<Amenity>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn users(&self) -> &dyn Repository<User> {
        &self.users
    }

    fn places(&self) -> &dyn Repository<Place> {
        &self.places
    }

    fn reviews(&self) -> &dyn Repository<Review> {
        &self.reviews
    }

    fn amenities(&self) -> &dyn Repository<Amenity> {
        &self.amenities
    }
}
