//! Identity and timestamps shared by every entity kind

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::DomainError;

/// A stored record with an immutable identifier and creation/update timestamps.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// Entity kind as shown in error messages ("User", "Place", ...)
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// Next `updated_at` value after `previous`.
///
/// Two mutations inside the same clock tick still yield strictly increasing
/// timestamps.
pub(crate) fn next_update(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.hyphenated().fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::try_parse(s.trim())
                    .map(Self)
                    .map_err(|_| DomainError::Validation(format!("Invalid {} ID format", $label)))
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](super::User)
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a [`Place`](super::Place)
    PlaceId,
    "place"
);
entity_id!(
    /// Identifier of a [`Review`](super::Review)
    ReviewId,
    "review"
);
entity_id!(
    /// Identifier of an [`Amenity`](super::Amenity)
    AmenityId,
    "amenity"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_parses_canonical_uuid() {
        let id = PlaceId::new();
        let parsed: PlaceId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_id_is_a_validation_error() {
        let err = "not-a-uuid".parse::<AmenityId>().unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("Invalid amenity ID format".into())
        );
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = ReviewId::new();
        let value = serde_json::to_value(id).unwrap();
        assert_eq!(value, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn next_update_is_strictly_later() {
        let far_future = Utc::now() + Duration::hours(1);
        assert!(next_update(far_future) > far_future);

        let past = Utc::now() - Duration::hours(1);
        assert!(next_update(past) > past);
    }
}
