//! Domain errors

use thiserror::Error;

/// Domain-level error types.
///
/// Transport agnostic: the HTTP adapter decides which status each kind maps to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field violates its constraint (blank, out of range, wrong shape)
    #[error("Validation: {0}")]
    Validation(String),

    /// A referenced identifier does not resolve to an existing entity
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The operation would break a uniqueness invariant
    #[error("Already exists: {0}")]
    Conflict(String),

    /// Structurally valid but disallowed by a business rule
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: value.to_string(),
        }
    }

    /// Human-readable reason without the kind prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::Forbidden(msg) => msg.clone(),
            Self::NotFound { entity, .. } => format!("{} not found", entity),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_value() {
        let err = DomainError::not_found("Place", "abc");
        assert_eq!(err.to_string(), "Not found: Place with id=abc");
        assert_eq!(err.reason(), "Place not found");
    }

    #[test]
    fn reason_strips_kind_prefix() {
        let err = DomainError::Conflict("Email already registered".into());
        assert_eq!(err.to_string(), "Already exists: Email already registered");
        assert_eq!(err.reason(), "Email already registered");
    }
}
