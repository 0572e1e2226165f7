//! Field-level validation rules shared by the entity constructors.
//!
//! Every helper returns `DomainError::Validation` with a message naming the
//! offending field, so callers only need `?`.

use crate::domain::{DomainError, DomainResult};

/// Unwrap a required input field, reporting `"<label> is required"` when absent.
pub fn require<T>(label: &str, value: Option<T>) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::Validation(format!("{} is required", label)))
}

/// Trim `value` and check it is non-empty and at most `max_chars` characters.
pub fn trimmed_text(label: &str, value: &str, max_chars: usize) -> DomainResult<String> {
    bounded_text(label, value.trim(), max_chars)
}

/// Like [`trimmed_text`], but keeps `value` exactly as given.
pub fn bounded_text(label: &str, value: &str, max_chars: usize) -> DomainResult<String> {
    let value = non_blank(label, value)?;
    if value.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{} cannot exceed {} characters",
            label, max_chars
        )));
    }
    Ok(value)
}

/// Check `value` is not only whitespace. The value is kept as given.
pub fn non_blank(label: &str, value: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{} must be a non-empty string",
            label
        )));
    }
    Ok(value.to_string())
}

/// Check that a finite `value` lies in `[min, max]`.
pub fn in_range(label: &str, value: f64, min: f64, max: f64) -> DomainResult<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(DomainError::Validation(format!(
            "{} must be between {:.1} and {:.1}",
            label, min, max
        )));
    }
    Ok(value)
}

/// Check that `value` is finite and not negative.
pub fn non_negative(label: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::Validation(format!(
            "{} must be a non-negative number",
            label
        )));
    }
    Ok(value)
}
