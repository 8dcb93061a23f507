//! Presence validation for request payloads and the defaults applied at the
//! handler boundary.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Applied when a create request omits `isActive`
pub const DEFAULT_IS_ACTIVE: bool = true;

/// Applied when a create request omits `sortOrder`
pub const DEFAULT_SORT_ORDER: i64 = 0;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// A value counts as absent when it is `None` or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Accumulates required-field checks so a request reports every missing field
/// at once.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present and non-blank.
    pub fn check(mut self, name: &'static str, value: Option<&str>) -> Self {
        if is_blank(value) {
            self.missing.push(name);
        }
        self
    }

    /// Partial updates may omit a required field, but may not blank it out.
    pub fn check_if_present(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.is_some() && is_blank(value) {
            self.missing.push(name);
        }
        self
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    #[track_caller]
    pub fn finish(self) -> CoreErrorResult<()> {
        if self.missing.is_empty() {
            return Ok(());
        }

        Err(CoreError::MissingFields {
            fields: self.missing.iter().map(|f| f.to_string()).collect(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
pub fn validate_rating(rating: i64) -> CoreErrorResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::InvalidField {
            field: "rating".to_string(),
            message: format!(
                "must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
