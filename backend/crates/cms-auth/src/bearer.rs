use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
#[track_caller]
pub fn bearer_token(header_value: Option<&str>) -> AuthErrorResult<&str> {
    let value = header_value.ok_or_else(|| AuthError::MissingCredentials {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .ok_or_else(|| AuthError::UnsupportedScheme {
            scheme: value.split_whitespace().next().unwrap_or_default().to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if token.is_empty() {
        return Err(AuthError::EmptyToken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
