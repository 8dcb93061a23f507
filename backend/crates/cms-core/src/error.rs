use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required fields: {} {location}", fields.join(", "))]
    MissingFields {
        fields: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Invalid value for '{field}': {message} {location}")]
    InvalidField {
        field: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
