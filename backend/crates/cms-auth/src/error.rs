use error_location::ErrorLocation;
use thiserror::Error;

/// Why a request could not be turned into a session
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No credentials presented {location}")]
    MissingCredentials { location: ErrorLocation },

    #[error("Credentials use the '{scheme}' scheme, only Bearer is accepted {location}")]
    UnsupportedScheme {
        scheme: String,
        location: ErrorLocation,
    },

    #[error("Bearer credentials carry no token {location}")]
    EmptyToken { location: ErrorLocation },

    #[error("Session token expired {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("Session token rejected: {source} {location}")]
    TokenRejected {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Session claim '{claim}' is unusable: {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider key could not be loaded: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
