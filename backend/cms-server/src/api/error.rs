//! REST API error types
//!
//! Every failure a handler can produce maps onto one status code and a short
//! plain-text body. Details stay in the server log.

use cms_auth::DenyReason;
use cms_core::CoreError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const UNAUTHORIZED_BODY: &str = "Unauthorized";
pub const FORBIDDEN_BODY: &str = "Forbidden";
pub const MISSING_FIELDS_BODY: &str = "Missing required fields";
pub const NOT_FOUND_BODY: &str = "Not found";
pub const INTERNAL_ERROR_BODY: &str = "Internal error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No session could be resolved (401)
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Client error whose message is safe to return, e.g. a missing tenant id (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Session has no qualifying assignment (403)
    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    /// Required payload fields absent or blank (400)
    #[error("Missing required fields: {} {location}", fields.join(", "))]
    MissingFields {
        fields: Vec<String>,
        location: ErrorLocation,
    },

    /// Scoped lookup, update or delete matched nothing (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Anything unexpected (500). `operation` is a stable tag for log search.
    #[error("Internal error in {operation}: {message} {location}")]
    Internal {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(operation: &'static str, message: S) -> Self {
        Self::Internal {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a guard denial. `missing_tenant` is the message for an absent
    /// tenant id, which depends on where the route reads it from.
    #[track_caller]
    pub fn from_denial(reason: DenyReason, missing_tenant: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match reason {
            DenyReason::MissingTenant => Self::BadRequest {
                message: missing_tenant.to_string(),
                location,
            },
            DenyReason::Unauthenticated => Self::Unauthorized { location },
            DenyReason::Forbidden => Self::Forbidden { location },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } | Self::MissingFields { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let body = match self {
            Self::Unauthorized { .. } => UNAUTHORIZED_BODY.to_string(),
            Self::BadRequest { message, .. } => message,
            Self::Forbidden { .. } => FORBIDDEN_BODY.to_string(),
            Self::MissingFields { .. } => MISSING_FIELDS_BODY.to_string(),
            Self::NotFound { .. } => NOT_FOUND_BODY.to_string(),
            Self::Internal { .. } => INTERNAL_ERROR_BODY.to_string(),
        };

        (status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::MissingFields { fields, .. } => Self::MissingFields { fields, location },
            CoreError::InvalidField { field, message, .. } => {
                log::debug!("Invalid field '{}': {}", field, message);
                Self::BadRequest {
                    message: format!("Invalid {}", field),
                    location,
                }
            }
        }
    }
}

/// Tags persistence failures with the operation that hit them.
///
/// ```ignore
/// let faqs = repo.find_by_business_unit(id).await.operation("list_faqs")?;
/// ```
pub trait OperationContext<T> {
    fn operation(self, operation: &'static str) -> Result<T>;
}

impl<T> OperationContext<T> for cms_db::Result<T> {
    #[track_caller]
    fn operation(self, operation: &'static str) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::Internal {
                operation,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
