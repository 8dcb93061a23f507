use crate::{Assignment, AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_IDENTIFIER_LENGTH: usize = 128;

/// JWT claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Business unit / role bindings for this user
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "session subject is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        for assignment in &self.assignments {
            let unit = &assignment.business_unit_id;
            if unit.is_empty() || unit.len() > MAX_IDENTIFIER_LENGTH {
                return Err(AuthError::InvalidClaim {
                    claim: "assignments".to_string(),
                    message: format!(
                        "businessUnitId must be 1-{} characters",
                        MAX_IDENTIFIER_LENGTH
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if assignment.role.name.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "assignments".to_string(),
                    message: "assignment role has no name".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
