//! Glue between the pure guard in `cms-auth` and handler results

use crate::api::extractors::tenant::TenantSource;
use crate::{ApiError, ApiResult};

use cms_auth::{Decision, RoleNamed, Session, authorize, authorize_any_unit};

use std::panic::Location;

use error_location::ErrorLocation;

/// Run the tenant guard and return the authorized business unit id.
///
/// Order of checks: missing tenant id (400), missing session (401), no
/// assignment to the unit (403).
#[track_caller]
pub fn authorize_tenant<'a, T: TenantSource>(
    session: Option<&Session>,
    tenant: &'a T,
) -> ApiResult<&'a str> {
    match (authorize(session, tenant.business_unit_id()), tenant.business_unit_id()) {
        (Decision::Allow, Some(business_unit_id)) => Ok(business_unit_id),
        (Decision::Deny(reason), _) => Err(ApiError::from_denial(reason, T::MISSING_MESSAGE)),
        (Decision::Allow, None) => Err(ApiError::bad_request(T::MISSING_MESSAGE)),
    }
}

/// Tenant id for public reads, which need no session
#[track_caller]
pub fn require_tenant<T: TenantSource>(tenant: &T) -> ApiResult<&str> {
    match tenant.business_unit_id() {
        Some(business_unit_id) => Ok(business_unit_id),
        None => Err(ApiError::bad_request(T::MISSING_MESSAGE)),
    }
}

/// Any authenticated caller
#[track_caller]
pub fn require_session(session: Option<&Session>) -> ApiResult<&Session> {
    match session {
        Some(session) => Ok(session),
        None => Err(ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Caller must hold `admin_role` in at least one business unit
#[track_caller]
pub fn require_role_in_any_unit<'a>(
    session: Option<&'a Session>,
    admin_role: &str,
) -> ApiResult<&'a Session> {
    let session = require_session(session)?;

    if authorize_any_unit(Some(session), &RoleNamed(admin_role)).is_allowed() {
        Ok(session)
    } else {
        Err(ApiError::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
