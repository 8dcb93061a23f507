//! Tenant authorization guard.
//!
//! Pure decision functions over a request's session and the business unit it
//! targets. No I/O: callers resolve the session and extract the tenant id
//! beforehand, and map the decision onto a response.

use crate::{AnyRole, AssignmentPredicate, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Why a request was denied. Each reason maps to a distinct status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The request did not say which business unit it targets (400)
    MissingTenant,
    /// No session could be resolved (401)
    Unauthenticated,
    /// Session present, but no qualifying assignment to the unit (403)
    Forbidden,
}

/// Allow iff the session holds any assignment to `business_unit_id`.
pub fn authorize(session: Option<&Session>, business_unit_id: Option<&str>) -> Decision {
    authorize_with(session, business_unit_id, &AnyRole)
}

/// Allow iff the session holds an assignment to `business_unit_id` that
/// `predicate` admits.
///
/// A missing tenant identifier is reported before a missing session so that
/// the client error surfaces regardless of authentication state.
pub fn authorize_with<P>(
    session: Option<&Session>,
    business_unit_id: Option<&str>,
    predicate: &P,
) -> Decision
where
    P: AssignmentPredicate + ?Sized,
{
    let Some(business_unit_id) = business_unit_id.filter(|id| !id.trim().is_empty()) else {
        return Decision::Deny(DenyReason::MissingTenant);
    };

    let Some(session) = session else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    if session
        .assignments_for(business_unit_id)
        .any(|a| predicate.admits(a))
    {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Forbidden)
    }
}

/// For operations that are not scoped to one unit: allow iff any assignment,
/// in any unit, is admitted by `predicate`.
pub fn authorize_any_unit<P>(session: Option<&Session>, predicate: &P) -> Decision
where
    P: AssignmentPredicate + ?Sized,
{
    let Some(session) = session else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    if session.assignments.iter().any(|a| predicate.admits(a)) {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Forbidden)
    }
}
