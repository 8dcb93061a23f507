use crate::api::guard::{authorize_tenant, require_role_in_any_unit, require_session, require_tenant};
use crate::tests::api::session_with;
use crate::{ApiError, HeaderTenant, QueryTenant, TenantSource};

use googletest::prelude::*;

#[test]
fn given_blank_header_tenant_when_read_then_absent() {
    let tenant = HeaderTenant(Some("   ".to_string()));

    assert_that!(tenant.business_unit_id(), none());
}

#[test]
fn given_member_session_when_authorizing_header_tenant_then_unit_returned() {
    let session = session_with(&[("bu1", "Editor")]);
    let tenant = HeaderTenant(Some("bu1".to_string()));

    let result = authorize_tenant(Some(&session), &tenant);

    assert_eq!(result.ok(), Some("bu1"));
}

#[test]
fn given_missing_header_and_no_session_when_authorizing_then_missing_header_error() {
    let tenant = HeaderTenant(None);

    let result = authorize_tenant(None, &tenant);

    assert!(matches!(
        result,
        Err(ApiError::BadRequest { ref message, .. }) if message == "Missing x-business-unit-id header"
    ));
}

#[test]
fn given_missing_query_when_authorizing_then_missing_parameter_error() {
    let session = session_with(&[("bu1", "Editor")]);
    let tenant = QueryTenant(None);

    let result = authorize_tenant(Some(&session), &tenant);

    assert!(matches!(
        result,
        Err(ApiError::BadRequest { ref message, .. }) if message == "Missing businessUnitId parameter"
    ));
}

#[test]
fn given_no_session_when_authorizing_then_unauthorized() {
    let tenant = QueryTenant(Some("bu1".to_string()));

    let result = authorize_tenant(None, &tenant);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn given_session_for_other_unit_when_authorizing_then_forbidden() {
    let session = session_with(&[("bu2", "Admin")]);
    let tenant = QueryTenant(Some("bu1".to_string()));

    let result = authorize_tenant(Some(&session), &tenant);

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn given_public_read_without_tenant_when_required_then_bad_request() {
    let tenant = QueryTenant(Some(String::new()));

    let result = require_tenant(&tenant);

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_no_session_when_session_required_then_unauthorized() {
    assert!(matches!(require_session(None), Err(ApiError::Unauthorized { .. })));
}

#[test]
fn given_admin_in_any_unit_when_admin_required_then_allowed() {
    let session = session_with(&[("bu1", "Editor"), ("bu9", "admin")]);

    let result = require_role_in_any_unit(Some(&session), "Admin");

    assert_eq!(result.ok().map(|s| s.user_id.as_str()), Some("user-1"));
}

#[test]
fn given_non_admin_when_admin_required_then_forbidden() {
    let session = session_with(&[("bu1", "Editor")]);

    let result = require_role_in_any_unit(Some(&session), "Admin");

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn given_no_session_when_admin_required_then_unauthorized() {
    let result = require_role_in_any_unit(None, "Admin");

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
