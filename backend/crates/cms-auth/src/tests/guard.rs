use crate::tests::{assignment, session_with};
use crate::{
    AnyRole, Assignment, AssignmentPredicate, Decision, DenyReason, RoleNamed, authorize,
    authorize_any_unit, authorize_with,
};

use googletest::prelude::*;

// =========================================================================
// Base guard
// =========================================================================

#[test]
fn given_assignment_to_unit_when_authorized_then_allow() {
    let session = session_with(vec![assignment("bu1", "Editor")]);

    let decision = authorize(Some(&session), Some("bu1"));

    assert_that!(decision, eq(Decision::Allow));
    assert!(decision.is_allowed());
}

#[test]
fn given_no_session_when_authorized_then_unauthenticated() {
    let decision = authorize(None, Some("bu1"));

    assert_that!(decision, eq(Decision::Deny(DenyReason::Unauthenticated)));
}

#[test]
fn given_missing_tenant_when_authorized_then_missing_tenant_even_with_session() {
    let session = session_with(vec![assignment("bu1", "Admin")]);

    assert_that!(
        authorize(Some(&session), None),
        eq(Decision::Deny(DenyReason::MissingTenant))
    );
    assert_that!(
        authorize(None, None),
        eq(Decision::Deny(DenyReason::MissingTenant))
    );
    assert_that!(
        authorize(Some(&session), Some("")),
        eq(Decision::Deny(DenyReason::MissingTenant))
    );
}

#[test]
fn given_assignments_to_other_units_only_when_authorized_then_forbidden() {
    let session = session_with(vec![assignment("bu2", "Admin"), assignment("bu3", "Editor")]);

    let decision = authorize(Some(&session), Some("bu1"));

    assert_that!(decision, eq(Decision::Deny(DenyReason::Forbidden)));
}

#[test]
fn given_session_without_assignments_when_authorized_then_forbidden() {
    let session = session_with(vec![]);

    assert_that!(
        authorize(Some(&session), Some("bu1")),
        eq(Decision::Deny(DenyReason::Forbidden))
    );
}

#[test]
fn given_unit_id_differing_only_in_case_when_authorized_then_forbidden() {
    let session = session_with(vec![assignment("BU1", "Admin")]);

    assert_that!(
        authorize(Some(&session), Some("bu1")),
        eq(Decision::Deny(DenyReason::Forbidden))
    );
}

// =========================================================================
// Role predicates
// =========================================================================

#[test]
fn given_admin_requirement_and_editor_assignment_when_authorized_then_forbidden() {
    let session = session_with(vec![assignment("bu1", "Editor")]);

    let decision = authorize_with(Some(&session), Some("bu1"), &RoleNamed("Admin"));

    assert_that!(decision, eq(Decision::Deny(DenyReason::Forbidden)));
}

#[test]
fn given_admin_requirement_and_admin_assignment_in_other_unit_when_authorized_then_forbidden() {
    let session = session_with(vec![assignment("bu1", "Editor"), assignment("bu2", "Admin")]);

    let decision = authorize_with(Some(&session), Some("bu1"), &RoleNamed("Admin"));

    assert_that!(decision, eq(Decision::Deny(DenyReason::Forbidden)));
}

#[test]
fn given_admin_requirement_when_role_name_case_differs_then_allow() {
    let session = session_with(vec![assignment("bu1", "admin")]);

    let decision = authorize_with(Some(&session), Some("bu1"), &RoleNamed("Admin"));

    assert_that!(decision, eq(Decision::Allow));
}

#[test]
fn given_composed_predicate_when_one_side_rejects_then_forbidden() {
    let session = session_with(vec![assignment("bu1", "Admin")]);
    let predicate = AnyRole.and(RoleNamed("Owner"));

    let decision = authorize_with(Some(&session), Some("bu1"), &predicate);

    assert_that!(decision, eq(Decision::Deny(DenyReason::Forbidden)));
}

#[test]
fn given_admin_anywhere_when_authorized_for_any_unit_then_allow() {
    let session = session_with(vec![assignment("bu1", "Editor"), assignment("bu9", "Admin")]);

    assert_that!(
        authorize_any_unit(Some(&session), &RoleNamed("Admin")),
        eq(Decision::Allow)
    );
    assert_that!(
        authorize_any_unit(None, &RoleNamed("Admin")),
        eq(Decision::Deny(DenyReason::Unauthenticated))
    );
    assert_that!(
        authorize_any_unit(Some(&session), &RoleNamed("Owner")),
        eq(Decision::Deny(DenyReason::Forbidden))
    );
}

#[test]
fn given_closure_predicate_when_authorized_then_closure_decides() {
    let session = session_with(vec![assignment("bu1", "Owner"), assignment("bu2", "Editor")]);
    let owner_by_id = |a: &Assignment| a.role.id == "role-owner";

    assert_that!(
        authorize_with(Some(&session), Some("bu1"), &owner_by_id),
        eq(Decision::Allow)
    );
    assert_that!(
        authorize_with(Some(&session), Some("bu2"), &owner_by_id),
        eq(Decision::Deny(DenyReason::Forbidden))
    );
}
