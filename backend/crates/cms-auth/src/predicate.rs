//! Role predicates layered on top of the base guard.

use crate::Assignment;

/// Decides whether a single assignment satisfies an operation's requirement.
pub trait AssignmentPredicate {
    fn admits(&self, assignment: &Assignment) -> bool;

    fn and<O>(self, other: O) -> Both<Self, O>
    where
        Self: Sized,
        O: AssignmentPredicate,
    {
        Both(self, other)
    }
}

/// Any assignment to the unit is enough. This is the base guard's policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRole;

impl AssignmentPredicate for AnyRole {
    fn admits(&self, _assignment: &Assignment) -> bool {
        true
    }
}

/// Requires the assignment's role name to match (ASCII case-insensitive).
#[derive(Debug, Clone, Copy)]
pub struct RoleNamed<'a>(pub &'a str);

impl AssignmentPredicate for RoleNamed<'_> {
    fn admits(&self, assignment: &Assignment) -> bool {
        assignment.role.name.eq_ignore_ascii_case(self.0)
    }
}

/// Ad-hoc rules, e.g. `|a: &Assignment| a.role.id == "role-owner"`.
impl<F> AssignmentPredicate for F
where
    F: Fn(&Assignment) -> bool,
{
    fn admits(&self, assignment: &Assignment) -> bool {
        self(assignment)
    }
}

/// Both predicates must admit the same assignment.
#[derive(Debug, Clone, Copy)]
pub struct Both<A, B>(pub A, pub B);

impl<A: AssignmentPredicate, B: AssignmentPredicate> AssignmentPredicate for Both<A, B> {
    fn admits(&self, assignment: &Assignment) -> bool {
        self.0.admits(assignment) && self.1.admits(assignment)
    }
}
