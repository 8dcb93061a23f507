mod bearer;
mod guard;

use crate::{Assignment, RoleRef, Session};

pub(crate) fn assignment(business_unit_id: &str, role_name: &str) -> Assignment {
    Assignment {
        business_unit_id: business_unit_id.to_string(),
        role: RoleRef {
            id: format!("role-{}", role_name.to_lowercase()),
            name: role_name.to_string(),
            display_name: role_name.to_string(),
        },
    }
}

pub(crate) fn session_with(assignments: Vec<Assignment>) -> Session {
    Session {
        user_id: "user-123".to_string(),
        assignments,
    }
}
