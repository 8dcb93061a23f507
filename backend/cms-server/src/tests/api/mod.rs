mod error;
mod guard;
mod requests;

use cms_auth::{Assignment, RoleRef, Session};

pub(crate) fn session_with(assignments: &[(&str, &str)]) -> Session {
    Session {
        user_id: "user-1".to_string(),
        assignments: assignments
            .iter()
            .map(|(unit, role)| Assignment {
                business_unit_id: unit.to_string(),
                role: RoleRef {
                    id: format!("role-{}", role.to_lowercase()),
                    name: role.to_string(),
                    display_name: role.to_string(),
                },
            })
            .collect(),
    }
}
