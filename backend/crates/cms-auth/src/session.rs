use crate::Claims;

use serde::{Deserialize, Serialize};

/// Role reference carried inside an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

/// "This user may act as `role` within `business_unit_id`"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub business_unit_id: String,
    pub role: RoleRef,
}

/// Request-scoped identity. Built fresh from verified claims on every request
/// and never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub assignments: Vec<Assignment>,
}

impl Session {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            assignments: claims.assignments,
        }
    }

    pub fn assignments_for<'a>(
        &'a self,
        business_unit_id: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.business_unit_id == business_unit_id)
    }

    pub fn is_assigned_to(&self, business_unit_id: &str) -> bool {
        self.assignments_for(business_unit_id).next().is_some()
    }
}
