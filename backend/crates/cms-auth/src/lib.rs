pub mod bearer;
pub mod claims;
pub mod error;
pub mod guard;
pub mod jwt_validator;
pub mod predicate;
pub mod session;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use guard::{Decision, DenyReason, authorize, authorize_any_unit, authorize_with};
pub use jwt_validator::JwtValidator;
pub use predicate::{AnyRole, AssignmentPredicate, Both, RoleNamed};
pub use session::{Assignment, RoleRef, Session};

#[cfg(test)]
mod tests;
