use cms_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_validator: Arc<JwtValidator>,
    /// Role name required by the administrative create routes
    pub admin_role: Arc<str>,
}

impl AppState {
    pub fn new(pool: SqlitePool, session_validator: JwtValidator, admin_role: &str) -> Self {
        Self {
            pool,
            session_validator: Arc::new(session_validator),
            admin_role: Arc::from(admin_role),
        }
    }
}
