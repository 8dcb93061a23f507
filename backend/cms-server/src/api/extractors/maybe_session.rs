//! Resolves the caller's session from the `Authorization` header

use crate::{AppState, ApiError};

use cms_auth::{Session, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The request's session, or `None` when no valid bearer token was presented.
///
/// Never rejects: absence of a session is a guard decision, not an extraction
/// failure, so handlers can report a missing tenant id ahead of a 401.
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            if header.is_none() {
                return Ok(MaybeSession(None));
            }

            let token = match bearer_token(header) {
                Ok(token) => token,
                Err(e) => {
                    log::debug!("Ignoring Authorization header: {}", e);
                    return Ok(MaybeSession(None));
                }
            };

            match state.session_validator.session(token) {
                Ok(session) => {
                    log::debug!(
                        "Session for user {} ({} assignments)",
                        session.user_id,
                        session.assignments.len()
                    );
                    Ok(MaybeSession(Some(session)))
                }
                Err(e) => {
                    log::warn!("Rejected session token: {}", e);
                    Ok(MaybeSession(None))
                }
            }
        }
    }
}
