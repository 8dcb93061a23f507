use crate::{ApiError, ApiResult};

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Parse a JSON request body. Called only once the guard has allowed the
/// request, so an unparseable body from an authorized caller is a 500.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes, operation: &'static str) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::internal(operation, format!("Malformed request body: {}", e)))
}
