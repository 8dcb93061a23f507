//! Tenant identifier extraction.
//!
//! Mutating routes that create or upsert read the business unit from the
//! `x-business-unit-id` header. Reads and by-id mutations read it from the
//! `businessUnitId` query parameter. A request body never supplies it.

use crate::{AppState, ApiError};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

pub const TENANT_HEADER: &str = "x-business-unit-id";
pub const TENANT_QUERY_PARAM: &str = "businessUnitId";

/// Where a route reads its tenant id from, and what to say when it is absent.
pub trait TenantSource {
    const MISSING_MESSAGE: &'static str;

    /// The id, or `None` when absent or blank
    fn business_unit_id(&self) -> Option<&str>;
}

/// Tenant id from the `x-business-unit-id` header
#[derive(Debug, Clone, Default)]
pub struct HeaderTenant(pub Option<String>);

impl TenantSource for HeaderTenant {
    const MISSING_MESSAGE: &'static str = "Missing x-business-unit-id header";

    fn business_unit_id(&self) -> Option<&str> {
        non_blank(self.0.as_deref())
    }
}

impl FromRequestParts<AppState> for HeaderTenant {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let value = parts
                .headers
                .get(TENANT_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Ok(HeaderTenant(value))
        }
    }
}

#[derive(Debug, Deserialize)]
struct TenantQuery {
    #[serde(rename = "businessUnitId")]
    business_unit_id: Option<String>,
}

/// Tenant id from the `businessUnitId` query parameter
#[derive(Debug, Clone, Default)]
pub struct QueryTenant(pub Option<String>);

impl TenantSource for QueryTenant {
    const MISSING_MESSAGE: &'static str = "Missing businessUnitId parameter";

    fn business_unit_id(&self) -> Option<&str> {
        non_blank(self.0.as_deref())
    }
}

impl FromRequestParts<AppState> for QueryTenant {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // A malformed query string is treated as an absent parameter
            let value = Query::<TenantQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(q)| q.business_unit_id);
            Ok(QueryTenant(value))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
