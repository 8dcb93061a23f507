//! Website configuration REST API handlers. One configuration per business
//! unit.

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiResult, AppState, HeaderTenant, MaybeSession, OperationContext, QueryTenant,
    UpsertWebsiteConfigRequest, WebsiteConfigDto,
};

use cms_db::WebsiteConfigRepository;

use axum::{Json, extract::State};
use bytes::Bytes;

/// GET /cms/website-config?businessUnitId=
///
/// `null` when the unit has no configuration yet.
pub async fn get_website_config(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Option<WebsiteConfigDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let config = WebsiteConfigRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id)
        .await
        .operation("get_website_config")?;

    Ok(Json(config.map(WebsiteConfigDto::from)))
}

/// POST /cms/website-config
pub async fn upsert_website_config(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<Json<WebsiteConfigDto>> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: UpsertWebsiteConfigRequest = parse_body(&body, "upsert_website_config")?;
    let config = req.into_website_config(business_unit_id)?;

    let stored = WebsiteConfigRepository::new(state.pool.clone())
        .upsert(&config)
        .await
        .operation("upsert_website_config")?;

    log::info!(
        "Saved website config {} for business unit {}",
        stored.id,
        business_unit_id
    );

    Ok(Json(stored.into()))
}
