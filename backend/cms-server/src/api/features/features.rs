//! Feature REST API handlers. Features are content items of type "feature".

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiError, ApiResult, AppState, CreateFeatureRequest, FeatureDto, HeaderTenant, MaybeSession,
    OperationContext, QueryTenant,
};

use cms_core::FEATURE_CONTENT_TYPE;
use cms_db::ContentItemRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;

/// GET /cms/features?businessUnitId=
pub async fn list_features(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Vec<FeatureDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let features = ContentItemRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id, FEATURE_CONTENT_TYPE)
        .await
        .operation("list_features")?;

    Ok(Json(features.into_iter().map(FeatureDto::from).collect()))
}

/// POST /cms/features
pub async fn create_feature(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<FeatureDto>)> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: CreateFeatureRequest = parse_body(&body, "create_feature")?;
    let feature = req.into_feature(business_unit_id)?;

    ContentItemRepository::new(state.pool.clone())
        .create(&feature)
        .await
        .operation("create_feature")?;

    log::info!(
        "Created feature {} in business unit {}",
        feature.id,
        business_unit_id
    );

    Ok((StatusCode::CREATED, Json(feature.into())))
}

/// DELETE /cms/features/{id}?businessUnitId=
pub async fn delete_feature(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let deleted = ContentItemRepository::new(state.pool.clone())
        .delete_scoped(&id, business_unit_id, FEATURE_CONTENT_TYPE)
        .await
        .operation("delete_feature")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Feature {} in business unit {}",
            id, business_unit_id
        )));
    }

    log::info!("Deleted feature {} from business unit {}", id, business_unit_id);

    Ok(StatusCode::NO_CONTENT)
}
