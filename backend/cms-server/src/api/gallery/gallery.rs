//! Gallery REST API handlers

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiError, ApiResult, AppState, CreateMediaItemRequest, HeaderTenant, MaybeSession,
    MediaItemDto, OperationContext, QueryTenant,
};

use cms_db::MediaItemRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;

/// GET /cms/gallery?businessUnitId=
pub async fn list_gallery(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Vec<MediaItemDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let items = MediaItemRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id)
        .await
        .operation("list_gallery")?;

    Ok(Json(items.into_iter().map(MediaItemDto::from).collect()))
}

/// POST /cms/gallery
pub async fn create_gallery_item(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<MediaItemDto>)> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: CreateMediaItemRequest = parse_body(&body, "create_gallery_item")?;
    let item = req.into_media_item(business_unit_id)?;

    MediaItemRepository::new(state.pool.clone())
        .create(&item)
        .await
        .operation("create_gallery_item")?;

    log::info!(
        "Created gallery item {} in business unit {}",
        item.id,
        business_unit_id
    );

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// DELETE /cms/gallery/{id}?businessUnitId=
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let deleted = MediaItemRepository::new(state.pool.clone())
        .delete_scoped(&id, business_unit_id)
        .await
        .operation("delete_gallery_item")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Gallery item {} in business unit {}",
            id, business_unit_id
        )));
    }

    log::info!(
        "Deleted gallery item {} from business unit {}",
        id,
        business_unit_id
    );

    Ok(StatusCode::NO_CONTENT)
}
