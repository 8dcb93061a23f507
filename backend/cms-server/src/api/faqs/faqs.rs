//! FAQ REST API handlers

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiError, ApiResult, AppState, CreateFaqRequest, FaqDto, HeaderTenant, MaybeSession,
    OperationContext, QueryTenant, UpdateFaqRequest,
};

use cms_db::FaqRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;

/// GET /cms/faqs?businessUnitId=
pub async fn list_faqs(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Vec<FaqDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let faqs = FaqRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id)
        .await
        .operation("list_faqs")?;

    Ok(Json(faqs.into_iter().map(FaqDto::from).collect()))
}

/// POST /cms/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<FaqDto>)> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: CreateFaqRequest = parse_body(&body, "create_faq")?;
    let faq = req.into_faq(business_unit_id)?;

    FaqRepository::new(state.pool.clone())
        .create(&faq)
        .await
        .operation("create_faq")?;

    log::info!("Created FAQ {} in business unit {}", faq.id, business_unit_id);

    Ok((StatusCode::CREATED, Json(faq.into())))
}

/// PATCH /cms/faqs/{id}?businessUnitId=
pub async fn update_faq(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<FaqDto>> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: UpdateFaqRequest = parse_body(&body, "update_faq")?;
    let changes = req.into_update()?;

    let faq = FaqRepository::new(state.pool.clone())
        .update_scoped(&id, business_unit_id, &changes)
        .await
        .operation("update_faq")?
        .ok_or_else(|| {
            ApiError::not_found(format!("FAQ {} in business unit {}", id, business_unit_id))
        })?;

    log::info!("Updated FAQ {} in business unit {}", id, business_unit_id);

    Ok(Json(faq.into()))
}

/// DELETE /cms/faqs/{id}?businessUnitId=
pub async fn delete_faq(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let deleted = FaqRepository::new(state.pool.clone())
        .delete_scoped(&id, business_unit_id)
        .await
        .operation("delete_faq")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "FAQ {} in business unit {}",
            id, business_unit_id
        )));
    }

    log::info!("Deleted FAQ {} from business unit {}", id, business_unit_id);

    Ok(StatusCode::NO_CONTENT)
}
