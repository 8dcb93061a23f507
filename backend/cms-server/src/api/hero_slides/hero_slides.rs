//! Hero slide REST API handlers

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiError, ApiResult, AppState, CreateHeroSlideRequest, HeaderTenant, HeroSlideDto,
    MaybeSession, OperationContext, QueryTenant, UpdateHeroSlideRequest,
};

use cms_db::HeroSlideRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;

/// GET /cms/hero-slides?businessUnitId=
pub async fn list_hero_slides(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Vec<HeroSlideDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let slides = HeroSlideRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id)
        .await
        .operation("list_hero_slides")?;

    Ok(Json(slides.into_iter().map(HeroSlideDto::from).collect()))
}

/// POST /cms/hero-slides
pub async fn create_hero_slide(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<HeroSlideDto>)> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: CreateHeroSlideRequest = parse_body(&body, "create_hero_slide")?;
    let slide = req.into_hero_slide(business_unit_id)?;

    HeroSlideRepository::new(state.pool.clone())
        .create(&slide)
        .await
        .operation("create_hero_slide")?;

    log::info!(
        "Created hero slide {} in business unit {}",
        slide.id,
        business_unit_id
    );

    Ok((StatusCode::CREATED, Json(slide.into())))
}

/// PATCH /cms/hero-slides/{id}?businessUnitId=
///
/// Filtered by id AND business unit like every other by-id mutation.
pub async fn update_hero_slide(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<HeroSlideDto>> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: UpdateHeroSlideRequest = parse_body(&body, "update_hero_slide")?;
    let changes = req.into_update()?;

    let slide = HeroSlideRepository::new(state.pool.clone())
        .update_scoped(&id, business_unit_id, &changes)
        .await
        .operation("update_hero_slide")?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Hero slide {} in business unit {}",
                id, business_unit_id
            ))
        })?;

    log::info!(
        "Updated hero slide {} in business unit {}",
        id,
        business_unit_id
    );

    Ok(Json(slide.into()))
}

/// DELETE /cms/hero-slides/{id}?businessUnitId=
pub async fn delete_hero_slide(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let deleted = HeroSlideRepository::new(state.pool.clone())
        .delete_scoped(&id, business_unit_id)
        .await
        .operation("delete_hero_slide")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Hero slide {} in business unit {}",
            id, business_unit_id
        )));
    }

    log::info!(
        "Deleted hero slide {} from business unit {}",
        id,
        business_unit_id
    );

    Ok(StatusCode::NO_CONTENT)
}
