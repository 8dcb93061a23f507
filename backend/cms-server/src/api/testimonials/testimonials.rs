//! Testimonial REST API handlers

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_tenant};
use crate::{
    ApiError, ApiResult, AppState, CreateTestimonialRequest, HeaderTenant, MaybeSession,
    OperationContext, QueryTenant, TestimonialDto,
};

use cms_db::TestimonialRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;

/// GET /cms/testimonials?businessUnitId=
pub async fn list_testimonials(
    State(state): State<AppState>,
    tenant: QueryTenant,
) -> ApiResult<Json<Vec<TestimonialDto>>> {
    let business_unit_id = require_tenant(&tenant)?;

    let testimonials = TestimonialRepository::new(state.pool.clone())
        .find_by_business_unit(business_unit_id)
        .await
        .operation("list_testimonials")?;

    Ok(Json(
        testimonials.into_iter().map(TestimonialDto::from).collect(),
    ))
}

/// POST /cms/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<TestimonialDto>)> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let req: CreateTestimonialRequest = parse_body(&body, "create_testimonial")?;
    let testimonial = req.into_testimonial(business_unit_id)?;

    TestimonialRepository::new(state.pool.clone())
        .create(&testimonial)
        .await
        .operation("create_testimonial")?;

    log::info!(
        "Created testimonial {} in business unit {}",
        testimonial.id,
        business_unit_id
    );

    Ok((StatusCode::CREATED, Json(testimonial.into())))
}

/// DELETE /cms/testimonials/{id}?businessUnitId=
pub async fn delete_testimonial(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: QueryTenant,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let business_unit_id = authorize_tenant(session.as_ref(), &tenant)?;

    let deleted = TestimonialRepository::new(state.pool.clone())
        .delete_scoped(&id, business_unit_id)
        .await
        .operation("delete_testimonial")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Testimonial {} in business unit {}",
            id, business_unit_id
        )));
    }

    log::info!(
        "Deleted testimonial {} from business unit {}",
        id,
        business_unit_id
    );

    Ok(StatusCode::NO_CONTENT)
}
