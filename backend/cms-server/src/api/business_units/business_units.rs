//! Business unit administration handlers

use crate::api::body::parse_body;
use crate::api::guard::{require_role_in_any_unit, require_session};
use crate::{
    ApiResult, AppState, BusinessUnitDto, CreateBusinessUnitRequest, MaybeSession,
    OperationContext,
};

use cms_db::BusinessUnitRepository;

use axum::{Json, extract::State, http::StatusCode};
use bytes::Bytes;

/// GET /admin/business-units
pub async fn list_business_units(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> ApiResult<Json<Vec<BusinessUnitDto>>> {
    require_session(session.as_ref())?;

    let units = BusinessUnitRepository::new(state.pool.clone())
        .find_all()
        .await
        .operation("list_business_units")?;

    Ok(Json(units.into_iter().map(BusinessUnitDto::from).collect()))
}

/// POST /admin/business-units
pub async fn create_business_unit(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<BusinessUnitDto>)> {
    let admin = require_role_in_any_unit(session.as_ref(), &state.admin_role)?;

    let req: CreateBusinessUnitRequest = parse_body(&body, "create_business_unit")?;
    let unit = req.into_business_unit()?;

    BusinessUnitRepository::new(state.pool.clone())
        .create(&unit)
        .await
        .operation("create_business_unit")?;

    log::info!(
        "Business unit {} ({}) created by {}",
        unit.name,
        unit.id,
        admin.user_id
    );

    Ok((StatusCode::CREATED, Json(unit.into())))
}
