//! Role REST API handlers

use crate::api::body::parse_body;
use crate::api::guard::{authorize_tenant, require_role_in_any_unit, require_session};
use crate::{
    ApiResult, AppState, CreateRoleRequest, HeaderTenant, MaybeSession, OperationContext, RoleDto,
};

use cms_db::RoleRepository;

use axum::{Json, extract::State, http::StatusCode};
use bytes::Bytes;

/// GET /roles
///
/// Roles visible to a member of the unit named by `x-business-unit-id`.
pub async fn list_tenant_roles(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    tenant: HeaderTenant,
) -> ApiResult<Json<Vec<RoleDto>>> {
    authorize_tenant(session.as_ref(), &tenant)?;

    let roles = RoleRepository::new(state.pool.clone())
        .find_all()
        .await
        .operation("list_tenant_roles")?;

    Ok(Json(roles.into_iter().map(RoleDto::from).collect()))
}

/// GET /admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> ApiResult<Json<Vec<RoleDto>>> {
    require_session(session.as_ref())?;

    let roles = RoleRepository::new(state.pool.clone())
        .find_all()
        .await
        .operation("list_roles")?;

    Ok(Json(roles.into_iter().map(RoleDto::from).collect()))
}

/// POST /admin/roles
pub async fn create_role(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<RoleDto>)> {
    let admin = require_role_in_any_unit(session.as_ref(), &state.admin_role)?;

    let req: CreateRoleRequest = parse_body(&body, "create_role")?;
    let role = req.into_role()?;

    RoleRepository::new(state.pool.clone())
        .create(&role)
        .await
        .operation("create_role")?;

    log::info!("Role {} ({}) created by {}", role.name, role.id, admin.user_id);

    Ok((StatusCode::CREATED, Json(role.into())))
}
