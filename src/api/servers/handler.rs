//! Server API Handlers (服务员)

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{Server, ServerCreate, ServerUpdate, serde_helpers};
use crate::db::repository::ServerRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ServerListQuery {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub restaurant_id: Option<RecordId>,
    pub is_active: Option<bool>,
}

/// GET /api/servers - 获取服务员 (可按餐厅/在职状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ServerListQuery>,
) -> AppResult<Json<Vec<Server>>> {
    let servers = ServerRepository::new(state.db.clone())
        .find_filtered(query.restaurant_id, query.is_active)
        .await?;
    Ok(Json(servers))
}

/// GET /api/servers/{id} - 获取单个服务员
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Server>> {
    let server = ServerRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Server {} not found", id)))?;
    Ok(Json(server))
}

/// POST /api/servers - 创建服务员 (employee_id 重复时返回 409)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServerCreate>,
) -> AppResult<(StatusCode, Json<Server>)> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.employee_id, "employee_id", MAX_SHORT_TEXT_LEN)?;

    let server = ServerRepository::new(state.db.clone()).create(payload).await?;
    Ok((StatusCode::CREATED, Json(server)))
}

/// PUT /api/servers/{id} - 更新服务员
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ServerUpdate>,
) -> AppResult<Json<Server>> {
    if let Some(employee_id) = &payload.employee_id {
        validate_required_text(employee_id, "employee_id", MAX_SHORT_TEXT_LEN)?;
    }

    let server = ServerRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(server))
}

/// DELETE /api/servers/{id} - 删除服务员
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !ServerRepository::new(state.db.clone()).delete(&id).await? {
        return Err(AppError::not_found(format!("Server {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
