//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus, serde_helpers,
};
use crate::db::repository::DiningTableRepository;
use crate::db::repository::dining_table::DiningTableFilter;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_min_one, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct TableListQuery {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub restaurant_id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub section_id: Option<RecordId>,
    pub status: Option<TableStatus>,
}

/// GET /api/tables - 获取桌台 (可按餐厅/分区/状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TableListQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = DiningTableRepository::new(state.db.clone())
        .find_filtered(DiningTableFilter {
            restaurant: query.restaurant_id,
            section: query.section_id,
            status: query.status,
        })
        .await?;
    Ok(Json(tables))
}

/// GET /api/tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = DiningTableRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    validate_required_text(&payload.table_number, "table_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.location, "location", MAX_NOTE_LEN)?;
    validate_min_one(payload.capacity, "capacity")?;

    let table = DiningTableRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(table)))
}

/// PUT /api/tables/{id} - 更新桌台
///
/// 状态字段也可在此直接修改 (管理端操作，如 OUT_OF_ORDER 或清洁完成后
/// 置回 AVAILABLE)；分配驱动的状态变化走 `/api/assignments`。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(table_number) = &payload.table_number {
        validate_required_text(table_number, "table_number", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(capacity) = payload.capacity {
        validate_min_one(capacity, "capacity")?;
    }

    let table = DiningTableRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(table))
}

/// DELETE /api/tables/{id} - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !DiningTableRepository::new(state.db.clone())
        .delete(&id)
        .await?
    {
        return Err(AppError::not_found(format!("Table {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
