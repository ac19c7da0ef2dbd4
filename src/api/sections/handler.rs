//! Section API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{Section, SectionCreate, SectionUpdate, serde_helpers};
use crate::db::repository::SectionRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_min_one, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SectionListQuery {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub restaurant_id: Option<RecordId>,
}

/// GET /api/sections - 获取分区 (可按餐厅过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SectionListQuery>,
) -> AppResult<Json<Vec<Section>>> {
    let sections = SectionRepository::new(state.db.clone())
        .find_all(query.restaurant_id)
        .await?;
    Ok(Json(sections))
}

/// GET /api/sections/{id} - 获取单个分区
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Section>> {
    let section = SectionRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Section {} not found", id)))?;
    Ok(Json(section))
}

/// POST /api/sections - 创建分区
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SectionCreate>,
) -> AppResult<(StatusCode, Json<Section>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_min_one(payload.capacity, "capacity")?;

    let section = SectionRepository::new(state.db.clone()).create(payload).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// PUT /api/sections/{id} - 更新分区
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SectionUpdate>,
) -> AppResult<Json<Section>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(capacity) = payload.capacity {
        validate_min_one(capacity, "capacity")?;
    }

    let section = SectionRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(section))
}

/// DELETE /api/sections/{id} - 删除分区
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !SectionRepository::new(state.db.clone()).delete(&id).await? {
        return Err(AppError::not_found(format!("Section {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
