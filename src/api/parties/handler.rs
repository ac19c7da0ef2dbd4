//! Party API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Party, PartyCreate, PartyStatus, PartyUpdate};
use crate::db::repository::PartyRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_min_one, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct PartyListQuery {
    pub status: Option<PartyStatus>,
}

/// GET /api/parties - 获取就餐组 (可按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PartyListQuery>,
) -> AppResult<Json<Vec<Party>>> {
    let parties = PartyRepository::new(state.db.clone())
        .find_all(query.status)
        .await?;
    Ok(Json(parties))
}

/// GET /api/parties/{id} - 获取单个就餐组
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Party>> {
    let party = PartyRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Party {} not found", id)))?;
    Ok(Json(party))
}

/// POST /api/parties - 创建就餐组 (walk-in 或候位转入)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PartyCreate>,
) -> AppResult<(StatusCode, Json<Party>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_min_one(payload.size, "size")?;

    let party = PartyRepository::new(state.db.clone()).create(payload).await?;
    Ok((StatusCode::CREATED, Json(party)))
}

/// PUT /api/parties/{id} - 更新就餐组
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PartyUpdate>,
) -> AppResult<Json<Party>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(size) = payload.size {
        validate_min_one(size, "size")?;
    }

    let party = PartyRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(party))
}

/// DELETE /api/parties/{id} - 删除就餐组
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !PartyRepository::new(state.db.clone()).delete(&id).await? {
        return Err(AppError::not_found(format!("Party {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
