//! Waiting List API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{
    WaitingEntry, WaitingEntryCreate, WaitingEntryUpdate, WaitingStatus, serde_helpers,
};
use crate::db::repository::{RestaurantRepository, WaitingListRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_min_one, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct WaitingListQuery {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub restaurant_id: Option<RecordId>,
    pub status: Option<WaitingStatus>,
}

fn validate_entry(payload: &WaitingEntryCreate) -> AppResult<()> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_min_one(payload.party_size, "party_size")?;
    Ok(())
}

/// GET /api/waiting-list - 获取候位列表 (FIFO)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<WaitingListQuery>,
) -> AppResult<Json<Vec<WaitingEntry>>> {
    let entries = WaitingListRepository::new(state.db.clone())
        .find_filtered(query.restaurant_id, query.status)
        .await?;
    Ok(Json(entries))
}

/// GET /api/waiting-list/{id} - 获取单个候位条目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<WaitingEntry>> {
    let entry = WaitingListRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Waiting entry {} not found", id)))?;
    Ok(Json(entry))
}

/// POST /api/waiting-list - 加入候位
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<WaitingEntryCreate>,
) -> AppResult<(StatusCode, Json<WaitingEntry>)> {
    validate_entry(&payload)?;

    let entry = WaitingListRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Waiting entry body without the restaurant reference (taken from the path)
#[derive(Debug, Deserialize)]
pub struct WaitingEntryBody {
    pub customer_name: String,
    pub customer_phone: String,
    pub party_size: i32,
    pub estimated_wait_time: Option<i32>,
    pub notes: Option<String>,
}

/// POST /api/waiting-list/restaurants/{restaurant_id}/add - 在餐厅下加入候位
pub async fn add_for_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Json(body): Json<WaitingEntryBody>,
) -> AppResult<(StatusCode, Json<WaitingEntry>)> {
    let restaurant = RestaurantRepository::new(state.db.clone())
        .find_by_id(&restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))?;
    let restaurant_ref = restaurant
        .id
        .ok_or_else(|| AppError::internal("restaurant record missing id"))?;

    let payload = WaitingEntryCreate {
        customer_name: body.customer_name,
        customer_phone: body.customer_phone,
        party_size: body.party_size,
        estimated_wait_time: body.estimated_wait_time,
        notes: body.notes,
        restaurant: restaurant_ref,
    };
    validate_entry(&payload)?;

    let entry = WaitingListRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/waiting-list/restaurants/{restaurant_id}/next - 下一个候位组
pub async fn next(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<WaitingEntry>> {
    let thing: RecordId = restaurant_id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid ID: {}", restaurant_id)))?;

    let entry = WaitingListRepository::new(state.db.clone())
        .find_next(thing)
        .await?
        .ok_or_else(|| AppError::not_found("No parties in waiting list".to_string()))?;
    Ok(Json(entry))
}

/// PUT /api/waiting-list/{id} - 更新候位条目
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<WaitingEntryUpdate>,
) -> AppResult<Json<WaitingEntry>> {
    if let Some(name) = &payload.customer_name {
        validate_required_text(name, "customer_name", MAX_NAME_LEN)?;
    }
    if let Some(size) = payload.party_size {
        validate_min_one(size, "party_size")?;
    }

    let entry = WaitingListRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(entry))
}

/// PUT /api/waiting-list/{id}/seat - 标记候位组已就座
pub async fn seat(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<WaitingEntry>> {
    let repo = WaitingListRepository::new(state.db.clone());
    let entry = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Waiting entry {} not found", id)))?;

    let entry_id = entry
        .id
        .ok_or_else(|| AppError::internal("waiting entry record missing id"))?;
    repo.set_status(&entry_id, WaitingStatus::Seated).await?;

    let seated = repo
        .find(&entry_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Waiting entry {} not found", id)))?;
    Ok(Json(seated))
}

/// DELETE /api/waiting-list/{id} - 移出候位列表
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !WaitingListRepository::new(state.db.clone())
        .delete(&id)
        .await?
    {
        return Err(AppError::not_found(format!(
            "Waiting entry {} not found",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
