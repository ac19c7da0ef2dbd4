//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{
    Reservation, ReservationCreate, ReservationStatus, ReservationUpdate, serde_helpers,
};
use crate::db::repository::ReservationRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_min_one, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub restaurant_id: Option<RecordId>,
    pub status: Option<ReservationStatus>,
}

/// GET /api/reservations - 获取预订 (可按餐厅/状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = ReservationRepository::new(state.db.clone())
        .find_filtered(query.restaurant_id, query.status)
        .await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/{id} - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订 (初始状态 PENDING)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.special_requests, "special_requests", MAX_NOTE_LEN)?;
    validate_min_one(payload.party_size, "party_size")?;

    let reservation = ReservationRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// PUT /api/reservations/{id} - 更新预订 (确认、改期等)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    if let Some(name) = &payload.customer_name {
        validate_required_text(name, "customer_name", MAX_NAME_LEN)?;
    }
    if let Some(size) = payload.party_size {
        validate_min_one(size, "party_size")?;
    }

    let reservation = ReservationRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id} - 取消预订
///
/// 预订不做硬删除：取消即置 CANCELLED 并返回取消后的记录。
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;

    let reservation_id = reservation
        .id
        .ok_or_else(|| AppError::internal("reservation record missing id"))?;
    repo.set_status(&reservation_id, ReservationStatus::Cancelled)
        .await?;

    let cancelled = repo
        .find(&reservation_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(cancelled))
}
