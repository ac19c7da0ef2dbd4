//! Assignment API Handlers
//!
//! 薄薄的一层 HTTP 适配：所有规则在 [`crate::seating::AssignmentEngine`]。

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{
    ReservationAssignment, ReservationAssignmentCreate, ReservationAssignmentFilter,
    ReservationAssignmentUpdate, TableAssignment, TableAssignmentCreate, TableAssignmentFilter,
    TableAssignmentUpdate,
};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

// ========== Table Assignments ==========

/// GET /api/assignments/table-assignments - 获取桌台分配 (过滤条件 AND 组合)
pub async fn list_table_assignments(
    State(state): State<ServerState>,
    Query(filter): Query<TableAssignmentFilter>,
) -> AppResult<Json<Vec<TableAssignment>>> {
    let assignments = state.engine().list_table_assignments(filter).await?;
    Ok(Json(assignments))
}

/// POST /api/assignments/table-assignments - 创建桌台分配
///
/// 桌台置 OCCUPIED，就餐组置 SEATED；前置条件不满足时返回 400。
pub async fn create_table_assignment(
    State(state): State<ServerState>,
    Json(payload): Json<TableAssignmentCreate>,
) -> AppResult<(StatusCode, Json<TableAssignment>)> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let assignment = state.engine().create_table_assignment(payload).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/assignments/table-assignments/{id} - 获取单个桌台分配
pub async fn get_table_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableAssignment>> {
    let assignment = state
        .engine()
        .get_table_assignment(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Table assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// PUT /api/assignments/table-assignments/{id} - 部分更新桌台分配
pub async fn update_table_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<TableAssignmentUpdate>,
) -> AppResult<Json<TableAssignment>> {
    if let Some(Some(notes)) = &patch.notes {
        validate_optional_text(&Some(notes.clone()), "notes", MAX_NOTE_LEN)?;
    }

    let assignment = state
        .engine()
        .update_table_assignment(&id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Table assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// PUT /api/assignments/table-assignments/{id}/complete - 完成桌台分配
///
/// 桌台置 CLEANING，就餐组置 FINISHED。
pub async fn complete_table_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableAssignment>> {
    let assignment = state
        .engine()
        .complete_table_assignment(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Table assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// DELETE /api/assignments/table-assignments/{id} - 删除桌台分配
///
/// 无论分配处于何种状态，关联桌台都会被释放回 AVAILABLE。
pub async fn delete_table_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.engine().delete_table_assignment(&id).await? {
        return Err(AppError::not_found("Table assignment not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ========== Reservation Assignments ==========

/// GET /api/assignments/reservation-assignments - 获取预订分配
pub async fn list_reservation_assignments(
    State(state): State<ServerState>,
    Query(filter): Query<ReservationAssignmentFilter>,
) -> AppResult<Json<Vec<ReservationAssignment>>> {
    let assignments = state.engine().list_reservation_assignments(filter).await?;
    Ok(Json(assignments))
}

/// POST /api/assignments/reservation-assignments - 创建预订分配
///
/// 要求预订已 CONFIRMED；桌台置 RESERVED。
pub async fn create_reservation_assignment(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationAssignmentCreate>,
) -> AppResult<(StatusCode, Json<ReservationAssignment>)> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let assignment = state.engine().create_reservation_assignment(payload).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/assignments/reservation-assignments/{id} - 获取单个预订分配
pub async fn get_reservation_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReservationAssignment>> {
    let assignment = state
        .engine()
        .get_reservation_assignment(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Reservation assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// PUT /api/assignments/reservation-assignments/{id} - 部分更新预订分配
pub async fn update_reservation_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<ReservationAssignmentUpdate>,
) -> AppResult<Json<ReservationAssignment>> {
    if let Some(Some(notes)) = &patch.notes {
        validate_optional_text(&Some(notes.clone()), "notes", MAX_NOTE_LEN)?;
    }

    let assignment = state
        .engine()
        .update_reservation_assignment(&id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Reservation assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// PUT /api/assignments/reservation-assignments/{id}/complete - 完成预订分配
///
/// 桌台置 CLEANING，预订置 COMPLETED。
pub async fn complete_reservation_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReservationAssignment>> {
    let assignment = state
        .engine()
        .complete_reservation_assignment(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Reservation assignment not found".to_string()))?;
    Ok(Json(assignment))
}

/// DELETE /api/assignments/reservation-assignments/{id} - 删除预订分配
pub async fn delete_reservation_assignment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.engine().delete_reservation_assignment(&id).await? {
        return Err(AppError::not_found(
            "Reservation assignment not found".to_string(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}
