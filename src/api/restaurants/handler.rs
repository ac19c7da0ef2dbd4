//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{
    DiningTable, DiningTableCreate, Restaurant, RestaurantCreate, RestaurantUpdate, Section,
    SectionCreate, TableAssignment, TableAssignmentCreate, TableStatus, serde_helpers,
};
use crate::db::repository::dining_table::DiningTableFilter;
use crate::db::repository::{DiningTableRepository, RestaurantRepository, SectionRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_min_one,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 分页响应结构
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

fn validate_restaurant_payload(data: &RestaurantCreate) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_min_one(data.max_capacity, "max_capacity")?;
    Ok(())
}

/// GET /api/restaurants - 分页获取餐厅
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Restaurant>>> {
    let limit = page.limit.clamp(1, 100);
    let offset = page.offset.max(0);

    let repo = RestaurantRepository::new(state.db.clone());
    let items = repo.find_page(limit, offset).await?;
    let total = repo.count().await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    }))
}

/// GET /api/restaurants/{id} - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))?;
    Ok(Json(restaurant))
}

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    validate_restaurant_payload(&payload)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// PUT /api/restaurants/{id} - 更新餐厅
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(capacity) = payload.max_capacity {
        validate_min_one(capacity, "max_capacity")?;
    }

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.update(&id, payload).await?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id} - 删除餐厅
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = RestaurantRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Restaurant {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ========== Nested: Sections ==========

/// Section body without the restaurant reference (taken from the path)
#[derive(Debug, Deserialize)]
pub struct SectionBody {
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// GET /api/restaurants/{id}/sections - 获取餐厅的分区
pub async fn list_sections(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Section>>> {
    let restaurant = require_restaurant(&state, &id).await?;
    let sections = SectionRepository::new(state.db.clone())
        .find_all(restaurant.id)
        .await?;
    Ok(Json(sections))
}

/// POST /api/restaurants/{id}/sections - 在餐厅下创建分区
pub async fn create_section(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<SectionBody>,
) -> AppResult<(StatusCode, Json<Section>)> {
    let restaurant = require_restaurant(&state, &id).await?;
    let restaurant_id = restaurant
        .id
        .ok_or_else(|| AppError::internal("restaurant record missing id"))?;

    validate_required_text(&body.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&body.description, "description", MAX_NOTE_LEN)?;
    validate_min_one(body.capacity, "capacity")?;

    let section = SectionRepository::new(state.db.clone())
        .create(SectionCreate {
            name: body.name,
            description: body.description,
            capacity: body.capacity,
            is_active: body.is_active,
            restaurant: restaurant_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(section)))
}

// ========== Nested: Tables ==========

/// Table body without the restaurant reference (taken from the path)
#[derive(Debug, Deserialize)]
pub struct TableBody {
    pub table_number: String,
    pub capacity: i32,
    pub location: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub sections: Vec<RecordId>,
}

/// GET /api/restaurants/{id}/tables - 获取餐厅的桌台
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let restaurant = require_restaurant(&state, &id).await?;
    let tables = DiningTableRepository::new(state.db.clone())
        .find_filtered(DiningTableFilter {
            restaurant: restaurant.id,
            ..Default::default()
        })
        .await?;
    Ok(Json(tables))
}

/// POST /api/restaurants/{id}/tables - 在餐厅下创建桌台
pub async fn create_table(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<TableBody>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    let restaurant = require_restaurant(&state, &id).await?;
    let restaurant_id = restaurant
        .id
        .ok_or_else(|| AppError::internal("restaurant record missing id"))?;

    validate_required_text(&body.table_number, "table_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&body.location, "location", MAX_NOTE_LEN)?;
    validate_min_one(body.capacity, "capacity")?;

    let table = DiningTableRepository::new(state.db.clone())
        .create(DiningTableCreate {
            table_number: body.table_number,
            capacity: body.capacity,
            location: body.location,
            is_active: body.is_active,
            status: body.status,
            restaurant: restaurant_id,
            sections: body.sections,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(table)))
}

// ========== Seating Operations ==========

#[derive(Debug, Deserialize)]
pub struct AssignTableParams {
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub party_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub server_id: RecordId,
    pub notes: Option<String>,
}

/// POST /api/restaurants/{id}/seating/assign-table - 为就餐组分配桌台
pub async fn assign_table(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(params): Query<AssignTableParams>,
) -> AppResult<(StatusCode, Json<TableAssignment>)> {
    require_restaurant(&state, &id).await?;

    let assignment = state
        .engine()
        .create_table_assignment(TableAssignmentCreate {
            table_id: params.table_id,
            party_id: params.party_id,
            server_id: params.server_id,
            notes: params.notes,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub party_size: i32,
    /// 当前可用性仅基于桌台实时状态；该参数暂不参与计算
    pub date_time: Option<String>,
    #[serde(default = "default_duration")]
    pub duration: i64,
}

fn default_duration() -> i64 {
    120
}

#[derive(Debug, Serialize)]
pub struct TableAvailabilityResponse {
    pub available_tables: Vec<DiningTable>,
    /// 估算等待时间 (分钟)，仅在无可用桌台时给出
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_wait_time: Option<i32>,
}

/// GET /api/restaurants/{id}/seating/check-availability - 查询可用桌台
pub async fn check_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<TableAvailabilityResponse>> {
    validate_min_one(query.party_size, "party_size")?;
    let restaurant = require_restaurant(&state, &id).await?;
    let restaurant_id = restaurant
        .id
        .ok_or_else(|| AppError::internal("restaurant record missing id"))?;

    let repo = DiningTableRepository::new(state.db.clone());
    let available = repo
        .find_available(restaurant_id.clone(), query.party_size)
        .await?;

    // 无可用桌台时按当前占用率粗估等待时间
    let estimated_wait_time = if available.is_empty() {
        let total = repo.count_by_restaurant(restaurant_id.clone()).await?;
        let held = repo.count_held(restaurant_id).await?;
        (total > 0).then(|| ((held as f64 / total as f64) * 60.0) as i32)
    } else {
        None
    };

    Ok(Json(TableAvailabilityResponse {
        available_tables: available,
        estimated_wait_time,
    }))
}

#[derive(Debug, Serialize)]
pub struct OccupancyAnalyticsResponse {
    /// 当前占用率 (百分比)
    pub current_occupancy: f64,
    pub average_occupancy: f64,
    pub peak_hours: Vec<String>,
    pub total_tables: i64,
    pub occupied_tables: i64,
}

/// GET /api/restaurants/{id}/analytics/occupancy - 占用率分析
pub async fn occupancy_analytics(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OccupancyAnalyticsResponse>> {
    let restaurant = require_restaurant(&state, &id).await?;
    let restaurant_id = restaurant
        .id
        .ok_or_else(|| AppError::internal("restaurant record missing id"))?;

    let repo = DiningTableRepository::new(state.db.clone());
    let total_tables = repo.count_by_restaurant(restaurant_id.clone()).await?;
    let occupied_tables = repo.count_held(restaurant_id).await?;

    let current_occupancy = if total_tables > 0 {
        occupied_tables as f64 / total_tables as f64 * 100.0
    } else {
        0.0
    };

    Ok(Json(OccupancyAnalyticsResponse {
        current_occupancy,
        // Placeholder until historical occupancy is tracked
        average_occupancy: current_occupancy,
        peak_hours: vec!["19:00".to_string(), "20:00".to_string(), "21:00".to_string()],
        total_tables,
        occupied_tables,
    }))
}

async fn require_restaurant(state: &ServerState, id: &str) -> AppResult<Restaurant> {
    RestaurantRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))
}
