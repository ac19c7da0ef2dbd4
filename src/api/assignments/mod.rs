//! Assignment API 模块
//!
//! 分配工作流的对外接口。前置条件不满足 → 400，id 不存在 → 404。

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/assignments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/table-assignments",
            get(handler::list_table_assignments).post(handler::create_table_assignment),
        )
        .route(
            "/table-assignments/{id}",
            get(handler::get_table_assignment)
                .put(handler::update_table_assignment)
                .delete(handler::delete_table_assignment),
        )
        .route(
            "/table-assignments/{id}/complete",
            put(handler::complete_table_assignment),
        )
        .route(
            "/reservation-assignments",
            get(handler::list_reservation_assignments)
                .post(handler::create_reservation_assignment),
        )
        .route(
            "/reservation-assignments/{id}",
            get(handler::get_reservation_assignment)
                .put(handler::update_reservation_assignment)
                .delete(handler::delete_reservation_assignment),
        )
        .route(
            "/reservation-assignments/{id}/complete",
            put(handler::complete_reservation_assignment),
        )
}
