//! Restaurant API 模块

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/sections",
            get(handler::list_sections).post(handler::create_section),
        )
        .route(
            "/{id}/tables",
            get(handler::list_tables).post(handler::create_table),
        )
        .route("/{id}/seating/assign-table", post(handler::assign_table))
        .route(
            "/{id}/seating/check-availability",
            get(handler::check_availability),
        )
        .route("/{id}/analytics/occupancy", get(handler::occupancy_analytics))
}
