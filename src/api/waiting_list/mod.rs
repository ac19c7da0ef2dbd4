//! Waiting List API 模块

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/waiting-list", routes())
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
        .route("/{id}/seat", put(handler::seat))
        .route("/restaurants/{restaurant_id}/next", get(handler::next))
        .route("/restaurants/{restaurant_id}/add", post(handler::add_for_restaurant))
}
