//! HTTP contract tests against the assembled router.
//!
//! Drives the axum app with `tower::ServiceExt::oneshot` over the in-memory
//! database: status codes, error envelope, and the assignment workflow's
//! HTTP mapping (InvalidState → 400, missing id → 404).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use reef_host::core::{ServerState, build_app};

async fn test_app() -> Router {
    let state = ServerState::for_tests().await.unwrap();
    build_app().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn seed_seating(app: &Router) -> (String, String, String) {
    let (status, restaurant) = send(
        app,
        "POST",
        "/api/restaurants",
        Some(json!({
            "name": "Reef",
            "address": "1 Harbour St",
            "phone": "555-0100",
            "opening_time": "11:00:00",
            "closing_time": "23:00:00",
            "max_capacity": 60
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let restaurant_id = restaurant["id"].as_str().unwrap().to_string();

    let (status, table) = send(
        app,
        "POST",
        &format!("/api/restaurants/{restaurant_id}/tables"),
        Some(json!({
            "table_number": "T1",
            "capacity": 4,
            "location": "window"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(table["status"], "AVAILABLE");

    let (status, party) = send(
        app,
        "POST",
        "/api/parties",
        Some(json!({
            "name": "Smith Party",
            "size": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(party["status"], "WAITING");

    let (status, server) = send(
        app,
        "POST",
        "/api/servers",
        Some(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "employee_id": "EMP-1",
            "restaurant": restaurant_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (
        table["id"].as_str().unwrap().to_string(),
        party["id"].as_str().unwrap().to_string(),
        server["id"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn assignment_workflow_http_mapping() {
    let app = test_app().await;
    let (table_id, party_id, server_id) = seed_seating(&app).await;

    // Create the assignment
    let (status, assignment) = send(
        &app,
        "POST",
        "/api/assignments/table-assignments",
        Some(json!({
            "table_id": table_id,
            "party_id": party_id,
            "server_id": server_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["status"], "ACTIVE");
    let assignment_id = assignment["id"].as_str().unwrap().to_string();

    // Linked entities flipped
    let (_, table) = send(&app, "GET", &format!("/api/tables/{table_id}"), None).await;
    assert_eq!(table["status"], "OCCUPIED");
    let (_, party) = send(&app, "GET", &format!("/api/parties/{party_id}"), None).await;
    assert_eq!(party["status"], "SEATED");

    // Second identical create → 400 with the InvalidState envelope
    let (status, error) = send(
        &app,
        "POST",
        "/api/assignments/table-assignments",
        Some(json!({
            "table_id": table_id,
            "party_id": party_id,
            "server_id": server_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "E0005");
    assert_eq!(error["message"], "Table is not available for assignment");

    // Complete → table CLEANING, party FINISHED
    let (status, completed) = send(
        &app,
        "PUT",
        &format!("/api/assignments/table-assignments/{assignment_id}/complete"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "COMPLETED");
    assert!(completed["completed_at"].is_i64());

    let (_, table) = send(&app, "GET", &format!("/api/tables/{table_id}"), None).await;
    assert_eq!(table["status"], "CLEANING");
    let (_, party) = send(&app, "GET", &format!("/api/parties/{party_id}"), None).await;
    assert_eq!(party["status"], "FINISHED");

    // Filtering: no ACTIVE assignments remain
    let (status, list) = send(
        &app,
        "GET",
        "/api/assignments/table-assignments?status=ACTIVE",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);

    // Delete → 204 and the table is AVAILABLE again
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/assignments/table-assignments/{assignment_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, table) = send(&app, "GET", &format!("/api/tables/{table_id}"), None).await;
    assert_eq!(table["status"], "AVAILABLE");

    // Missing id → 404
    let (status, error) = send(
        &app,
        "GET",
        &format!("/api/assignments/table-assignments/{assignment_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "E0003");
}

#[tokio::test]
async fn validation_and_conflict_mapping() {
    let app = test_app().await;
    let (_, _, _) = seed_seating(&app).await;

    // Zero-size party → 400 validation envelope
    let (status, error) = send(
        &app,
        "POST",
        "/api/parties",
        Some(json!({"name": "Empty", "size": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "E0002");

    // Duplicate employee_id → 409
    let (_, restaurants) = send(&app, "GET", "/api/restaurants", None).await;
    let restaurant_id = restaurants["items"][0]["id"].as_str().unwrap();
    let (status, error) = send(
        &app,
        "POST",
        "/api/servers",
        Some(json!({
            "first_name": "Bo",
            "last_name": "Chan",
            "employee_id": "EMP-1",
            "restaurant": restaurant_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "E0004");
}

#[tokio::test]
async fn update_patch_preserves_party_status() {
    let app = test_app().await;
    let (table_id, party_id, server_id) = seed_seating(&app).await;

    let (_, assignment) = send(
        &app,
        "POST",
        "/api/assignments/table-assignments",
        Some(json!({
            "table_id": table_id,
            "party_id": party_id,
            "server_id": server_id,
            "notes": "birthday"
        })),
    )
    .await;
    let assignment_id = assignment["id"].as_str().unwrap().to_string();

    // PATCH-style status update: table flips to CLEANING, party stays SEATED
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/assignments/table-assignments/{assignment_id}"),
        Some(json!({"status": "COMPLETED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "COMPLETED");
    assert_eq!(updated["notes"], "birthday");
    assert!(updated["completed_at"].is_null());

    let (_, table) = send(&app, "GET", &format!("/api/tables/{table_id}"), None).await;
    assert_eq!(table["status"], "CLEANING");
    let (_, party) = send(&app, "GET", &format!("/api/parties/{party_id}"), None).await;
    assert_eq!(party["status"], "SEATED");

    // Explicit null clears notes
    let (_, cleared) = send(
        &app,
        "PUT",
        &format!("/api/assignments/table-assignments/{assignment_id}"),
        Some(json!({"notes": null})),
    )
    .await;
    assert!(cleared["notes"].is_null());
}
