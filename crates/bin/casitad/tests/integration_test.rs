//! End-to-end smoke tests for the full casitad stack.
//!
//! Each test spins up the complete application (in-memory repositories,
//! real services, real axum router with path normalization) and exercises
//! the HTTP layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use casita_adapter_http_axum::router;
use casita_adapter_http_axum::state::AppState;
use casita_adapter_storage_memory::{
    MemoryDeviceRepository, MemoryHouseRepository, MemoryRoomRepository, MemoryUserRepository,
};
use casita_app::services::device_service::DeviceService;
use casita_app::services::house_service::HouseService;
use casita_app::services::room_service::RoomService;
use casita_app::services::user_service::UserService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

type App = NormalizePath<Router>;

/// Build a fully-wired service backed by fresh in-memory collections.
fn app() -> App {
    let user_repo = MemoryUserRepository::new();
    let house_repo = MemoryHouseRepository::new();
    let room_repo = MemoryRoomRepository::new();
    let device_repo = MemoryDeviceRepository::new();

    let state = AppState::new(
        UserService::new(user_repo),
        HouseService::new(house_repo.clone()),
        RoomService::new(room_repo.clone(), house_repo),
        DeviceService::new(device_repo, room_repo),
    );

    router::build(state)
}

async fn send(app: &App, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn john() -> Value {
    json!({"name": "John Doe", "email": "john@example.com", "password": "password123"})
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = send(&app(), "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_every_empty_collection_as_empty_array() {
    let app = app();
    for family in ["/users", "/houses", "/rooms", "/devices"] {
        let resp = send(&app, "GET", family, None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!([]));
    }
}

#[tokio::test]
async fn should_create_user_with_first_id() {
    let app = app();

    let resp = send(&app, "POST", "/users", Some(john())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 1,
            "name": "John Doe",
            "email": "john@example.com",
            "password": "password123",
        })
    );

    let resp = send(&app, "GET", "/users", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], 1);
}

#[tokio::test]
async fn should_reject_user_with_missing_fields() {
    let resp = send(
        &app(),
        "POST",
        "/users",
        Some(json!({"name": "John Doe", "email": "john@example.com"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn should_reject_user_with_invalid_email() {
    let resp = send(
        &app(),
        "POST",
        "/users",
        Some(json!({"name": "John Doe", "email": "invalid-email", "password": "password123"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Invalid email format"})
    );
}

#[tokio::test]
async fn should_reject_user_with_short_password() {
    let resp = send(
        &app(),
        "POST",
        "/users",
        Some(json!({"name": "John Doe", "email": "john@example.com", "password": "123"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Password must be at least 8 characters long"})
    );
}

#[tokio::test]
async fn should_reject_body_that_is_not_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"error": "Invalid JSON"}));
}

#[tokio::test]
async fn should_update_user_and_return_full_entity() {
    let app = app();
    send(&app, "POST", "/users", Some(john())).await;

    let resp = send(
        &app,
        "PUT",
        "/users/1",
        Some(json!({
            "name": "John Updated",
            "email": "john.updated@example.com",
            "password": "newpassword123",
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 1,
            "name": "John Updated",
            "email": "john.updated@example.com",
            "password": "newpassword123",
        })
    );
}

#[tokio::test]
async fn should_reject_update_with_invalid_email() {
    let app = app();
    send(&app, "POST", "/users", Some(john())).await;

    let resp = send(&app, "PUT", "/users/1", Some(json!({"email": "nope"}))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Invalid email format"})
    );
}

#[tokio::test]
async fn should_answer_not_found_when_updating_missing_user() {
    let resp = send(
        &app(),
        "PUT",
        "/users/1",
        Some(json!({"name": "John Updated"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "User not found"}));
}

#[tokio::test]
async fn should_delete_user_and_leave_empty_collection() {
    let app = app();
    send(&app, "POST", "/users", Some(john())).await;

    let resp = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let resp = send(&app, "GET", "/users", None).await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_answer_not_found_when_deleting_missing_user() {
    let resp = send(&app(), "DELETE", "/users/1", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "User not found"}));
}

#[tokio::test]
async fn should_reuse_id_after_deletion() {
    let app = app();
    send(&app, "POST", "/users", Some(john())).await;
    send(&app, "DELETE", "/users/1", None).await;

    let resp = send(&app, "POST", "/users", Some(john())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], 1);
}

#[tokio::test]
async fn should_get_user_by_id() {
    let app = app();
    send(&app, "POST", "/users", Some(john())).await;

    let resp = send(&app, "GET", "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "John Doe");

    let resp = send(&app, "GET", "/users/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "User not found"}));
}

// ---------------------------------------------------------------------------
// Houses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_house() {
    let resp = send(
        &app(),
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "My House", "address": "123 Main St"})
    );
}

#[tokio::test]
async fn should_reject_house_with_missing_fields() {
    let resp = send(&app(), "POST", "/houses", Some(json!({"name": "My House"}))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn should_update_only_provided_house_fields() {
    let app = app();
    send(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;

    let resp = send(&app, "PUT", "/houses/1", Some(json!({"name": "Updated House"}))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Updated House", "address": "123 Main St"})
    );
}

#[tokio::test]
async fn should_delete_house_without_cascading_to_rooms() {
    let app = app();
    send(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Living Room", "houseId": 1})),
    )
    .await;

    let resp = send(&app, "DELETE", "/houses/1", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The room stays, dangling reference and all.
    let resp = send(&app, "GET", "/rooms", None).await;
    assert_eq!(
        body_json(resp).await,
        json!([{"id": 1, "name": "Living Room", "houseId": 1}])
    );
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_room_when_house_exists() {
    let app = app();
    send(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;

    let resp = send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Living Room", "houseId": 1})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Living Room", "houseId": 1})
    );
}

#[tokio::test]
async fn should_reject_room_with_unknown_house() {
    let resp = send(
        &app(),
        "POST",
        "/rooms",
        Some(json!({"name": "Living Room", "houseId": 999})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "House not found"}));
}

#[tokio::test]
async fn should_reject_room_with_missing_fields() {
    let resp = send(&app(), "POST", "/rooms", Some(json!({"name": "Living Room"}))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_device_when_room_exists() {
    let app = app();
    send(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Living Room", "houseId": 1})),
    )
    .await;

    let resp = send(
        &app,
        "POST",
        "/devices",
        Some(json!({"name": "Smart Light", "type": "light", "roomId": 1})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Smart Light", "type": "light", "roomId": 1})
    );
}

#[tokio::test]
async fn should_reject_device_with_unknown_room() {
    let resp = send(
        &app(),
        "POST",
        "/devices",
        Some(json!({"name": "Smart Light", "type": "light", "roomId": 999})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Room not found"}));
}

#[tokio::test]
async fn should_update_device_fields() {
    let app = app();
    send(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "My House", "address": "123 Main St"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Living Room", "houseId": 1})),
    )
    .await;
    send(
        &app,
        "POST",
        "/devices",
        Some(json!({"name": "Smart Light", "type": "light", "roomId": 1})),
    )
    .await;

    let resp = send(
        &app,
        "PUT",
        "/devices/1",
        Some(json!({"name": "Updated Light", "type": "LED"})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Updated Light", "type": "LED", "roomId": 1})
    );
}

// ---------------------------------------------------------------------------
// Routing edges
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_answer_not_found_for_unknown_path() {
    let resp = send(&app(), "GET", "/nothing-here", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Not Found"}));
}

#[tokio::test]
async fn should_answer_not_found_for_unsupported_method() {
    let resp = send(&app(), "PATCH", "/users", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Not Found"}));
}

#[tokio::test]
async fn should_treat_trailing_slash_like_stripped_path() {
    let app = app();

    let resp = send(&app, "GET", "/users/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let resp = send(&app, "POST", "/users/", Some(john())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn should_answer_not_found_for_non_numeric_id_segment() {
    let resp = send(&app(), "DELETE", "/users/abc", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Not Found"}));
}
