use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower::ServiceExt; // for `app.oneshot()`

use shiftboard_backend::database::ShiftDatabase;
use shiftboard_backend::session::SessionStore;
use shiftboard_backend::{routes::build_router, AppState};

async fn test_app() -> (Router, Arc<AppState>) {
    // One connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let db = ShiftDatabase::new(pool);
    db.bootstrap().await.unwrap();
    let state = Arc::new(AppState {
        db,
        sessions: SessionStore::new(),
    });
    (build_router(state.clone()), state)
}

async fn post_json(app: &Router, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get_json(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth/login",
        json!({ "username": username, "password": password }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

fn shift_body(date: &str, name: &str, number: &str, phone: &str, timing: &str) -> Value {
    json!({
        "date": date,
        "staff_name": name,
        "staff_number": number,
        "mobile_phone": phone,
        "shift_timing": timing,
    })
}

#[tokio::test]
async fn empty_field_is_rejected_and_nothing_is_persisted() {
    let (app, state) = test_app().await;
    let token = login_token(&app, "RFT", "rft123").await;

    let body = shift_body("2024-01-01", "", "1", "9000000000", "8-5");
    let (status, response) = post_json(&app, "/api/shift", body, Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["message"], "Please fill in all the fields.");
    assert!(state.db.list_shifts().await.unwrap().is_empty());

    // What was typed stays in the draft so the form re-renders pre-filled.
    let (_, view) = get_json(&app, "/api/view", Some(&token)).await;
    assert_eq!(view["draft"]["staff_number"], "1");
    assert_eq!(view["draft"]["mobile_phone"], "9000000000");
}

#[tokio::test]
async fn valid_submission_stores_one_row_under_the_session_branch() {
    let (app, state) = test_app().await;
    let token = login_token(&app, "RFT", "rft123").await;

    let body = shift_body("2024-01-01", "A", "1", "9000000000", "8-5");
    let (status, response) = post_json(&app, "/api/shift", body, Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["message"], "Shift data submitted successfully!");

    let shifts = state.db.list_shifts().await.unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].branch, "RFT");
    assert_eq!(shifts[0].staff_name, "A");
    assert_eq!(shifts[0].shift_timing, "8-5");

    // Success clears the draft, both in the response and on re-render.
    assert_eq!(response["view"]["draft"]["staff_name"], "");
    let (_, view) = get_json(&app, "/api/view", Some(&token)).await;
    assert_eq!(view["draft"]["staff_number"], "");
}

#[tokio::test]
async fn identical_submissions_become_distinct_rows() {
    let (app, state) = test_app().await;
    let token = login_token(&app, "RFT", "rft123").await;

    let body = shift_body("2024-01-01", "A", "1", "9000000000", "8-5");
    for _ in 0..2 {
        let (status, _) = post_json(&app, "/api/shift", body.clone(), Some(&token)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let shifts = state.db.list_shifts().await.unwrap();
    assert_eq!(shifts.len(), 2);
    assert_ne!(shifts[0].id, shifts[1].id);
}

#[tokio::test]
async fn out_of_set_timing_literal_is_rejected() {
    let (app, state) = test_app().await;
    let token = login_token(&app, "RFT", "rft123").await;

    let body = shift_body("2024-01-01", "A", "1", "9000000000", "9-5");
    let (status, _) = post_json(&app, "/api/shift", body, Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(state.db.list_shifts().await.unwrap().is_empty());
}

#[tokio::test]
async fn board_orders_by_date_then_branch_and_renders_day_first() {
    let (app, _state) = test_app().await;

    let rft = login_token(&app, "RFT", "rft123").await;
    let dcn = login_token(&app, "DCN", "dcn123").await;
    post_json(
        &app,
        "/api/shift",
        shift_body("2024-01-02", "A", "1", "9000000000", "8-5"),
        Some(&rft),
    )
    .await;
    post_json(
        &app,
        "/api/shift",
        shift_body("2024-01-02", "B", "2", "9000000001", "6-2"),
        Some(&dcn),
    )
    .await;
    post_json(
        &app,
        "/api/shift",
        shift_body("2024-01-01", "C", "3", "9000000002", "10-6"),
        Some(&dcn),
    )
    .await;

    let admin = login_token(&app, "admin", "admin123").await;
    let (status, body) = get_json(&app, "/api/shift/all", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["shifts"].as_array().unwrap();
    let order: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r["date"].as_str().unwrap(), r["branch"].as_str().unwrap()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("01-01-2024", "DCN"),
            ("02-01-2024", "DCN"),
            ("02-01-2024", "RFT"),
        ]
    );

    // A reload with no intervening writes sees the same table.
    let (_, again) = get_json(&app, "/api/shift/all", Some(&admin)).await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn roles_gate_the_two_shift_actions() {
    let (app, _state) = test_app().await;
    let user = login_token(&app, "RFT", "rft123").await;
    let admin = login_token(&app, "admin", "admin123").await;

    let (status, _) = get_json(&app, "/api/shift/all", Some(&user)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let body = shift_body("2024-01-01", "A", "1", "9000000000", "8-5");
    let (status, _) = post_json(&app, "/api/shift", body, Some(&admin)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
