mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn submit(app: common::TestApp, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/contact-form",
        json!({
            "name": name,
            "email": "visitor@example.com",
            "subject": "New project",
            "message": "We need a logo.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Thank you for your message! We will get back to you soon."
    );
    assert_eq!(json["data"]["is_read"], false);
    json["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_is_acknowledged_and_unread(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = submit(app.clone(), "Jordan Lee").await;

    let response = get(app, &format!("/api/v1/contact-form/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Jordan Lee");
    assert_eq!(json["company"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_removes_from_unread(pool: PgPool) {
    let app = common::build_test_app(pool);
    let first = submit(app.clone(), "First Visitor").await;
    submit(app.clone(), "Second Visitor").await;

    let response = patch(app.clone(), &format!("/api/v1/contact-form/{first}/mark_read")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_read"], true);

    let response = get(app.clone(), "/api/v1/contact-form/unread").await;
    let json = body_json(response).await;
    let unread = json.as_array().unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["name"], "Second Visitor");

    let response = get(app, "/api/v1/contact-form").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_unknown_submission_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch(app, "/api/v1/contact-form/999999/mark_read").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "ContactFormSubmission with id 999999 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contact-form",
        json!({"name": "Sam", "email": "not-an-email", "message": "Hi"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["email"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_submission_is_gone(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = submit(app.clone(), "Short Lived").await;

    let response = delete(app.clone(), &format!("/api/v1/contact-form/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/contact-form/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
