mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_menu_href_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/navigation",
        json!({"menu_links": [{"name": "Evil", "href": "javascript:alert(1)"}]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["menu_links"][0]["code"], "menu_link");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_path_escaping_media_root_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/team",
        json!({
            "name": "Maya Patel",
            "role": "Creative Director",
            "bio": "Leads the studio.",
            "image": {"kind": "uploaded", "path": "../secrets.txt"},
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["image"][0]["code"], "media_path");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_media_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/portfolio",
        json!({"title": "Odd", "description": "O", "media_type": "hologram"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["fields"]["media_type"][0]["code"],
        "media_type"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_out_of_range_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/testimonials",
        json!({"name": "Ana", "role": "CMO", "review": "Fine.", "rating": 6}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"]["rating"][0]["code"], "range");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_with_unknown_category_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/services",
        json!({"category_id": 31337, "title": "Ghost", "description": "G"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_lists_count_and_services(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/service-categories",
        json!({"name": "Motion", "description": "Animation and video"}),
    )
    .await;
    let category_id = body_json(response).await["id"].as_i64().unwrap();

    for title in ["Explainers", "Title Sequences"] {
        let response = post_json(
            app.clone(),
            "/api/v1/services",
            json!({"category_id": category_id, "title": title, "description": "D"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/service-categories").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["services_count"], 2);

    let response = get(
        app.clone(),
        &format!("/api/v1/service-categories/{category_id}/services"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["category_name"], "Motion");

    let response = get(app, "/api/v1/service-categories/999999/services").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_id_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/stats/424242", json!({"number": 100})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Body shape
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/faqs", json!({"answer": "Yes."})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["question"][0]["code"], "required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_field_type_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/stats",
        json!({"title": "Projects", "number": "lots"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["number"][0]["code"], "invalid_type");
}
