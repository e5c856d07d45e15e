mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_project(app: common::TestApp, body: Value) -> Value {
    let response = post_json(app, "/api/v1/portfolio", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_service(app: common::TestApp) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/service-categories",
        json!({"name": "Branding", "description": "Identity work"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        app,
        "/api/v1/services",
        json!({
            "category_id": category_id,
            "title": "Logo Design",
            "description": "Marks and wordmarks",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn slugs_are_unique_and_never_reissued(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({"title": "Brand Identity Design!!", "description": "A rebrand"});

    let first = create_project(app.clone(), body.clone()).await;
    assert_eq!(first["slug"], "brand-identity-design");

    let second = create_project(app.clone(), body.clone()).await;
    assert_eq!(second["slug"], "brand-identity-design-1");

    let response = delete(app.clone(), "/api/v1/portfolio/brand-identity-design").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let third = create_project(app.clone(), body).await;
    assert_eq!(third["slug"], "brand-identity-design-2");

    let response = get(app, "/api/v1/portfolio/brand-identity-design").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_slug_and_ignores_client_slug(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_project(
        app.clone(),
        json!({"title": "Summer Campaign", "description": "Launch film"}),
    )
    .await;

    let response = patch_json(
        app.clone(),
        "/api/v1/portfolio/summer-campaign",
        json!({"title": "Summer Campaign 2025", "slug": "hijacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Summer Campaign 2025");
    assert_eq!(json["slug"], "summer-campaign");

    let response = get(app, "/api/v1/portfolio/hijacked").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_slug_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/portfolio/nothing-here").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["message"],
        "PortfolioProject with slug 'nothing-here' not found"
    );
}

// ---------------------------------------------------------------------------
// Detail and media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_embeds_gallery_with_resolved_urls(pool: PgPool) {
    let app = common::build_test_app(pool);
    let project = create_project(
        app.clone(),
        json!({
            "title": "Product Launch",
            "description": "Hero video and stills",
            "media": {"kind": "uploaded", "path": "portfolio/launch.mp4"},
            "media_type": "video",
            "tags": ["video", "launch"],
        }),
    )
    .await;
    assert_eq!(project["gallery_images"], json!([]));
    assert_eq!(
        project["media_url"],
        format!("{}/media/portfolio/launch.mp4", common::TEST_BASE_URL)
    );

    for (caption, order) in [("Second", 2), ("First", 1)] {
        let response = post_json(
            app.clone(),
            "/api/v1/portfolio/product-launch/gallery",
            json!({
                "image": {"kind": "external", "url": "https://cdn.example.com/still.jpg"},
                "caption": caption,
                "order": order,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/portfolio/product-launch").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let gallery = json["gallery_images"].as_array().unwrap();
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0]["caption"], "First");
    assert_eq!(gallery[1]["caption"], "Second");
    assert_eq!(gallery[0]["image_url"], "https://cdn.example.com/still.jpg");
    assert_eq!(json["tags"], json!(["video", "launch"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_image_requires_media(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_project(
        app.clone(),
        json!({"title": "Print Series", "description": "Posters"}),
    )
    .await;

    let response = post_json(
        app,
        "/api/v1/portfolio/print-series/gallery",
        json!({"image": {"kind": "none"}, "caption": "Empty"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_image_of_other_project_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_project(app.clone(), json!({"title": "Alpha", "description": "A"})).await;
    create_project(app.clone(), json!({"title": "Beta", "description": "B"})).await;

    let response = post_json(
        app.clone(),
        "/api/v1/portfolio/alpha/gallery",
        json!({"image": {"kind": "external", "url": "/static/a.png"}}),
    )
    .await;
    let image_id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/portfolio/beta/gallery/{image_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &format!("/api/v1/portfolio/alpha/gallery/{image_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn by_service_lists_linked_projects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let service_id = create_service(app.clone()).await;

    create_project(
        app.clone(),
        json!({"title": "Linked", "description": "L", "service_id": service_id}),
    )
    .await;
    create_project(app.clone(), json!({"title": "Unlinked", "description": "U"})).await;

    let response = get(
        app.clone(),
        &format!("/api/v1/portfolio/by-service/{service_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["slug"], "linked");
    assert_eq!(projects[0]["service_name"], "Logo Design");

    let response = get(app, "/api/v1/portfolio/by-service/999999").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trailing_slash_reaches_the_same_route(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_project(app.clone(), json!({"title": "Zine", "description": "Z"})).await;

    let response = get(app.clone(), "/api/v1/portfolio/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/portfolio/zine/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Zine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_service_reference_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/portfolio",
        json!({"title": "Orphan", "description": "O", "service_id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_service_id_unlinks_project(pool: PgPool) {
    let app = common::build_test_app(pool);
    let service_id = create_service(app.clone()).await;
    create_project(
        app.clone(),
        json!({"title": "Linked", "description": "L", "service_id": service_id}),
    )
    .await;

    let response = patch_json(
        app.clone(),
        "/api/v1/portfolio/linked",
        json!({"client": "Acme"}),
    )
    .await;
    assert_eq!(body_json(response).await["service_id"], service_id);

    let response = patch_json(app, "/api/v1/portfolio/linked", json!({"service_id": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["service_id"].is_null());
    assert!(json["service_name"].is_null());
    assert_eq!(json["client"], "Acme");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn imported_slug_is_skipped(pool: PgPool) {
    sqlx::query("INSERT INTO portfolio_projects (title, slug, description) VALUES ('Reel', 'reel', 'imported')")
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let project = create_project(app, json!({"title": "Reel", "description": "New"})).await;
    assert_eq!(project["slug"], "reel-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn featured_title_stays_reachable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let project = create_project(
        app.clone(),
        json!({"title": "Featured", "description": "F", "is_featured": true}),
    )
    .await;
    assert_eq!(project["slug"], "featured-1");

    let response = get(app.clone(), "/api/v1/portfolio/featured-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Featured");

    let response = get(app, "/api/v1/portfolio/featured").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_array());
}
