//! Integration tests for portfolio slug assignment and related cascades.
//!
//! Exercises against a real database:
//! - Sequential suffixes for repeated titles
//! - Retired slugs are never reissued
//! - Title edits keep the slug
//! - Backfill of rows inserted without a slug, and its idempotency
//! - Gallery cascade and service link nulling on delete or update
//! - Slugs on unreserved rows and route names are never assigned

use pixelbox_core::media::MediaRef;
use pixelbox_db::models::portfolio::{
    CreateGalleryImage, CreatePortfolioProject, UpdatePortfolioProject,
};
use pixelbox_db::models::service::{CreateServiceCategory, CreateServiceItem, ServiceItem};
use pixelbox_db::repositories::{
    GalleryImageRepo, PortfolioRepo, ServiceCategoryRepo, ServiceItemRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreatePortfolioProject {
    CreatePortfolioProject {
        title: title.to_string(),
        description: "A project".to_string(),
        detailed_description: String::new(),
        challenge: String::new(),
        solution: String::new(),
        results: String::new(),
        media: MediaRef::None,
        media_type: "image".to_string(),
        tags: vec![],
        service_id: None,
        client: String::new(),
        project_url: String::new(),
        sort_order: 0,
        is_featured: false,
    }
}

async fn insert_without_slug(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO portfolio_projects (title, description) VALUES ($1, 'imported') RETURNING id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: repeated titles get numbered suffixes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_titles_get_suffixes(pool: PgPool) {
    let first = PortfolioRepo::create(&pool, &new_project("Immersive Brand Experience"))
        .await
        .unwrap();
    let second = PortfolioRepo::create(&pool, &new_project("Immersive Brand Experience"))
        .await
        .unwrap();
    let third = PortfolioRepo::create(&pool, &new_project("Immersive Brand Experience"))
        .await
        .unwrap();

    assert_eq!(first.slug.as_deref(), Some("immersive-brand-experience"));
    assert_eq!(second.slug.as_deref(), Some("immersive-brand-experience-1"));
    assert_eq!(third.slug.as_deref(), Some("immersive-brand-experience-2"));
}

// ---------------------------------------------------------------------------
// Test: deleting a project does not free its slug
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_slug_is_not_reissued(pool: PgPool) {
    PortfolioRepo::create(&pool, &new_project("Brand Reel")).await.unwrap();
    PortfolioRepo::create(&pool, &new_project("Brand Reel")).await.unwrap();

    assert!(PortfolioRepo::delete_by_slug(&pool, "brand-reel").await.unwrap());

    let third = PortfolioRepo::create(&pool, &new_project("Brand Reel"))
        .await
        .unwrap();
    assert_eq!(third.slug.as_deref(), Some("brand-reel-2"));
    assert!(PortfolioRepo::find_by_slug(&pool, "brand-reel").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: renaming keeps the slug
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_edit_keeps_slug(pool: PgPool) {
    let project = PortfolioRepo::create(&pool, &new_project("3D Product Animation"))
        .await
        .unwrap();
    assert_eq!(project.slug.as_deref(), Some("3d-product-animation"));

    let update = UpdatePortfolioProject {
        title: Some("Product Animation in 3D".to_string()),
        ..Default::default()
    };
    let updated = PortfolioRepo::update_by_slug(&pool, "3d-product-animation", &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "Product Animation in 3D");
    assert_eq!(updated.slug.as_deref(), Some("3d-product-animation"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_symbol_only_title_falls_back(pool: PgPool) {
    let project = PortfolioRepo::create(&pool, &new_project("!!!")).await.unwrap();
    assert_eq!(project.slug.as_deref(), Some("project"));
}

// ---------------------------------------------------------------------------
// Test: backfill
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_backfill_assigns_missing_slugs(pool: PgPool) {
    PortfolioRepo::create(&pool, &new_project("Motion Graphics"))
        .await
        .unwrap();
    let a = insert_without_slug(&pool, "Motion Graphics").await;
    let b = insert_without_slug(&pool, "Logo Sting").await;

    let assigned = PortfolioRepo::backfill_slugs(&pool).await.unwrap();
    assert_eq!(assigned.len(), 2);
    assert_eq!(assigned[0].project_id, a);
    assert_eq!(assigned[0].slug, "motion-graphics-1");
    assert_eq!(assigned[1].project_id, b);
    assert_eq!(assigned[1].slug, "logo-sting");

    // A second run finds nothing to do.
    let rerun = PortfolioRepo::backfill_slugs(&pool).await.unwrap();
    assert!(rerun.is_empty());

    // New creates honour slugs handed out by the backfill.
    let next = PortfolioRepo::create(&pool, &new_project("Logo Sting"))
        .await
        .unwrap();
    assert_eq!(next.slug.as_deref(), Some("logo-sting-1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_backfill_reserves_imported_slugs(pool: PgPool) {
    sqlx::query(
        "INSERT INTO portfolio_projects (title, slug, description) \
         VALUES ('Showreel', 'showreel', 'imported with slug')",
    )
    .execute(&pool)
    .await
    .unwrap();
    insert_without_slug(&pool, "Showreel").await;

    let assigned = PortfolioRepo::backfill_slugs(&pool).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].slug, "showreel-1");
}

// ---------------------------------------------------------------------------
// Test: cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_removes_gallery(pool: PgPool) {
    let project = PortfolioRepo::create(&pool, &new_project("Gallery Owner"))
        .await
        .unwrap();
    let image = GalleryImageRepo::create(
        &pool,
        project.id,
        &CreateGalleryImage {
            image: MediaRef::External {
                url: "https://cdn.example.com/still.jpg".to_string(),
            },
            caption: "Still".to_string(),
            sort_order: 0,
        },
    )
    .await
    .unwrap();
    assert_eq!(image.project_id, project.id);

    PortfolioRepo::delete_by_slug(&pool, "gallery-owner")
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_gallery_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

async fn create_service(pool: &PgPool) -> ServiceItem {
    let category = ServiceCategoryRepo::create(
        pool,
        &CreateServiceCategory {
            name: "Animation".to_string(),
            description: "Moving pictures".to_string(),
            icon: String::new(),
            sort_order: 0,
        },
    )
    .await
    .unwrap();
    ServiceItemRepo::create(
        pool,
        &CreateServiceItem {
            category_id: category.id,
            title: "3D Animation".to_string(),
            description: "Full CG".to_string(),
            features: vec![],
            icon: String::new(),
            sort_order: 0,
            is_featured: false,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_service_unlinks_projects(pool: PgPool) {
    let service = create_service(&pool).await;
    assert_eq!(service.category_name, "Animation");

    let mut input = new_project("Linked");
    input.service_id = Some(service.id);
    let project = PortfolioRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.service_name.as_deref(), Some("3D Animation"));

    assert!(ServiceItemRepo::delete(&pool, service.id).await.unwrap());

    let project = PortfolioRepo::find_by_slug(&pool, "linked")
        .await
        .unwrap()
        .expect("project survives service deletion");
    assert_eq!(project.service_id, None);
    assert_eq!(project.service_name, None);
}

// ---------------------------------------------------------------------------
// Test: service link can be cleared or kept on update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_clears_service_only_when_asked(pool: PgPool) {
    let service = create_service(&pool).await;
    let mut input = new_project("Linked");
    input.service_id = Some(service.id);
    PortfolioRepo::create(&pool, &input).await.unwrap();

    let untouched = UpdatePortfolioProject {
        client: Some("Acme".to_string()),
        ..Default::default()
    };
    let project = PortfolioRepo::update_by_slug(&pool, "linked", &untouched)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.service_id, Some(service.id));

    let unlink = UpdatePortfolioProject {
        service_id: Some(None),
        ..Default::default()
    };
    let project = PortfolioRepo::update_by_slug(&pool, "linked", &unlink)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.service_id, None);
    assert_eq!(project.service_name, None);
    assert_eq!(project.client, "Acme");
}

// ---------------------------------------------------------------------------
// Test: slugs on rows that were never reserved still count as taken
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreserved_row_slug_is_taken(pool: PgPool) {
    sqlx::query("INSERT INTO portfolio_projects (title, slug, description) VALUES ('Reel', 'reel', 'imported')")
        .execute(&pool)
        .await
        .unwrap();

    let project = PortfolioRepo::create(&pool, &new_project("Reel")).await.unwrap();
    assert_eq!(project.slug.as_deref(), Some("reel-1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_route_segment_title_gets_suffix(pool: PgPool) {
    let project = PortfolioRepo::create(&pool, &new_project("Featured")).await.unwrap();
    assert_eq!(project.slug.as_deref(), Some("featured-1"));
}
