//! Integration tests for the singleton content tables.

use assert_matches::assert_matches;
use pixelbox_core::media::MediaRef;
use pixelbox_db::models::about::{CreateAboutContent, UpdateAboutContent};
use pixelbox_db::models::navigation::CreateNavigation;
use pixelbox_db::repositories::{AboutRepo, NavigationRepo};
use sqlx::PgPool;

fn new_about(title: &str) -> CreateAboutContent {
    CreateAboutContent {
        title: title.to_string(),
        description: "We make pixels move.".to_string(),
        story: "Founded in a garage.".to_string(),
        vision: "Every brand animated.".to_string(),
        mission: String::new(),
        company_values: vec!["Craft".to_string(), "Candour".to_string()],
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_current_is_none_until_created(pool: PgPool) {
    assert!(AboutRepo::current(&pool).await.unwrap().is_none());

    let created = AboutRepo::create(&pool, &new_about("About Pixel Box"))
        .await
        .unwrap();
    let current = AboutRepo::current(&pool).await.unwrap().unwrap();
    assert_eq!(current.id, created.id);
    assert_eq!(current.company_values, vec!["Craft", "Candour"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_singleton_rejected(pool: PgPool) {
    AboutRepo::create(&pool, &new_about("First")).await.unwrap();

    let err = AboutRepo::create(&pool, &new_about("Second"))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_about_content_singleton"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let about = AboutRepo::create(&pool, &new_about("About")).await.unwrap();

    let updated = AboutRepo::update(
        &pool,
        about.id,
        &UpdateAboutContent {
            vision: Some("Every screen alive.".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.vision, "Every screen alive.");
    assert_eq!(updated.story, about.story);
    assert!(updated.updated_at >= about.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_navigation_round_trips_media(pool: PgPool) {
    let nav = NavigationRepo::create(
        &pool,
        &CreateNavigation {
            logo: MediaRef::Uploaded {
                path: "navigation/logo.svg".to_string(),
            },
            menu_links: vec![],
        },
    )
    .await
    .unwrap();

    let fetched = NavigationRepo::find_by_id(&pool, nav.id).await.unwrap().unwrap();
    assert_eq!(
        fetched.logo.0,
        MediaRef::Uploaded {
            path: "navigation/logo.svg".to_string()
        }
    );

    assert!(NavigationRepo::delete(&pool, nav.id).await.unwrap());
    assert!(NavigationRepo::current(&pool).await.unwrap().is_none());
}
