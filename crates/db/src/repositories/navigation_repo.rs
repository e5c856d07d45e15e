//! Repository for the singleton `navigation` table.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::navigation::{CreateNavigation, Navigation, UpdateNavigation};

const COLUMNS: &str = "id, logo, menu_links, created_at, updated_at";

/// Provides CRUD operations for the site navigation.
pub struct NavigationRepo;

impl NavigationRepo {
    /// Insert the navigation record. Fails with a `uq_navigation_singleton`
    /// violation if one already exists.
    pub async fn create(pool: &PgPool, input: &CreateNavigation) -> Result<Navigation, sqlx::Error> {
        let query = format!(
            "INSERT INTO navigation (logo, menu_links) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Navigation>(&query)
            .bind(Json(&input.logo))
            .bind(Json(&input.menu_links))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Navigation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigation WHERE id = $1");
        sqlx::query_as::<_, Navigation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The navigation record, if one has been configured.
    pub async fn current(pool: &PgPool) -> Result<Option<Navigation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigation ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Navigation>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Navigation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigation ORDER BY id");
        sqlx::query_as::<_, Navigation>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNavigation,
    ) -> Result<Option<Navigation>, sqlx::Error> {
        let query = format!(
            "UPDATE navigation SET
                logo = COALESCE($2, logo),
                menu_links = COALESCE($3, menu_links)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Navigation>(&query)
            .bind(id)
            .bind(input.logo.as_ref().map(Json))
            .bind(input.menu_links.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM navigation WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
