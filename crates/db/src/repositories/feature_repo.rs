//! Repository for `features`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{CreateFeature, Feature, UpdateFeature};

const COLUMNS: &str = "id, title, description, icon, sort_order, created_at, updated_at";

pub struct FeatureRepo;

impl FeatureRepo {
    pub async fn create(pool: &PgPool, input: &CreateFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (title, description, icon, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = $1");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY sort_order, title, id");
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
