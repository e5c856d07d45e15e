//! Repository for the singleton `about_content` table.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::about::{AboutContent, CreateAboutContent, UpdateAboutContent};

const COLUMNS: &str = "id, title, description, story, vision, mission, company_values, \
    created_at, updated_at";

/// Provides CRUD operations for the about section.
pub struct AboutRepo;

impl AboutRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_content (title, description, story, vision, mission, company_values)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.story)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.company_values)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content WHERE id = $1");
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The about content, if it has been written yet.
    pub async fn current(pool: &PgPool) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content ORDER BY id LIMIT 1");
        sqlx::query_as::<_, AboutContent>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content ORDER BY id");
        sqlx::query_as::<_, AboutContent>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAboutContent,
    ) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!(
            "UPDATE about_content SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                story = COALESCE($4, story),
                vision = COALESCE($5, vision),
                mission = COALESCE($6, mission),
                company_values = COALESCE($7, company_values)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.story)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.company_values)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM about_content WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
