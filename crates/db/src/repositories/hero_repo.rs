//! Repository for the singleton `hero` table.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::hero::{CreateHero, Hero, UpdateHero};

const COLUMNS: &str = "id, video, video_portrait, image, image_portrait, logo, \
    title, subtitle, cta_text, cta_link, created_at, updated_at";

/// Provides CRUD operations for the hero banner.
pub struct HeroRepo;

impl HeroRepo {
    pub async fn create(pool: &PgPool, input: &CreateHero) -> Result<Hero, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero
                (video, video_portrait, image, image_portrait, logo,
                 title, subtitle, cta_text, cta_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(Json(&input.video))
            .bind(Json(&input.video_portrait))
            .bind(Json(&input.image))
            .bind(Json(&input.image_portrait))
            .bind(Json(&input.logo))
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero WHERE id = $1");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn current(pool: &PgPool) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Hero>(&query).fetch_optional(pool).await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero ORDER BY id");
        sqlx::query_as::<_, Hero>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHero,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!(
            "UPDATE hero SET
                video = COALESCE($2, video),
                video_portrait = COALESCE($3, video_portrait),
                image = COALESCE($4, image),
                image_portrait = COALESCE($5, image_portrait),
                logo = COALESCE($6, logo),
                title = COALESCE($7, title),
                subtitle = COALESCE($8, subtitle),
                cta_text = COALESCE($9, cta_text),
                cta_link = COALESCE($10, cta_link)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .bind(input.video.as_ref().map(Json))
            .bind(input.video_portrait.as_ref().map(Json))
            .bind(input.image.as_ref().map(Json))
            .bind(input.image_portrait.as_ref().map(Json))
            .bind(input.logo.as_ref().map(Json))
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
