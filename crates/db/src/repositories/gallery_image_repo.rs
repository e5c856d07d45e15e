//! Repository for `portfolio_gallery_images`.
//!
//! Every operation is scoped to the owning project, so an image id that
//! belongs to another project behaves as if it did not exist.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::portfolio::{CreateGalleryImage, PortfolioGalleryImage, UpdateGalleryImage};

const COLUMNS: &str = "id, project_id, image, caption, sort_order, created_at, updated_at";

pub struct GalleryImageRepo;

impl GalleryImageRepo {
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateGalleryImage,
    ) -> Result<PortfolioGalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_gallery_images (project_id, image, caption, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioGalleryImage>(&query)
            .bind(project_id)
            .bind(Json(&input.image))
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<PortfolioGalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_gallery_images WHERE id = $1 AND project_id = $2"
        );
        sqlx::query_as::<_, PortfolioGalleryImage>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// A project's gallery in display order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PortfolioGalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_gallery_images
             WHERE project_id = $1
             ORDER BY sort_order, created_at, id"
        );
        sqlx::query_as::<_, PortfolioGalleryImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<PortfolioGalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_gallery_images SET
                image = COALESCE($3, image),
                caption = COALESCE($4, caption),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioGalleryImage>(&query)
            .bind(id)
            .bind(project_id)
            .bind(input.image.as_ref().map(Json))
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM portfolio_gallery_images WHERE id = $1 AND project_id = $2")
                .bind(id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
