//! Repository for `testimonials`.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, name, role, company, review, photo, rating, sort_order, \
    is_featured, created_at, updated_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (name, role, company, review, photo, rating, sort_order, is_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.review)
            .bind(Json(&input.photo))
            .bind(input.rating)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY sort_order, name, id");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_featured ORDER BY sort_order, name, id"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                company = COALESCE($4, company),
                review = COALESCE($5, review),
                photo = COALESCE($6, photo),
                rating = COALESCE($7, rating),
                sort_order = COALESCE($8, sort_order),
                is_featured = COALESCE($9, is_featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.review)
            .bind(input.photo.as_ref().map(Json))
            .bind(input.rating)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
