//! Repository for `faqs`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

const COLUMNS: &str = "id, question, answer, sort_order, is_featured, created_at, updated_at";

pub struct FaqRepo;

impl FaqRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, sort_order, is_featured)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY sort_order, question, id");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs WHERE is_featured ORDER BY sort_order, question, id"
        );
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                sort_order = COALESCE($4, sort_order),
                is_featured = COALESCE($5, is_featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
