//! Repository for `stats`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::stat::{CreateStat, Stat, UpdateStat};

const COLUMNS: &str = "id, title, number, suffix, sort_order, created_at, updated_at";

pub struct StatRepo;

impl StatRepo {
    pub async fn create(pool: &PgPool, input: &CreateStat) -> Result<Stat, sqlx::Error> {
        let query = format!(
            "INSERT INTO stats (title, number, suffix, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(&input.title)
            .bind(input.number)
            .bind(&input.suffix)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats WHERE id = $1");
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats ORDER BY sort_order, title, id");
        sqlx::query_as::<_, Stat>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStat,
    ) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!(
            "UPDATE stats SET
                title = COALESCE($2, title),
                number = COALESCE($3, number),
                suffix = COALESCE($4, suffix),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.number)
            .bind(&input.suffix)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
