//! Repository for the singleton `contact_info` table.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::contact::{ContactInfo, CreateContactInfo, UpdateContactInfo};

const COLUMNS: &str =
    "id, phone, email, address, social_links, business_hours, created_at, updated_at";

/// Provides CRUD operations for the studio's contact details.
pub struct ContactInfoRepo;

impl ContactInfoRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactInfo,
    ) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info (phone, email, address, social_links, business_hours)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(Json(&input.social_links))
            .bind(Json(&input.business_hours))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info WHERE id = $1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn current(pool: &PgPool) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info ORDER BY id");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactInfo,
    ) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_info SET
                phone = COALESCE($2, phone),
                email = COALESCE($3, email),
                address = COALESCE($4, address),
                social_links = COALESCE($5, social_links),
                business_hours = COALESCE($6, business_hours)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.business_hours.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
