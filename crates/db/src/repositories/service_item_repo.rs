//! Repository for `service_items`.
//!
//! Every read joins the owning category so rows carry `category_name`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateServiceItem, ServiceItem, UpdateServiceItem};

/// Column list over the `s` (service) / `c` (category) join.
const COLUMNS: &str = "\
    s.id, s.category_id, c.name AS category_name, s.title, s.description, \
    s.features, s.icon, s.sort_order, s.is_featured, s.created_at, s.updated_at";

const JOIN_CATEGORY: &str = "JOIN service_categories c ON c.id = s.category_id";

/// Provides CRUD operations for individual services.
pub struct ServiceItemRepo;

impl ServiceItemRepo {
    pub async fn create(pool: &PgPool, input: &CreateServiceItem) -> Result<ServiceItem, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                 INSERT INTO service_items
                     (category_id, title, description, features, icon, sort_order, is_featured)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING *
             )
             SELECT {COLUMNS} FROM s {JOIN_CATEGORY}"
        );
        sqlx::query_as::<_, ServiceItem>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ServiceItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_items s {JOIN_CATEGORY} WHERE s.id = $1");
        sqlx::query_as::<_, ServiceItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All services, grouped by category.
    pub async fn list(pool: &PgPool) -> Result<Vec<ServiceItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_items s {JOIN_CATEGORY}
             ORDER BY s.category_id, s.sort_order, s.title, s.id"
        );
        sqlx::query_as::<_, ServiceItem>(&query).fetch_all(pool).await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<ServiceItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_items s {JOIN_CATEGORY}
             WHERE s.is_featured
             ORDER BY s.sort_order, s.title, s.id"
        );
        sqlx::query_as::<_, ServiceItem>(&query).fetch_all(pool).await
    }

    /// Services belonging to one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ServiceItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_items s {JOIN_CATEGORY}
             WHERE s.category_id = $1
             ORDER BY s.sort_order, s.title, s.id"
        );
        sqlx::query_as::<_, ServiceItem>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceItem,
    ) -> Result<Option<ServiceItem>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                 UPDATE service_items SET
                     category_id = COALESCE($2, category_id),
                     title = COALESCE($3, title),
                     description = COALESCE($4, description),
                     features = COALESCE($5, features),
                     icon = COALESCE($6, icon),
                     sort_order = COALESCE($7, sort_order),
                     is_featured = COALESCE($8, is_featured)
                 WHERE id = $1
                 RETURNING *
             )
             SELECT {COLUMNS} FROM s {JOIN_CATEGORY}"
        );
        sqlx::query_as::<_, ServiceItem>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service. Portfolio projects that referenced it keep existing
    /// with no linked service.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
