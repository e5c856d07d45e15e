//! Repository for `service_categories`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{
    CreateServiceCategory, ServiceCategory, ServiceCategorySummary, UpdateServiceCategory,
};

const COLUMNS: &str = "id, name, description, icon, sort_order, created_at, updated_at";

/// Provides CRUD operations for service categories.
pub struct ServiceCategoryRepo;

impl ServiceCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceCategory,
    ) -> Result<ServiceCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_categories (name, description, icon, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_categories WHERE id = $1");
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Categories with the number of services in each, ordered for display.
    pub async fn list_summaries(
        pool: &PgPool,
    ) -> Result<Vec<ServiceCategorySummary>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategorySummary>(
            "SELECT c.id, c.name, c.description, c.icon, c.sort_order,
                    (SELECT COUNT(*) FROM service_items s WHERE s.category_id = c.id) AS services_count
             FROM service_categories c
             ORDER BY c.sort_order, c.name, c.id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceCategory,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE service_categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category together with all of its services.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
