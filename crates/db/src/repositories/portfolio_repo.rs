//! Repository for `portfolio_projects` and `portfolio_slug_reservations`.
//!
//! Slug assignment runs inside a transaction that holds a self-conflicting
//! lock on the reservations table, so two concurrent creates can never pick
//! the same slug. Every assigned slug is recorded in the reservations table
//! and stays there after its project is deleted.

use std::collections::HashSet;

use pixelbox_core::slug;
use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::portfolio::{
    AssignedSlug, CreatePortfolioProject, PortfolioProject, UpdatePortfolioProject,
};

/// Column list over the `p` (project) / `s` (service item) join.
const COLUMNS: &str = "\
    p.id, p.title, p.slug, p.description, p.detailed_description, \
    p.challenge, p.solution, p.results, p.media, p.media_type, p.tags, \
    p.service_id, s.title AS service_name, p.client, p.project_url, \
    p.sort_order, p.is_featured, p.created_at, p.updated_at";

const JOIN_SERVICE: &str = "LEFT JOIN service_items s ON s.id = p.service_id";

const ORDER: &str = "ORDER BY p.sort_order, p.title, p.id";

/// Provides CRUD operations and slug assignment for portfolio projects.
pub struct PortfolioRepo;

impl PortfolioRepo {
    // -----------------------------------------------------------------------
    // Slug assignment
    // -----------------------------------------------------------------------

    async fn lock_reservations(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("LOCK TABLE portfolio_slug_reservations IN SHARE ROW EXCLUSIVE MODE")
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Pick the slug for a project. A candidate is taken when any other
    /// project carries it or it is reserved, live or retired, by anything but
    /// `exclude`. Must run while the reservations lock is held.
    async fn resolve_slug(
        conn: &mut PgConnection,
        existing: Option<&str>,
        title: &str,
        exclude: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        if let Some(slug) = existing.filter(|s| !s.is_empty()) {
            return Ok(slug.to_string());
        }

        let base = slug::base_slug(title);

        // Base slugs only contain [a-z0-9-], so the LIKE pattern needs no escaping.
        let taken: HashSet<String> = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM portfolio_slug_reservations \
             WHERE (slug = $1 OR slug LIKE $1 || '-%') \
               AND (project_id IS NULL OR project_id IS DISTINCT FROM $2) \
             UNION \
             SELECT slug FROM portfolio_projects \
             WHERE (slug = $1 OR slug LIKE $1 || '-%') \
               AND id IS DISTINCT FROM $2",
        )
        .bind(&base)
        .bind(exclude)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .collect();

        Ok(slug::assign_slug(existing, title, |candidate| {
            taken.contains(candidate)
        }))
    }

    async fn reserve(
        conn: &mut PgConnection,
        slug: &str,
        project_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO portfolio_slug_reservations (slug, project_id) VALUES ($1, $2)")
            .bind(slug)
            .bind(project_id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Give every project without a slug its slug, oldest first.
    ///
    /// Slugs already present on rows (for example from a bulk import) are
    /// reserved first so they are never handed out twice. Projects that
    /// already carry a slug are left untouched, which makes the operation
    /// safe to rerun.
    pub async fn backfill_slugs(pool: &PgPool) -> Result<Vec<AssignedSlug>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::lock_reservations(&mut tx).await?;

        sqlx::query(
            "INSERT INTO portfolio_slug_reservations (slug, project_id) \
             SELECT slug, id FROM portfolio_projects WHERE slug IS NOT NULL \
             ON CONFLICT (slug) DO NOTHING",
        )
        .execute(&mut *tx)
        .await?;

        let pending: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT id, title FROM portfolio_projects WHERE slug IS NULL ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        let mut assigned = Vec::with_capacity(pending.len());
        for (project_id, title) in pending {
            let slug = Self::resolve_slug(&mut tx, None, &title, Some(project_id)).await?;

            sqlx::query("UPDATE portfolio_projects SET slug = $2 WHERE id = $1 AND slug IS NULL")
                .bind(project_id)
                .bind(&slug)
                .execute(&mut *tx)
                .await?;
            Self::reserve(&mut tx, &slug, project_id).await?;

            tracing::debug!(project_id, slug = %slug, "Backfilled portfolio slug");
            assigned.push(AssignedSlug {
                project_id,
                title,
                slug,
            });
        }

        tx.commit().await?;
        Ok(assigned)
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new project with a freshly assigned slug.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioProject,
    ) -> Result<PortfolioProject, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::lock_reservations(&mut tx).await?;

        let slug = Self::resolve_slug(&mut tx, None, &input.title, None).await?;

        let query = format!(
            "WITH p AS ( \
                 INSERT INTO portfolio_projects \
                     (title, slug, description, detailed_description, challenge, solution, \
                      results, media, media_type, tags, service_id, client, project_url, \
                      sort_order, is_featured) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
                 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM p {JOIN_SERVICE}"
        );
        let project = sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.detailed_description)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(&input.results)
            .bind(Json(&input.media))
            .bind(&input.media_type)
            .bind(&input.tags)
            .bind(input.service_id)
            .bind(&input.client)
            .bind(&input.project_url)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_one(&mut *tx)
            .await?;

        Self::reserve(&mut tx, &slug, project.id).await?;
        tx.commit().await?;

        Ok(project)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolio_projects p {JOIN_SERVICE} WHERE p.id = $1");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolio_projects p {JOIN_SERVICE} WHERE p.slug = $1");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_projects p {JOIN_SERVICE} {ORDER}");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<PortfolioProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_projects p {JOIN_SERVICE} \
             WHERE p.is_featured {ORDER}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Projects linked to one service item.
    pub async fn list_by_service(
        pool: &PgPool,
        service_id: DbId,
    ) -> Result<Vec<PortfolioProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_projects p {JOIN_SERVICE} \
             WHERE p.service_id = $1 {ORDER}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(service_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project addressed by slug. Only non-`None` fields are applied;
    /// `service_id: Some(None)` clears the link. The slug itself is never
    /// modified.
    ///
    /// Returns `None` if no project has that slug.
    pub async fn update_by_slug(
        pool: &PgPool,
        slug: &str,
        input: &UpdatePortfolioProject,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!(
            "WITH p AS ( \
                 UPDATE portfolio_projects SET \
                     title = COALESCE($2, title), \
                     description = COALESCE($3, description), \
                     detailed_description = COALESCE($4, detailed_description), \
                     challenge = COALESCE($5, challenge), \
                     solution = COALESCE($6, solution), \
                     results = COALESCE($7, results), \
                     media = COALESCE($8, media), \
                     media_type = COALESCE($9, media_type), \
                     tags = COALESCE($10, tags), \
                     service_id = CASE WHEN $11 THEN $16 ELSE service_id END, \
                     client = COALESCE($12, client), \
                     project_url = COALESCE($13, project_url), \
                     sort_order = COALESCE($14, sort_order), \
                     is_featured = COALESCE($15, is_featured) \
                 WHERE slug = $1 \
                 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM p {JOIN_SERVICE}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.detailed_description)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(&input.results)
            .bind(input.media.as_ref().map(Json))
            .bind(&input.media_type)
            .bind(&input.tags)
            .bind(input.service_id.is_some())
            .bind(&input.client)
            .bind(&input.project_url)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .bind(input.service_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by slug. Its gallery images go with it; its slug stays
    /// reserved. Returns `true` if a row was removed.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_projects WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
