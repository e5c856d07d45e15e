//! Repository for `team_members`.

use pixelbox_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::team::{CreateTeamMember, TeamMember, UpdateTeamMember};

const COLUMNS: &str = "id, name, role, bio, image, social_links, sort_order, is_featured, \
    created_at, updated_at";

pub struct TeamRepo;

impl TeamRepo {
    pub async fn create(pool: &PgPool, input: &CreateTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members
                (name, role, bio, image, social_links, sort_order, is_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(Json(&input.image))
            .bind(Json(&input.social_links))
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY sort_order, name, id");
        sqlx::query_as::<_, TeamMember>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members WHERE is_featured ORDER BY sort_order, name, id"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                image = COALESCE($5, image),
                social_links = COALESCE($6, social_links),
                sort_order = COALESCE($7, sort_order),
                is_featured = COALESCE($8, is_featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(input.image.as_ref().map(Json))
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.sort_order)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
