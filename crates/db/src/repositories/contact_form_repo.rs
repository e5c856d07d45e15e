//! Repository for `contact_form_submissions`.

use pixelbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{
    ContactFormSubmission, CreateContactFormSubmission, UpdateContactFormSubmission,
};

const COLUMNS: &str =
    "id, name, email, phone, company, subject, message, is_read, submitted_at, updated_at";

/// Provides storage and triage operations for contact-form messages.
pub struct ContactFormRepo;

impl ContactFormRepo {
    /// Store a visitor's message. New submissions always start unread.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactFormSubmission,
    ) -> Result<ContactFormSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_form_submissions (name, email, phone, company, subject, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactFormSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_form_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactFormSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_form_submissions ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Unread submissions, newest first.
    pub async fn list_unread(pool: &PgPool) -> Result<Vec<ContactFormSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_form_submissions
             WHERE NOT is_read
             ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Flag a submission as read. Idempotent; returns `None` if the
    /// submission does not exist.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactFormSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_form_submissions SET is_read = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactFormSubmission,
    ) -> Result<Option<ContactFormSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_form_submissions SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                subject = COALESCE($6, subject),
                message = COALESCE($7, message),
                is_read = COALESCE($8, is_read)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactFormSubmission>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.is_read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_form_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
