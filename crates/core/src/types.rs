//! Shared scalar aliases for content records.

/// Primary key of every content table (`BIGSERIAL`).
pub type DbId = i64;

/// `created_at`, `updated_at` and `submitted_at` columns, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
