use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pixelbox_core::error::CoreError;
use serde_json::{json, Value};
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{"code": ..., "message": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pixelbox_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body failed field validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A JSON body that parsed but does not fit the expected shape.
    #[error("Invalid request body: {field}: {message}")]
    InvalidBody {
        field: String,
        code: &'static str,
        message: String,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::SlugNotFound { entity, slug } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with slug '{slug}' not found"),
                ),
                CoreError::Unset { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string()),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Validation(errors) => {
                let body = json!({
                    "code": "VALIDATION_ERROR",
                    "message": "Request validation failed",
                    "fields": field_errors(errors),
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            AppError::InvalidBody {
                field,
                code,
                message,
            } => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.clone(), json!([{"code": code, "message": message}]));
                let body = json!({
                    "code": "VALIDATION_ERROR",
                    "message": "Request validation failed",
                    "fields": fields,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "code": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => invalid_body(&err.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Turn axum's deserialization message into a field-level error.
///
/// The message reads `...target type: [<path>: ]<serde error> at line L column C`;
/// the path is absent when the failure is at the top level (for example a
/// missing field).
fn invalid_body(text: &str) -> AppError {
    let detail = text.split_once("target type: ").map_or(text, |(_, rest)| rest);
    let detail = detail.rsplit_once(" at line ").map_or(detail, |(head, _)| head);

    let (path, inner) = match detail.split_once(": ") {
        Some((path, inner)) if !path.contains(' ') => (Some(path), inner),
        _ => (None, detail),
    };

    let missing = inner
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next());

    match (path, missing) {
        (None, Some(field)) => AppError::InvalidBody {
            field: field.to_string(),
            code: "required",
            message: format!("{field} is required"),
        },
        (Some(path), Some(_)) => AppError::InvalidBody {
            field: path.to_string(),
            code: "required",
            message: inner.to_string(),
        },
        (Some(path), None) => AppError::InvalidBody {
            field: path.to_string(),
            code: "invalid_type",
            message: inner.to_string(),
        },
        (None, None) => AppError::InvalidBody {
            field: "body".to_string(),
            code: "invalid",
            message: inner.to_string(),
        },
    }
}

/// Flatten `ValidationErrors` into `{field: [{code, message}]}`.
///
/// Nested struct and list errors are reported under their parent field.
fn field_errors(errors: &ValidationErrors) -> Value {
    let fields: serde_json::Map<String, Value> = errors
        .errors()
        .iter()
        .map(|(field, kind)| {
            let entries = match kind {
                validator::ValidationErrorsKind::Field(list) => list
                    .iter()
                    .map(|e| {
                        json!({
                            "code": e.code,
                            "message": e.message.as_deref().unwrap_or("invalid value"),
                        })
                    })
                    .collect(),
                validator::ValidationErrorsKind::Struct(inner) => {
                    vec![json!({"code": "invalid", "message": inner.to_string()})]
                }
                validator::ValidationErrorsKind::List(items) => items
                    .iter()
                    .map(|(index, inner)| {
                        json!({"code": "invalid", "message": format!("#{index}: {inner}")})
                    })
                    .collect(),
            };
            (field.to_string(), Value::Array(entries))
        })
        .collect();
    Value::Object(fields)
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 400 naming the constraint.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // unique_violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // foreign_key_violation
                Some("23503") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "INVALID_REFERENCE",
                        format!("Referenced record does not exist: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

    #[test]
    fn top_level_missing_field_names_the_field() {
        let err = invalid_body(&format!("{PREFIX}missing field `question` at line 1 column 17"));
        assert_matches!(
            err,
            AppError::InvalidBody { ref field, code: "required", .. } if field == "question"
        );
    }

    #[test]
    fn nested_missing_field_uses_the_path() {
        let err = invalid_body(&format!(
            "{PREFIX}menu_links[0]: missing field `href` at line 1 column 40"
        ));
        assert_matches!(
            err,
            AppError::InvalidBody { ref field, code: "required", .. } if field == "menu_links[0]"
        );
    }

    #[test]
    fn type_mismatch_uses_the_path() {
        let err = invalid_body(&format!(
            "{PREFIX}number: invalid type: string \"lots\", expected i64 at line 1 column 36"
        ));
        assert_matches!(
            err,
            AppError::InvalidBody { ref field, code: "invalid_type", ref message }
                if field == "number" && message.starts_with("invalid type")
        );
    }

    #[test]
    fn unrecognized_message_falls_back_to_body() {
        let err = invalid_body("something unexpected");
        assert_matches!(err, AppError::InvalidBody { ref field, code: "invalid", .. } if field == "body");
    }
}
