//! Shared response types for API handlers.
//!
//! Lists and single records are returned as bare JSON. The only envelope is
//! [`AckResponse`], used where the client expects a confirmation message
//! alongside the stored record.

use serde::Serialize;

/// `{ "message": ..., "data": T }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct AckResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
