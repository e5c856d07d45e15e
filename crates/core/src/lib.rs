//! Domain logic for the Pixel Box Studio content backend.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates layer persistence and transport on top of these types.

pub mod content;
pub mod error;
pub mod media;
pub mod serde_helpers;
pub mod slug;
pub mod types;
pub mod validation;
