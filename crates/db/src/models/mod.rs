//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Display ordering is stored in `sort_order` and serialized as `order`.

pub mod about;
pub mod contact;
pub mod faq;
pub mod feature;
pub mod hero;
pub mod navigation;
pub mod portfolio;
pub mod service;
pub mod stat;
pub mod team;
pub mod testimonial;
