//! Pixel Box Studio content API library.
//!
//! Exposes the building blocks (config, state, cache, error handling, routes)
//! so integration tests and the binary entrypoints can share them.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;
