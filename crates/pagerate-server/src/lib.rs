//! Pagerate Server - page rating API
//!
//! This crate provides the REST API the browser extension calls to look up
//! aggregate ratings for a page and to submit a score with an optional
//! comment. Page identity is the SHA-256 hash of the canonical URL computed
//! by `pagerate-core`.

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use error::AppError;
pub use routes::create_router;
