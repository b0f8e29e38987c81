//! User records created on first reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Placeholder display name for users created on first reference.
/// Profile management is out of scope; the row is never mutated afterwards.
pub const DEFAULT_USERNAME: &str = "Test User";

/// A user known to the rating store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Opaque caller-supplied identity token.
    pub id: String,
    /// Display name.
    pub username: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}
