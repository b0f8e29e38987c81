//! Page records keyed by canonical URL hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A page identified by the SHA-256 hash of its canonical URL.
///
/// Exactly one row exists per canonical URL; rows are created lazily on the
/// first rating submission and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Page {
    /// Database identifier.
    pub id: i64,
    /// SHA-256 hash of the canonical URL (hex-encoded).
    pub url_hash: String,
    /// The canonical URL string.
    pub normalized_url: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

/// Aggregated rating statistics for a page.
///
/// Derived, never stored: computed fresh from the current rating rows on
/// every read, so it is always consistent with the latest writes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PageStats {
    /// Number of ratings on record.
    pub total_ratings: i64,
    /// Arithmetic mean of the scores, 0.0 when there are none.
    pub average_score: f64,
}

impl PageStats {
    /// Stats for a page with no ratings, including one the store has never seen.
    pub fn empty() -> Self {
        Self {
            total_ratings: 0,
            average_score: 0.0,
        }
    }
}
