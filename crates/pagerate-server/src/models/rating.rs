//! Rating rows and the per-caller view of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's rating of a page.
///
/// At most one row exists per (page, user) pair; resubmission overwrites the
/// score and comment in place and bumps `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    /// Database identifier.
    pub id: i64,
    /// Opaque id of the rating user.
    pub user_id: String,
    /// The rated page.
    pub page_id: i64,
    /// Score in the range 1 to 10 inclusive.
    pub score: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// When the rating was first submitted.
    pub created_at: DateTime<Utc>,
    /// When the rating was last overwritten.
    pub updated_at: DateTime<Utc>,
}

/// The calling user's rating of a page, if they have one.
///
/// Tri-state: an unknown page and a page the user has not rated both read as
/// "has not rated"; only an existing rating carries a score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRating {
    /// Whether the user has rated this page.
    pub has_rated: bool,
    /// The user's score, present only when `has_rated` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    /// The user's comment, when one was left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl UserRating {
    /// The "has not rated" state.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_serializes_without_optional_fields() {
        assert_eq!(
            serde_json::to_value(UserRating::none()).unwrap(),
            serde_json::json!({ "has_rated": false })
        );
    }

    #[test]
    fn rated_serializes_score_and_comment() {
        let rating = UserRating {
            has_rated: true,
            score: Some(7),
            comment: Some("solid read".to_string()),
        };
        assert_eq!(
            serde_json::to_value(rating).unwrap(),
            serde_json::json!({
                "has_rated": true,
                "score": 7,
                "comment": "solid read"
            })
        );
    }

    #[test]
    fn rated_without_comment_skips_the_field() {
        let rating = UserRating {
            has_rated: true,
            score: Some(3),
            comment: None,
        };
        let value = serde_json::to_value(rating).unwrap();
        assert_eq!(value["score"], 3);
        assert!(value.get("comment").is_none());
    }
}
