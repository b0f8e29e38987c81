//! Rating submission endpoints.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::UserId;
use crate::error::AppError;
use crate::models::PageStats;
use crate::store;
use pagerate_core::normalize;

/// Lowest accepted score.
pub const MIN_SCORE: i32 = 1;
/// Highest accepted score.
pub const MAX_SCORE: i32 = 10;

/// Request body for submitting a rating.
#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    /// Raw URL of the rated page.
    pub url: String,
    /// Score between 1 and 10 inclusive.
    pub score: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

/// Response after submitting a rating.
#[derive(Debug, Serialize)]
pub struct SubmitRatingResponse {
    /// Statistics recomputed after the write.
    pub stats: PageStats,
}

/// Creates the ratings router.
pub fn router(pool: PgPool) -> Router {
    Router::new()
        .route("/", post(submit_rating))
        .with_state(pool)
}

/// POST /api/v1/ratings
///
/// Creates or overwrites the caller's rating for a page and returns the
/// updated statistics. The page and user rows are created on first
/// reference.
async fn submit_rating(
    State(pool): State<PgPool>,
    user_id: UserId,
    Json(request): Json<SubmitRatingRequest>,
) -> Result<Json<SubmitRatingResponse>, AppError> {
    validate_score(request.score)?;

    let normalized = normalize(&request.url)?;

    store::users::ensure_user(&pool, &user_id.0).await?;
    let page = store::pages::get_or_create_page(&pool, &normalized).await?;
    store::ratings::upsert_rating(
        &pool,
        page.id,
        &user_id.0,
        request.score,
        request.comment.as_deref(),
    )
    .await?;

    let stats = store::ratings::page_stats_for(&pool, page.id).await?;

    Ok(Json(SubmitRatingResponse { stats }))
}

/// Validates the submitted score against the accepted range.
fn validate_score(score: i32) -> Result<(), AppError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(AppError::InvalidScore(score))
    }
}
