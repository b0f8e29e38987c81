//! Page lookup endpoints.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::UserId;
use crate::error::AppError;
use crate::models::{PageStats, UserRating};
use crate::store;
use pagerate_core::{normalize, url_hash};

/// Query parameters for the check endpoint.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// Raw URL of the page the extension is looking at.
    pub url: String,
}

/// Response for the check endpoint.
#[derive(Debug, Serialize)]
pub struct CheckPageResponse {
    /// Whether the caller may rate this page.
    pub can_rate: bool,
    /// Aggregate statistics for the page.
    pub stats: PageStats,
    /// The caller's own rating, if any.
    pub user_rating: UserRating,
}

/// Creates the pages router.
pub fn router(pool: PgPool) -> Router {
    Router::new()
        .route("/check", get(check_page))
        .with_state(pool)
}

/// GET /api/v1/pages/check?url=...
///
/// Returns aggregate statistics for a page plus the caller's own rating.
/// Pages the store has never seen report zero stats; nothing is created on
/// the read path.
async fn check_page(
    State(pool): State<PgPool>,
    user_id: UserId,
    Query(params): Query<CheckParams>,
) -> Result<Json<CheckPageResponse>, AppError> {
    let normalized = normalize(&params.url)?;
    let hash = url_hash(&normalized);

    let stats = store::pages::get_page_stats(&pool, &hash).await?;
    let user_rating = store::pages::get_user_rating(&pool, &hash, &user_id.0).await?;

    Ok(Json(CheckPageResponse {
        can_rate: true,
        stats,
        user_rating,
    }))
}
