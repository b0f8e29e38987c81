//! Rating upserts and aggregate recomputation.

use sqlx::PgPool;

use crate::models::{PageStats, Rating};

/// Inserts or overwrites the user's rating for a page.
///
/// The write runs in a single transaction: either the (page, user) row
/// reflects the new score and comment with a bumped `updated_at`, or the row
/// set is unchanged. The score range is the caller's responsibility.
pub async fn upsert_rating(
    pool: &PgPool,
    page_id: i64,
    user_id: &str,
    score: i32,
    comment: Option<&str>,
) -> Result<Rating, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result: Result<Rating, sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO ratings (user_id, page_id, score, comment, updated_at)
        VALUES ($1, $2, $3, $4, NOW())
        ON CONFLICT (user_id, page_id)
        DO UPDATE SET
            score = EXCLUDED.score,
            comment = EXCLUDED.comment,
            updated_at = NOW()
        RETURNING id, user_id, page_id, score, comment, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(page_id)
    .bind(score)
    .bind(comment)
    .fetch_one(&mut *tx)
    .await;

    let rating = match result {
        Ok(rating) => rating,
        Err(err) => {
            // Best-effort cleanup; the original error is what the caller sees.
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!("Failed to roll back rating upsert: {}", rollback_err);
            }
            return Err(err);
        }
    };

    tx.commit().await?;

    tracing::debug!(
        "stored rating {} (score {}) for page {}",
        rating.id,
        rating.score,
        rating.page_id
    );
    Ok(rating)
}

/// Recomputes rating statistics for a page from its current rating rows.
/// No counters are kept; every call reads fresh.
pub async fn page_stats_for(pool: &PgPool, page_id: i64) -> Result<PageStats, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            COUNT(id) AS total_ratings,
            COALESCE(AVG(score), 0)::float8 AS average_score
        FROM ratings
        WHERE page_id = $1
        "#,
    )
    .bind(page_id)
    .fetch_one(pool)
    .await
}
