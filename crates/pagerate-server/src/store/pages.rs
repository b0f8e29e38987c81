//! Page identity resolution and read-side lookups.

use sqlx::PgPool;

use crate::models::{Page, PageStats, UserRating};

/// Ensures a page row exists for the canonical URL and returns it.
///
/// The insert is conditional on the URL hash, so two concurrent first
/// writers cannot create two rows for one canonical URL: the loser of the
/// race falls back to reading the row the winner created.
pub async fn get_or_create_page(pool: &PgPool, normalized_url: &str) -> Result<Page, sqlx::Error> {
    let hash = pagerate_core::url_hash(normalized_url);

    let inserted: Option<Page> = sqlx::query_as(
        r#"
        INSERT INTO pages (url_hash, normalized_url)
        VALUES ($1, $2)
        ON CONFLICT (url_hash) DO NOTHING
        RETURNING id, url_hash, normalized_url, created_at
        "#,
    )
    .bind(&hash)
    .bind(normalized_url)
    .fetch_optional(pool)
    .await?;

    if let Some(page) = inserted {
        tracing::debug!("created page {} for {}", page.id, page.normalized_url);
        return Ok(page);
    }

    // Conflict: the page already exists, fetch it instead.
    sqlx::query_as(
        r#"
        SELECT id, url_hash, normalized_url, created_at
        FROM pages
        WHERE url_hash = $1
        "#,
    )
    .bind(&hash)
    .fetch_one(pool)
    .await
}

/// Returns rating statistics for the page with the given URL hash.
///
/// A hash with no page row, or a page with no ratings yet, yields zero
/// stats rather than an error.
pub async fn get_page_stats(pool: &PgPool, url_hash: &str) -> Result<PageStats, sqlx::Error> {
    let stats: Option<PageStats> = sqlx::query_as(
        r#"
        SELECT
            COUNT(r.id) AS total_ratings,
            COALESCE(AVG(r.score), 0)::float8 AS average_score
        FROM pages p
        LEFT JOIN ratings r ON p.id = r.page_id
        WHERE p.url_hash = $1
        GROUP BY p.id
        "#,
    )
    .bind(url_hash)
    .fetch_optional(pool)
    .await?;

    Ok(stats.unwrap_or_else(PageStats::empty))
}

/// Returns the calling user's rating for the page with the given URL hash.
///
/// An unknown page and a page this user never rated both read as
/// "has not rated".
pub async fn get_user_rating(
    pool: &PgPool,
    url_hash: &str,
    user_id: &str,
) -> Result<UserRating, sqlx::Error> {
    let row: Option<(i32, Option<String>)> = sqlx::query_as(
        r#"
        SELECT r.score, r.comment
        FROM pages p
        INNER JOIN ratings r ON p.id = r.page_id
        WHERE p.url_hash = $1 AND r.user_id = $2
        "#,
    )
    .bind(url_hash)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some((score, comment)) => UserRating {
            has_rated: true,
            score: Some(score),
            comment,
        },
        None => UserRating::none(),
    })
}
