//! User provisioning.

use sqlx::PgPool;

use crate::models::user::DEFAULT_USERNAME;
use crate::models::User;

/// Ensures a user row exists for the caller-supplied id.
///
/// Users are created on first reference with a placeholder display name and
/// never mutated afterwards. Racing creations are resolved by the
/// conditional insert.
pub async fn ensure_user(pool: &PgPool, user_id: &str) -> Result<(), sqlx::Error> {
    let inserted: Option<User> = sqlx::query_as(
        r#"
        INSERT INTO users (id, username)
        VALUES ($1, $2)
        ON CONFLICT (id) DO NOTHING
        RETURNING id, username, created_at
        "#,
    )
    .bind(user_id)
    .bind(DEFAULT_USERNAME)
    .fetch_optional(pool)
    .await?;

    if let Some(user) = inserted {
        tracing::debug!("created user {}", user.id);
    }

    Ok(())
}
