//! Pagerate server binary.

use anyhow::Context;
use pagerate_server::{create_router, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagerate_server=info,tower_http=info".into()),
        )
        .init();

    let database_url = db::database_url()?;
    let pool = db::create_pool(&database_url)
        .await
        .context("failed to create database pool")?;
    db::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|value| value.parse())
        .transpose()
        .context("invalid PORT value")?
        .unwrap_or(8080);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, create_router(pool)).await?;

    Ok(())
}
