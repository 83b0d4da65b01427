//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, resolver construction, and the
//! Axum server lifecycle.

use crate::application::services::{MappingResolver, ResolverSettings};
use crate::config::{Config, mask_connection_string};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::{CacheGateway, RedisCache};
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Connects to PostgreSQL with the configured pool settings.
///
/// Retries with jittered exponential backoff (200ms, 400ms, ... capped at 5s)
/// up to `db_connect_retries` attempts in total.
///
/// # Errors
///
/// Returns the last connection error once all attempts are exhausted.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let database_url = config.database_url.as_str();
    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!(
                    dependency = "storage",
                    operation = "connect",
                    error = %e,
                    "Database connection attempt failed"
                );
            })
        }
    })
    .await
    .with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(database_url)
        )
    })?;

    Ok(pool)
}

/// Builds the cache gateway from configuration.
///
/// Uses Redis when configured and reachable. Falls back to the no-op backend
/// otherwise, so lookups keep working against storage alone.
pub async fn build_cache(config: &Config) -> CacheGateway {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return CacheGateway::disabled();
    };

    match RedisCache::connect(redis_url, config.redis_key_prefix.clone()).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            CacheGateway::new(Arc::new(redis))
        }
        Err(e) => {
            tracing::warn!(
                dependency = "cache",
                operation = "connect",
                error = %e,
                "Failed to connect to Redis, using NullCache"
            );
            CacheGateway::disabled()
        }
    }
}

/// Wires the resolver over PostgreSQL storage and the given cache.
pub fn build_resolver(
    pool: PgPool,
    cache: CacheGateway,
    config: &Config,
) -> Arc<MappingResolver<dyn MappingRepository>> {
    let repository: Arc<dyn MappingRepository> =
        Arc::new(PgMappingRepository::new(Arc::new(pool)));

    Arc::new(MappingResolver::new(
        repository,
        cache,
        ResolverSettings::from(config),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache = build_cache(&config).await;
    let resolver = build_resolver(pool, cache, &config);
    let state = AppState::new(resolver, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
