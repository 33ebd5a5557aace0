//! Process bootstrap shared by the service binaries: store selection, peer
//! wiring and the listener loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use movies_catalog::{MovieInfo, Review};
use movies_infra::external::{HttpMovieInfoClient, HttpReviewClient};
use movies_infra::store::{PostgresMovieInfoStore, PostgresReviewStore};
use movies_infra::{
    InMemoryCollection, MovieAggregator, MovieInfoStore, PeerConfig, ReviewStore, ServiceConfig,
};

const MAX_DB_CONNECTIONS: u32 = 10;

/// Bind `addr` and serve `app` until ctrl-c.
pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")
}

pub async fn movie_info_store(config: &ServiceConfig) -> anyhow::Result<Arc<dyn MovieInfoStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresMovieInfoStore::new(connect(url).await?);
            store.ensure_schema().await?;
            tracing::info!(table = PostgresMovieInfoStore::TABLE, "using postgres store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; movie infos are kept in memory only");
            Ok(Arc::new(InMemoryCollection::<MovieInfo>::new()))
        }
    }
}

pub async fn review_store(config: &ServiceConfig) -> anyhow::Result<Arc<dyn ReviewStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresReviewStore::new(connect(url).await?);
            store.ensure_schema().await?;
            tracing::info!(table = PostgresReviewStore::TABLE, "using postgres store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; reviews are kept in memory only");
            Ok(Arc::new(InMemoryCollection::<Review>::new()))
        }
    }
}

/// Aggregator backed by HTTP clients sharing one connection pool.
pub fn movie_aggregator(peers: &PeerConfig) -> anyhow::Result<MovieAggregator> {
    let http = peers
        .build_http_client()
        .context("failed to build peer http client")?;

    tracing::info!(
        movie_info_url = %peers.movie_info_base_url,
        reviews_url = %peers.reviews_base_url,
        timeout_ms = peers.timeout.as_millis() as u64,
        "peer endpoints configured"
    );

    Ok(MovieAggregator::new(
        Arc::new(HttpMovieInfoClient::new(http.clone(), peers.movie_info_base_url.clone())),
        Arc::new(HttpReviewClient::new(http, peers.reviews_base_url.clone())),
    ))
}
