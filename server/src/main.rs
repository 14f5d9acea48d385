//! Re-Feed server
//!
//! Imports entries from a remote RSS or JSON feed, lets an admin tag them,
//! and republishes the collection as RSS, Atom or JSON.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod cli;
mod config;
mod domain;
mod entity;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    create_tables, HttpFeedSource, SqlChangeMarkerRepository, SqlFeedEntryRepository,
    SqlTagRepository,
};
use app::{FeedService, FetchService, TagService};
use cli::{Cli, Commands};
use config::Config;
use feed::FeedFormat;

pub type AppFetchService = FetchService<SqlFeedEntryRepository, HttpFeedSource>;
pub type AppTagService =
    TagService<SqlFeedEntryRepository, SqlTagRepository, SqlChangeMarkerRepository>;
pub type AppFeedService =
    FeedService<SqlFeedEntryRepository, SqlTagRepository, SqlChangeMarkerRepository>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub fetch_service: Arc<AppFetchService>,
    pub tag_service: Arc<AppTagService>,
    pub feed_service: Arc<AppFeedService>,
    pub config: Config,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let entry_repo = Arc::new(SqlFeedEntryRepository::new(db.clone()));
        let tag_repo = Arc::new(SqlTagRepository::new(db.clone()));
        let change_repo = Arc::new(SqlChangeMarkerRepository::new(db));
        let feed_source = Arc::new(HttpFeedSource::new());

        let fetch_service = Arc::new(FetchService::new(
            entry_repo.clone(),
            feed_source,
            config.fetch.clone(),
        ));

        let tag_service = Arc::new(TagService::new(
            entry_repo.clone(),
            tag_repo.clone(),
            change_repo.clone(),
        ));

        let feed_service = Arc::new(FeedService::new(entry_repo, tag_repo, change_repo));

        Self {
            fetch_service,
            tag_service,
            feed_service,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Every published feed route, for each format
fn feed_routes() -> Router<AppState> {
    FeedFormat::ALL
        .into_iter()
        .fold(Router::new(), |router, format| {
            let base = format!("/get_feed_{}", format);
            let handler = get(handlers::get_feed).layer(Extension(format));

            router
                .route(&base, handler.clone())
                .route(&format!("{}/:limit", base), handler.clone())
                .route(&format!("{}/tag/:tag", base), handler.clone())
                .route(&format!("{}/tag/:tag/:limit", base), handler)
        })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health))
        // Admin page and its form targets
        .route("/", get(handlers::index))
        .route("/refresh_feed", post(handlers::refresh_feed))
        .route("/tag_entry/:id", post(handlers::tag_entry))
        .route(
            "/delete_tag/:entry_id/:tag_id",
            post(handlers::delete_tag).delete(handlers::delete_tag),
        )
        .merge(feed_routes())
        .nest_service("/static", static_dir)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,refeed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    create_tables(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    let state = AppState::new(db, config);

    match cli.subcommand() {
        Commands::Fetch { mode } => {
            let mode = mode.unwrap_or(state.config.fetch.mode);
            let report = state.fetch_service.refresh_with(mode).await?;
            println!(
                "Fetched {} entries: {} new, {} already stored",
                report.fetched, report.inserted, report.skipped
            );
            Ok(())
        }
        Commands::Serve => serve(state).await,
    }
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    tracing::info!("Starting Re-Feed...");

    if state.config.fetch_on_startup {
        if let Err(e) = state.fetch_service.refresh().await {
            tracing::warn!(error = %e, "Startup fetch failed");
        }
    }

    if let Some(secs) = state.config.refresh_interval_secs {
        let fetch_service = state.fetch_service.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(secs));
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = fetch_service.refresh().await {
                    tracing::warn!(error = %e, "Scheduled fetch failed");
                }
            }
        });
        tracing::info!(interval_secs = secs, "Scheduled background fetch");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
