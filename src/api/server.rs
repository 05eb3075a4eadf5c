use axum::{
    middleware,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::{
    add_entry_handler, clear_leaderboard_handler, feedback_handler, get_leaderboard_handler,
    healthcheck_handler,
};
use crate::api::middleware::response_time;
use crate::api::state::AppState;
use crate::auth::AccessTokens;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::db::{create_pool, run_migrations, FeedbackStore, LeaderboardStore, PostgresStore};
use crate::domain::{FeedbackService, LeaderboardPolicy, LeaderboardService};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json() // JSON format for log aggregation
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,tower=warn")),
        )
        .init();
}

/// Wire the services over explicit store and clock instances
pub fn build_state(
    config: &Config,
    leaderboard_store: Arc<dyn LeaderboardStore>,
    feedback_store: Arc<dyn FeedbackStore>,
    clock: Arc<dyn Clock>,
) -> AppState {
    let policy = LeaderboardPolicy {
        max_name_length: config.max_name_length,
        storage_timeout: config.storage_timeout,
    };

    AppState {
        leaderboard: LeaderboardService::new(leaderboard_store, clock, policy),
        feedback: FeedbackService::new(feedback_store, config.storage_timeout),
        tokens: AccessTokens::new(config.access_secret.clone(), config.public_secret.clone()),
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route(
            "/leaderboard",
            get(get_leaderboard_handler)
                .post(add_entry_handler)
                .delete(clear_leaderboard_handler),
        )
        .route("/feedback", get(feedback_handler))
        .with_state(state)
        .layer(middleware::from_fn(response_time))
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    info!(config = ?config, "Starting Cybersnake leaderboard server");

    let pool = create_pool(&config.database, config.db_max_connections)?;
    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    let store = Arc::new(PostgresStore::new(pool.clone()));
    let state = build_state(&config, store.clone(), store, Arc::new(SystemClock));
    let app = create_app(state);

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutting down gracefully...");
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    pool.close().await;
    info!("Database pool closed");

    Ok(())
}
