//! cookery-server - Cooking platform HTTP backend
//!
//! Opens (and if needed recovers and seeds) the SQLite database, then
//! serves the JSON API, the landing page and static files.

use anyhow::{Context, Result};
use clap::Parser;
use cookery_common::config::{load_toml_config, ConfigOverrides, ServerConfig};
use cookery_common::db::{init_database, seed_database};
use cookery_server::{build_router, AppState, SiteFiles, Store};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for cookery-server
#[derive(Parser, Debug)]
#[command(name = "cookery-server")]
#[command(about = "HTTP backend for the cooking platform")]
#[command(version)]
struct Args {
    /// TOML config file (defaults to ~/.config/cookery/config.toml when present)
    #[arg(short, long, env = "COOKERY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "COOKERY_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "COOKERY_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "COOKERY_DATABASE")]
    database: Option<PathBuf>,

    /// Landing page served at /
    #[arg(long, env = "COOKERY_INDEX_FILE")]
    index_file: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, env = "COOKERY_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Reject rows whose chef/user/class references do not exist
    #[arg(long, env = "COOKERY_ENFORCE_FOREIGN_KEYS")]
    enforce_foreign_keys: Option<bool>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            index_file: self.index_file.clone(),
            static_dir: self.static_dir.clone(),
            enforce_foreign_keys: self.enforce_foreign_keys,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cookery_server=info,cookery_common=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting cookery-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let file_config =
        load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let config = ServerConfig::resolve(args.overrides(), file_config);

    info!("Database path: {}", config.database_path.display());

    // Open failure is fatal
    let pool = match init_database(&config.database_path, config.enforce_foreign_keys).await {
        Ok(pool) => {
            info!("✓ Database connected");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = seed_database(&pool).await {
        error!("Error checking existing data: {}", e);
    }

    let state = AppState::new(Store::new(pool.clone()), SiteFiles::from(&config));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("cookery-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
