//! feedback-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) merged with
//! `FEEDBACK_*` environment variables, opens the SQLite store, and serves
//! the JSON API. A store that cannot be opened at startup is fatal — the
//! process exits instead of serving in a broken state.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use feedback_api::ServerConfig;
use feedback_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Course feedback API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration; every field falls back to a documented default.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FEEDBACK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Startup connectivity check: open the store before accepting traffic.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;
  tracing::info!("connected to feedback store at {:?}", server_cfg.store_path);

  let app = feedback_api::router(Arc::new(store.clone()));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  // In-flight requests have drained; release the connection before exit.
  store.close().await.context("failed to close store")?;
  tracing::info!("store connection closed");

  Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
  if tokio::signal::ctrl_c().await.is_ok() {
    tracing::info!("shutting down");
  }
}
