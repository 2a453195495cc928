//! # metahived — metahive daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Build the storage connector for the configured driver and verify the
//!   store is reachable
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::error::Error;

use metahive_adapter_http_axum::state::AppState;
use metahive_adapter_storage_sqlx::{
    MySqlEntryRepository, MySqlTagRepository, SqliteEntryRepository, SqliteTagRepository,
};
use metahive_app::ports::{EntryRepository, TagRepository};
use metahive_app::services::entry_service::EntryService;
use metahive_app::services::tag_service::TagService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Driver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let result = run(&config).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "metahived stopped with an error");
    }
    result
}

async fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    match config.database.driver {
        Driver::Sqlite => {
            let connector = config.sqlite().build().await?;
            serve(
                config,
                SqliteTagRepository::new(connector.clone()),
                SqliteEntryRepository::new(connector),
            )
            .await
        }
        Driver::Mysql => {
            let connector = config.mysql().build().await?;
            serve(
                config,
                MySqlTagRepository::new(connector.clone()),
                MySqlEntryRepository::new(connector),
            )
            .await
        }
    }
}

async fn serve<TR, ER>(config: &Config, tag_repo: TR, entry_repo: ER) -> Result<(), Box<dyn Error>>
where
    TR: TagRepository + Send + Sync + 'static,
    ER: EntryRepository + Send + Sync + 'static,
{
    let state = AppState::new(TagService::new(tag_repo), EntryService::new(entry_repo));
    let app = metahive_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, driver = ?config.database.driver, "metahived listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("metahived shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
