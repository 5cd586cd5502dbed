use std::sync::Arc;

use clap::Parser;
use cli::Args;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod cli;
mod config;
mod error;
mod serde_utils;
mod server;
mod stellar_utils;

async fn start() -> eyre::Result<()> {
    let args = Args::parse();
    let config = Arc::new(args.into_config().await?);

    server::run(config, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .with(ErrorLayer::default())
        .init();

    match start().await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!("{:?}", err);
            std::process::exit(1)
        }
    }
}
