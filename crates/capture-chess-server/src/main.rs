//! Capture Chess Server
//!
//! Run with: `cargo run --package capture-chess-server`

use std::sync::Arc;

use anyhow::Result;
use capture_chess::{ShakmatyRules, TurnController};
use capture_chess_server::api::create_router;
use capture_chess_server::cli::Args;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("capture_chess=info".parse()?)
                .add_directive("capture_chess_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Capture Chess starting...");

    let controller = Arc::new(TurnController::new(ShakmatyRules::new()));
    let app = create_router(controller);

    let listener = tokio::net::TcpListener::bind(&args.listen_addr).await?;
    tracing::info!("HTTP API listening on {}", args.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    tracing::info!("Capture Chess shutdown");
    Ok(())
}
