// invoicelens - Multilanguage invoice extractor: web form bridged to Gemini

use anyhow::Result;
use clap::Parser;
use invoicelens::cli::Args;
use invoicelens::config::AppConfig;
use invoicelens::gemini::GeminiClient;
use invoicelens::server::create_router;
use invoicelens::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load_from(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting invoicelens v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the Gemini client (resolves and validates the API key)
    let gemini_client = GeminiClient::new(&config.gemini)?;
    info!("Gemini client ready for model {}", gemini_client.model());

    // Phase 3.5: Handle --check flag (one upstream ping, then exit)
    if args.check {
        let latency = gemini_client.check_connectivity().await?;
        println!("Gemini API reachable, round-trip {:?}", latency);
        return Ok(());
    }

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), gemini_client)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
