use std::{net::SocketAddr, sync::Arc};

use tokio::signal;
use tracing::{error, info};

use idea_validation_api::{
    config::Config,
    create_router,
    db::{DatabaseProbe, SupabaseClient},
    middleware::init_tracing,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment; missing required values are fatal
    // before the listener is ever bound
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Construct the Supabase probe the health endpoint depends on
    let probe: Arc<dyn DatabaseProbe> = match SupabaseClient::new(&config.supabase) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create Supabase client: {:#}", e);
            std::process::exit(1);
        }
    };

    // Create the Axum router with all endpoints
    let app = create_router(probe, &config);

    let addr = SocketAddr::new(config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            // Startup hook: record that we are accepting traffic and with
            // which settings
            info!("Idea Validation API listening on {}", addr);
            info!("Debug mode: {}", config.debug);
            info!("Supabase endpoint: {}", config.supabase.url);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    // Shutdown hook
    info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
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
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
