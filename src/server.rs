//! Process bootstrap: validate configuration, resolve capabilities, serve.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::adapters::http::build_router;
use crate::application::CapabilityRegistry;
use crate::config::{AppConfig, ValidationError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server failure: {0}")]
    Serve(#[source] std::io::Error),
}

/// Runs the HTTP service until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns `ServerError` when configuration is invalid, the listener cannot
/// be bound, or the server stops with an I/O error.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    config.validate()?;

    let registry = CapabilityRegistry::from_config(&config.capabilities)?;
    let app = build_router(&registry, &config.server)?;
    let addr = config.server.socket_addr()?;

    let bindings = registry
        .bindings()
        .iter()
        .map(|(capability, backend)| format!("{}={}", capability.key(), backend))
        .collect::<Vec<_>>()
        .join(",");

    tracing::info!(
        service = %config.server.service_name,
        environment = config.server.environment.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        bindings = %bindings,
        aws_region = %config.backends.aws_region,
        backend_settings = ?config.backends.configured_keys(),
        "application_startup"
    );

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!(service = %config.server.service_name, "application_shutdown");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown_signal_received");
}
