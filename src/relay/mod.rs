//! Contact submission relay.
//!
//! A small HTTP service that validates contact form submissions, appends them
//! to the submission log and best-effort sends a notification email.
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/contact` | bearer |
//! | GET | `/contact-submissions` | bearer |
//! | GET | `/health` | none |
//!
//! Durable storage is the success criterion. Once a submission is stored the
//! submitter is told it worked, even when the notification email fails.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod notifier;
pub mod routes;
pub mod state;
pub mod validation;

pub use error::RelayError;
pub use notifier::{DisabledNotifier, Notifier, ResendNotifier};
pub use state::State;

use crate::config::Config;
use crate::storage::LocalStorage;
use routes::{contact_handler, health_handler, require_bearer, submissions_handler};

/// Build the relay router around `state`
pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .max_age(Duration::from_secs(600));

    let protected = Router::new()
        .route("/contact", post(contact_handler))
        .route("/contact-submissions", get(submissions_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

/// Run the relay until Ctrl-C or SIGTERM
pub async fn serve(config: &Config, port_override: Option<u16>) -> Result<()> {
    log::info!("Initializing relay state...");
    let storage = LocalStorage::new(config.storage.database_path.as_deref()).await?;
    if config.storage.database_path.is_none() {
        log::warn!("No storage.database_path configured, submissions are kept in memory only");
    }

    let notifier = ResendNotifier::new(&config.email, config.email.api_key())?;
    let anon_key = config.relay.anon_key();
    if anon_key.is_empty() {
        log::warn!("{} is not set, relay endpoints are unauthenticated", config.relay.anon_key_env);
    }

    let state = State::new(storage, Box::new(notifier), anon_key);
    let app = router(state);

    let port = port_override.unwrap_or(config.relay.port);
    let address = format!("{}:{}", config.relay.bind_address, port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    log::info!("Relay running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Relay server error")?;

    log::info!("Relay shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
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
}
