use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_propostas_api::config::Config;
use rust_propostas_api::handlers::{self, AppState};
use rust_propostas_api::policy::AllowAll;
use rust_propostas_api::store::PropostaStore;

/// Main entry point for the store service.
///
/// Initializes logging and configuration, constructs the in-memory store
/// (empty on every start, since data lives only for the process lifetime), and
/// serves the JSON REST API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_propostas_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Constructed here so the data's lifetime is explicitly the process
    // lifetime; a restart discards everything.
    let store = PropostaStore::new();
    tracing::info!("In-memory store initialized (empty)");

    let app_state = Arc::new(AppState::new(store, Arc::new(AllowAll)));
    let app = handlers::router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Servidor rodando na porta {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
