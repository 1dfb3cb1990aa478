pub mod call_summary;
pub mod config;
pub mod email;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod sales_insights;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Service};
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;

/// Loads configuration, wires the completion client and serves `service` until shutdown.
pub async fn run(service: Service) -> Result<()> {
    // Load configuration first (fails on missing API key)
    let config = Config::from_env(service)?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", service, env!("CARGO_PKG_VERSION"));

    let llm = GroqClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState {
        config: config.clone(),
        llm: Arc::new(llm),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
