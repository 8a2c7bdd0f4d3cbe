//! aqarkam chat server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aqarkam_agent::Chatbot;
use aqarkam_config::{load_settings, NluConfig, Settings};
use aqarkam_listings::{sample_listings, InMemoryListingStore};
use aqarkam_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("AQARKAM_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("warning: failed to load config: {e}; using defaults");
            Settings::default()
        }
    };

    init_tracing();
    tracing::info!("starting aqarkam chat server v{}", env!("CARGO_PKG_VERSION"));

    let nlu = NluConfig::load_or_default(settings.chat.nlu_config_path.as_deref());
    let store = Arc::new(InMemoryListingStore::with_listings(
        settings.chat.search_limit,
        sample_listings(),
    ));
    tracing::info!(listings = store.len(), "listing store seeded");

    let chatbot = Arc::new(Chatbot::new(&settings.chat, nlu, store));

    // Best-effort background training; requests arriving before it
    // completes are served in fallback-only mode.
    let trainer = chatbot.clone();
    tokio::spawn(async move {
        trainer.train_classifier();
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let state = AppState::new(settings, chatbot);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
