mod config;
mod errors;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::screening::skills::SkillExtractor;
use crate::screening::tokenizer::Tokenizer;
use crate::screening::vocabulary::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    let extractor = build_extractor(&config)?;
    info!(
        "Skill extractor initialized ({} skills, {} matching, failure policy: {})",
        extractor.vocabulary().len(),
        extractor.strategy(),
        config.failure_policy
    );

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(extractor),
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

/// Loads the vocabulary and builds the tokenizer. Either failing stops startup.
fn build_extractor(config: &Config) -> Result<SkillExtractor> {
    let vocabulary = match &config.skills_file {
        Some(path) => {
            info!("Loading skill vocabulary from {}", path.display());
            SkillVocabulary::from_file(path)?
        }
        None => SkillVocabulary::builtin(),
    };
    let tokenizer = Tokenizer::new().context("Tokenizer initialization failed")?;

    Ok(SkillExtractor::new(
        tokenizer,
        vocabulary,
        config.skill_matching,
    ))
}
