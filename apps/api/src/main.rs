use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scorecard_api::config::Config;
use scorecard_api::routes::build_router;
use scorecard_api::scoring::junk::JunkFilter;
use scorecard_api::scoring::vocabulary::Vocabulary;
use scorecard_api::scoring::ResumeScorer;
use scorecard_api::state::AppState;
use scorecard_api::suggestions::client::HttpSuggestionProvider;
use scorecard_api::suggestions::SuggestionProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scorecard API v{}", env!("CARGO_PKG_VERSION"));

    // Scoring tables are built once and shared read-only
    let vocab = Vocabulary::builtin();
    info!("Skill vocabulary loaded: {} canonical skills", vocab.entries().len());
    let junk = JunkFilter::new().with_extra_terms(&config.junk_extra_terms);
    if !config.junk_extra_terms.is_empty() {
        info!(
            "Junk filter extended with {} extra terms",
            config.junk_extra_terms.len()
        );
    }
    let scorer = Arc::new(ResumeScorer::new(vocab, junk));

    // Suggestion collaborator (optional)
    let suggestions: Option<Arc<dyn SuggestionProvider>> = match &config.suggestion_service_url {
        Some(url) => {
            let provider = HttpSuggestionProvider::new(
                url.clone(),
                Duration::from_secs(config.suggestion_timeout_secs),
            )?;
            info!("Suggestion service: {url}");
            Some(Arc::new(provider))
        }
        None => {
            info!("SUGGESTION_SERVICE_URL not set; suggestions disabled");
            None
        }
    };

    let state = AppState {
        scorer,
        suggestions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the dashboard host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
