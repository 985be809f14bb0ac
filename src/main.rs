use anyhow::Result;
use english_school_site::config::Config;
use english_school_site::content::SiteContent;
use english_school_site::i18n::ContentValidator;
use english_school_site::server::{self, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("english_school_site=info".parse()?),
        )
        .init();

    info!("Starting site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Load the content document once; it is read-only from here on
    info!("Loading content document from {}", config.content_file);
    let content = SiteContent::load(&config.content_file)?;
    info!(
        "Loaded {} courses and {} testimonials",
        content.courses.len(),
        content.testimonials.len()
    );

    // Audit locale completeness; degraded fields fall back at render time
    let report = ContentValidator::audit(&content);
    for error in &report.errors {
        warn!("Content error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Content warning: {}", warning);
    }
    if report.is_clean() {
        info!("Content document audit clean");
    }

    let state = Arc::new(AppState {
        config,
        content,
        client: reqwest::Client::new(),
    });

    server::run(state).await
}
