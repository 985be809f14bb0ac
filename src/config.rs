use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the site listens on
    pub port: u16,

    /// Path to the content document (JSON)
    pub content_file: String,

    /// External form-handling backend the contact form posts to
    pub form_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            content_file: std::env::var("CONTENT_FILE")
                .unwrap_or_else(|_| "data/content.json".to_string()),

            // Contact form backend (external SaaS endpoint)
            form_endpoint: std::env::var("FORM_ENDPOINT")
                .context("FORM_ENDPOINT not set")?,
        })
    }
}
