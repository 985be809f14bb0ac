//! axum router and request handlers.
//!
//! Every route is a GET-rendered HTML page; the only mutation anywhere is
//! `POST /contact`, which forwards the form once to the external backend.
//! The display locale is resolved per request from the `lang` query
//! parameter and defaults to Indonesian. Nothing about it is persisted, so
//! a new visit starts in the default language again.

use crate::config::Config;
use crate::contact::{self, ContactSubmission};
use crate::content::SiteContent;
use crate::i18n::Locale;
use crate::pages::{self, FormStatus};
use anyhow::{Context, Result};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only application state.
pub struct AppState {
    pub config: Config,
    pub content: SiteContent,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    lang: Option<String>,
}

impl LocaleQuery {
    /// Resolve the request locale. Unknown codes are logged and fall back
    /// to the default rather than failing the request.
    fn locale(&self) -> Locale {
        match self.lang.as_deref() {
            None => Locale::default(),
            Some(code) => match Locale::from_code(&code.to_lowercase()) {
                Ok(locale) => locale,
                Err(_) => {
                    warn!("Ignoring unknown locale code '{}'", code);
                    Locale::default()
                }
            },
        }
    }
}

/// Build the site router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/courses", get(courses))
        .route("/courses/:slug", get(course_detail))
        .route("/pricing", get(pricing))
        .route("/about", get(about))
        .route("/testimonials", get(testimonials))
        .route("/contact", get(contact_page).post(contact_submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn home(State(state): State<Arc<AppState>>, Query(query): Query<LocaleQuery>) -> Html<String> {
    Html(pages::home(&state.content, query.locale()))
}

async fn courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Html<String> {
    Html(pages::courses(&state.content, query.locale()))
}

async fn course_detail(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    let locale = query.locale();

    match state.content.course_by_slug(&slug) {
        Some(course) => (
            StatusCode::OK,
            Html(pages::course_detail(&state.content, locale, course)),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Html(pages::course_not_found(&state.content, locale)),
        ),
    }
}

async fn pricing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Html<String> {
    Html(pages::pricing(&state.content, query.locale()))
}

async fn about(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Html<String> {
    Html(pages::about(&state.content, query.locale()))
}

async fn testimonials(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Html<String> {
    Html(pages::testimonials(&state.content, query.locale()))
}

async fn contact_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Html<String> {
    Html(pages::contact(
        &state.content,
        query.locale(),
        None,
        &ContactSubmission::default(),
    ))
}

/// Forward the submission once and re-render the page with the outcome.
///
/// On failure the visitor's input is rendered back into the form so they
/// can retry; on success the form comes back empty.
async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    Form(submission): Form<ContactSubmission>,
) -> Html<String> {
    let locale = query.locale();

    match contact::submit(&state.client, &state.config.form_endpoint, &submission).await {
        Ok(()) => Html(pages::contact(
            &state.content,
            locale,
            Some(FormStatus::Sent),
            &ContactSubmission::default(),
        )),
        Err(err) => {
            warn!("Contact form submission failed: {}", err);
            Html(pages::contact(
                &state.content,
                locale,
                Some(FormStatus::Failed),
                &submission,
            ))
        }
    }
}
