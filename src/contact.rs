//! Contact form submission to the external form-handling backend.
//!
//! One URL-encoded POST per user click, success is any 2xx, and failure is
//! surfaced to the user as a fixed message with their input left intact for
//! a manual retry. No automatic retry, no idempotency key.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Name the backend files submissions under (`form-name` field).
pub const FORM_NAME: &str = "contact";

/// The five fields collected by the contact form.
///
/// Doubles as the axum `Form` extractor type for `POST /contact` and the
/// payload serialized toward the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub message: String,
}

/// Why a submission did not go through. Both variants collapse to the same
/// fixed user-facing error message; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to reach form backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("form backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Submit the form to the backend with a single URL-encoded POST.
///
/// The body carries `form-name=contact` plus the five fields; the
/// `Content-Type: application/x-www-form-urlencoded` header comes with
/// reqwest's form encoding.
pub async fn submit(
    client: &reqwest::Client,
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let response = client
        .post(endpoint)
        .form(&[
            ("form-name", FORM_NAME),
            ("name", submission.name.as_str()),
            ("email", submission.email.as_str()),
            ("phone", submission.phone.as_str()),
            ("course", submission.course.as_str()),
            ("message", submission.message.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SubmitError::Status(response.status()));
    }

    info!("Contact form submission delivered");
    Ok(())
}
