//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic lives here: the two-value locale selector,
//! localized text values with their fallback resolution, and the startup
//! audit of the content document.
//!
//! # Architecture
//!
//! - `locale`: validated `Locale` type (Indonesian default, English) with
//!   the toggle operation the header language switch is built on
//! - `text`: `LocalizedText` values and the total fallback chain
//!   (requested locale → `id` → `en` → empty string)
//! - `validator`: completeness audit reporting missing variants before
//!   they degrade into silent fallbacks in production
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, LocalizedText};
//!
//! let locale = Locale::from_code("en")?;
//! let title: LocalizedText = serde_json::from_str(r#"{"id":"Kursus","en":"Courses"}"#)?;
//! assert_eq!(title.resolve(locale), "Courses");
//! ```

mod locale;
mod text;
mod validator;

pub use locale::Locale;
pub use text::LocalizedText;
pub use validator::{ContentValidator, ValidationReport};
