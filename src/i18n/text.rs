//! Localized text values and their fallback resolution.
//!
//! Every piece of site copy is either a plain string (the same in both
//! languages) or a map from locale code to string. Resolution is total:
//! requested locale first, then Indonesian, then English, then the empty
//! string. A missing variant degrades the display, it never fails.

use crate::i18n::Locale;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A text value from the content document.
///
/// Deserializes from either a JSON string or a `{"id": ..., "en": ...}`
/// object. The map is keyed by raw locale codes so that a document carrying
/// an unexpected extra language still loads; resolution only ever consults
/// the two supported codes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Locale-invariant text.
    Plain(String),
    /// Per-locale variants keyed by language code.
    PerLocale(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Resolve to a displayable string for the requested locale.
    ///
    /// Fallback order for the map form: requested locale, then `id`, then
    /// `en`, then `""`. Plain text is returned unchanged regardless of the
    /// locale.
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::PerLocale(map) => map
                .get(locale.code())
                .or_else(|| map.get("id"))
                .or_else(|| map.get("en"))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Whether a variant is stored for the given locale (no fallback).
    ///
    /// Plain text counts as present for every locale. Used by the content
    /// audit to flag fields that would only render via fallback.
    pub fn has_variant(&self, locale: Locale) -> bool {
        match self {
            LocalizedText::Plain(_) => true,
            LocalizedText::PerLocale(map) => map.contains_key(locale.code()),
        }
    }

    /// Whether resolution degrades to the empty string for every locale.
    pub fn is_empty_everywhere(&self) -> bool {
        match self {
            LocalizedText::Plain(text) => text.is_empty(),
            LocalizedText::PerLocale(map) => {
                !map.contains_key("id") && !map.contains_key("en")
            }
        }
    }
}
