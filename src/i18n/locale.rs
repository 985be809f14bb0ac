//! Locale type: the two-value display-language selector.
//!
//! The site is bilingual: Indonesian (`id`, the default) and English (`en`).
//! A `Locale` is resolved per request from the `lang` query parameter and
//! threaded explicitly through rendering; there is no ambient global flag.

use anyhow::{bail, Result};
use std::fmt;

/// A validated display locale.
///
/// Only the two supported locales can be constructed; `from_code` rejects
/// everything else so that a bad caller fails loudly instead of silently
/// rendering the wrong language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Indonesian (default).
    Id,
    /// English.
    En,
}

impl Locale {
    /// Create a Locale from a two-letter language code.
    ///
    /// # Returns
    /// * `Ok(Locale)` for `"id"` or `"en"`
    /// * `Err` for any other code
    pub fn from_code(code: &str) -> Result<Locale> {
        match code {
            "id" => Ok(Locale::Id),
            "en" => Ok(Locale::En),
            other => bail!("Unknown locale code: '{}'", other),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        match self {
            Locale::Id => "Indonesian",
            Locale::En => "English",
        }
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Id => "Bahasa Indonesia",
            Locale::En => "English",
        }
    }

    /// Flip to the other locale unconditionally.
    ///
    /// This backs the header language toggle: the link for the current page
    /// points at the same path with `?lang=` set to `self.toggle().code()`.
    pub fn toggle(&self) -> Locale {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }

    /// Label shown on the toggle button: the code of the locale you would
    /// switch to, uppercased ("EN" while viewing Indonesian and vice versa).
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Locale::Id => "EN",
            Locale::En => "ID",
        }
    }
}

impl Default for Locale {
    /// The site defaults to Indonesian.
    fn default() -> Self {
        Locale::Id
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_indonesian() {
        let locale = Locale::from_code("id").expect("Should succeed");
        assert_eq!(locale, Locale::Id);
        assert_eq!(locale.code(), "id");
        assert_eq!(locale.name(), "Indonesian");
    }

    #[test]
    fn test_from_code_english() {
        let locale = Locale::from_code("en").expect("Should succeed");
        assert_eq!(locale, Locale::En);
        assert_eq!(locale.code(), "en");
        assert_eq!(locale.name(), "English");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_from_code_rejects_uppercase() {
        // Query parsing lowercases before calling; the type itself is strict.
        assert!(Locale::from_code("ID").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_indonesian() {
        assert_eq!(Locale::default(), Locale::Id);
    }

    // ==================== toggle Tests ====================

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Locale::Id.toggle(), Locale::En);
        assert_eq!(Locale::En.toggle(), Locale::Id);
    }

    #[test]
    fn test_toggle_is_involution() {
        for locale in [Locale::Id, Locale::En] {
            assert_eq!(locale.toggle().toggle(), locale);
        }
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(Locale::Id.toggle_label(), "EN");
        assert_eq!(Locale::En.toggle_label(), "ID");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Locale::Id.to_string(), "id");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Locale::Id.native_name(), "Bahasa Indonesia");
        assert_eq!(Locale::En.native_name(), "English");
    }

    #[test]
    fn test_locale_copy() {
        let a = Locale::En;
        let b = a;
        assert_eq!(a, b);
    }
}
