//! The static content document: every piece of site copy, the course
//! catalog, testimonials, and contact settings.
//!
//! The document is a single JSON file loaded once at startup and treated as
//! read-only for the lifetime of the process. No entity is created, updated,
//! or deleted at runtime.

use crate::i18n::{Locale, LocalizedText};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A pair of values, one per supported locale.
///
/// Used for sections the document stores fully duplicated per language
/// (navigation labels, page copy, business hours), as opposed to leaf
/// strings which use [`LocalizedText`].
#[derive(Debug, Clone, Deserialize)]
pub struct PerLocale<T> {
    pub id: T,
    pub en: T,
}

impl<T> PerLocale<T> {
    /// Select the variant for the given locale.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Id => &self.id,
            Locale::En => &self.en,
        }
    }
}

/// Top-level site metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    pub title: String,
    pub meta_description: LocalizedText,
    pub url: String,
    pub logo: String,
    #[serde(default)]
    pub keywords: String,
}

/// Contact details and opening hours.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub phone: String,
    pub whatsapp: String,
    pub contact_email: String,
    pub address: LocalizedText,
    pub business_hours: PerLocale<BusinessHours>,
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
}

/// Header/footer navigation labels for one locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub home: String,
    pub courses: String,
    pub pricing: String,
    pub about: String,
    pub testimonials: String,
    pub contact: String,
}

/// Homepage copy for one locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub hero: Hero,
    pub why_choose_us: WhyChooseUs,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub hero_image: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUs {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// About page copy for one locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub values: Vec<Feature>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Contact page copy for one locale, including the form labels and the two
/// fixed outcome messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub title: String,
    pub subtitle: String,
    pub form_title: String,
    pub form_fields: FormFields,
    pub submit_button: String,
    pub success_message: String,
    pub error_message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: String,
}

/// One course in the catalog. Defined entirely in the content document and
/// immutable at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub slug: String,
    pub title: LocalizedText,
    pub short_description: LocalizedText,
    pub long_description: LocalizedText,
    pub schedule: LocalizedText,
    pub bullets: Vec<LocalizedText>,
    pub level: String,
    pub age_group: String,
    pub duration: String,
    pub price_display: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A student testimonial, keyed to a course by its stable id rather than by
/// the course's display title (which changes with the locale).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub course_id: String,
    pub rating: u8,
    pub text: LocalizedText,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Testimonial {
    /// Star rating clamped to the displayable 0..=5 range.
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

/// The full content document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub site: SiteMeta,
    pub settings: Settings,
    pub navigation: PerLocale<Navigation>,
    pub homepage: PerLocale<Homepage>,
    pub about: PerLocale<AboutPage>,
    pub contact: PerLocale<ContactPage>,
    pub courses: Vec<Course>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Load and parse the content document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        let content: SiteContent = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse content file {}", path.display()))?;
        Ok(content)
    }

    /// Find a course by its URL slug.
    ///
    /// Matching normalizes case and surrounding whitespace on both sides, so
    /// `/courses/Kursus-Anak` resolves the same course as
    /// `/courses/kursus-anak`. Canonical links are unaffected since
    /// [`slugify`] output is already lowercase.
    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        let wanted = slug.trim().to_lowercase();
        self.courses
            .iter()
            .find(|course| course.slug.trim().to_lowercase() == wanted)
    }

    /// Find a course by its stable id (exact match).
    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}

/// Derive a URL-safe slug from a title.
///
/// Lowercases, strips characters outside letters/digits/whitespace/hyphen,
/// collapses whitespace runs into single hyphens, collapses repeated
/// hyphens, and trims hyphens from both ends. Total for any input.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        }
        // Everything else (punctuation, symbols) is dropped.
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Format a Rupiah amount for display: `Rp 1.500.000` (dot thousands
/// grouping, no decimals), matching the Indonesian currency convention used
/// throughout the site.
pub fn format_price(rupiah: u64) -> String {
    let digits = rupiah.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("Rp {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course(id: &str, slug: &str) -> Course {
        Course {
            id: id.to_string(),
            slug: slug.to_string(),
            title: LocalizedText::Plain(format!("Course {}", id)),
            short_description: LocalizedText::Plain("short".to_string()),
            long_description: LocalizedText::Plain("long".to_string()),
            schedule: LocalizedText::Plain("Mon-Fri".to_string()),
            bullets: vec![],
            level: "Beginner".to_string(),
            age_group: "7-12".to_string(),
            duration: "3 bulan".to_string(),
            price_display: "Rp 500.000 / bulan".to_string(),
            video_url: None,
            image: None,
        }
    }

    fn content_with_courses(courses: Vec<Course>) -> SiteContent {
        let json = r#"{
            "site": {
                "title": "Test School",
                "metaDescription": {"id": "Deskripsi", "en": "Description"},
                "url": "https://example.com",
                "logo": "/images/logo.png"
            },
            "settings": {
                "phone": "+62 21 555 0123",
                "whatsapp": "+62 812-3456-7890",
                "contactEmail": "info@example.com",
                "address": {"id": "Jl. Sudirman 1", "en": "1 Sudirman St"},
                "businessHours": {
                    "id": {"weekdays": "Senin - Jumat: 09.00 - 20.00", "saturday": "Sabtu: 09.00 - 15.00", "sunday": "Minggu: Tutup"},
                    "en": {"weekdays": "Monday - Friday: 9am - 8pm", "saturday": "Saturday: 9am - 3pm", "sunday": "Sunday: Closed"}
                },
                "socialMedia": {"facebook": "https://facebook.com/x", "instagram": "https://instagram.com/x", "youtube": "https://youtube.com/@x"}
            },
            "navigation": {
                "id": {"home": "Beranda", "courses": "Kursus", "pricing": "Harga", "about": "Tentang", "testimonials": "Testimoni", "contact": "Kontak"},
                "en": {"home": "Home", "courses": "Courses", "pricing": "Pricing", "about": "About", "testimonials": "Testimonials", "contact": "Contact"}
            },
            "homepage": {
                "id": {"hero": {"title": "Judul", "subtitle": "Sub", "ctaPrimary": "Daftar", "ctaSecondary": "Lihat", "heroImage": "/images/hero.jpg"},
                        "whyChooseUs": {"title": "Kenapa", "subtitle": "Sub", "features": []}},
                "en": {"hero": {"title": "Title", "subtitle": "Sub", "ctaPrimary": "Register", "ctaSecondary": "Browse", "heroImage": "/images/hero.jpg"},
                        "whyChooseUs": {"title": "Why", "subtitle": "Sub", "features": []}}
            },
            "about": {
                "id": {"title": "Tentang", "subtitle": "Sub", "description": "Desc", "mission": "Misi", "vision": "Visi", "values": [], "stats": []},
                "en": {"title": "About", "subtitle": "Sub", "description": "Desc", "mission": "Mission", "vision": "Vision", "values": [], "stats": []}
            },
            "contact": {
                "id": {"title": "Kontak", "subtitle": "Sub", "formTitle": "Kirim Pesan",
                        "formFields": {"name": "Nama", "email": "Email", "phone": "Telepon", "course": "Kursus", "message": "Pesan"},
                        "submitButton": "Kirim", "successMessage": "Terkirim!", "errorMessage": "Gagal."},
                "en": {"title": "Contact", "subtitle": "Sub", "formTitle": "Send a Message",
                        "formFields": {"name": "Name", "email": "Email", "phone": "Phone", "course": "Course", "message": "Message"},
                        "submitButton": "Send", "successMessage": "Sent!", "errorMessage": "Failed."}
            },
            "courses": [],
            "testimonials": []
        }"#;
        let mut content: SiteContent = serde_json::from_str(json).expect("fixture parses");
        content.courses = courses;
        content
    }

    // ==================== Slug Lookup Tests ====================

    #[test]
    fn test_course_by_slug_exact_match() {
        let content = content_with_courses(vec![
            sample_course("kids", "kursus-anak-anak"),
            sample_course("teens", "kursus-remaja"),
        ]);

        let found = content.course_by_slug("kursus-remaja").expect("found");
        assert_eq!(found.id, "teens");
    }

    #[test]
    fn test_course_by_slug_not_found() {
        let content = content_with_courses(vec![sample_course("kids", "kursus-anak-anak")]);
        assert!(content.course_by_slug("kursus-dewasa").is_none());
    }

    #[test]
    fn test_course_by_slug_normalizes_case() {
        let content = content_with_courses(vec![sample_course("kids", "kursus-anak-anak")]);
        let found = content.course_by_slug("Kursus-Anak-Anak").expect("found");
        assert_eq!(found.id, "kids");
    }

    #[test]
    fn test_course_by_slug_trims_whitespace() {
        let content = content_with_courses(vec![sample_course("kids", "kursus-anak-anak")]);
        assert!(content.course_by_slug("  kursus-anak-anak ").is_some());
    }

    #[test]
    fn test_course_by_slug_empty_catalog() {
        let content = content_with_courses(vec![]);
        assert!(content.course_by_slug("anything").is_none());
    }

    #[test]
    fn test_course_by_id_exact_only() {
        let content = content_with_courses(vec![sample_course("kids", "kursus-anak-anak")]);
        assert!(content.course_by_id("kids").is_some());
        assert!(content.course_by_id("KIDS").is_none());
    }

    // ==================== slugify Tests ====================

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Kursus Anak-Anak!!"), "kursus-anak-anak");
    }

    #[test]
    fn test_slugify_collapses_spaces() {
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("English For Professionals"), "english-for-professionals");
    }

    #[test]
    fn test_slugify_collapses_repeated_hyphens() {
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_slugify_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_already_clean() {
        assert_eq!(slugify("kursus-remaja"), "kursus-remaja");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Persiapan TOEFL & IELTS");
        assert_eq!(slugify(&once), once);
    }

    // ==================== format_price Tests ====================

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1_500_000), "Rp 1.500.000");
    }

    #[test]
    fn test_format_price_small_amounts() {
        assert_eq!(format_price(0), "Rp 0");
        assert_eq!(format_price(999), "Rp 999");
        assert_eq!(format_price(1_000), "Rp 1.000");
    }

    // ==================== Document Parsing Tests ====================

    #[test]
    fn test_testimonial_stars_clamped() {
        let testimonial = Testimonial {
            id: "t1".to_string(),
            name: "Sari".to_string(),
            role: "Orang Tua".to_string(),
            course_id: "kids".to_string(),
            rating: 9,
            text: LocalizedText::Plain("Bagus".to_string()),
            photo_url: None,
        };
        assert_eq!(testimonial.stars(), 5);
    }

    #[test]
    fn test_per_locale_get() {
        let content = content_with_courses(vec![]);
        assert_eq!(content.navigation.get(Locale::Id).home, "Beranda");
        assert_eq!(content.navigation.get(Locale::En).home, "Home");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = SiteContent::load("/nonexistent/content.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
