//! Content-document completeness audit.
//!
//! Run once at startup against the loaded document. A field missing one of
//! the two locale variants still renders through the fallback chain, so it
//! is only a warning; a field with no usable variant at all, or a duplicate
//! course slug, is an error. Neither is fatal: the audit is logged and the
//! site serves whatever the document contains.

use crate::content::SiteContent;
use crate::i18n::{Locale, LocalizedText};
use std::collections::HashSet;

/// Audit findings for a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Fields that will render empty, duplicate slugs, and the like.
    pub errors: Vec<String>,

    /// Fields that only render via locale fallback.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the content document.
pub struct ContentValidator;

impl ContentValidator {
    /// Audit a loaded content document.
    ///
    /// Checks performed:
    /// - every localized leaf field has at least one usable variant (error)
    ///   and ideally both (warning)
    /// - course slugs are unique after normalization (error)
    /// - every testimonial's `courseId` points at an existing course
    ///   (warning; rendering omits the course label when it doesn't)
    /// - testimonial ratings fit the 0..=5 display range (warning)
    pub fn audit(content: &SiteContent) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_text(&mut report, "site.metaDescription", &content.site.meta_description);
        Self::check_text(&mut report, "settings.address", &content.settings.address);

        let mut seen_slugs: HashSet<String> = HashSet::new();
        for course in &content.courses {
            let prefix = format!("courses[{}]", course.id);

            let normalized = course.slug.trim().to_lowercase();
            if !seen_slugs.insert(normalized) {
                report
                    .errors
                    .push(format!("{}: duplicate slug '{}'", prefix, course.slug));
            }

            Self::check_text(&mut report, &format!("{}.title", prefix), &course.title);
            Self::check_text(
                &mut report,
                &format!("{}.shortDescription", prefix),
                &course.short_description,
            );
            Self::check_text(
                &mut report,
                &format!("{}.longDescription", prefix),
                &course.long_description,
            );
            Self::check_text(&mut report, &format!("{}.schedule", prefix), &course.schedule);

            for (i, bullet) in course.bullets.iter().enumerate() {
                Self::check_text(&mut report, &format!("{}.bullets[{}]", prefix, i), bullet);
            }
        }

        for testimonial in &content.testimonials {
            let prefix = format!("testimonials[{}]", testimonial.id);

            Self::check_text(&mut report, &format!("{}.text", prefix), &testimonial.text);

            if content.course_by_id(&testimonial.course_id).is_none() {
                report.warnings.push(format!(
                    "{}: courseId '{}' does not match any course",
                    prefix, testimonial.course_id
                ));
            }

            if testimonial.rating > 5 {
                report.warnings.push(format!(
                    "{}: rating {} exceeds 5 and will be clamped",
                    prefix, testimonial.rating
                ));
            }
        }

        report
    }

    fn check_text(report: &mut ValidationReport, field: &str, text: &LocalizedText) {
        if text.is_empty_everywhere() {
            report
                .errors
                .push(format!("{}: no usable locale variant, renders empty", field));
            return;
        }

        for locale in [Locale::Id, Locale::En] {
            if !text.has_variant(locale) {
                report.warnings.push(format!(
                    "{}: missing '{}' variant, will fall back",
                    field,
                    locale.code()
                ));
            }
        }
    }
}
