//! Bilingual (Indonesian/English) website for an English language school.
//!
//! The whole site is driven by a single static content document loaded at
//! startup: course catalog, testimonials, contact settings, and per-locale
//! page copy. Pages are rendered on the server; the display language is an
//! explicit per-request value, toggled by a link in the header.

pub mod config;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod links;
pub mod pages;
pub mod server;
