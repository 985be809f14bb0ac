//! Outbound link builders: WhatsApp deep links, YouTube embeds and
//! thumbnails, tel: and mailto: links.
//!
//! All pure string mapping. A URL that doesn't match a recognized shape
//! degrades to a placeholder, never an error.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::OnceLock;

/// Image served when a course has no recognizable video URL.
pub const VIDEO_PLACEHOLDER: &str = "/images/video-placeholder.jpg";

/// Characters escaped in the WhatsApp message parameter.
///
/// Matches `encodeURIComponent` semantics: everything except alphanumerics
/// and `- _ . ! ~ * ' ( )` is percent-encoded, so the deep link behaves the
/// same as one produced by the browser.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static YOUTUBE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Build a `wa.me` deep link for a phone number and optional prefilled
/// message.
///
/// All non-digit characters are stripped from the phone number. An empty
/// message omits the `text` query parameter entirely.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if message.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        let encoded = utf8_percent_encode(message, MESSAGE_ENCODE_SET);
        format!("https://wa.me/{}?text={}", digits, encoded)
    }
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Recognizes `youtu.be/<id>`, `youtube.com/watch?v=<id>`,
/// `youtube.com/embed/<id>` and `youtube.com/v/<id>` shapes. Anything else
/// yields `None`.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let regex = YOUTUBE_ID_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("YouTube id pattern is valid")
    });

    regex
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Thumbnail quality variants served by `img.youtube.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    Default,
    HqDefault,
    MaxResDefault,
}

impl ThumbnailQuality {
    fn as_str(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::HqDefault => "hqdefault",
            ThumbnailQuality::MaxResDefault => "maxresdefault",
        }
    }
}

/// Thumbnail URL for a YouTube video, or the placeholder image when the
/// video id cannot be extracted.
pub fn youtube_thumbnail(video_url: &str, quality: ThumbnailQuality) -> String {
    match youtube_video_id(video_url) {
        Some(id) => format!("https://img.youtube.com/vi/{}/{}.jpg", id, quality.as_str()),
        None => VIDEO_PLACEHOLDER.to_string(),
    }
}

/// `tel:` link for a display phone number.
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// `mailto:` link for an email address.
pub fn mailto_url(email: &str) -> String {
    format!("mailto:{}", email)
}
