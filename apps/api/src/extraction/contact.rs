//! Email and phone detection.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("valid email regex"));

static LABELED_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)e-?mail\s*:\s*([\w.+-]+@[\w-]+\.[\w.-]+)").expect("valid labeled email regex")
});

// Optional country code, optional (area code), then a 3-4 digit local number.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?(\d{3}[-.\s]?\d{4})")
        .expect("valid phone regex")
});

/// First email address in the text, falling back to an `E-mail:` labelled one.
pub fn extract_email(text: &str) -> Option<String> {
    if let Some(m) = EMAIL_RE.find(text) {
        return Some(m.as_str().to_string());
    }
    LABELED_EMAIL_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First phone-like digit run. Years and other long numbers can false-positive.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|phone| !phone.is_empty())
}
