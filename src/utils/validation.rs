use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The value is tested as typed, not trimmed.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
