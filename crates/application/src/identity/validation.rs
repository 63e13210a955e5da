use once_cell::sync::Lazy;
use regex::Regex;

/// Username rule: lowercase alphanumeric plus underscore, 3-32 chars.
/// Candidates are lowercased before this is checked.
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]{3,32}$").expect("username regex"));

/// Normalizes a raw candidate the way the claim flow stores it.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}
