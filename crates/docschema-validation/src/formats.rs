//! Format validation for string-backed kinds

use once_cell::sync::Lazy;
use regex::Regex;

/// URL regex pattern (http/https)
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

/// Validate URL format (http/https)
///
/// # Example
/// ```
/// use docschema_validation::formats::validate_url;
///
/// assert!(validate_url("https://www.transfermarkt.com/player"));
/// assert!(validate_url("http://localhost:8080/path"));
/// assert!(!validate_url("ftp://example.com"));
/// ```
pub fn validate_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(validate_url("https://youtube.com/watch?v=abc"));
        assert!(validate_url("https://drive.google.com/file/d/1"));
        assert!(!validate_url("youtube.com/watch"));
        assert!(!validate_url("https://"));
        assert!(!validate_url("https://exa mple.com"));
        assert!(!validate_url(""));
    }
}
