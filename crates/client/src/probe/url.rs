//! URL validation for user-supplied probe targets.

/// Error type for URL validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Validate a raw, typically attacker-controlled string as an absolute
/// http(s) URL.
///
/// Only surrounding whitespace is stripped; no scheme is inferred
/// (`example.com` is rejected) and path, query, and fragment pass through
/// unchanged. The returned URL is what the probe targets; cache-key
/// canonicalization happens separately.
pub fn validate(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    // The parser lowercases the scheme, so HTTP:// matches here.
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_basic() {
        let url = validate("https://example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_http_allowed() {
        let url = validate("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_validate_uppercase_scheme() {
        let url = validate("HTTP://EXAMPLE.COM").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_no_scheme_rejected() {
        let result = validate("example.com");
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_empty() {
        let result = validate("");
        assert!(matches!(result, Err(UrlError::Empty)));
    }

    #[test]
    fn test_validate_whitespace_only() {
        let result = validate("   ");
        assert!(matches!(result, Err(UrlError::Empty)));
    }

    #[test]
    fn test_validate_trim_whitespace() {
        let url = validate("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_validate_not_a_url() {
        let result = validate("not a url");
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_ftp_rejected() {
        let result = validate("ftp://x");
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(s)) if s == "ftp"));
    }

    #[test]
    fn test_validate_javascript_rejected() {
        let result = validate("javascript:alert(1)");
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(s)) if s == "javascript"));
    }

    #[test]
    fn test_validate_preserves_path_and_query() {
        let url = validate("https://example.com/a?b=1").unwrap();
        assert_eq!(url.path(), "/a");
        assert_eq!(url.query(), Some("b=1"));
    }

    #[test]
    fn test_validate_preserves_fragment() {
        let url = validate("https://example.com/page#section").unwrap();
        assert_eq!(url.fragment(), Some("section"));
    }
}
