//! Cache key derivation from canonicalized URLs.

use sha2::{Digest, Sha256};
use url::Url;

/// Canonical string form of a URL, used only for cache-key derivation.
///
/// The parser has already lowercased the scheme and host; the only change
/// applied here is trimming a single trailing slash, so `https://example.com`
/// and `https://example.com/` share a key. The probe never sees this form;
/// it always targets the URL exactly as validated.
pub fn canonical_form(url: &Url) -> String {
    let s = url.as_str();
    s.strip_suffix('/').unwrap_or(s).to_string()
}

/// Compute the cache key for a URL: a SHA-256 digest of its canonical form.
pub fn fingerprint(url: &Url) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_form(url).as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_fingerprint_stability() {
        let hash1 = fingerprint(&parse("https://example.com/a?b=1"));
        let hash2 = fingerprint(&parse("https://example.com/a?b=1"));
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_fingerprint_trailing_slash_normalized() {
        let bare = fingerprint(&parse("https://example.com"));
        let slashed = fingerprint(&parse("https://example.com/"));
        assert_eq!(bare, slashed);
    }

    #[test]
    fn test_fingerprint_case_insensitive_host() {
        let upper = fingerprint(&parse("HTTPS://EXAMPLE.COM/path"));
        let lower = fingerprint(&parse("https://example.com/path"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_fingerprint_distinct_urls() {
        let a = fingerprint(&parse("https://example.com/a"));
        let b = fingerprint(&parse("https://example.com/b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_scheme_matters() {
        let http = fingerprint(&parse("http://example.com"));
        let https = fingerprint(&parse("https://example.com"));
        assert_ne!(http, https);
    }

    #[test]
    fn test_fingerprint_format() {
        let hash = fingerprint(&parse("https://example.com"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_canonical_form_preserves_query() {
        let form = canonical_form(&parse("https://example.com/a?b=1&c=2"));
        assert_eq!(form, "https://example.com/a?b=1&c=2");
    }

    #[test]
    fn test_canonical_form_trims_path_slash() {
        let form = canonical_form(&parse("https://example.com/a/"));
        assert_eq!(form, "https://example.com/a");
    }
}
