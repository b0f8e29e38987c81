//! Canonical URL normalization.
//!
//! Maps the many surface forms of a page URL (scheme case, `www.` prefix,
//! trailing slash, fragment, tracking query parameters, parameter order)
//! onto a single canonical string. The canonical string is the identity
//! every rating joins on, so applying [`normalize`] to its own output must
//! return the same string.

use url::Url;

/// Query keys dropped during normalization, compared case-insensitively.
/// Product policy constants; `utm_`-prefixed keys are dropped separately.
const TRACKING_KEYS: [&str; 5] = ["gclid", "fbclid", "ref", "source", "share"];

/// Error returned when input cannot be canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The input was unparseable or lacked a scheme or host.
    #[error("invalid URL: missing scheme or host")]
    InvalidUrl,
}

/// Normalizes a raw URL into its canonical form.
///
/// The scheme is forced to `https`, the host is lower-cased and a single
/// leading `www.` is removed, one trailing slash is stripped from the path,
/// the fragment is dropped, tracking query parameters are removed, and the
/// surviving parameters are re-serialized with lower-cased keys in ascending
/// key order. Bare domain strings without a scheme are rejected, not
/// upgraded.
pub fn normalize(raw: &str) -> Result<String, NormalizeError> {
    let parsed = Url::parse(raw).map_err(|_| NormalizeError::InvalidUrl)?;

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_ascii_lowercase(),
        _ => return Err(NormalizeError::InvalidUrl),
    };
    let host = host.strip_prefix("www.").unwrap_or(&host);

    // One trailing slash only: `/a/` becomes `/a`, `/` becomes no path.
    let path = parsed.path();
    let path = path.strip_suffix('/').unwrap_or(path);

    let query = filter_query(&parsed);

    let mut canonical = format!("https://{}", host);
    if let Some(port) = parsed.port() {
        canonical.push_str(&format!(":{}", port));
    }
    canonical.push_str(path);
    if let Some(query) = query {
        canonical.push('?');
        canonical.push_str(&query);
    }

    Ok(canonical)
}

/// Drops tracking parameters, lower-cases the surviving keys, and re-encodes
/// them sorted by key. Returns `None` when no parameters survive.
fn filter_query(parsed: &Url) -> Option<String> {
    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .filter_map(|(key, value)| {
            let key = key.to_lowercase();
            if key.starts_with("utm_") || TRACKING_KEYS.contains(&key.as_str()) {
                None
            } else {
                Some((key, value.into_owned()))
            }
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    // Stable sort keeps the relative value order under a repeated key.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    Some(serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(input: &str) -> String {
        normalize(input).expect("should normalize")
    }

    #[test]
    fn keeps_already_canonical_urls() {
        assert_eq!(
            canonical("https://example.com/article"),
            "https://example.com/article"
        );
    }

    #[test]
    fn folds_scheme_and_host_case() {
        assert_eq!(
            canonical("HTTPS://EXAMPLE.COM/article"),
            "https://example.com/article"
        );
    }

    #[test]
    fn strips_www_prefix() {
        assert_eq!(
            canonical("https://www.example.com/article"),
            "https://example.com/article"
        );
    }

    #[test]
    fn unifies_http_and_https() {
        assert_eq!(
            canonical("http://example.com/x"),
            canonical("https://example.com/x")
        );
    }

    #[test]
    fn strips_one_trailing_slash() {
        assert_eq!(
            canonical("https://example.com/article/"),
            "https://example.com/article"
        );
    }

    #[test]
    fn collapses_root_path() {
        assert_eq!(canonical("https://example.com/"), "https://example.com");
    }

    #[test]
    fn drops_fragment() {
        assert_eq!(
            canonical("https://example.com/article#comments"),
            "https://example.com/article"
        );
    }

    #[test]
    fn drops_utm_parameters() {
        assert_eq!(
            canonical("https://example.com/article?utm_source=twitter&utm_medium=social"),
            "https://example.com/article"
        );
        assert_eq!(
            canonical("https://example.com/article?utm_source=twitter&utm_campaign=summer&utm_medium=social"),
            "https://example.com/article"
        );
    }

    #[test]
    fn drops_click_and_share_trackers() {
        assert_eq!(
            canonical("https://example.com/article?gclid=123&fbclid=456"),
            "https://example.com/article"
        );
        assert_eq!(
            canonical("https://example.com/article?ref=homepage&source=newsletter"),
            "https://example.com/article"
        );
        assert_eq!(
            canonical("https://example.com/article?share=facebook"),
            "https://example.com/article"
        );
    }

    #[test]
    fn tracking_keys_are_matched_case_insensitively() {
        assert_eq!(
            canonical("https://example.com/article?UTM_SOURCE=x&Ref=y&GCLID=z"),
            "https://example.com/article"
        );
    }

    #[test]
    fn keeps_other_parameters() {
        assert_eq!(
            canonical("https://example.com/article?id=123&page=2"),
            "https://example.com/article?id=123&page=2"
        );
    }

    #[test]
    fn sorts_parameters_by_key() {
        assert_eq!(canonical("https://e.com/a?b=2&a=1"), "https://e.com/a?a=1&b=2");
    }

    #[test]
    fn lowercases_surviving_keys() {
        assert_eq!(
            canonical("https://example.com/a?Page=2"),
            "https://example.com/a?page=2"
        );
    }

    #[test]
    fn repeated_keys_preserve_value_order() {
        assert_eq!(
            canonical("https://e.com/a?t=2&a=x&t=1"),
            "https://e.com/a?a=x&t=2&t=1"
        );
    }

    #[test]
    fn drops_empty_query() {
        assert_eq!(
            canonical("https://example.com/article?"),
            "https://example.com/article"
        );
    }

    #[test]
    fn keeps_explicit_port() {
        assert_eq!(
            canonical("https://example.com:8443/a"),
            "https://example.com:8443/a"
        );
    }

    #[test]
    fn combined_normalization() {
        assert_eq!(
            canonical("HTTPS://WWW.EXAMPLE.COM/article/?utm_source=twitter&id=123#comments"),
            "https://example.com/article?id=123"
        );
    }

    #[test]
    fn rejects_missing_scheme() {
        assert_eq!(
            normalize("example.com/article"),
            Err(NormalizeError::InvalidUrl)
        );
    }

    #[test]
    fn rejects_missing_host() {
        assert_eq!(normalize("https:///article"), Err(NormalizeError::InvalidUrl));
        assert_eq!(
            normalize("mailto:someone@example.com"),
            Err(NormalizeError::InvalidUrl)
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "HTTP://WWW.Example.COM:8080/A/b/?Z=1&utm_campaign=x&a=2#frag",
            "https://example.com/",
            "https://e.com/a?b=2&a=1&b=1",
            "https://example.com/article?id=a%2Fb&q=hello+world",
        ];
        for input in inputs {
            let once = canonical(input);
            assert_eq!(
                canonical(&once),
                once,
                "re-normalizing {} changed the output",
                input
            );
        }
    }
}
