// SHA-256 content addressing for canonical URLs

use sha2::{Digest, Sha256};

/// Computes the SHA-256 hash of the input bytes and returns it as a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Computes the identity token for a canonical URL.
///
/// The token is the SHA-256 digest of the canonical URL's UTF-8 bytes. It is
/// a lookup key, not a security boundary: two pages share a token exactly
/// when their canonical URLs are equal.
pub fn url_hash(canonical: &str) -> String {
    sha256_hex(canonical.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_vectors() {
        // SHA-256 of the empty string is well-known
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn url_hash_is_fixed_width_lowercase_hex() {
        let token = url_hash("https://example.com/article");
        assert_eq!(token.len(), 64);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn url_hash_is_deterministic() {
        let canonical = "https://example.com/article?id=123";
        assert_eq!(url_hash(canonical), url_hash(canonical));
        assert_eq!(url_hash(canonical), sha256_hex(canonical.as_bytes()));
    }

    #[test]
    fn distinct_urls_hash_differently() {
        assert_ne!(
            url_hash("https://example.com/a"),
            url_hash("https://example.com/b")
        );
    }
}
