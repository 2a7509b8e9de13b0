//! MD5 request signing for the remote catalog.
//!
//! The catalog authenticates every request with `ts`, `apikey` and a
//! `hash` of `ts + private_key + public_key`. The digest must match the
//! service byte-for-byte, so it is always rendered as 32 lowercase hex
//! characters with leading zeros kept.

use md5::{Digest, Md5};

/// Width of an MD5 digest rendered as hex.
pub const MD5_HEX_LEN: usize = 32;

/// Compute an MD5 hex digest of the given bytes.
pub fn md5_hex(data: &[u8]) -> String {
    let hash = Md5::digest(data);
    format!("{hash:x}")
}

/// Compute the catalog signing hash for one request.
pub fn request_hash(timestamp: &str, private_key: &str, public_key: &str) -> String {
    md5_hex(format!("{timestamp}{private_key}{public_key}").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn empty_input_produces_known_hash() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn request_hash_matches_digest_of_concatenation() {
        let hash = request_hash("1", "a", "b");
        assert_eq!(hash, md5_hex(b"1ab"));
        assert_eq!(hash, "9e3ad6527f3e163bbc1000b541436247");
    }

    #[test]
    fn request_hash_matches_published_catalog_example() {
        // ts=1, private=abcd, public=1234
        assert_eq!(
            request_hash("1", "abcd", "1234"),
            "ffd275c5130566a2916217b101f26150"
        );
    }

    #[test]
    fn leading_zero_nibbles_are_kept() {
        let hash = request_hash("8", "priv", "pub");
        assert_eq!(hash, "0778bd377978ec3d290d17cbd62834aa");
        assert_eq!(hash.len(), MD5_HEX_LEN);
    }

    #[test]
    fn always_32_lowercase_hex_chars() {
        for ts in ["0", "1", "1700000000000", "99999999999999"] {
            let hash = request_hash(ts, "secret", "public");
            assert_eq!(hash.len(), MD5_HEX_LEN, "bad length for ts={ts}");
            assert!(is_lower_hex(&hash), "not lowercase hex: {hash}");
        }
    }

    #[test]
    fn key_order_matters() {
        assert_ne!(request_hash("1", "a", "b"), request_hash("1", "b", "a"));
    }
}
