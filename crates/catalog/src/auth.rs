//! Request authentication for the catalog.

use std::fmt;

use comics_core::hashing::request_hash;

/// The public/private key pair issued by the catalog service.
#[derive(Clone)]
pub struct ApiCredentials {
    public_key: String,
    private_key: String,
}

/// The three query parameters attached to every catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    pub ts: String,
    pub apikey: String,
    pub hash: String,
}

impl ApiCredentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign a request made at the given timestamp.
    pub fn sign(&self, ts: impl Into<String>) -> AuthParams {
        let ts = ts.into();
        let hash = request_hash(&ts, &self.private_key, &self.public_key);
        AuthParams {
            ts,
            apikey: self.public_key.clone(),
            hash,
        }
    }

    /// Sign a request made now (epoch milliseconds).
    pub fn sign_now(&self) -> AuthParams {
        self.sign(chrono::Utc::now().timestamp_millis().to_string())
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl AuthParams {
    /// Query pairs in the order the catalog documents them.
    pub fn as_query(&self) -> [(&'static str, &str); 3] {
        [
            ("ts", self.ts.as_str()),
            ("apikey", self.apikey.as_str()),
            ("hash", self.hash.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_hashes_ts_private_public() {
        let creds = ApiCredentials::new("1234", "abcd");
        let params = creds.sign("1");
        assert_eq!(params.ts, "1");
        assert_eq!(params.apikey, "1234");
        assert_eq!(params.hash, "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn sign_now_uses_decimal_millis() {
        let creds = ApiCredentials::new("pub", "priv");
        let params = creds.sign_now();
        assert!(params.ts.chars().all(|c| c.is_ascii_digit()));
        assert!(params.ts.len() >= 13, "expected epoch millis, got {}", params.ts);
        assert_eq!(params.hash.len(), 32);
    }

    #[test]
    fn query_pairs_are_named_for_the_catalog() {
        let params = ApiCredentials::new("pub", "priv").sign("5");
        let names: Vec<_> = params.as_query().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["ts", "apikey", "hash"]);
    }

    #[test]
    fn debug_output_hides_private_key() {
        let creds = ApiCredentials::new("public-key", "top-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("public-key"));
        assert!(!debug.contains("top-secret"));
    }
}
