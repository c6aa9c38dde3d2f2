//! OAuth 1.0a request signing (RFC 5849) with HMAC-SHA256
//!
//! NetSuite token-based authentication is one-legged OAuth1: the consumer and
//! token credentials are both issued up front, so signing a request only needs
//! the method, the full URL, a timestamp and a nonce.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distributions::Alphanumeric;
use reqwest::Url;
use sha2::Sha256;

use super::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";
pub const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Percent-encode with the RFC 3986 unreserved set, as OAuth1 requires
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Signs requests with a fixed set of credentials
pub struct OAuth1Signer<'a> {
    credentials: &'a Credentials,
}

impl<'a> OAuth1Signer<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request, using the
    /// current time and a fresh random nonce.
    pub fn authorization_header(&self, method: &str, url: &Url) -> String {
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(method, url, timestamp, &generate_nonce())
    }

    /// Build the `Authorization` header value with an explicit timestamp and nonce
    pub fn sign_with(&self, method: &str, url: &Url, timestamp: i64, nonce: &str) -> String {
        let oauth_params = self.oauth_params(timestamp, nonce);
        let base_string = signature_base_string(method, url, &oauth_params);
        let signature = self.signature(&base_string);

        let mut header = format!("OAuth realm=\"{}\"", percent_encode(&self.credentials.realm));
        for (key, value) in oauth_params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(std::iter::once(("oauth_signature", signature.as_str())))
        {
            header.push_str(&format!(", {}=\"{}\"", key, percent_encode(value)));
        }
        header
    }

    /// Protocol parameters, sorted by name
    fn oauth_params(&self, timestamp: i64, nonce: &str) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.credentials.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.credentials.token.clone()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    fn signing_key(&self) -> String {
        format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.token_secret)
        )
    }

    fn signature(&self, base_string: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_key().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(base_string.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

/// `METHOD&enc(base uri)&enc(normalized parameters)`
pub fn signature_base_string(
    method: &str,
    url: &Url,
    oauth_params: &[(&'static str, String)],
) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (percent_encode(k), percent_encode(v))),
        )
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_uri(url)),
        percent_encode(&normalized)
    )
}

/// Scheme, host, non-default port and path; no query or fragment
fn base_uri(url: &Url) -> String {
    let scheme = url.scheme().to_ascii_lowercase();
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let path = match url.path() {
        "" => "/",
        path => path,
    };

    // Url::port() is None when the port is the scheme default
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", scheme, host, port, path),
        None => format!("{}://{}{}", scheme, host, path),
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
