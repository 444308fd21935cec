use std::fmt::Debug;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use hmac::Mac;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::{
    config::CoinbaseConfig,
    error::ExchangeError,
    exchange::HmacSha256,
    protocols::http::request_builder::Authenticator,
    shared::utils::{current_timestamp_secs, strip_base_url},
};

/*----- */
// Coinbase header names
/*----- */
pub const CB_ACCESS_KEY: HeaderName = HeaderName::from_static("cb-access-key");
pub const CB_ACCESS_SIGN: HeaderName = HeaderName::from_static("cb-access-sign");
pub const CB_ACCESS_TIMESTAMP: HeaderName = HeaderName::from_static("cb-access-timestamp");
pub const CB_ACCESS_PASSPHRASE: HeaderName = HeaderName::from_static("cb-access-passphrase");

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

// Secrets are accepted with or without trailing `=` padding
const SECRET_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/*----- */
// Coinbase API Authentication
/*----- */
/// Holds the credentials of one API key. The secret is decoded once here so a
/// malformed key surfaces at construction instead of on every signed request.
pub struct CoinbaseAuth {
    key: HeaderValue,
    secret: Vec<u8>,
    passphrase: HeaderValue,
    base_url: String,
}

impl CoinbaseAuth {
    pub fn new(
        api_key: &str,
        api_secret: &str,
        passphrase: &str,
        base_url: impl Into<String>,
    ) -> Result<Self, ExchangeError> {
        if api_key.is_empty() {
            return Err(ExchangeError::MissingCredential("api_key"));
        }
        if api_secret.is_empty() {
            return Err(ExchangeError::MissingCredential("api_secret"));
        }
        if passphrase.is_empty() {
            return Err(ExchangeError::MissingCredential("passphrase"));
        }

        let secret = SECRET_DECODER.decode(api_secret)?;

        Ok(Self {
            key: header_value(api_key, "api_key")?,
            secret,
            passphrase: header_value(passphrase, "passphrase")?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &CoinbaseConfig) -> Result<Self, ExchangeError> {
        Self::new(
            &config.api_key,
            &config.api_secret,
            &config.passphrase,
            config.base_url.as_str(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Re-encodes the decoded secret, used to check the key survived decoding
    pub fn encoded_secret(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.secret)
    }

    pub fn security_headers(
        &self,
        endpoint: &str,
        method: &str,
        body: &str,
    ) -> Result<HeaderMap, ExchangeError> {
        let timestamp = current_timestamp_secs().to_string();
        self.security_headers_at(endpoint, method, body, &timestamp)
    }

    pub fn security_headers_at(
        &self,
        endpoint: &str,
        method: &str,
        body: &str,
        timestamp: &str,
    ) -> Result<HeaderMap, ExchangeError> {
        let resource = strip_base_url(endpoint, &self.base_url);
        let signature = self.generate_signature(resource, method, body, timestamp);

        let mut headers = HeaderMap::with_capacity(6);
        headers.insert(ACCEPT, APPLICATION_JSON);
        headers.insert(CONTENT_TYPE, APPLICATION_JSON);
        headers.insert(CB_ACCESS_KEY, self.key.clone());
        headers.insert(CB_ACCESS_SIGN, header_value(&signature, "signature")?);
        headers.insert(CB_ACCESS_TIMESTAMP, header_value(timestamp, "timestamp")?);
        headers.insert(CB_ACCESS_PASSPHRASE, self.passphrase.clone());

        Ok(headers)
    }
}

impl Authenticator for CoinbaseAuth {
    /// The CB-ACCESS-SIGN header is the base64 encoded HMAC-SHA256 of
    /// `timestamp + METHOD + requestPath + body`, keyed with the decoded secret.
    /// `timestamp` must match the CB-ACCESS-TIMESTAMP header.
    #[inline]
    fn generate_signature(
        &self,
        request_path: &str,
        method: &str,
        body: &str,
        timestamp: &str,
    ) -> String {
        let prehash = format!(
            "{}{}{}{}",
            timestamp,
            method.to_uppercase(),
            request_path,
            body
        );

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(prehash.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl Debug for CoinbaseAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseAuth")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn header_value(value: &str, field: &'static str) -> Result<HeaderValue, ExchangeError> {
    HeaderValue::from_str(value).map_err(|_| ExchangeError::InvalidHeaderValue { field })
}

/*----- */
// Tests
/*----- */
