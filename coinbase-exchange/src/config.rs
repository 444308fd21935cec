use std::{env, fmt::Debug, time::Duration};

use crate::error::ExchangeError;

/*----- */
// Convenient constants
/*----- */
pub const COINBASE_BASE_URL: &str = "https://api.exchange.coinbase.com";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_API_KEY: &str = "COINBASE_API_KEY";
const ENV_API_SECRET: &str = "COINBASE_API_SECRET";
const ENV_API_PASSPHRASE: &str = "COINBASE_API_PASSPHRASE";
const ENV_BASE_URL: &str = "COINBASE_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "COINBASE_HTTP_TIMEOUT_SECS";

/*----- */
// Coinbase client config
/*----- */
#[derive(Clone)]
pub struct CoinbaseConfig {
    pub api_key: String,
    /// Base64 encoded, exactly as issued by the exchange
    pub api_secret: String,
    pub passphrase: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl CoinbaseConfig {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            passphrase: passphrase.into(),
            base_url: trim_base_url(base_url.into()),
            timeout: DEFAULT_HTTP_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn from_env() -> Result<Self, ExchangeError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ExchangeError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ExchangeError::MissingEnv { var });

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ExchangeError::InvalidTimeout { value })?,
            None => DEFAULT_HTTP_REQUEST_TIMEOUT,
        };

        Ok(Self {
            api_key: required(ENV_API_KEY)?,
            api_secret: required(ENV_API_SECRET)?,
            passphrase: required(ENV_API_PASSPHRASE)?,
            base_url: trim_base_url(
                lookup(ENV_BASE_URL).unwrap_or_else(|| COINBASE_BASE_URL.to_string()),
            ),
            timeout,
        })
    }
}

// Resource paths start with `/`, so the base url must not end with one
fn trim_base_url(mut base_url: String) -> String {
    if base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

impl Debug for CoinbaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = CoinbaseConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "dGVzdHNlY3JldA=="),
            (ENV_API_PASSPHRASE, "phrase"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "dGVzdHNlY3JldA==");
        assert_eq!(config.passphrase, "phrase");
        assert_eq!(config.base_url, COINBASE_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_HTTP_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let config = CoinbaseConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "dGVzdHNlY3JldA=="),
            (ENV_API_PASSPHRASE, "phrase"),
            (ENV_BASE_URL, "https://api-public.sandbox.exchange.coinbase.com"),
            (ENV_TIMEOUT_SECS, "12"),
        ]))
        .unwrap();

        assert_eq!(
            config.base_url,
            "https://api-public.sandbox.exchange.coinbase.com"
        );
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_config_missing_env() {
        let result = CoinbaseConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_PASSPHRASE, "phrase"),
        ]));

        match result {
            Err(ExchangeError::MissingEnv { var }) => assert_eq!(var, ENV_API_SECRET),
            other => panic!("expected MissingEnv, got {:?}", other),
        }
    }

    #[test]
    fn test_config_invalid_timeout() {
        let result = CoinbaseConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "dGVzdHNlY3JldA=="),
            (ENV_API_PASSPHRASE, "phrase"),
            (ENV_TIMEOUT_SECS, "five"),
        ]));

        assert!(matches!(result, Err(ExchangeError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config = CoinbaseConfig::new(
            "my-api-key",
            "dGVzdHNlY3JldA==",
            "hunter2",
            COINBASE_BASE_URL,
        );
        let debug = format!("{:?}", config);

        assert!(debug.contains("my-api-key"));
        assert!(!debug.contains("dGVzdHNlY3JldA=="));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = CoinbaseConfig::new(
            "key",
            "dGVzdHNlY3JldA==",
            "phrase",
            "https://api.exchange.coinbase.com/",
        );
        assert_eq!(config.base_url, COINBASE_BASE_URL);

        let config = CoinbaseConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "dGVzdHNlY3JldA=="),
            (ENV_API_PASSPHRASE, "phrase"),
            (ENV_BASE_URL, "https://api-public.sandbox.exchange.coinbase.com/"),
        ]))
        .unwrap();
        assert_eq!(
            config.base_url,
            "https://api-public.sandbox.exchange.coinbase.com"
        );
    }
}
