use chrono::Utc;

// Coinbase expects whole seconds since epoch
pub fn current_timestamp_secs() -> i64 {
    Utc::now().timestamp()
}

pub fn strip_base_url<'a>(endpoint: &'a str, base_url: &str) -> &'a str {
    if base_url.is_empty() {
        return endpoint;
    }

    endpoint.strip_prefix(base_url).unwrap_or(endpoint)
}

// Path plus query exactly as the url serialises them on the wire
pub fn signed_request_path(url: &reqwest::Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::{current_timestamp_secs, signed_request_path, strip_base_url};

    #[test]
    fn test_strip_base_url() {
        let base_url = "https://api.exchange.coinbase.com";

        let full = strip_base_url("https://api.exchange.coinbase.com/accounts", base_url);
        assert_eq!(full, "/accounts");

        let relative = strip_base_url("/orders/abc", base_url);
        assert_eq!(relative, "/orders/abc");

        let other_host = strip_base_url("https://example.com/accounts", base_url);
        assert_eq!(other_host, "https://example.com/accounts");

        let empty_base = strip_base_url("/accounts", "");
        assert_eq!(empty_base, "/accounts");
    }

    #[test]
    fn test_timestamp_is_seconds() {
        // Millisecond timestamps are 13 digits until the year 2286
        let timestamp = current_timestamp_secs();
        assert_eq!(timestamp.to_string().len(), 10);
    }

    #[test]
    fn test_signed_request_path() {
        let url = reqwest::Url::parse("https://api.exchange.coinbase.com/fills?product_id=BTC-USD")
            .unwrap();
        assert_eq!(signed_request_path(&url), "/fills?product_id=BTC-USD");

        let url = reqwest::Url::parse("https://api.exchange.coinbase.com/accounts/a b").unwrap();
        assert_eq!(signed_request_path(&url), "/accounts/a%20b");

        let url = reqwest::Url::parse("https://api.exchange.coinbase.com/ledger/../fills").unwrap();
        assert_eq!(signed_request_path(&url), "/fills");
    }
}
