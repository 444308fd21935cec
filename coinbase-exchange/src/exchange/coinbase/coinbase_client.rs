use reqwest::header::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::CoinbaseConfig,
    error::ExchangeError,
    protocols::http::{
        client::RestClient, http_parser::StandardHttpParser, request_builder::Authenticator,
        rest_request::RestRequest,
    },
};

use super::{
    auth::CoinbaseAuth,
    request_builder::CoinbaseRequestBuilder,
    requests::{
        accounts::{CoinbaseAccount, CoinbaseAccountById, CoinbaseAccounts},
        orders::{CoinbaseCancelOrder, CoinbaseNewOrder, CoinbaseOrderResponse},
    },
};

/*----- */
// Convenient types
/*----- */
pub type CoinbaseRestClient = RestClient<StandardHttpParser, CoinbaseRequestBuilder>;

/*----- */
// Coinbase authenticated client
/*----- */
/// Signs every request with the configured API key and performs exactly one
/// round trip per call. Holds no mutable state, share it behind an `Arc`.
#[derive(Debug)]
pub struct CoinbaseClient {
    pub http_client: CoinbaseRestClient,
}

impl CoinbaseClient {
    pub fn new(config: CoinbaseConfig) -> Result<Self, ExchangeError> {
        let auth = CoinbaseAuth::from_config(&config)?;
        let http_client = CoinbaseRestClient::new(
            config.base_url,
            config.timeout,
            StandardHttpParser,
            CoinbaseRequestBuilder::new(auth),
        )?;

        Ok(Self { http_client })
    }

    pub fn base_url(&self) -> &str {
        &self.http_client.base_url
    }

    pub fn auth(&self) -> &CoinbaseAuth {
        &self.http_client.request_builder.auth
    }

    pub fn security_headers(
        &self,
        endpoint: &str,
        method: &str,
        body: &str,
    ) -> Result<HeaderMap, ExchangeError> {
        self.auth().security_headers(endpoint, method, body)
    }

    pub fn generate_signature(
        &self,
        request_path: &str,
        method: &str,
        body: &str,
        timestamp: &str,
    ) -> String {
        self.auth()
            .generate_signature(request_path, method, body, timestamp)
    }

    pub async fn get<T>(&self, resource_path: &str) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        self.http_client
            .send(reqwest::Method::GET, resource_path, None)
            .await
    }

    pub async fn delete<T>(&self, resource_path: &str) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        self.http_client
            .send(reqwest::Method::DELETE, resource_path, None)
            .await
    }

    pub async fn post<T>(&self, resource_path: &str, json_body: &str) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        self.http_client
            .send(
                reqwest::Method::POST,
                resource_path,
                Some(json_body.to_string()),
            )
            .await
    }

    pub async fn post_json<T, Body>(
        &self,
        resource_path: &str,
        body: &Body,
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
        Body: Serialize + ?Sized,
    {
        let json_body = serde_json::to_string(body).map_err(ExchangeError::Serialise)?;
        self.post(resource_path, &json_body).await
    }

    pub async fn execute<Request>(
        &self,
        request: Request,
    ) -> Result<Request::Response, ExchangeError>
    where
        Request: RestRequest,
    {
        self.http_client.execute(request).await
    }

    pub async fn accounts(&self) -> Result<Vec<CoinbaseAccount>, ExchangeError> {
        self.execute(CoinbaseAccounts).await
    }

    pub async fn account(&self, account_id: &str) -> Result<CoinbaseAccount, ExchangeError> {
        self.execute(CoinbaseAccountById::new(account_id)).await
    }

    pub async fn place_order(
        &self,
        order: CoinbaseNewOrder,
    ) -> Result<CoinbaseOrderResponse, ExchangeError> {
        self.execute(order).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<String, ExchangeError> {
        self.execute(CoinbaseCancelOrder::new(order_id)).await
    }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;
    use crate::config::COINBASE_BASE_URL;

    #[test]
    fn test_client_rejects_bad_secret_before_network() {
        let config = CoinbaseConfig::new("key", "%%%", "phrase", COINBASE_BASE_URL);
        let error = CoinbaseClient::new(config).unwrap_err();

        assert!(error.is_configuration());
        assert!(matches!(error, ExchangeError::InvalidSecret(_)));
    }

    #[test]
    fn test_client_rejects_empty_secret() {
        let config = CoinbaseConfig::new("key", "", "phrase", COINBASE_BASE_URL);
        let error = CoinbaseClient::new(config).unwrap_err();

        assert!(matches!(error, ExchangeError::MissingCredential("api_secret")));
    }

    #[test]
    fn test_client_exposes_base_url_and_signer() {
        let config = CoinbaseConfig::new("key", "dGVzdHNlY3JldA==", "phrase", COINBASE_BASE_URL);
        let client = CoinbaseClient::new(config).unwrap();

        assert_eq!(client.base_url(), COINBASE_BASE_URL);
        assert_eq!(
            client
                .generate_signature("/accounts", "GET", "", "1000000000"),
            "QrGWV2rF7xVGNjVtXveME3cfjq/VBwgtRPDsE3Jef3k="
        );

        let headers = client
            .security_headers("https://api.exchange.coinbase.com/accounts", "GET", "")
            .unwrap();
        assert!(headers.contains_key("CB-ACCESS-SIGN"));
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoinbaseClient>();
    }
}
