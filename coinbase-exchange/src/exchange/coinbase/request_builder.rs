use crate::{
    error::ExchangeError, protocols::http::request_builder::ExchangeRequestBuilder,
    shared::utils::signed_request_path,
};

use super::auth::CoinbaseAuth;

/*----- */
// Impl ExchangeRequestBuilder for Coinbase
/*----- */
#[derive(Debug)]
pub struct CoinbaseRequestBuilder {
    pub auth: CoinbaseAuth,
}

impl CoinbaseRequestBuilder {
    pub fn new(auth: CoinbaseAuth) -> Self {
        Self { auth }
    }
}

impl ExchangeRequestBuilder for CoinbaseRequestBuilder {
    #[inline]
    fn build_signed_request(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<String>,
    ) -> Result<reqwest::Request, ExchangeError> {
        // The exact string signed is the exact string sent
        let signed_body = body.clone().unwrap_or_default();
        let mut request = match body {
            Some(body) => builder.body(body),
            None => builder,
        }
        .build()
        .map_err(ExchangeError::from)?;

        let request_path = signed_request_path(request.url());
        let headers = self.auth.security_headers(
            &request_path,
            request.method().as_str(),
            &signed_body,
        )?;
        request.headers_mut().extend(headers);

        Ok(request)
    }
}

/*----- */
// Tests
/*----- */
