use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{error::ExchangeError, shared::utils::strip_base_url};

use super::{
    http_parser::HttpParser, request_builder::ExchangeRequestBuilder, rest_request::RestRequest,
};

#[derive(Debug)]
pub struct RestClient<Parser, RequestBuilder> {
    pub http_client: reqwest::Client,
    pub base_url: String,
    pub parser: Parser,
    pub request_builder: RequestBuilder,
}

impl<Parser, RequestBuilder> RestClient<Parser, RequestBuilder>
where
    RequestBuilder: ExchangeRequestBuilder,
{
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        parser: Parser,
        request_builder: RequestBuilder,
    ) -> Result<Self, ExchangeError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ExchangeError::from)?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            parser,
            request_builder,
        })
    }

    pub async fn execute<Request>(
        &self,
        request: Request,
    ) -> Result<Request::Response, Parser::OutputError>
    where
        Request: RestRequest,
        Parser: HttpParser,
    {
        let body = request
            .body()
            .map(serde_json::to_string)
            .transpose()
            .map_err(ExchangeError::Serialise)?;

        let request = self.build(Request::method(), &request.path(), body, Request::timeout())?;
        self.dispatch::<Request::Response>(request).await
    }

    pub async fn send<Response>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, Parser::OutputError>
    where
        Response: DeserializeOwned,
        Parser: HttpParser,
    {
        let request = self.build(method, path, body, None)?;
        self.dispatch::<Response>(request).await
    }

    pub fn build(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Request, ExchangeError> {
        let path = strip_base_url(path, &self.base_url);
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http_client.request(method, url);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        self.request_builder.build_signed_request(builder, body)
    }

    async fn dispatch<Response>(
        &self,
        request: reqwest::Request,
    ) -> Result<Response, Parser::OutputError>
    where
        Response: DeserializeOwned,
        Parser: HttpParser,
    {
        let (status, payload) = self.measured_execution(request).await?;
        self.parser.parse::<Response>(status, &payload)
    }

    pub async fn measured_execution(
        &self,
        request: reqwest::Request,
    ) -> Result<(reqwest::StatusCode, Bytes), ExchangeError> {
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let start = std::time::Instant::now();
        let response = self.http_client.execute(request).await?;
        let duration = start.elapsed().as_millis() as u64;

        let status_code = response.status();
        debug!(
            http_method = %method,
            path = %path,
            status_code = status_code.as_u16(),
            duration_ms = duration,
            "http_request_duration"
        );

        let payload = response.bytes().await?;

        Ok((status_code, payload))
    }
}
