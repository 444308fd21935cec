use crate::error::ExchangeError;

/*----- */
// Authenticator
/*----- */
pub trait Authenticator {
    fn generate_signature(
        &self,
        request_path: &str,
        method: &str,
        body: &str,
        timestamp: &str,
    ) -> String;
}

/*----- */
// ExchangeRequestBuilder
/*----- */
// Signs the request as it will go on the wire, after url parsing has
// percent-encoded and normalised the path
pub trait ExchangeRequestBuilder {
    fn build_signed_request(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<String>,
    ) -> Result<reqwest::Request, ExchangeError>;
}
