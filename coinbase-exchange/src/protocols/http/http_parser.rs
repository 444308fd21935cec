use crate::error::ExchangeError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;

pub trait HttpParser {
    type ApiError: DeserializeOwned;
    type OutputError: From<ExchangeError>;

    fn parse<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<Response, Self::OutputError>
    where
        Response: DeserializeOwned,
    {
        // Non-2xx responses are transport errors, whatever the body looks like
        if !status.is_success() {
            return match serde_json::from_slice::<Self::ApiError>(payload) {
                Ok(api_error) => Err(self.parse_api_error(status, api_error)),
                Err(_) => Err(Self::OutputError::from(ExchangeError::HttpResponse(
                    status,
                    String::from_utf8_lossy(payload).into_owned(),
                ))),
            };
        }

        match serde_json::from_slice::<Response>(payload) {
            Ok(response) => Ok(response),
            Err(serde_error) => {
                error!(
                    status_code = ?status,
                    ?serde_error,
                    response_body = %String::from_utf8_lossy(payload),
                    "error deserializing HTTP response"
                );

                Err(Self::OutputError::from(ExchangeError::DeserialiseBinary {
                    error: serde_error,
                    payload: payload.to_vec(),
                }))
            }
        }
    }

    // Maps the deserialised error body of a non-2xx response to Self::OutputError
    fn parse_api_error(&self, status: StatusCode, error: Self::ApiError) -> Self::OutputError;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHttpParser;

impl HttpParser for StandardHttpParser {
    type ApiError = serde_json::Value;
    type OutputError = ExchangeError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        // Coinbase errors look like {"message": "..."}
        let error = match api_error.get("message").and_then(|message| message.as_str()) {
            Some(message) => message.to_string(),
            None => api_error.to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ExchangeError::Unauthorised(error),
            _ => match error.to_lowercase() {
                message
                    if message.contains("invalid signature")
                        || message.contains("invalid api key")
                        || message.contains("invalid passphrase") =>
                {
                    ExchangeError::Unauthorised(error)
                }
                _ => ExchangeError::HttpResponse(status, error),
            },
        }
    }
}

/*----- */
// Tests
/*----- */
