use thiserror::Error;

/*----- */
// ExchangeError
/*----- */
#[derive(Debug, Error)]
pub enum ExchangeError {
    // Configuration errors, fatal and never retried
    #[error("Missing credential: {0} must not be empty")]
    MissingCredential(&'static str),

    #[error("API secret is not valid base64: {0}")]
    InvalidSecret(#[from] base64::DecodeError),

    #[error("{field} contains characters that cannot be sent as an HTTP header")]
    InvalidHeaderValue { field: &'static str },

    #[error("Environment variable {var} is not set")]
    MissingEnv { var: &'static str },

    #[error("HTTP timeout must be a whole number of seconds, got {value}")]
    InvalidTimeout { value: String },

    // Transport errors
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(reqwest::StatusCode, String),

    #[error("Unauthorised: {0}")]
    Unauthorised(String),

    // Deserialisation errors
    #[error("Deserialising JSON error: {error} for binary payload: {payload:?}")]
    DeserialiseBinary {
        error: serde_json::Error,
        payload: Vec<u8>,
    },

    #[error("Serialising JSON error: {0}")]
    Serialise(serde_json::Error),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(error: reqwest::Error) -> Self {
        match error {
            error if error.is_timeout() => ExchangeError::HttpTimeout(error),
            error => ExchangeError::Http(error),
        }
    }
}

impl ExchangeError {
    #[allow(clippy::match_like_matches_macro)]
    pub fn is_configuration(&self) -> bool {
        match self {
            ExchangeError::MissingCredential(_) => true,
            ExchangeError::InvalidSecret(_) => true,
            ExchangeError::InvalidHeaderValue { .. } => true,
            ExchangeError::MissingEnv { .. } => true,
            ExchangeError::InvalidTimeout { .. } => true,
            _ => false,
        }
    }

    #[allow(clippy::match_like_matches_macro)]
    pub fn is_transport(&self) -> bool {
        match self {
            ExchangeError::Http(_) => true,
            ExchangeError::HttpTimeout(_) => true,
            ExchangeError::HttpResponse(..) => true,
            ExchangeError::Unauthorised(_) => true,
            _ => false,
        }
    }
}

/*----- */
// Request Builder Errors
/*----- */
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestBuildError {
    #[error("{exchange} failed to build {request} request as {field} is mandatory")]
    MandatoryField {
        exchange: &'static str,
        request: &'static str,
        field: &'static str,
    },

    #[error("{exchange} failed to build {request} request: {reason}")]
    InvalidCombination {
        exchange: &'static str,
        request: &'static str,
        reason: &'static str,
    },
}

/*----- */
// Tests
/*----- */
