//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Flutterwave client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration is missing a required field.
    #[error("Invalid client configuration: missing {0}")]
    Configuration(&'static str),
    /// The configured API URL cannot be used as a base for endpoint URLs.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A required operation argument was empty or zero.
    ///
    /// Raised before any request is sent.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Reqwest error: request construction, network failure, timeout or body read.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The Flutterwave API answered with a status other than `200 OK`.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Error encoding a request payload.
    #[error("Error serializing request payload: {0}")]
    Serialization(serde_json::Error),
    /// Error decoding a successful response body.
    #[error("Error deserializing response body: {0}")]
    Deserialization(serde_json::Error),
    /// A webhook's transaction did not re-verify as successful.
    #[error("Webhook verification failed: transaction status {0}")]
    Verification(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Flutterwave HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Raw response body.
    ///
    /// Verbatim for UTF-8 bodies; invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub body: String,
    /// Final URL of the failed request.
    pub endpoint: String,
    /// The `message` field of the error envelope, if the body carried one.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request to {} failed with status code {}",
            self.endpoint, self.status
        )?;

        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }

        write!(f, " | Body: {}", self.body)
    }
}
