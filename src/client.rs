//! Module containing the main Flutterwave API client.

use crate::{
    apis::{
        accounts::AccountsApi, charges::ChargesApi, transactions::TransactionsApi,
        virtual_accounts::VirtualAccountsApi, FlutterwaveClientInner,
    },
    common::{API_URL_ENV_VAR, DEFAULT_API_URL, DEFAULT_TIMEOUT},
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

/// Settings needed to build a [`FlutterwaveClient`].
///
/// All three fields are checked once by [`FlutterwaveClient::new`].
#[derive(Debug)]
pub struct Config {
    /// Secret key sent as a bearer token with every request.
    pub secret_key: Secret<String>,
    /// HTTP client used to execute requests. Timeouts and connection pooling are configured here.
    pub http_client: Option<reqwest::Client>,
    /// Base URL of the Flutterwave API, e.g. `https://api.flutterwave.com/v3`.
    pub api_url: String,
}

impl Config {
    /// Builds a configuration around an existing HTTP client.
    ///
    /// Timeouts, proxies and connection pooling are whatever `http_client` was built with.
    pub fn new(
        secret_key: impl Into<String>,
        http_client: reqwest::Client,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: Secret::new(secret_key.into()),
            http_client: Some(http_client),
            api_url: api_url.into(),
        }
    }

    /// Builds a configuration using an HTTP client with a 20 seconds timeout.
    pub fn with_default_client(
        secret_key: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self::new(secret_key, http_client, api_url))
    }

    /// Same as [`with_default_client`](Config::with_default_client), reading the API URL
    /// from the `FW_API_URL` environment variable.
    ///
    /// Defaults to: `https://api.flutterwave.com/v3`
    pub fn from_env(secret_key: impl Into<String>) -> Result<Self, Error> {
        let api_url =
            std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_default_client(secret_key, api_url)
    }
}

/// Client for Flutterwave public APIs.
///
/// Cloning is cheap and clones share the same underlying HTTP client.
/// No request is ever retried: a failed call is reported as is.
#[derive(Debug, Clone)]
pub struct FlutterwaveClient {
    /// Transactions APIs client.
    pub transactions: TransactionsApi,
    /// Bank accounts APIs client.
    pub accounts: AccountsApi,
    /// Charges APIs client.
    pub charges: ChargesApi,
    /// Virtual account numbers APIs client.
    pub virtual_accounts: VirtualAccountsApi,
}

impl FlutterwaveClient {
    /// Builds a new [`FlutterwaveClient`](crate::client::FlutterwaveClient) from the given configuration.
    ///
    /// Fails with [`Error::Configuration`] naming the first missing field, or with
    /// [`Error::InvalidUrl`] if the API URL cannot be parsed. No request is sent.
    pub fn new(config: Config) -> Result<FlutterwaveClient, Error> {
        if config.secret_key.expose_secret().is_empty() {
            return Err(Error::Configuration("secret key"));
        }
        let http_client = config
            .http_client
            .ok_or(Error::Configuration("HTTP client"))?;
        if config.api_url.is_empty() {
            return Err(Error::Configuration("API URL"));
        }

        let api_url = Url::parse(&config.api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let inner = Arc::new(FlutterwaveClientInner {
            client: build_client_with_middleware(http_client, config.secret_key),
            api_url,
        });

        Ok(FlutterwaveClient {
            transactions: TransactionsApi::new(inner.clone()),
            accounts: AccountsApi::new(inner.clone()),
            charges: ChargesApi::new(inner.clone()),
            virtual_accounts: VirtualAccountsApi::new(inner),
        })
    }

    /// Builds a new client using [`Config::from_env`].
    pub fn from_env(secret_key: impl Into<String>) -> Result<FlutterwaveClient, Error> {
        Self::new(Config::from_env(secret_key)?)
    }
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    secret_key: Secret<String>,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new())
        .with(ErrorHandlingMiddleware)
        .with(InjectUserAgentMiddleware::new())
        .with(AuthenticationMiddleware::new(secret_key))
        .build()
}
