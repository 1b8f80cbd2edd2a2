//! Rust client for the [Flutterwave](https://flutterwave.com) v3 APIs.
//!
//! Check out also the official Flutterwave [API documentation](https://developer.flutterwave.com/docs).
//!
//! # Usage
//!
//! ## Initialize a new `FlutterwaveClient`
//!
//! Create a new [`FlutterwaveClient`](crate::client::FlutterwaveClient) from your secret key.
//!
//! ```rust,no_run
//! # use flutterwave_rust::{client::Config, Error, FlutterwaveClient};
//! # fn main() -> Result<(), Error> {
//! let fw = FlutterwaveClient::new(Config::with_default_client(
//!     "FLWSECK_TEST-some-secret-key",
//!     "https://api.flutterwave.com/v3",
//! )?)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Config::from_env`](crate::client::Config::from_env) reads the API URL from the
//! `FW_API_URL` environment variable instead. To control timeouts, proxies or connection
//! pooling, pass your own `reqwest::Client` to [`Config::new`](crate::client::Config::new).
//!
//! ## Verify a transaction
//!
//! ```rust,no_run
//! # use flutterwave_rust::{Error, FlutterwaveClient};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let fw: FlutterwaveClient = unreachable!();
//! #
//! let res = fw.transactions.verify(288200108).await?;
//!
//! println!("Transaction {} is {}", res.data.tx_ref, res.data.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handle errors
//!
//! Any status other than `200 OK` is returned as an [`ApiError`](crate::error::ApiError),
//! carrying the status code and the raw body, so a declined charge can be told apart
//! from a network failure:
//!
//! ```rust,no_run
//! # use flutterwave_rust::{error::ApiError, Error, FlutterwaveClient};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let fw: FlutterwaveClient = unreachable!();
//! #
//! match fw
//!     .charges
//!     .charge_tokenized_card("flw-t1nf-token", "user@example.com", "Monthly plan", "sub-42", 2500.0)
//!     .await
//! {
//!     Ok(res) => println!("Charged: {}", res.data.flw_ref),
//!     Err(Error::ApiError(ApiError { status, body, .. })) => println!("Declined ({}): {}", status, body),
//!     Err(e) => println!("Could not reach Flutterwave: {}", e),
//! }
//! # }
//! ```
//!
//! ## Verify a webhook
//!
//! ```rust,no_run
//! # use flutterwave_rust::{webhooks::WebhookMessage, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let body: &[u8] = unreachable!();
//! let message: WebhookMessage = serde_json::from_slice(body).map_err(Error::Deserialization)?;
//! let transaction = message
//!     .verify("FLWSECK_TEST-some-secret-key", "https://api.flutterwave.com/v3")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! ```shell
//! cargo run --example verify_transaction
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod payload;
pub mod webhooks;

pub use client::FlutterwaveClient;
pub use common::DEFAULT_API_URL;
pub use error::Error;
