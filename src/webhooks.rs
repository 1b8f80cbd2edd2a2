//! Webhook events sent by Flutterwave.
//!
//! The content of a webhook is never trusted on its own: [`WebhookMessage::verify`]
//! fetches the transaction again and only accepts it if Flutterwave reports it as successful.

use crate::{
    apis::transactions::{TransactionData, TransactionResponse},
    client::Config,
    common::SUCCESSFUL_STATUS,
    Error, FlutterwaveClient,
};
use serde::{Deserialize, Serialize};

/// A webhook event, as received on the application's webhook endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebhookMessage {
    /// Event name, e.g. `charge.completed`.
    #[serde(default, deserialize_with = "crate::apis::null_as_default")]
    pub event: String,
    #[serde(rename = "event.type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    pub data: TransactionData,
}

impl WebhookMessage {
    /// Verifies the event against the API using a new client built from
    /// [`Config::with_default_client`].
    pub async fn verify(
        &self,
        secret_key: &str,
        api_url: &str,
    ) -> Result<TransactionResponse, Error> {
        let client = FlutterwaveClient::new(Config::with_default_client(secret_key, api_url)?)?;

        self.verify_with(&client).await
    }

    /// Verifies the event by fetching its transaction with `client`.
    ///
    /// Returns the freshly fetched transaction if its status is `successful`,
    /// [`Error::Verification`] with the fetched status otherwise.
    #[tracing::instrument(
        name = "Verify Webhook",
        skip(self, client),
        fields(event = %self.event, transaction_id = self.data.id)
    )]
    pub async fn verify_with(
        &self,
        client: &FlutterwaveClient,
    ) -> Result<TransactionResponse, Error> {
        let transaction = client.transactions.verify(self.data.id).await?;

        if transaction.data.status == SUCCESSFUL_STATUS {
            return Ok(transaction);
        }

        tracing::warn!(
            "Rejected webhook: transaction status is {}",
            transaction.data.status
        );

        Err(Error::Verification(transaction.data.status))
    }
}
