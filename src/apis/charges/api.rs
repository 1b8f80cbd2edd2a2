use crate::{
    apis::{transactions::TransactionResponse, FlutterwaveClientInner},
    common::{CHARGE_COUNTRY, CHARGE_CURRENCY},
    payload::build_payload,
    Error,
};
use reqwest::{header::HeaderMap, Method};
use serde_json::json;
use std::sync::Arc;

/// Flutterwave charges APIs client.
#[derive(Clone, Debug)]
pub struct ChargesApi {
    inner: Arc<FlutterwaveClientInner>,
}

impl ChargesApi {
    pub(crate) fn new(inner: Arc<FlutterwaveClientInner>) -> Self {
        Self { inner }
    }

    /// Charges a previously tokenised card, in NGN.
    ///
    /// The token comes from [`Card::token`](crate::apis::transactions::Card::token)
    /// of an earlier successful card transaction.
    #[tracing::instrument(
        name = "Charge Tokenized Card",
        skip(self, token, email, narration)
    )]
    pub async fn charge_tokenized_card(
        &self,
        token: &str,
        email: &str,
        narration: &str,
        tx_ref: &str,
        amount: f64,
    ) -> Result<TransactionResponse, Error> {
        if token.is_empty() {
            return Err(Error::MissingField("token"));
        }
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if narration.is_empty() {
            return Err(Error::MissingField("narration"));
        }
        if tx_ref.is_empty() {
            return Err(Error::MissingField("tx_ref"));
        }
        if amount == 0.0 {
            return Err(Error::MissingField("amount"));
        }

        let payload = build_payload(&json!({
            "token": token,
            "currency": CHARGE_CURRENCY,
            "country": CHARGE_COUNTRY,
            "amount": amount,
            "email": email,
            "narration": narration,
            "tx_ref": tx_ref,
        }))?;

        self.inner
            .execute_request(
                Method::POST,
                self.inner.endpoint(&["tokenized-charges"]),
                Some(payload),
                HeaderMap::new(),
            )
            .await
    }
}
