use crate::{
    apis::{accounts::AccountValidationResponse, FlutterwaveClientInner},
    payload::build_payload,
    Error,
};
use reqwest::{header::HeaderMap, Method};
use serde_json::json;
use std::sync::Arc;

/// Flutterwave bank accounts APIs client.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<FlutterwaveClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<FlutterwaveClientInner>) -> Self {
        Self { inner }
    }

    /// Resolves a bank account number to the name of its holder.
    ///
    /// The arguments are passed through as given: Flutterwave rejects unknown
    /// combinations with an [`Error::ApiError`].
    #[tracing::instrument(name = "Validate Account Number", skip(self))]
    pub async fn resolve(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<AccountValidationResponse, Error> {
        let payload = build_payload(&json!({
            "account_number": account_number,
            "account_bank": bank_code,
        }))?;

        self.inner
            .execute_request(
                Method::POST,
                self.inner.endpoint(&["accounts", "resolve"]),
                Some(payload),
                HeaderMap::new(),
            )
            .await
    }
}
