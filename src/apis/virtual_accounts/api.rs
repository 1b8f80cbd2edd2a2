use crate::{
    apis::{virtual_accounts::VirtualAccountResponse, FlutterwaveClientInner},
    payload::build_payload,
    Error,
};
use reqwest::{header::HeaderMap, Method};
use serde_json::json;
use std::sync::Arc;

/// Flutterwave virtual account numbers APIs client.
#[derive(Clone, Debug)]
pub struct VirtualAccountsApi {
    inner: Arc<FlutterwaveClientInner>,
}

impl VirtualAccountsApi {
    pub(crate) fn new(inner: Arc<FlutterwaveClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a permanent virtual account number for a customer.
    ///
    /// The account narration is the customer's full name.
    #[tracing::instrument(name = "Create Permanent Virtual Account", skip(self, email, bvn))]
    pub async fn create_permanent(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        bvn: &str,
        tx_ref: &str,
    ) -> Result<VirtualAccountResponse, Error> {
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if first_name.is_empty() {
            return Err(Error::MissingField("first_name"));
        }
        if last_name.is_empty() {
            return Err(Error::MissingField("last_name"));
        }
        if bvn.is_empty() {
            return Err(Error::MissingField("bvn"));
        }
        if tx_ref.is_empty() {
            return Err(Error::MissingField("tx_ref"));
        }

        let payload = build_payload(&json!({
            "email": email,
            "bvn": bvn,
            "tx_ref": tx_ref,
            "firstname": first_name,
            "lastname": last_name,
            "is_permanent": true,
            "narration": format!("{} {}", first_name, last_name),
        }))?;

        self.inner
            .execute_request(
                Method::POST,
                self.inner.endpoint(&["virtual-account-numbers"]),
                Some(payload),
                HeaderMap::new(),
            )
            .await
    }
}
