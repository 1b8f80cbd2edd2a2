use crate::{
    apis::{
        transactions::{ListTransactionsResponse, TransactionData, TransactionResponse},
        FlutterwaveClientInner,
    },
    Error,
};
use reqwest::{header::HeaderMap, Method};
use std::sync::Arc;

/// Flutterwave transactions APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<FlutterwaveClientInner>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<FlutterwaveClientInner>) -> Self {
        Self { inner }
    }

    /// Fetches the current state of a transaction from Flutterwave.
    ///
    /// Always verify a transaction this way before delivering value for it.
    #[tracing::instrument(name = "Verify Transaction", skip(self))]
    pub async fn verify(&self, id: i64) -> Result<TransactionResponse, Error> {
        if id == 0 {
            return Err(Error::MissingField("id"));
        }

        let url = self
            .inner
            .endpoint(&["transactions", &id.to_string(), "verify"]);

        self.inner
            .execute_request(Method::GET, url, None, HeaderMap::new())
            .await
    }

    /// Lists the transactions created with the given reference.
    ///
    /// Only the first page is returned. Use
    /// [`list_by_reference_page`](TransactionsApi::list_by_reference_page) to walk the others.
    #[tracing::instrument(name = "List Transactions by Reference", skip(self))]
    pub async fn list_by_reference(&self, tx_ref: &str) -> Result<Vec<TransactionData>, Error> {
        if tx_ref.is_empty() {
            return Err(Error::MissingField("tx_ref"));
        }

        let url = self.list_url(tx_ref, None);
        let res: ListTransactionsResponse = self
            .inner
            .execute_request(Method::GET, url, None, HeaderMap::new())
            .await?;

        Ok(res.data)
    }

    /// Fetches one page of the transactions created with the given reference,
    /// together with the pagination details.
    #[tracing::instrument(name = "List Transactions by Reference Page", skip(self))]
    pub async fn list_by_reference_page(
        &self,
        tx_ref: &str,
        page: u32,
    ) -> Result<ListTransactionsResponse, Error> {
        if tx_ref.is_empty() {
            return Err(Error::MissingField("tx_ref"));
        }

        let url = self.list_url(tx_ref, Some(page));

        self.inner
            .execute_request(Method::GET, url, None, HeaderMap::new())
            .await
    }

    fn list_url(&self, tx_ref: &str, page: Option<u32>) -> reqwest::Url {
        let mut url = self.inner.endpoint(&["transactions"]);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("tx_ref", tx_ref);
            if let Some(page) = page {
                query.append_pair("page", &page.to_string());
            }
        }
        url
    }
}
