//! Clients for the various Flutterwave APIs.

use crate::Error;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Method, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt::{Debug, Formatter};

pub mod accounts;
pub mod charges;
pub mod transactions;
pub mod virtual_accounts;

/// Response envelope shared by the Flutterwave APIs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub data: T,
}

/// Decodes a JSON `null` as `T::default()`, the same value an absent field gets.
///
/// Flutterwave sends `null` for many fields documented as strings or numbers.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) struct FlutterwaveClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) api_url: Url,
}

impl FlutterwaveClientInner {
    /// Builds the URL of an endpoint by appending `segments` to the configured API URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // The API URL is checked to be a valid base when the client is built
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a request and decodes the `200 OK` response body into `T`.
    ///
    /// `Authorization` and `Content-Type` always win over the same names in `headers`.
    /// Any other status is turned into [`Error::ApiError`] by the middleware stack.
    pub(crate) async fn execute_request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        mut headers: HeaderMap,
    ) -> Result<T, Error> {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let bytes = request.send().await?.bytes().await?;

        serde_json::from_slice(&bytes).map_err(Error::Deserialization)
    }
}

impl Debug for FlutterwaveClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlutterwaveClientInner")
            .field("api_url", &self.api_url.as_str())
            .finish_non_exhaustive()
    }
}
