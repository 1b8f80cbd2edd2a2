use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which turns every response whose status is not exactly `200 OK`
/// into an [`Error::ApiError`](crate::error::Error).
///
/// The raw body is always kept; the `message` of the Flutterwave error envelope is
/// extracted when the body parses as one.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let endpoint = response.url().to_string();
            let bytes = response.bytes().await?;

            tracing::debug!("Failed HTTP request to {}. Status code: {}", endpoint, status);

            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .ok()
                .and_then(|e| e.message);

            return Err(Error::ApiError(ApiError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
                endpoint,
                message,
            })
            .into());
        }

        Ok(response)
    }
}

/// Error envelope returned by Flutterwave APIs.
#[derive(serde::Deserialize, Debug)]
struct ErrorResponse {
    message: Option<String>,
}
