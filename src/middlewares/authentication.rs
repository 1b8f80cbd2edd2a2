use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use secrecy::{ExposeSecret, Secret};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the secret key as a bearer token into outgoing HTTP requests.
///
/// The header is inserted after the request has been built, so it always replaces
/// any `Authorization` header set by the caller.
pub struct AuthenticationMiddleware {
    secret_key: Secret<String>,
}

impl AuthenticationMiddleware {
    pub fn new(secret_key: Secret<String>) -> Self {
        Self { secret_key }
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", self.secret_key.expose_secret()))
                .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
