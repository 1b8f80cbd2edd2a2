use std::time::Duration;

// Default URLs
pub static DEFAULT_API_URL: &str = "https://api.flutterwave.com/v3";

// Environment variables
pub static API_URL_ENV_VAR: &str = "FW_API_URL";

/// Timeout of the HTTP client built by [`Config::with_default_client`](crate::client::Config::with_default_client).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

// Fixed values sent with every tokenized charge
pub static CHARGE_CURRENCY: &str = "NGN";
pub static CHARGE_COUNTRY: &str = "NG";

/// Transaction status accepted by webhook verification.
pub static SUCCESSFUL_STATUS: &str = "successful";
