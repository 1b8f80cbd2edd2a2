use crate::apis::{null_as_default, ApiResponse};
use serde::{Deserialize, Serialize};

/// Envelope returned when creating a virtual account number.
pub type VirtualAccountResponse = ApiResponse<VirtualAccount>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct VirtualAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub response_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response_message: String,
    pub flw_ref: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub order_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    pub account_status: Option<String>,
    pub frequency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bank_name: String,
    pub created_at: Option<String>,
    /// `N/A` for permanent accounts.
    pub expiry_date: Option<String>,
    pub amount: Option<String>,
}
