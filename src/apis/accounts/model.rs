use crate::apis::{null_as_default, ApiResponse};
use serde::{Deserialize, Serialize};

/// Envelope returned when resolving a bank account.
pub type AccountValidationResponse = ApiResponse<AccountDetails>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AccountDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_name: String,
}
