use crate::apis::{null_as_default, ApiResponse};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Envelope returned when fetching or charging a single transaction.
pub type TransactionResponse = ApiResponse<TransactionData>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TransactionData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub flw_ref: String,
    pub device_fingerprint: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub charged_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub app_fee: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_fee: f64,
    pub processor_response: Option<String>,
    pub auth_model: Option<String>,
    pub ip: Option<String>,
    pub narration: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub payment_type: Option<String>,
    pub created_at: Option<String>,
    pub account_id: Option<i64>,
    pub card: Option<Card>,
    /// Free-form metadata attached to the transaction.
    pub meta: Option<serde_json::Value>,
    pub amount_settled: Option<f64>,
    pub customer: Option<Customer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Card {
    #[serde(deserialize_with = "null_as_default")]
    pub first_6digits: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_4digits: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Token usable for future tokenized charges. Empty if the card was not tokenised.
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    /// Expiry date in `MM/YY` form.
    #[serde(deserialize_with = "null_as_default")]
    pub expiry: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub created_at: Option<String>,
}

/// Envelope returned when listing transactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListTransactionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: ListMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<TransactionData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub page_info: PageInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PageInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pages: u32,
}

impl Card {
    /// Returns `true` if the card carries a token for future charges.
    pub fn is_tokenised(&self) -> bool {
        !self.token.is_empty()
    }

    /// Checks whether the card expires before `date`.
    ///
    /// The expiry is taken as the first day of its month. If it cannot be parsed the card
    /// is reported as expiring. The raw expiry string is always returned alongside.
    pub fn will_expire_before(&self, date: DateTime<Utc>) -> (bool, &str) {
        match parse_expiry(&self.expiry) {
            Some(expiry) => (expiry < date, &self.expiry),
            None => {
                tracing::warn!("Couldn't parse card expiry date: '{}'", self.expiry);
                (true, &self.expiry)
            }
        }
    }
}

impl TransactionData {
    /// Returns `true` if the transaction's card carries a token.
    pub fn is_tokenised(&self) -> bool {
        self.card.as_ref().map_or(false, Card::is_tokenised)
    }

    /// See [`Card::will_expire_before`]. A transaction without a card counts as expiring.
    pub fn card_will_expire_before(&self, date: DateTime<Utc>) -> (bool, &str) {
        match self.card {
            Some(ref card) => card.will_expire_before(date),
            None => (true, ""),
        }
    }
}

impl TransactionResponse {
    /// Returns `true` if the transaction's card carries a token.
    pub fn is_tokenised(&self) -> bool {
        self.data.is_tokenised()
    }

    /// See [`Card::will_expire_before`].
    pub fn card_will_expire_before(&self, date: DateTime<Utc>) -> (bool, &str) {
        self.data.card_will_expire_before(date)
    }
}

/// Parses a `MM/YY` expiry into midnight UTC of the first day of that month.
///
/// Two digit years follow the usual pivot: `69`-`99` map to the 1900s, `00`-`68` to the 2000s.
fn parse_expiry(expiry: &str) -> Option<DateTime<Utc>> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }

    let date = NaiveDate::parse_from_str(&format!("01/{}/{}", month, year), "%d/%m/%y").ok()?;

    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}
