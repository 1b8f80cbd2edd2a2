//! APIs and models related to virtual account numbers.

mod api;
mod model;

pub use api::VirtualAccountsApi;
pub use model::*;
