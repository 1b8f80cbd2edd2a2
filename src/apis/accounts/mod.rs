//! APIs and models related to bank accounts.

mod api;
mod model;

pub use api::AccountsApi;
pub use model::*;
