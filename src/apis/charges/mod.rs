//! APIs related to charges.

mod api;

pub use api::ChargesApi;
