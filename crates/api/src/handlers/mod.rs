//! Request handlers, grouped by surface: the browser-facing checkout
//! flow and the JSON catalog API.

pub mod checkout;
pub mod products;
