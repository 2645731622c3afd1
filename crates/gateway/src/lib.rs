//! Payment gateway integration for the storefront platform.
//!
//! Implements the "hosted checkout" approach: the server creates a
//! checkout session at the provider and redirects the buyer to the
//! provider-hosted payment page.
//!
//! The orchestration layer depends on the [`CheckoutGateway`] trait, not
//! on the concrete Stripe client, so tests can substitute a scripted
//! double without touching the network.

pub mod checkout;
pub mod client;
pub mod error;

pub use checkout::{CheckoutGateway, CheckoutRequest, GatewaySession};
pub use client::{StripeConfig, StripeGateway};
pub use error::{GatewayError, Result};
