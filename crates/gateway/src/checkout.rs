//! Checkout gateway seam: the request/response types and the trait the
//! orchestrator depends on.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single-line-item, one-time-payment checkout session request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Product display name shown on the hosted payment page.
    pub product_name: String,

    /// Lowercase ISO currency code (e.g. `usd`).
    pub currency: String,

    /// Price per unit in minor currency units.
    pub unit_amount: i64,

    /// Line-item quantity.
    pub quantity: u64,

    /// Pre-filled customer email, when the buyer is known.
    #[serde(default)]
    pub customer_email: Option<String>,

    /// Absolute URL to redirect to after successful payment.
    pub success_url: String,

    /// Absolute URL to redirect to if checkout is abandoned.
    pub cancel_url: String,

    /// Optional idempotency key forwarded to the provider. When absent,
    /// every call creates a distinct session.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// A checkout session as reported by the provider at creation time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewaySession {
    /// Provider-issued session identifier.
    pub id: String,

    /// Provider-hosted payment page to redirect the buyer to.
    pub checkout_url: String,

    /// Session status as reported by the provider (e.g. `open`).
    pub status: Option<String>,

    /// Payment status as reported by the provider (e.g. `unpaid`).
    pub payment_status: Option<String>,
}

/// A payment provider capable of creating hosted checkout sessions.
///
/// One outbound network call per invocation; implementations do not
/// retry on their own.
#[async_trait::async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a checkout session at the provider and return its handle.
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<GatewaySession>;
}
