//! Stripe-backed implementation of the checkout gateway.
//!
//! Wraps [`stripe::Client`] and maps the storefront's checkout request
//! onto Stripe's hosted Checkout Session API (card payment method, one
//! `price_data` line item, one-time payment mode).

use std::str::FromStr;

use stripe::{
    CheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCheckoutSessionPaymentMethodTypes,
    Currency, RequestStrategy,
};

use crate::checkout::{CheckoutGateway, CheckoutRequest, GatewaySession};
use crate::error::{GatewayError, Result};

/// Stripe credentials, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (`sk_test_...` / `sk_live_...`).
    pub secret_key: String,
}

impl StripeConfig {
    /// Load the Stripe configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| GatewayError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self { secret_key })
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret key.
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[redacted]")
            .finish()
    }
}

/// Stripe client wrapper implementing [`CheckoutGateway`].
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway from explicit configuration.
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: Client::new(config.secret_key.clone()),
        }
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for StripeGateway {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<GatewaySession> {
        // Reject requests Stripe cannot express before going to the network.
        let currency = Currency::from_str(&request.currency).map_err(|_| {
            GatewayError::InvalidRequest(format!("unknown currency code: {}", request.currency))
        })?;

        if request.quantity == 0 {
            return Err(GatewayError::InvalidRequest(
                "line-item quantity must be at least 1".into(),
            ));
        }

        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Payment);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
        params.customer_email = request.customer_email.as_deref();
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(request.quantity),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(request.unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: request.product_name.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = match &request.idempotency_key {
            Some(key) => {
                let client = self
                    .client
                    .clone()
                    .with_strategy(RequestStrategy::Idempotent(key.clone()));
                CheckoutSession::create(&client, params).await
            }
            None => CheckoutSession::create(&self.client, params).await,
        }
        .map_err(|e| GatewayError::Stripe(e.to_string()))?;

        let checkout_url = session.url.ok_or(GatewayError::MissingRedirectUrl)?;

        tracing::debug!(session_id = %session.id, "Created Stripe checkout session");

        Ok(GatewaySession {
            id: session.id.to_string(),
            checkout_url,
            status: session.status.map(|s| s.to_string()),
            payment_status: Some(session.payment_status.to_string()),
        })
    }
}
