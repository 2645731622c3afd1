//! Checkout orchestration.
//!
//! Turns a product selection into a provider-confirmed checkout session
//! and a locally durable [`PaymentSession`] record:
//!
//! 1. resolve the product,
//! 2. create the hosted checkout session at the payment provider,
//! 3. insert exactly one `payment_sessions` row mirroring the provider
//!    response,
//! 4. hand back the hosted checkout URL as the redirect target.
//!
//! There are no retries and no idempotency key by default: calling this
//! twice for the same product creates two provider sessions and two rows.

use std::sync::Arc;

use sqlx::PgPool;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::payment_session::{CreatePaymentSession, PaymentSession};
use storefront_db::repositories::{PaymentSessionRepo, ProductRepo};
use storefront_gateway::{CheckoutGateway, CheckoutRequest};

use crate::error::{AppError, AppResult};

/// Per-request checkout inputs.
///
/// Customer identity is an explicit parameter here, never derived from
/// ambient request state; `base_url` anchors the success/cancel callback
/// URLs handed to the provider.
#[derive(Debug, Clone)]
pub struct CheckoutContext {
    /// Email of the buyer, when known. Stored on the payment session and
    /// pre-filled on the provider's payment page.
    pub customer_email: Option<String>,
    /// Absolute base URL of this service, without a trailing slash.
    pub base_url: String,
}

/// Result of a successful checkout call.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// Provider-hosted payment page to redirect the buyer to.
    pub redirect_url: String,
    /// The locally persisted session record.
    pub session: PaymentSession,
}

/// Orchestrates checkout session creation against the payment gateway.
///
/// Holds the gateway handle injected at construction; the handle is the
/// only way this service reaches the network.
pub struct CheckoutService {
    gateway: Arc<dyn CheckoutGateway>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn CheckoutGateway>) -> Self {
        Self { gateway }
    }

    /// Create a checkout session for `product_id`.
    ///
    /// On success exactly one `payment_sessions` row exists for the new
    /// provider session. On any failure no row is written; a gateway
    /// failure leaves no local trace, and a local insert failure after
    /// the provider call leaves an orphaned remote session (logged, not
    /// reconciled).
    pub async fn create_checkout_session(
        &self,
        pool: &PgPool,
        product_id: DbId,
        ctx: &CheckoutContext,
    ) -> AppResult<CheckoutOutcome> {
        let product = ProductRepo::find_by_id(pool, product_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id: product_id,
            }))?;

        // The stored quantity drives the line item; anything that cannot
        // be a line-item count is the catalog's data problem, not the
        // provider's.
        let quantity = u64::try_from(product.quantity).map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "product {product_id} has a negative quantity ({})",
                product.quantity
            )))
        })?;

        let request = CheckoutRequest {
            product_name: product.name.clone(),
            currency: product.currency.clone(),
            unit_amount: product.amount,
            quantity,
            customer_email: ctx.customer_email.clone(),
            success_url: join_url(&ctx.base_url, "/checkout/success"),
            cancel_url: join_url(&ctx.base_url, "/checkout/cancel"),
            idempotency_key: None,
        };

        let gateway_session = self.gateway.create_checkout_session(request).await?;

        let session = PaymentSessionRepo::create(
            pool,
            &CreatePaymentSession {
                stripe_session_id: gateway_session.id.clone(),
                product_id: product.id,
                customer_email: ctx.customer_email.clone(),
                // Amount and currency come from the product at call time,
                // not from whatever the provider echoes back.
                currency: product.currency.clone(),
                amount_total: product.amount,
                status: gateway_session.status.clone(),
                payment_status: gateway_session.payment_status.clone(),
            },
        )
        .await
        .map_err(|err| {
            // The provider session exists but we failed to record it.
            // Nothing reconciles this; leave a loud trace.
            tracing::error!(
                product_id,
                session_id = %gateway_session.id,
                error = %err,
                "Provider checkout session created but local insert failed",
            );
            AppError::Database(err)
        })?;

        tracing::info!(
            product_id,
            session_id = %session.stripe_session_id,
            amount_total = session.amount_total,
            currency = %session.currency,
            "Checkout session created",
        );

        Ok(CheckoutOutcome {
            redirect_url: gateway_session.checkout_url,
            session,
        })
    }
}

/// Resolve a path against a base URL, tolerating a trailing slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
