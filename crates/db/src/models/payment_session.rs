//! Payment session models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A write-once payment session row from the `payment_sessions` table.
///
/// `status` and `payment_status` are copied verbatim from the provider
/// response at creation time and never updated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentSession {
    pub id: DbId,
    pub stripe_session_id: String,
    pub product_id: DbId,
    pub customer_email: Option<String>,
    pub currency: String,
    pub amount_total: i64,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for recording a newly created provider checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentSession {
    pub stripe_session_id: String,
    pub product_id: DbId,
    pub customer_email: Option<String>,
    pub currency: String,
    pub amount_total: i64,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}
