//! Product catalog models and DTOs.
//!
//! Defines the database row struct for `products` and the create input
//! used by the catalog management endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A purchasable product row from the `products` table.
///
/// `amount` is always in minor currency units (2000 = $20.00).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub stripe_product_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub name: String,
    pub description: String,
    pub currency: String,
    pub amount: i64,
    pub active: Option<bool>,
    pub metadata: Option<serde_json::Value>,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new catalog product.
#[derive(Debug, Clone, Deserialize, validator::Validate)]
pub struct CreateProduct {
    pub stripe_product_id: Option<String>,
    pub stripe_price_id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Lowercase ISO currency code. Defaults to `usd`.
    #[validate(length(min = 3, max = 10))]
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Price in minor currency units.
    #[validate(range(min = 0))]
    pub amount: i64,
    pub active: Option<bool>,
    pub metadata: Option<serde_json::Value>,
    /// Line-item quantity used at checkout.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_quantity() -> i32 {
    1
}
