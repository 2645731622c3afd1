//! Repository for the `payment_sessions` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::payment_session::{CreatePaymentSession, PaymentSession};

/// Column list for payment_sessions queries.
const COLUMNS: &str = "id, stripe_session_id, product_id, customer_email, \
    currency, amount_total, status, payment_status, created_at, updated_at";

/// Provides insert and lookup operations for payment sessions
/// (write-once checkout records).
pub struct PaymentSessionRepo;

impl PaymentSessionRepo {
    /// Insert a new payment session, returning the created row.
    ///
    /// `stripe_session_id` carries a unique constraint; inserting the same
    /// provider session twice fails with a `uq_*` violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePaymentSession,
    ) -> Result<PaymentSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_sessions
                (stripe_session_id, product_id, customer_email,
                 currency, amount_total, status, payment_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(&input.stripe_session_id)
            .bind(input.product_id)
            .bind(&input.customer_email)
            .bind(&input.currency)
            .bind(input.amount_total)
            .bind(&input.status)
            .bind(&input.payment_status)
            .fetch_one(pool)
            .await
    }

    /// Find a payment session by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PaymentSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_sessions WHERE id = $1");
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a payment session by the provider-issued session id.
    pub async fn find_by_stripe_session_id(
        pool: &PgPool,
        stripe_session_id: &str,
    ) -> Result<Option<PaymentSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_sessions WHERE stripe_session_id = $1");
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(stripe_session_id)
            .fetch_optional(pool)
            .await
    }

    /// List all payment sessions for a product, newest first.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<PaymentSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payment_sessions
             WHERE product_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PaymentSession>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Count the number of payment sessions for a product.
    pub async fn count_for_product(pool: &PgPool, product_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM payment_sessions WHERE product_id = $1")
                .bind(product_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
