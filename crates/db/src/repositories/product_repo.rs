//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::product::{CreateProduct, Product};

/// Column list for products queries.
const COLUMNS: &str = "id, stripe_product_id, stripe_price_id, name, description, \
    currency, amount, active, metadata, quantity, created_at, updated_at";

/// Provides CRUD operations for catalog products.
///
/// Products are managed by the catalog endpoints; the checkout flow only
/// ever reads them.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (stripe_product_id, stripe_price_id, name, description,
                 currency, amount, active, metadata, quantity)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.stripe_product_id)
            .bind(&input.stripe_price_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.currency)
            .bind(input.amount)
            .bind(input.active)
            .bind(&input.metadata)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Delete a product (payment sessions cascade with it).
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
