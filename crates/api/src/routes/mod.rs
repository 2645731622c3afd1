pub mod checkout;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products                    list (GET), create (POST)
/// /products/{id}               get (GET), delete (DELETE)
/// /products/{id}/sessions      payment sessions for a product (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}
