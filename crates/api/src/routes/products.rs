//! Route definitions for the catalog JSON API.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /                 -> list_products
/// POST   /                 -> create_product
/// GET    /{id}             -> get_product
/// DELETE /{id}             -> delete_product
/// GET    /{id}/sessions    -> list_product_sessions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product).delete(products::delete_product),
        )
        .route("/{id}/sessions", get(products::list_product_sessions))
}
