//! Route definitions for the browser-facing storefront flow.

use axum::routing::get;
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Storefront routes, mounted at the root.
///
/// ```text
/// GET /                        -> storefront_page
/// GET /checkout/{product_id}   -> start_checkout (redirects to provider)
/// GET /checkout/success        -> success_page
/// GET /checkout/cancel         -> cancel_page
/// ```
///
/// The static `success`/`cancel` segments take precedence over the
/// `{product_id}` parameter.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::storefront_page))
        .route("/checkout/{product_id}", get(checkout::start_checkout))
        .route("/checkout/success", get(checkout::success_page))
        .route("/checkout/cancel", get(checkout::cancel_page))
}
