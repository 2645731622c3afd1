//! Handlers for the browser-facing checkout flow: the storefront page,
//! the checkout trigger, and the success/cancel landing pages.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use storefront_core::types::DbId;
use storefront_db::repositories::ProductRepo;

use crate::checkout::CheckoutContext;
use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

/// Query parameters accepted by the checkout trigger.
#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    /// Buyer email to record on the session and pre-fill at the provider.
    /// Optional: anonymous checkouts carry no email.
    pub email: Option<String>,
}

/// GET /
///
/// Storefront page listing all products with a checkout link each.
pub async fn storefront_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = ProductRepo::list_all(&state.pool).await?;

    Ok(Html(pages::render_product_list(&products)))
}

/// GET /checkout/{product_id}
///
/// Create a provider checkout session for the product and redirect the
/// buyer to the hosted payment page. 404 if the product does not exist;
/// 502 if the provider call fails (in which case nothing is persisted).
pub async fn start_checkout(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Query(params): Query<CheckoutParams>,
) -> AppResult<Redirect> {
    let ctx = CheckoutContext {
        customer_email: params.email,
        base_url: state.config.public_base_url.clone(),
    };

    let outcome = state
        .checkout
        .create_checkout_session(&state.pool, product_id, &ctx)
        .await?;

    Ok(Redirect::to(&outcome.redirect_url))
}

/// GET /checkout/success
pub async fn success_page() -> Html<&'static str> {
    Html(pages::SUCCESS_PAGE)
}

/// GET /checkout/cancel
pub async fn cancel_page() -> Html<&'static str> {
    Html(pages::CANCEL_PAGE)
}
