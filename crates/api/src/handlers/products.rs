//! Handlers for the catalog JSON API.
//!
//! Products are managed here, out of band from the checkout flow, which
//! only ever reads them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::product::CreateProduct;
use storefront_db::repositories::{PaymentSessionRepo, ProductRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
///
/// List all products, newest first.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    Ok(Json(DataResponse { data: product }))
}

/// POST /api/v1/products
///
/// Create a catalog product. Amounts are minor currency units.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// DELETE /api/v1/products/{id}
///
/// Delete a product; its payment sessions cascade with it.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductRepo::delete(&state.pool, product_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }));
    }

    tracing::info!(product_id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/products/{id}/sessions
///
/// List the payment sessions recorded for a product, newest first.
pub async fn list_product_sessions(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Distinguish "no sessions yet" from "no such product".
    ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    let sessions = PaymentSessionRepo::list_for_product(&state.pool, product_id).await?;

    Ok(Json(DataResponse { data: sessions }))
}
