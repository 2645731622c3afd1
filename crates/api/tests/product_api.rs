//! Integration tests for the catalog JSON API.

mod common;

use axum::http::StatusCode;
use common::MockGateway;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: create product returns 201 and persists the row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_returns_201_and_persists(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::post_json(
        &app,
        "/api/v1/products",
        serde_json::json!({
            "name": "Widget",
            "description": "A very good widget",
            "amount": 2000,
            "quantity": 3
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["name"], "Widget");
    assert_eq!(json["data"]["amount"], 2000);
    // Omitted fields take their documented defaults.
    assert_eq!(json["data"]["currency"], "usd");
    assert_eq!(json["data"]["quantity"], 3);

    let id = json["data"]["id"].as_i64().unwrap();
    let fetched = common::get(&app, &format!("/api/v1/products/{id}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: validation failures are rejected with 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_with_empty_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::post_json(
        &app,
        "/api/v1/products",
        serde_json::json!({ "name": "", "amount": 2000 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_with_negative_amount_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::post_json(
        &app,
        "/api/v1/products",
        serde_json::json!({ "name": "Widget", "amount": -1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: list and get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_products_returns_data_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    common::seed_product(&pool, "Widget", 2000, "usd", 1).await;
    common::seed_product(&pool, "Gadget", 3000, "usd", 1).await;

    let response = common::get(&app, "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let items = json["data"].as_array().expect("data must be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Gadget", "newest product comes first");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::get(&app, "/api/v1/products/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = common::body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 999 not found");
}

// ---------------------------------------------------------------------------
// Test: delete cascades to recorded payment sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_product_cascades_to_its_sessions(pool: PgPool) {
    let gateway = MockGateway::new();
    let app = common::build_test_app(pool.clone(), gateway);

    let product = common::seed_product(&pool, "Widget", 2000, "usd", 1).await;

    // Record a session through the real checkout flow.
    let checkout = common::get(&app, &format!("/checkout/{}", product.id)).await;
    assert_eq!(checkout.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::count_all_sessions(&pool).await, 1);

    let response = common::delete(&app, &format!("/api/v1/products/{}", product.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(common::count_all_sessions(&pool).await, 0);

    let gone = common::get(&app, &format!("/api/v1/products/{}", product.id)).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::delete(&app, "/api/v1/products/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: per-product session listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn product_sessions_endpoint_lists_recorded_sessions(pool: PgPool) {
    let gateway = MockGateway::new();
    let app = common::build_test_app(pool.clone(), gateway);

    let product = common::seed_product(&pool, "Widget", 2000, "usd", 1).await;
    common::get(&app, &format!("/checkout/{}", product.id)).await;
    common::get(&app, &format!("/checkout/{}", product.id)).await;

    let response = common::get(&app, &format!("/api/v1/products/{}/sessions", product.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["product_id"], product.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_sessions_endpoint_404s_for_unknown_product(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), MockGateway::new());

    let response = common::get(&app, "/api/v1/products/999/sessions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
