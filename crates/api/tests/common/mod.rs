//! Shared test harness: a scripted gateway double plus router and
//! request helpers mirroring the production middleware stack.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use storefront_api::checkout::CheckoutService;
use storefront_api::config::ServerConfig;
use storefront_api::routes;
use storefront_api::state::AppState;
use storefront_db::models::product::{CreateProduct, Product};
use storefront_db::repositories::ProductRepo;
use storefront_gateway::{CheckoutGateway, CheckoutRequest, GatewayError, GatewaySession};

// ---------------------------------------------------------------------------
// Gateway double
// ---------------------------------------------------------------------------

/// A scripted [`CheckoutGateway`] that never touches the network.
///
/// Counts calls, records the last request, and hands out sequential
/// session ids (`cs_test_001`, `cs_test_002`, ...). Flip
/// [`fail_with_timeout`](Self::fail_with_timeout) to make every
/// subsequent call fail the way a provider outage would.
pub struct MockGateway {
    calls: AtomicUsize,
    fail: AtomicBool,
    last_request: Mutex<Option<CheckoutRequest>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            last_request: Mutex::new(None),
        })
    }

    /// Number of `create_checkout_session` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail like a provider timeout.
    pub fn fail_with_timeout(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// The most recent request received, if any.
    pub fn last_request(&self) -> Option<CheckoutRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for MockGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> storefront_gateway::Result<GatewaySession> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_request.lock().unwrap() = Some(request);

        if self.fail.load(Ordering::SeqCst) {
            return Err(GatewayError::Stripe("simulated provider timeout".into()));
        }

        Ok(GatewaySession {
            id: format!("cs_test_{n:03}"),
            checkout_url: format!("https://checkout.stripe.test/pay/cs_test_{n:03}"),
            status: Some("open".into()),
            payment_status: Some("unpaid".into()),
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3000".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and gateway double.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, gateway: Arc<dyn CheckoutGateway>) -> Router {
    let config = test_config();
    let checkout = Arc::new(CheckoutService::new(gateway));

    let state = AppState {
        pool,
        config: Arc::new(config),
        checkout,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::checkout::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a DELETE request against the app.
pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    use http_body_util::BodyExt;

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a product directly through the repository.
pub async fn seed_product(
    pool: &PgPool,
    name: &str,
    amount: i64,
    currency: &str,
    quantity: i32,
) -> Product {
    ProductRepo::create(
        pool,
        &CreateProduct {
            stripe_product_id: None,
            stripe_price_id: None,
            name: name.to_string(),
            description: String::new(),
            currency: currency.to_string(),
            amount,
            active: Some(true),
            metadata: None,
            quantity,
        },
    )
    .await
    .expect("failed to seed product")
}

/// Count all payment session rows, across every product.
pub async fn count_all_sessions(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payment_sessions")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
