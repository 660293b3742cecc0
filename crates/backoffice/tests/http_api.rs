use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use backoffice::{
    handler::AppRouter,
    repository::{Repositories, memory::MemoryStore},
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    AppRouter::build(AppState::new(Repositories::memory(MemoryStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn health_reports_running() {
    let app = app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API is running");
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = app();

    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["endpoints"]["orders"].is_array());
}

#[tokio::test]
async fn unknown_route_is_enveloped_404() {
    let app = app();

    let (status, body) = send(&app, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Endpoint not found"}));
}

#[tokio::test]
async fn create_then_fetch_product() {
    let app = app();

    let payload = json!({"name": "Mouse", "price": "29.99", "stock": 50}).to_string();
    let (status, created) = send(&app, with_json("POST", "/api/products", payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["price"], "29.99");

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/products/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["name"], "Mouse");
    assert_eq!(fetched["data"]["stock"], 50);
}

#[tokio::test]
async fn missing_product_is_a_business_failure() {
    let app = app();

    let (status, body) = send(&app, get("/api/products/404")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn malformed_json_is_rejected_with_400() {
    let app = app();

    let (status, body) = send(
        &app,
        with_json("POST", "/api/customers", "{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn rule_violations_are_rejected_with_400() {
    let app = app();

    let payload = json!({"name": "Mouse", "price": "29.99", "stock": -1}).to_string();
    let (status, body) = send(&app, with_json("POST", "/api/products", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation failed")
    );
}

#[tokio::test]
async fn insufficient_stock_order_reports_failure_in_body() {
    let app = app();

    let customer = json!({
        "first_name": "John",
        "last_name": "Doe",
        "email": "john.doe@email.com"
    })
    .to_string();
    let (_, customer) = send(&app, with_json("POST", "/api/customers", customer)).await;
    let customer_id = customer["data"]["id"].as_i64().unwrap();

    let product = json!({"name": "Laptop", "price": "999.99", "stock": 5}).to_string();
    let (_, product) = send(&app, with_json("POST", "/api/products", product)).await;
    let product_id = product["data"]["id"].as_i64().unwrap();

    let order = json!({
        "customer_id": customer_id,
        "items": [{"product_id": product_id, "quantity": 6}]
    })
    .to_string();
    let (status, body) = send(&app, with_json("POST", "/api/orders", order)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Insufficient stock for Laptop: requested=6, available=5"
    );
}

#[tokio::test]
async fn seeding_runs_once() {
    let app = app();

    let (status, first) = send(&app, with_json("POST", "/api/init-db", String::new())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Database initialized with sample data");
    assert_eq!(first["data"]["orders"], 3);

    let (_, second) = send(&app, with_json("POST", "/api/init-db", String::new())).await;
    assert_eq!(second["message"], "Database already initialized");

    let (_, pending) = send(&app, get("/api/orders/pending")).await;
    assert_eq!(pending["data"].as_array().map(Vec::len), Some(1));

    let (_, cart) = send(&app, get("/api/cart/3")).await;
    assert_eq!(cart["data"]["count"], 2);
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = app();

    let response = app.clone().oneshot(get("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("order_command_service_requests_total"));
}
