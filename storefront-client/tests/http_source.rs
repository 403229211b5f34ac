// storefront-client/tests/http_source.rs
// HTTP product source against an in-process backend

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use storefront_client::{
    Category, ClientConfig, ClientError, HttpProductSource, Phase, ProductSource, ProductsPage,
    UserProfile,
};
use tokio::net::TcpListener;
use tokio::sync::watch;

/// fruits: two products; meat: 500; dairy: malformed body;
/// household: requires `Bearer secret`; everything else: empty list
async fn category_products(Path(category): Path<String>, headers: HeaderMap) -> Response {
    match category.as_str() {
        "fruits" => Json(json!([
            {"_id": "f1", "name": "Apple", "price": 1.2, "category": "fruits"},
            {"_id": "f2", "name": "Pear", "price": 0.9, "category": "fruits"}
        ]))
        .into_response(),
        "meat" => (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response(),
        "dairy" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "household" => {
            let authorized = headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == "Bearer secret");
            if authorized {
                Json(json!([{"_id": "h1", "name": "Soap"}])).into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }
        _ => Json(json!([])).into_response(),
    }
}

async fn spawn_backend() -> String {
    let app = Router::new().route(
        "/api/products/category/{category}",
        get(category_products),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn source(base_url: &str) -> HttpProductSource {
    ClientConfig::new(base_url)
        .with_timeout(5)
        .build_product_source()
        .unwrap()
}

#[tokio::test]
async fn test_decodes_products() {
    let base_url = spawn_backend().await;
    let products = source(&base_url)
        .products_by_category(Category::Fruits)
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "f1");
    assert_eq!(products[0].name(), Some("Apple"));
    assert_eq!(products[1].price(), Some(0.9));
}

#[tokio::test]
async fn test_non_success_status() {
    let base_url = spawn_backend().await;
    let err = source(&base_url)
        .products_by_category(Category::Meat)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_malformed_body() {
    let base_url = spawn_backend().await;
    let err = source(&base_url)
        .products_by_category(Category::Dairy)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{}", addr))
        .products_by_category(Category::Fruits)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_bearer_token() {
    let base_url = spawn_backend().await;

    let anonymous = source(&base_url)
        .products_by_category(Category::Household)
        .await
        .unwrap_err();
    assert_eq!(anonymous.status().map(|s| s.as_u16()), Some(401));

    let authed = ClientConfig::new(&base_url)
        .with_token("secret")
        .build_product_source()
        .unwrap();
    let products = authed
        .products_by_category(Category::Household)
        .await
        .unwrap();
    assert_eq!(products[0].id, "h1");
}

#[tokio::test]
async fn test_page_against_backend() {
    let base_url = spawn_backend().await;
    let config = ClientConfig::new(&base_url).with_token("secret");

    // Anonymous: dairy is requested and its malformed body fails the run.
    let (identity, identity_rx) = watch::channel(None);
    let (_cart, cart_rx) = watch::channel(0);
    let page = ProductsPage::mount(config.build_product_source().unwrap(), identity_rx, cart_rx);
    let failed = page.settled().await.unwrap();
    assert_eq!(failed.phase(), Phase::Error);
    assert!(
        failed
            .error
            .unwrap()
            .starts_with("Invalid response body")
    );
    assert!(failed.products.is_empty());

    // Vegan: neither meat nor dairy is requested.
    let mut view = page.subscribe();
    identity
        .send(Some(UserProfile::with_preference("vegan")))
        .unwrap();
    let state = {
        let settled = view
            .wait_for(|s| !s.loading && s.error.is_none())
            .await
            .unwrap();
        (*settled).clone()
    };

    assert_eq!(state.products.len(), 6);
    assert_eq!(state.products_for(Category::Fruits).len(), 2);
    assert_eq!(state.products_for(Category::Household)[0].id, "h1");
    assert!(state.products_for(Category::Snacks).is_empty());
}
