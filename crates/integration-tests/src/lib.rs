//! Integration tests for LunaDesire.
//!
//! Each test drives the full storefront router (middleware included) with
//! `tower::ServiceExt::oneshot`, against a `wiremock` server standing in for
//! the Shopify Storefront API.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luna-desire-integration-tests
//! ```

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use luna_desire_storefront::{
    app,
    config::{ShopifyStorefrontConfig, StorefrontConfig},
    state::AppState,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method},
};

/// Shopify store domain used by every test.
pub const STORE: &str = "luna-desire.myshopify.com";

/// Storefront router wired to a mock Storefront API.
pub struct TestContext {
    pub server: MockServer,
    app: Router,
}

impl TestContext {
    /// Start a mock API and build the router against it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = StorefrontConfig {
            host: [127, 0, 0, 1].into(),
            port: 0,
            public_store_domain: "lunadesire.com".to_string(),
            default_locale: luna_desire_core::Locale::default(),
            supported_locales: vec![
                luna_desire_core::Locale::default(),
                luna_desire_core::Locale::new("fr", "ca").expect("valid locale"),
            ],
            header_menu_handle: "main-menu".to_string(),
            shopify: ShopifyStorefrontConfig {
                store: STORE.to_string(),
                api_version: "2026-01".to_string(),
                origin: server.uri(),
                storefront_private_token: SecretString::from("9f86d081884c7d659a2feaa0c55ad015"),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        };

        Self {
            server,
            app: app(AppState::new(config)),
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    #[allow(clippy::unwrap_used)]
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Send a GET request with a `Cookie` header.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    #[allow(clippy::unwrap_used)]
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Answer the named operation with `body`.
    pub async fn mock_operation(&self, operation: &str, body: Value) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "operationName": operation })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Fail the named operation with an HTTP status.
    pub async fn fail_operation(&self, operation: &str, status: u16) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "operationName": operation })))
            .respond_with(ResponseTemplate::new(status).set_body_string("unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Answer the header query with a shop and a two-item menu.
    pub async fn mock_header(&self) {
        self.mock_operation("Header", header_body()).await;
    }
}

/// Read a response body as a string.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
#[allow(clippy::unwrap_used)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Header query response: one internal and one external menu item.
#[must_use]
pub fn header_body() -> Value {
    json!({
        "data": {
            "shop": {
                "id": "gid://shopify/Shop/1",
                "name": "LunaDesire",
                "primaryDomain": { "url": "https://lunadesire.com" }
            },
            "menu": {
                "id": "gid://shopify/Menu/1",
                "items": [
                    {
                        "id": "gid://shopify/MenuItem/1",
                        "resourceId": null,
                        "tags": [],
                        "title": "Catalog",
                        "kind": "CATALOG",
                        "url": format!("https://{STORE}/collections/all")
                    },
                    {
                        "id": "gid://shopify/MenuItem/2",
                        "resourceId": null,
                        "tags": [],
                        "title": "Blog",
                        "kind": "HTTP",
                        "url": "https://blog.example.org/latest"
                    }
                ]
            }
        }
    })
}

/// A product list item.
#[must_use]
pub fn product(handle: &str, title: &str, min: &str, max: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Product/{handle}"),
        "handle": handle,
        "title": title,
        "vendor": "Luna",
        "featuredImage": {
            "id": null,
            "altText": null,
            "url": format!("https://cdn.shopify.com/s/files/1/{handle}.jpg"),
            "width": 400,
            "height": 400
        },
        "priceRange": {
            "minVariantPrice": { "amount": min, "currencyCode": "USD" },
            "maxVariantPrice": { "amount": max, "currencyCode": "USD" }
        }
    })
}

/// Products query response.
#[must_use]
pub fn products_body(nodes: &[Value], has_next: bool, end_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "products": {
                "nodes": nodes,
                "pageInfo": {
                    "hasPreviousPage": false,
                    "hasNextPage": has_next,
                    "startCursor": null,
                    "endCursor": end_cursor
                }
            }
        }
    })
}

/// Page query response.
#[must_use]
pub fn page_body(handle: &str, title: &str, body: &str) -> Value {
    json!({
        "data": {
            "page": {
                "handle": handle,
                "id": format!("gid://shopify/Page/{handle}"),
                "title": title,
                "body": body,
                "seo": { "description": format!("All about {title}") }
            }
        }
    })
}
