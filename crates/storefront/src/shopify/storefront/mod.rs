//! Shopify Storefront API client implementation.
//!
//! Uses `graphql_client` request/response envelopes with `reqwest` 0.13 for
//! HTTP. Header data, product pages and CMS pages are cached using `moka`
//! (5-minute TTL). Cart reads are never cached.

mod cache;
mod conversions;

pub mod queries;

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{GraphQLQuery, Response};
use luna_desire_core::Locale;
use moka::future::Cache;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::ShopifyStorefrontConfig;
use crate::pagination::PaginationVariables;
use crate::shopify::ShopifyError;
use crate::shopify::types::{CartSummary, HeaderData, Page, ProductConnection};

use cache::{CacheKey, CacheValue};
use conversions::{convert_cart_summary, convert_header, convert_page, convert_product_connection};
use queries::{
    AllProducts, CartQuantity, Header, PageByHandle, all_products, cart_quantity, header,
    page_by_handle,
};

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Provides typed, read-only access to shop, menu, product, page and cart
/// data. Everything except carts is cached for 5 minutes.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint(),
                access_token: config.storefront_private_token.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ShopifyError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            // Private access tokens use a different header than public tokens
            // See: https://shopify.dev/docs/storefronts/headless/building-with-the-storefront-api/getting-started
            .header("Shopify-Storefront-Private-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Read as text first so failures can log the body
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                operation = request_body.operation_name,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![super::GraphQLError::message(
                format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
            )]));
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    operation = request_body.operation_name,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");

            return Err(ShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| super::GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| super::GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                operation = request_body.operation_name,
                "Shopify GraphQL response has no data and no errors"
            );
            ShopifyError::GraphQL(vec![super::GraphQLError::message("No data in response")])
        })
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Get the shop identity and header menu.
    ///
    /// A missing menu is not an error; callers substitute a fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(locale = %locale))]
    pub async fn get_header(
        &self,
        locale: &Locale,
        menu_handle: &str,
    ) -> Result<HeaderData, ShopifyError> {
        let cache_key = CacheKey::Header {
            locale: locale.clone(),
            menu_handle: menu_handle.to_string(),
        };

        if let Some(CacheValue::Header(header)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for header");
            return Ok(*header);
        }

        let variables = header::Variables {
            country: Some(locale.country().to_string()),
            header_menu_handle: menu_handle.to_string(),
            language: Some(locale.language().to_string()),
        };

        let data = self.execute::<Header>(variables).await?;
        let header = convert_header(data);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Header(Box::new(header.clone())))
            .await;

        Ok(header)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get one page of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(locale = %locale))]
    pub async fn get_products(
        &self,
        locale: &Locale,
        pagination: &PaginationVariables,
    ) -> Result<ProductConnection, ShopifyError> {
        let cache_key = CacheKey::Products {
            locale: locale.clone(),
            variables: pagination.clone(),
        };

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let variables = all_products::Variables {
            country: Some(locale.country().to_string()),
            language: Some(locale.language().to_string()),
            first: pagination.first,
            last: pagination.last,
            start_cursor: pagination
                .start_cursor
                .as_ref()
                .map(|c| c.as_str().to_string()),
            end_cursor: pagination
                .end_cursor
                .as_ref()
                .map(|c| c.as_str().to_string()),
        };

        let data = self.execute::<AllProducts>(variables).await?;
        let connection = convert_product_connection(data.products);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(connection.clone()))
            .await;

        Ok(connection)
    }

    // =========================================================================
    // Page Methods
    // =========================================================================

    /// Get a CMS page by its handle.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::NotFound` if no page has this handle, or an
    /// error if the API request fails.
    #[instrument(skip(self), fields(locale = %locale, handle = %handle))]
    pub async fn get_page(&self, locale: &Locale, handle: &str) -> Result<Page, ShopifyError> {
        let cache_key = CacheKey::Page {
            locale: locale.clone(),
            handle: handle.to_string(),
        };

        if let Some(CacheValue::Page(page)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for page");
            return Ok(*page);
        }

        let variables = page_by_handle::Variables {
            language: Some(locale.language().to_string()),
            country: Some(locale.country().to_string()),
            handle: handle.to_string(),
        };

        let data = self.execute::<PageByHandle>(variables).await?;

        let page = data
            .page
            .map(convert_page)
            .ok_or_else(|| ShopifyError::NotFound(format!("Page not found: {handle}")))?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Page(Box::new(page.clone())))
            .await;

        Ok(page)
    }

    // =========================================================================
    // Cart Methods (not cached - owned by the external cart flow)
    // =========================================================================

    /// Get the quantity summary of an existing cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not found or the API request fails.
    #[instrument(skip(self), fields(locale = %locale, cart_id = %cart_id))]
    pub async fn get_cart(&self, locale: &Locale, cart_id: &str) -> Result<CartSummary, ShopifyError> {
        let variables = cart_quantity::Variables {
            cart_id: cart_id.to_string(),
            country: Some(locale.country().to_string()),
            language: Some(locale.language().to_string()),
        };

        let data = self.execute::<CartQuantity>(variables).await?;

        data.cart
            .map(convert_cart_summary)
            .ok_or_else(|| ShopifyError::NotFound(format!("Cart not found: {cart_id}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> StorefrontClient {
        StorefrontClient::new(&ShopifyStorefrontConfig {
            store: "luna-desire.myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            origin: server.uri(),
            storefront_private_token: SecretString::from("9f86d081884c7d659a2feaa0c55ad015"),
        })
    }

    fn page_body(handle: &str) -> serde_json::Value {
        json!({
            "data": {
                "page": {
                    "handle": handle,
                    "id": "gid://shopify/Page/1",
                    "title": "About",
                    "body": "<p>Hi</p>",
                    "seo": null
                }
            }
        })
    }

    #[tokio::test]
    async fn test_get_page_sends_token_and_locale() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2026-01/graphql.json"))
            .and(header_matcher(
                "Shopify-Storefront-Private-Token",
                "9f86d081884c7d659a2feaa0c55ad015",
            ))
            .and(body_partial_json(json!({
                "operationName": "Page",
                "variables": {"handle": "about", "country": "CA", "language": "FR"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body("about")))
            .expect(1)
            .mount(&server)
            .await;

        let locale = Locale::new("fr", "ca").unwrap();
        let page = client_for(&server).get_page(&locale, "about").await.unwrap();
        assert_eq!(page.title, "About");
    }

    #[tokio::test]
    async fn test_get_page_cache_hit_skips_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body("about")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let locale = Locale::default();
        client.get_page(&locale, "about").await.unwrap();
        let cached = client.get_page(&locale, "about").await.unwrap();
        assert_eq!(cached.handle, "about");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"page": null}})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_page(&Locale::default(), "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_header(&Locale::default(), "main-menu")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::RateLimited(7)));
    }

    #[tokio::test]
    async fn test_graphql_errors_are_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "Throttled"}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_products(&Locale::default(), &PaginationVariables::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: Throttled");
    }

    #[tokio::test]
    async fn test_server_error_is_graphql_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_cart(&Locale::default(), "gid://shopify/Cart/abc")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::GraphQL(_)));
    }

    #[tokio::test]
    async fn test_get_cart_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"operationName": "CartQuantity"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"cart": {"totalQuantity": 3}}
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let locale = Locale::default();
        for _ in 0..2 {
            let cart = client.get_cart(&locale, "gid://shopify/Cart/abc").await.unwrap();
            assert_eq!(cart.total_quantity, 3);
        }
    }
}
