//! Integration tests for CMS pages and the FAQ accordion.

#![allow(clippy::unwrap_used)]

use axum::http::{StatusCode, header};
use luna_desire_integration_tests::{TestContext, body_text, page_body};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_page_renders_body_and_description() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    ctx.mock_operation("Page", page_body("about", "About Us", "<p>We care.</p>"))
        .await;

    let response = ctx.get("/pages/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    assert!(body.contains("<title>LunaDesire | About Us</title>"));
    assert!(body.contains(r#"<meta name="description" content="All about About Us">"#));
    assert!(body.contains("<p>We care.</p>"));
    assert!(body.contains("/static/images/about.png"));
}

#[tokio::test]
async fn test_missing_page_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    ctx.mock_operation("Page", json!({"data": {"page": null}}))
        .await;

    let response = ctx.get("/pages/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_upstream_failure_is_bad_gateway() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    ctx.fail_operation("Page", 500).await;

    let response = ctx.get("/pages/about").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_missing_handle_is_rejected_before_querying() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&ctx.server)
        .await;

    for uri in ["/pages", "/pages/", "/en-us/pages"] {
        let response = ctx.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_localized_handle_redirects_to_canonical() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "Page",
            "variables": {"handle": "a-propos", "language": "FR", "country": "CA"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body("about", "À propos", "<p>Bonjour</p>")),
        )
        .mount(&ctx.server)
        .await;

    let response = ctx.get("/fr-ca/pages/a-propos?panel=cart").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/fr-ca/pages/about?panel=cart"
    );
}

// =============================================================================
// FAQ
// =============================================================================

#[tokio::test]
async fn test_faq_starts_collapsed() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    ctx.mock_operation(
        "Page",
        page_body("frequently-asked-questions", "FAQ", "<p>ignored</p>"),
    )
    .await;

    let body = body_text(ctx.get("/pages/frequently-asked-questions").await).await;
    assert!(body.contains("Will my package be shipped to me discreetly?"));
    assert!(!body.contains("faq-item-open"));
    assert!(!body.contains("<p>ignored</p>"));
    assert!(body.contains(
        r##"href="/pages/frequently-asked-questions?open=0#shipping-discreet""##
    ));
}

#[tokio::test]
async fn test_faq_open_items_from_query() {
    let ctx = TestContext::new().await;
    ctx.mock_header().await;
    ctx.mock_operation(
        "Page",
        page_body("frequently-asked-questions", "FAQ", "<p>ignored</p>"),
    )
    .await;

    let body = body_text(ctx.get("/pages/frequently-asked-questions?open=0,1,junk").await).await;
    assert_eq!(body.matches("faq-item faq-item-open").count(), 2);
    assert!(body.contains("plain, unmarked packaging"));
    assert!(body.contains("FedEx, UPS, and USPS"));
    // Closing item 0 keeps item 1 open
    assert!(body.contains(
        r##"href="/pages/frequently-asked-questions?open=1#shipping-discreet""##
    ));
}
