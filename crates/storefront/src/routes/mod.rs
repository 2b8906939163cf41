//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Home page (hero + product grid)
//! GET  /{locale}                    - Home page, localized (e.g. /fr-ca)
//! GET  /health                      - Health check
//!
//! # Pages
//! GET  /pages/{handle}              - CMS page (FAQ accordion for the FAQ handle)
//! GET  /{locale}/pages/{handle}     - CMS page, localized
//! GET  /pages, /pages/              - Missing handle (400)
//!
//! # Cart (HTMX fragment)
//! GET  /cart/count                  - Cart count badge
//! GET  /{locale}/cart/count         - Cart count badge, localized
//! ```
//!
//! UI state travels in the query string: `cursor`/`direction`/`per_page`
//! for pagination, `panel` for the open slide-out panel and `open` for the
//! open FAQ items.

pub mod cart;
pub mod home;
pub mod layout;
pub mod pages;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the page routes router.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/pages", get(pages::missing_handle))
        .route("/pages/", get(pages::missing_handle))
        .route("/pages/{handle}", get(pages::show))
}

/// Create the localized routes router.
///
/// Static paths take priority over the `{locale}` segment, so `/pages` and
/// `/health` never reach these handlers.
fn localized_routes() -> Router<AppState> {
    Router::new()
        .route("/{locale}", get(home::home_localized))
        .route("/{locale}/pages", get(pages::missing_handle_localized))
        .route("/{locale}/pages/", get(pages::missing_handle_localized))
        .route("/{locale}/pages/{handle}", get(pages::show_localized))
        .route("/{locale}/cart/count", get(cart::count_localized))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health))
        // CMS pages
        .merge(page_routes())
        // Deferred cart badge
        .route("/cart/count", get(cart::count))
        // Locale-prefixed variants
        .merge(localized_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
async fn health() -> &'static str {
    "ok"
}
