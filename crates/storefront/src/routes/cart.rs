//! Cart badge fragment.
//!
//! The cart itself is owned by Shopify and the external cart flow, which
//! stores the cart id in the `cart` cookie. This storefront only reads the
//! total quantity, after first paint (`hx-trigger="load"`), and never fails
//! the page over it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use cookie::Cookie;
use tracing::instrument;

use crate::shopify::ShopifyError;
use crate::state::AppState;

use super::layout::RequestLocale;

/// Cookie holding the cart id.
pub const CART_COOKIE: &str = "cart";

/// Prefix of a full cart GID; the cookie usually holds only the suffix.
const CART_GID_PREFIX: &str = "gid://shopify/Cart/";

/// Cart badge display data.
///
/// `count` is `None` while the quantity is unknown: before the deferred
/// fragment arrives, or when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadgeView {
    pub count: Option<u32>,
}

impl CartBadgeView {
    /// Badge for an unknown quantity.
    #[must_use]
    pub const fn pending() -> Self {
        Self { count: None }
    }

    /// Number in the bubble; hidden for an empty or unknown cart.
    #[must_use]
    pub fn bubble(&self) -> Option<String> {
        match self.count {
            Some(0) | None => None,
            Some(n) if n > 99 => Some("99+".to_string()),
            Some(n) => Some(n.to_string()),
        }
    }

    /// Visible label: `Cart (3)`, or `Cart` when unknown.
    #[must_use]
    pub fn label(&self) -> String {
        self.count
            .map_or_else(|| "Cart".to_string(), |n| format!("Cart ({n})"))
    }

    /// Accessible label.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("Cart with {} items", self.count.unwrap_or(0))
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub badge: CartBadgeView,
}

/// Read the cart GID from the request cookies.
#[must_use]
pub fn cart_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == CART_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|id| !id.is_empty())
        .map(|id| {
            if id.starts_with("gid://") {
                id
            } else {
                format!("{CART_GID_PREFIX}{id}")
            }
        })
}

/// Load the cart quantity.
///
/// No cart cookie or an expired cart is an empty cart. Any other failure is
/// logged and yields an unknown count.
pub async fn load_deferred_data(
    state: &AppState,
    locale: &RequestLocale,
    headers: &HeaderMap,
) -> CartBadgeView {
    let Some(cart_id) = cart_id_from_headers(headers) else {
        return CartBadgeView { count: Some(0) };
    };

    match state.storefront().get_cart(&locale.locale, &cart_id).await {
        Ok(cart) => CartBadgeView {
            count: Some(cart.total_quantity),
        },
        Err(ShopifyError::NotFound(_)) => CartBadgeView { count: Some(0) },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load cart quantity");
            CartBadgeView::pending()
        }
    }
}

/// Cart count badge fragment. Always 200.
#[instrument(skip(state, headers))]
pub async fn count(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let locale = RequestLocale::default_for(&state);
    render(&state, &locale, &headers).await
}

/// Cart count badge fragment under a locale prefix.
///
/// An invalid locale falls back to the default rather than failing the
/// fragment.
#[instrument(skip(state, headers))]
pub async fn count_localized(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    let locale = RequestLocale::from_segment(&state, &locale)
        .unwrap_or_else(|_| RequestLocale::default_for(&state));
    render(&state, &locale, &headers).await
}

async fn render(state: &AppState, locale: &RequestLocale, headers: &HeaderMap) -> Response {
    let badge = load_deferred_data(state, locale, headers).await;
    let mut response = CartCountTemplate { badge }.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
