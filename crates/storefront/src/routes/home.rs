//! Home page route handler.
//!
//! Critical data (header and one page of products) is fetched concurrently
//! and awaited before rendering; the cart badge is deferred to
//! `/cart/count`.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, RawQuery, State};
use tracing::instrument;
use url::Url;

use crate::content::{self, HERO, Hero, PRODUCTS_HEADING};
use crate::error::AppError;
use crate::filters;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated, PaginationQuery, PaginationVariables};
use crate::query::QueryParams;
use crate::shopify::types::{HeaderData, Image, ProductConnection, ProductItem};
use crate::state::AppState;

use super::layout::{LayoutView, RequestLocale};

/// Cards above the fold whose images load eagerly.
const EAGER_IMAGE_COUNT: usize = 12;

/// Widths offered in `srcset`, in pixels.
const SRCSET_WIDTHS: [i64; 5] = [180, 360, 540, 720, 900];

// =============================================================================
// Product and Image Views
// =============================================================================

/// Image display data for templates.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub src: String,
    pub srcset: Option<String>,
    pub alt: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// `eager` or `lazy`.
    pub loading: &'static str,
}

impl ImageView {
    fn new(image: &Image, fallback_alt: &str, eager: bool) -> Self {
        let alt = image
            .alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback_alt)
            .to_string();

        Self {
            src: image.url.clone(),
            srcset: srcset(&image.url, image.width),
            alt,
            width: image.width,
            height: image.height,
            loading: if eager { "eager" } else { "lazy" },
        }
    }
}

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub href: String,
    pub title: String,
    pub vendor: String,
    pub image: Option<ImageView>,
    /// Starting price, omitted if it cannot be formatted.
    pub price: Option<String>,
    /// Highest price, struck through before the starting price.
    pub compare_at_price: Option<String>,
    pub free_shipping: bool,
}

impl ProductCardView {
    /// Build the card for the product at `index` in the grid.
    #[must_use]
    pub fn new(product: &ProductItem, index: usize, locale: &RequestLocale) -> Self {
        let range = &product.price_range;
        let compare_at_price = if range.has_discount() {
            range.max_variant_price.as_ref().and_then(|max| max.formatted())
        } else {
            None
        };

        Self {
            href: locale.path(&format!("/products/{}", product.handle)),
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            image: product
                .featured_image
                .as_ref()
                .map(|image| ImageView::new(image, &product.title, index < EAGER_IMAGE_COUNT)),
            price: range.min_variant_price.as_ref().and_then(|min| min.formatted()),
            compare_at_price,
            free_shipping: range.qualifies_for_free_shipping(),
        }
    }
}

/// Shopify CDN URL for `src` resized to `width`.
fn sized_url(src: &str, width: i64) -> Option<String> {
    let mut url = Url::parse(src).ok()?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "width")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("width", &width.to_string());
    Some(url.into())
}

/// Responsive `srcset`, limited to the image's intrinsic width when known.
fn srcset(src: &str, intrinsic_width: Option<i64>) -> Option<String> {
    let entries: Vec<String> = SRCSET_WIDTHS
        .iter()
        .copied()
        .filter(|w| intrinsic_width.is_none_or(|max| *w <= max))
        .map(|w| sized_url(src, w).map(|url| format!("{url} {w}w")))
        .collect::<Option<_>>()?;

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Data the home page cannot render without.
pub struct HomeCriticalData {
    pub header: HeaderData,
    pub products: ProductConnection,
}

/// Fetch header and products concurrently.
///
/// # Errors
///
/// Fails if either query fails.
pub async fn load_critical_data(
    state: &AppState,
    locale: &RequestLocale,
    pagination: &PaginationVariables,
) -> Result<HomeCriticalData, AppError> {
    let storefront = state.storefront();
    let (header, products) = tokio::try_join!(
        storefront.get_header(&locale.locale, &state.config().header_menu_handle),
        storefront.get_products(&locale.locale, pagination),
    )?;

    Ok(HomeCriticalData { header, products })
}

// =============================================================================
// Handlers
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub hero: Hero,
    pub heading: &'static str,
    pub products: Paginated<ProductCardView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<HomeTemplate, AppError> {
    let locale = RequestLocale::default_for(&state);
    render(&state, &locale, query.as_deref()).await
}

/// Display the home page under a locale prefix.
#[instrument(skip(state))]
pub async fn home_localized(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<HomeTemplate, AppError> {
    let locale = RequestLocale::from_segment(&state, &locale)?;
    render(&state, &locale, query.as_deref()).await
}

async fn render(
    state: &AppState,
    locale: &RequestLocale,
    query: Option<&str>,
) -> Result<HomeTemplate, AppError> {
    let params = QueryParams::parse(query);
    let pagination =
        PaginationVariables::from_query(&PaginationQuery::from_params(&params), DEFAULT_PAGE_SIZE);

    let HomeCriticalData { header, products } =
        load_critical_data(state, locale, &pagination).await?;

    let path = locale.path("/");
    let layout = LayoutView::new(
        state,
        &header,
        locale,
        &path,
        &params,
        content::page_title("Home"),
    );
    let products = Paginated::from_connection(products, &path, &params, |index, product| {
        ProductCardView::new(&product, index, locale)
    })
    .with_class("products-grid");

    Ok(HomeTemplate {
        layout,
        hero: HERO,
        heading: PRODUCTS_HEADING,
        products,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::shopify::types::{Money, PriceRange};

    use super::*;

    fn locale() -> RequestLocale {
        RequestLocale::parse("en-us", &[luna_desire_core::Locale::default()]).unwrap()
    }

    fn money(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    fn product(min: &str, max: &str, image: Option<Image>) -> ProductItem {
        ProductItem {
            id: "gid://shopify/Product/1".to_string(),
            handle: "silk-robe".to_string(),
            title: "Silk Robe".to_string(),
            vendor: "Luna".to_string(),
            featured_image: image,
            price_range: PriceRange {
                min_variant_price: Some(money(min)),
                max_variant_price: Some(money(max)),
            },
        }
    }

    fn image(alt: Option<&str>, width: Option<i64>) -> Image {
        Image {
            id: None,
            url: "https://cdn.shopify.com/s/files/1/robe.jpg?v=17".to_string(),
            alt_text: alt.map(str::to_string),
            width,
            height: Some(400),
        }
    }

    #[test]
    fn test_card_with_discount_and_free_shipping() {
        let card = ProductCardView::new(&product("70.0", "95.0", None), 0, &locale());
        assert_eq!(card.href, "/en-us/products/silk-robe");
        assert_eq!(card.price.as_deref(), Some("$70.00"));
        assert_eq!(card.compare_at_price.as_deref(), Some("$95.00"));
        assert!(card.free_shipping);
    }

    #[test]
    fn test_card_without_discount() {
        let card = ProductCardView::new(&product("49.0", "49.0", None), 0, &locale());
        assert!(card.compare_at_price.is_none());
        assert!(!card.free_shipping);
    }

    #[test]
    fn test_card_with_malformed_price_omits_elements() {
        let card = ProductCardView::new(&product("n/a", "95.0", None), 0, &locale());
        assert!(card.price.is_none());
        assert!(!card.free_shipping);
        assert_eq!(card.compare_at_price.as_deref(), Some("$95.00"));
    }

    #[test]
    fn test_image_alt_falls_back_to_title() {
        let card = ProductCardView::new(&product("1", "1", Some(image(None, None))), 0, &locale());
        assert_eq!(card.image.unwrap().alt, "Silk Robe");
        let card = ProductCardView::new(&product("1", "1", Some(image(Some(" "), None))), 0, &locale());
        assert_eq!(card.image.unwrap().alt, "Silk Robe");
    }

    #[test]
    fn test_first_twelve_images_load_eagerly() {
        let item = product("1", "1", Some(image(Some("Robe"), None)));
        let eager = ProductCardView::new(&item, 11, &locale());
        let lazy = ProductCardView::new(&item, 12, &locale());
        assert_eq!(eager.image.unwrap().loading, "eager");
        assert_eq!(lazy.image.unwrap().loading, "lazy");
    }

    #[test]
    fn test_srcset_uses_width_param_and_intrinsic_limit() {
        let set = srcset("https://cdn.shopify.com/s/files/1/robe.jpg?v=17", Some(400)).unwrap();
        assert_eq!(
            set,
            "https://cdn.shopify.com/s/files/1/robe.jpg?v=17&width=180 180w, \
             https://cdn.shopify.com/s/files/1/robe.jpg?v=17&width=360 360w"
        );
    }

    #[test]
    fn test_srcset_replaces_existing_width() {
        assert_eq!(
            sized_url("https://cdn.shopify.com/a.jpg?width=50&v=1", 180).as_deref(),
            Some("https://cdn.shopify.com/a.jpg?v=1&width=180")
        );
    }

    #[test]
    fn test_srcset_absent_for_relative_or_tiny_images() {
        assert!(srcset("/static/images/robe.jpg", None).is_none());
        assert!(srcset("https://cdn.shopify.com/a.jpg", Some(100)).is_none());
    }
}
