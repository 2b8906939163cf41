//! Domain types for the Shopify Storefront API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! response shapes in [`super::queries`].

use luna_desire_core::{Connection, Price, PriceError, parse_amount};
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount with currency code, as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Parse into a typed [`Price`].
    ///
    /// # Errors
    ///
    /// Returns `PriceError` for a non-numeric amount or unsupported currency.
    pub fn to_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.amount, &self.currency_code)
    }

    /// Display string such as `$70.00`, or `None` if the amount is not numeric.
    ///
    /// Currencies without a known symbol render as `"70.00 JPY"`.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        match self.to_price() {
            Ok(price) => Some(price.display()),
            Err(PriceError::UnsupportedCurrency(code)) => parse_amount(&self.amount)
                .ok()
                .map(|amount| format!("{:.2} {code}", amount.round_dp(2))),
            Err(PriceError::InvalidAmount(_)) => None,
        }
    }
}

/// Price range for a product.
///
/// Either bound may be missing from a partial response; badge rules treat a
/// missing bound as "not shown".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Option<Money>,
    /// Maximum price among all variants.
    pub max_variant_price: Option<Money>,
}

impl PriceRange {
    /// Whether the variants are priced differently (strikethrough shown).
    ///
    /// Amounts are compared as the API returned them, so `"49.0"` and
    /// `"49.00"` count as different.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        match (&self.min_variant_price, &self.max_variant_price) {
            (Some(min), Some(max)) => min.amount != max.amount,
            _ => false,
        }
    }

    /// Whether the starting price earns the free shipping badge.
    #[must_use]
    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.min_variant_price
            .as_ref()
            .and_then(|min| min.to_price().ok())
            .is_some_and(|price| price.qualifies_for_free_shipping())
    }
}

// =============================================================================
// Image Types
// =============================================================================

/// Product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Shopify image ID.
    pub id: Option<String>,
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Image width in pixels.
    pub width: Option<i64>,
    /// Image height in pixels.
    pub height: Option<i64>,
}

// =============================================================================
// SEO Types
// =============================================================================

/// SEO metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    /// Meta description.
    pub description: Option<String>,
}

// =============================================================================
// Product Types
// =============================================================================

/// A product as shown in listings and grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductItem {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Manufacturer.
    pub vendor: String,
    /// Featured image, if the product has one.
    pub featured_image: Option<Image>,
    /// Variant price range.
    pub price_range: PriceRange,
}

/// Paginated list of products.
pub type ProductConnection = Connection<ProductItem>;

// =============================================================================
// Shop & Menu Types
// =============================================================================

/// Shop identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    /// Shop ID.
    pub id: String,
    /// Shop name (shown as the logo).
    pub name: String,
    /// URL of the shop's primary domain.
    pub primary_domain_url: String,
}

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item ID.
    pub id: String,
    /// Link text.
    pub title: String,
    /// Link target; entries without one are not rendered.
    pub url: Option<String>,
    /// Menu item type (e.g., `HTTP`, `PAGE`, `COLLECTION`).
    pub kind: String,
    /// ID of the linked resource, if any.
    pub resource_id: Option<String>,
    /// Tags set in the Shopify admin.
    pub tags: Vec<String>,
}

/// A navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Menu ID.
    pub id: String,
    /// Top-level entries, in display order.
    pub items: Vec<MenuItem>,
}

/// Data needed to render the site header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderData {
    /// Shop identity.
    pub shop: Shop,
    /// Header menu, if one exists with the configured handle.
    pub menu: Option<Menu>,
}

// =============================================================================
// Page Types
// =============================================================================

/// A CMS page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// URL handle (may differ from the requested handle when localized).
    pub handle: String,
    /// Page title.
    pub title: String,
    /// Page body as raw HTML.
    pub body: String,
    /// SEO metadata.
    pub seo: Option<Seo>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// The parts of a cart the storefront reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSummary {
    /// Total item quantity.
    pub total_quantity: u32,
}
