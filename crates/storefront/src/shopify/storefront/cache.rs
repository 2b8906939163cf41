//! Cache types for Storefront API responses.

use luna_desire_core::Locale;

use crate::pagination::PaginationVariables;
use crate::shopify::types::{HeaderData, Page, ProductConnection};

/// Cache key for read-only storefront data.
///
/// Every key carries the locale since responses are localized.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Header { locale: Locale, menu_handle: String },
    Products { locale: Locale, variables: PaginationVariables },
    Page { locale: Locale, handle: String },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Header(Box<HeaderData>),
    Products(ProductConnection),
    Page(Box<Page>),
}
