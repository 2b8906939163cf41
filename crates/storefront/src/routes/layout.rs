//! Shared page chrome: locale prefix, header, and slide-out panels.

use luna_desire_core::Locale;

use crate::error::AppError;
use crate::menu::{InternalDomains, NavLink, Viewport, resolve_menu};
use crate::query::QueryParams;
use crate::shopify::types::HeaderData;
use crate::state::AppState;
use crate::ui_state::{AsidePanel, PanelState};

use super::cart::CartBadgeView;

/// Sign-in link target; accounts are handled by Shopify.
const ACCOUNT_HREF: &str = "/account";

/// Search form target.
const SEARCH_ACTION: &str = "/search";

// =============================================================================
// Locale
// =============================================================================

/// The locale of a request and the path prefix it arrived under.
///
/// Requests without a locale segment use the configured default and keep
/// unprefixed links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale {
    pub locale: Locale,
    prefix: String,
}

impl RequestLocale {
    /// The configured default locale, without a path prefix.
    #[must_use]
    pub fn default_for(state: &AppState) -> Self {
        Self {
            locale: state.config().default_locale.clone(),
            prefix: String::new(),
        }
    }

    /// Parse a `{language}-{country}` path segment against the configured
    /// locales.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the segment is not a supported locale.
    pub fn from_segment(state: &AppState, segment: &str) -> Result<Self, AppError> {
        Self::parse(segment, &state.config().supported_locales)
    }

    pub(crate) fn parse(segment: &str, supported: &[Locale]) -> Result<Self, AppError> {
        let locale: Locale = segment.parse()?;
        if !supported.contains(&locale) {
            return Err(AppError::NotFound(format!("Unsupported locale: {segment}")));
        }
        let prefix = format!("/{}", locale.path_segment());
        Ok(Self { locale, prefix })
    }

    /// `path` under this request's locale prefix.
    #[must_use]
    pub fn path(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            path.to_string()
        } else if path == "/" {
            self.prefix.clone()
        } else {
            format!("{}{path}", self.prefix)
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Links that open or close the slide-out panels.
#[derive(Debug, Clone)]
pub struct PanelsView {
    pub open: Option<AsidePanel>,
    pub open_mobile_href: String,
    pub open_cart_href: String,
    pub open_search_href: String,
    pub close_href: String,
}

impl PanelsView {
    fn new(state: &PanelState) -> Self {
        Self {
            open: state.current(),
            open_mobile_href: state.open_href(AsidePanel::Mobile),
            open_cart_href: state.open_href(AsidePanel::Cart),
            open_search_href: state.open_href(AsidePanel::Search),
            close_href: state.close_href(),
        }
    }

    /// Whether the named panel is open (`mobile`, `cart` or `search`).
    #[must_use]
    pub fn is_open(&self, name: &str) -> bool {
        self.open.is_some_and(|panel| panel.as_str() == name)
    }

    /// Heading of the open panel.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.open.map_or("", AsidePanel::heading)
    }
}

/// Everything the base template needs outside the page body.
#[derive(Debug, Clone)]
pub struct LayoutView {
    pub title: String,
    pub description: Option<String>,
    pub shop_name: String,
    pub home_href: String,
    pub desktop_menu: Vec<NavLink>,
    pub mobile_menu: Vec<NavLink>,
    pub panels: PanelsView,
    /// Fragment endpoint for the deferred cart badge.
    pub cart_count_src: String,
    /// Badge shown until the deferred count arrives.
    pub cart_badge: CartBadgeView,
    pub account_href: &'static str,
    pub search_action: &'static str,
}

impl LayoutView {
    /// Build the layout for a page at `path`.
    #[must_use]
    pub fn new(
        state: &AppState,
        header: &HeaderData,
        locale: &RequestLocale,
        path: &str,
        params: &QueryParams,
        title: String,
    ) -> Self {
        let domains = InternalDomains {
            public_store_domain: &state.config().public_store_domain,
            primary_domain_url: &header.shop.primary_domain_url,
        };
        let panels = PanelState::from_params(path, params);

        Self {
            title,
            description: None,
            shop_name: header.shop.name.clone(),
            home_href: locale.path("/"),
            desktop_menu: resolve_menu(header.menu.as_ref(), &domains, Viewport::Desktop),
            mobile_menu: resolve_menu(header.menu.as_ref(), &domains, Viewport::Mobile),
            panels: PanelsView::new(&panels),
            cart_count_src: locale.path("/cart/count"),
            cart_badge: CartBadgeView::pending(),
            account_href: ACCOUNT_HREF,
            search_action: SEARCH_ACTION,
        }
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn supported() -> Vec<Locale> {
        vec![Locale::default(), Locale::new("fr", "ca").unwrap()]
    }

    #[test]
    fn test_locale_segment_prefixes_paths() {
        let locale = RequestLocale::parse("fr-CA", &supported()).unwrap();
        assert_eq!(locale.locale.language(), "FR");
        assert_eq!(locale.locale.country(), "CA");
        assert_eq!(locale.path("/"), "/fr-ca");
        assert_eq!(locale.path("/pages/about"), "/fr-ca/pages/about");
    }

    #[test]
    fn test_invalid_segment_is_not_found() {
        let err = RequestLocale::parse("cart", &supported()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_locale_is_not_found() {
        for segment in ["zz-qq", "de-de", "fr-fr"] {
            let err = RequestLocale::parse(segment, &supported()).unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)), "{segment}");
        }
    }

    #[test]
    fn test_unprefixed_paths() {
        let locale = RequestLocale {
            locale: Locale::default(),
            prefix: String::new(),
        };
        assert_eq!(locale.path("/"), "/");
        assert_eq!(locale.path("/cart/count"), "/cart/count");
    }

    #[test]
    fn test_panels_view() {
        let params = QueryParams::parse(Some("panel=search"));
        let panels = PanelsView::new(&PanelState::from_params("/", &params));
        assert!(panels.is_open("search"));
        assert!(!panels.is_open("cart"));
        assert_eq!(panels.heading(), "SEARCH");
        assert_eq!(panels.close_href, "/");
        assert_eq!(panels.open_cart_href, "/?panel=cart");
    }
}
