//! Header navigation.
//!
//! Menu item URLs from the Shopify admin are absolute. Links pointing at the
//! shop itself are reduced to their path so navigation stays on this
//! storefront; external links are left alone.

use url::Url;

use crate::shopify::types::{Menu, MenuItem};

/// Substring that marks any Shopify-hosted shop URL as internal.
const SHOPIFY_HOST_MARKER: &str = "myshopify.com";

/// Domains whose URLs are treated as links into this storefront.
#[derive(Debug, Clone, Copy)]
pub struct InternalDomains<'a> {
    /// Configured public store domain.
    pub public_store_domain: &'a str,
    /// The shop's primary domain URL, as reported by the API.
    pub primary_domain_url: &'a str,
}

impl InternalDomains<'_> {
    /// Whether `url` points at the shop. Empty domains never match.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        [
            SHOPIFY_HOST_MARKER,
            self.public_store_domain,
            self.primary_domain_url,
        ]
        .iter()
        .any(|domain| !domain.is_empty() && url.contains(domain))
    }
}

/// Where a menu is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

/// A resolved navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub title: String,
    pub href: String,
}

/// Resolve a menu into links.
///
/// A missing menu falls back to [`fallback_menu`]. Items without a URL are
/// skipped. Both viewports share this; the mobile menu also leads with a
/// "Home" link.
#[must_use]
pub fn resolve_menu(
    menu: Option<&Menu>,
    domains: &InternalDomains<'_>,
    viewport: Viewport,
) -> Vec<NavLink> {
    let fallback;
    let menu = if let Some(menu) = menu {
        menu
    } else {
        fallback = fallback_menu();
        &fallback
    };

    let home = (viewport == Viewport::Mobile).then(|| NavLink {
        id: "home".to_string(),
        title: "Home".to_string(),
        href: "/".to_string(),
    });

    home.into_iter()
        .chain(menu.items.iter().filter_map(|item| {
            let url = item.url.as_deref()?;
            Some(NavLink {
                id: item.id.clone(),
                title: item.title.clone(),
                href: resolve_url(url, domains),
            })
        }))
        .collect()
}

/// Reduce an internal URL to its path. Other URLs, and internal ones that
/// fail to parse, are returned unchanged.
#[must_use]
pub fn resolve_url(url: &str, domains: &InternalDomains<'_>) -> String {
    if !domains.contains(url) {
        return url.to_string();
    }
    Url::parse(url).map_or_else(|_| url.to_string(), |parsed| parsed.path().to_string())
}

/// Menu shown when the shop has no menu with the configured handle.
#[must_use]
pub fn fallback_menu() -> Menu {
    let item = |id: &str, title: &str, url: &str, kind: &str, resource_id: Option<&str>| MenuItem {
        id: format!("gid://shopify/MenuItem/{id}"),
        title: title.to_string(),
        url: Some(url.to_string()),
        kind: kind.to_string(),
        resource_id: resource_id.map(str::to_string),
        tags: Vec::new(),
    };

    Menu {
        id: "gid://shopify/Menu/199655587896".to_string(),
        items: vec![
            item("461609500728", "Collections", "/collections", "HTTP", None),
            item("461609533496", "Blog", "/blogs/journal", "HTTP", None),
            item("461609566264", "Policies", "/policies", "HTTP", None),
            item(
                "461609599032",
                "About",
                "/pages/about",
                "PAGE",
                Some("gid://shopify/Page/92591030328"),
            ),
        ],
    }
}
