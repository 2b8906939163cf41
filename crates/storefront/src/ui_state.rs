//! Request-scoped UI state carried in the query string.
//!
//! Toggling an FAQ item or opening a slide-out panel is a plain navigation:
//! the link for each control encodes the state that results from using it.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::query::QueryParams;

/// Query-string key for open FAQ items.
pub const FAQ_PARAM: &str = "open";

/// Query-string key for the open panel.
pub const PANEL_PARAM: &str = "panel";

// =============================================================================
// FAQ accordion
// =============================================================================

/// Set of open accordion items, by index.
///
/// Each item toggles independently; any number may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: BTreeSet<usize>,
}

impl FaqAccordion {
    /// Read the open set from the query string.
    ///
    /// Entries that are not indices below `item_count` are ignored.
    #[must_use]
    pub fn from_params(params: &QueryParams, item_count: usize) -> Self {
        let open = params
            .get(FAQ_PARAM)
            .map(|raw| {
                raw.split(',')
                    .filter_map(|entry| entry.trim().parse::<usize>().ok())
                    .filter(|index| *index < item_count)
                    .collect()
            })
            .unwrap_or_default();
        Self { open }
    }

    /// Whether item `index` is open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// The state after toggling item `index`.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut open = self.open.clone();
        if !open.remove(&index) {
            open.insert(index);
        }
        Self { open }
    }

    /// Link to `path` with this state, keeping other parameters.
    #[must_use]
    pub fn href(&self, path: &str, params: &QueryParams) -> String {
        if self.open.is_empty() {
            params.without(&[FAQ_PARAM]).href(path)
        } else {
            params.with(FAQ_PARAM, &self.encode()).href(path)
        }
    }

    fn encode(&self) -> String {
        self.open
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// Aside panel
// =============================================================================

/// Slide-out panels. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsidePanel {
    Mobile,
    Cart,
    Search,
}

impl AsidePanel {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Cart => "cart",
            Self::Search => "search",
        }
    }

    /// Panel heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Mobile => "MENU",
            Self::Cart => "CART",
            Self::Search => "SEARCH",
        }
    }
}

impl fmt::Display for AsidePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsidePanel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Self::Mobile),
            "cart" => Ok(Self::Cart),
            "search" => Ok(Self::Search),
            _ => Err(()),
        }
    }
}

/// Which panel, if any, is open for this request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    open: Option<AsidePanel>,
    path: String,
    params: QueryParams,
}

impl PanelState {
    /// Read the open panel from the query string. Unknown values mean closed.
    #[must_use]
    pub fn from_params(path: &str, params: &QueryParams) -> Self {
        Self {
            open: params.get(PANEL_PARAM).and_then(|raw| raw.parse().ok()),
            path: path.to_string(),
            params: params.clone(),
        }
    }

    /// The open panel.
    #[must_use]
    pub const fn current(&self) -> Option<AsidePanel> {
        self.open
    }

    /// Whether `panel` is the open one.
    #[must_use]
    pub fn is_open(&self, panel: AsidePanel) -> bool {
        self.open == Some(panel)
    }

    /// Link that opens `panel`, replacing any open panel.
    #[must_use]
    pub fn open_href(&self, panel: AsidePanel) -> String {
        self.params.with(PANEL_PARAM, panel.as_str()).href(&self.path)
    }

    /// Link that closes whichever panel is open.
    #[must_use]
    pub fn close_href(&self) -> String {
        self.params.without(&[PANEL_PARAM]).href(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: &str) -> QueryParams {
        QueryParams::parse(Some(raw))
    }

    #[test]
    fn test_accordion_starts_closed() {
        let faq = FaqAccordion::from_params(&QueryParams::default(), 8);
        assert!((0..8).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn test_accordion_items_toggle_independently() {
        let faq = FaqAccordion::default().toggled(0).toggled(3);
        assert!(faq.is_open(0));
        assert!(faq.is_open(3));
        let faq = faq.toggled(0);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(3));
    }

    #[test]
    fn test_accordion_double_toggle_restores_set() {
        let faq = FaqAccordion::from_params(&params("open=2,5"), 8);
        // Open item
        assert_eq!(faq.toggled(2).toggled(2), faq);
        // Closed item
        assert_eq!(faq.toggled(4).toggled(4), faq);
        // Distinct items do not interfere
        assert_eq!(faq.toggled(4).toggled(2).toggled(4).toggled(2), faq);
    }

    #[test]
    fn test_accordion_reads_and_ignores_invalid_entries() {
        let faq = FaqAccordion::from_params(&params("open=0,3,x,,12"), 8);
        assert!(faq.is_open(0));
        assert!(faq.is_open(3));
        assert!(!faq.is_open(12));
        assert_eq!(faq.encode(), "0,3");
    }

    #[test]
    fn test_accordion_href_encodes_toggled_set() {
        let current = params("open=3&panel=cart");
        let faq = FaqAccordion::from_params(&current, 8);
        assert_eq!(
            faq.toggled(1).href("/pages/faq", &current),
            "/pages/faq?open=1%2C3&panel=cart"
        );
        assert_eq!(faq.toggled(3).href("/pages/faq", &current), "/pages/faq?panel=cart");
    }

    #[test]
    fn test_panel_defaults_to_closed() {
        let state = PanelState::from_params("/", &params("panel=sideways"));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_only_one_panel_open() {
        let state = PanelState::from_params("/", &params("panel=cart"));
        assert!(state.is_open(AsidePanel::Cart));
        assert!(!state.is_open(AsidePanel::Search));
        assert!(!state.is_open(AsidePanel::Mobile));
    }

    #[test]
    fn test_open_and_close_preserve_other_params() {
        let state = PanelState::from_params("/en-us", &params("cursor=abc&direction=next&panel=cart"));
        assert_eq!(
            state.open_href(AsidePanel::Search),
            "/en-us?cursor=abc&direction=next&panel=search"
        );
        assert_eq!(state.close_href(), "/en-us?cursor=abc&direction=next");
    }

    #[test]
    fn test_panel_round_trip_names() {
        for panel in [AsidePanel::Mobile, AsidePanel::Cart, AsidePanel::Search] {
            assert_eq!(panel.to_string().parse::<AsidePanel>(), Ok(panel));
        }
    }
}
