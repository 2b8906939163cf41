//! Cursor pagination over Storefront API connections.
//!
//! The query string carries `cursor` and `direction` (`next` or `previous`)
//! plus an optional `per_page`. Cursors are opaque: they are copied from
//! `PageInfo` into links and back into query variables, never inspected.

use luna_desire_core::{Connection, Cursor, PageInfo};

use crate::query::QueryParams;
use crate::ui_state::PANEL_PARAM;

/// Products per page when the request does not say otherwise.
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Largest `first`/`last` the Storefront API accepts.
pub const MAX_PAGE_SIZE: i64 = 250;

/// Query-string keys dropped from pagination links. Paging closes any open
/// panel.
const PAGINATION_KEYS: [&str; 3] = ["cursor", "direction", PANEL_PARAM];

/// Pagination parameters as they arrive in the query string.
#[derive(Debug, Default)]
pub struct PaginationQuery {
    pub cursor: Option<String>,
    pub direction: Option<String>,
    pub per_page: Option<String>,
}

impl PaginationQuery {
    /// Pick the pagination parameters out of the request's query string.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let get = |key: &str| params.get(key).map(str::to_string);
        Self {
            cursor: get("cursor"),
            direction: get("direction"),
            per_page: get("per_page"),
        }
    }
}

/// Which way a pagination link moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }
}

/// Connection arguments for a paginated query.
///
/// Exactly one of `first`/`last` is set. `end_cursor` pairs with `first`
/// (forward) and `start_cursor` with `last` (backward).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaginationVariables {
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

impl PaginationVariables {
    /// The first `page_by` items.
    #[must_use]
    pub const fn first_page(page_by: i64) -> Self {
        Self {
            first: Some(page_by),
            last: None,
            start_cursor: None,
            end_cursor: None,
        }
    }

    /// Derive variables from the request's query string.
    ///
    /// A missing or empty cursor, or an unknown direction, yields the first
    /// page. `per_page` is clamped to `1..=MAX_PAGE_SIZE` and ignored when
    /// it does not parse.
    #[must_use]
    pub fn from_query(query: &PaginationQuery, default_page_by: i64) -> Self {
        let page_by = query
            .per_page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map_or(default_page_by, |n| n.clamp(1, MAX_PAGE_SIZE));

        let Some(cursor) = query.cursor.as_deref().filter(|c| !c.is_empty()) else {
            return Self::first_page(page_by);
        };
        let cursor = Cursor::new(cursor.to_string());

        match query.direction.as_deref() {
            Some("previous") => Self {
                first: None,
                last: Some(page_by),
                start_cursor: Some(cursor),
                end_cursor: None,
            },
            Some("next") | None => Self {
                first: Some(page_by),
                last: None,
                start_cursor: None,
                end_cursor: Some(cursor),
            },
            Some(_) => Self::first_page(page_by),
        }
    }
}

impl Default for PaginationVariables {
    fn default() -> Self {
        Self::first_page(DEFAULT_PAGE_SIZE)
    }
}

/// A previous/next link.
///
/// Inert controls are still rendered, with no `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub direction: Direction,
    pub label: &'static str,
    pub href: Option<String>,
}

impl PaginationControl {
    fn new(direction: Direction, cursor: Option<&Cursor>, path: &str, params: &QueryParams) -> Self {
        let label = match direction {
            Direction::Previous => "↑ Load previous",
            Direction::Next => "Load more ↓",
        };
        let href = cursor.map(|cursor| {
            params
                .without(&PAGINATION_KEYS)
                .with("direction", direction.as_str())
                .with("cursor", cursor.as_str())
                .href(path)
        });
        Self {
            direction,
            label,
            href,
        }
    }

    /// Whether the control links anywhere.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.href.is_some()
    }
}

/// A page of rendered items with its navigation controls.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub previous: PaginationControl,
    pub next: PaginationControl,
    /// CSS class for the element wrapping the items.
    pub class: Option<&'static str>,
}

impl<T> Paginated<T> {
    /// Render every node of `connection` with `render`, and build controls
    /// linking back to `path` with the current query parameters.
    pub fn from_connection<N>(
        connection: Connection<N>,
        path: &str,
        params: &QueryParams,
        render: impl FnMut(usize, N) -> T,
    ) -> Self {
        let Connection { nodes, page_info } = connection;
        let (previous, next) = controls(&page_info, path, params);
        let mut render = render;
        let items = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| render(index, node))
            .collect();
        Self {
            items,
            previous,
            next,
            class: None,
        }
    }

    /// Set the wrapper class.
    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Whether neither control is actionable.
    #[must_use]
    pub const fn is_single_page(&self) -> bool {
        !self.previous.is_actionable() && !self.next.is_actionable()
    }
}

fn controls(
    page_info: &PageInfo,
    path: &str,
    params: &QueryParams,
) -> (PaginationControl, PaginationControl) {
    (
        PaginationControl::new(Direction::Previous, page_info.previous_cursor(), path, params),
        PaginationControl::new(Direction::Next, page_info.next_cursor(), path, params),
    )
}
