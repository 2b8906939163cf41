//! Cursor-paginated list shape.
//!
//! Mirrors the GraphQL connection pattern used by the Storefront API: a page
//! of nodes plus [`PageInfo`] carrying opaque cursors for the neighbouring
//! pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, server-issued pagination token.
///
/// Cursors are round-tripped verbatim: the storefront never builds one or
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a cursor received from the server or echoed back by a client.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Pagination information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Cursor for the first item.
    pub start_cursor: Option<Cursor>,
    /// Cursor for the last item.
    pub end_cursor: Option<Cursor>,
}

impl PageInfo {
    /// Cursor to request the page before this one, if there is one.
    #[must_use]
    pub fn previous_cursor(&self) -> Option<&Cursor> {
        self.start_cursor
            .as_ref()
            .filter(|_| self.has_previous_page)
    }

    /// Cursor to request the page after this one, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.end_cursor.as_ref().filter(|_| self.has_next_page)
    }
}

/// A page of nodes with its pagination info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Nodes in this page, in server order.
    pub nodes: Vec<T>,
    /// Pagination info.
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// An empty, single-page connection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    /// Convert every node, keeping order and page info.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            nodes: self.nodes.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }

    /// Number of nodes in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this page has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self::empty()
    }
}
