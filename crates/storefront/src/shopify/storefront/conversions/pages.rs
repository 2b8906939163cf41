//! Page type conversion functions.

use crate::shopify::types::{Page, Seo};

use super::super::queries::page_by_handle;

pub fn convert_page(page: page_by_handle::PageFields) -> Page {
    Page {
        id: page.id,
        handle: page.handle,
        title: page.title,
        body: page.body,
        seo: page.seo.map(|seo| Seo {
            description: seo.description,
        }),
    }
}
