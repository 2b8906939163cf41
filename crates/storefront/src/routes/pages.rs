//! CMS page route handlers.
//!
//! Serves Shopify pages by handle. The FAQ page renders its entries as an
//! accordion instead of the page body.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, RawQuery, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::content::{self, ABOUT_BACKGROUND, ABOUT_PAGE_HANDLE, FAQ_ENTRIES, FAQ_PAGE_HANDLE};
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::query::QueryParams;
use crate::shopify::types::{HeaderData, Page};
use crate::state::AppState;
use crate::ui_state::FaqAccordion;

use super::layout::{LayoutView, RequestLocale};

/// One FAQ accordion item.
#[derive(Debug, Clone)]
pub struct FaqItemView {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    /// Link that toggles this item and leaves the others as they are.
    pub toggle_href: String,
}

/// Build the accordion items for the current open set.
#[must_use]
pub fn faq_items(path: &str, params: &QueryParams) -> Vec<FaqItemView> {
    let accordion = FaqAccordion::from_params(params, FAQ_ENTRIES.len());
    FAQ_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| FaqItemView {
            id: entry.id,
            question: entry.question,
            answer: entry.answer,
            open: accordion.is_open(index),
            toggle_href: format!("{}#{}", accordion.toggled(index).href(path, params), entry.id),
        })
        .collect()
}

/// CMS page template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub layout: LayoutView,
    pub heading: String,
    /// Page body HTML from Shopify.
    pub body: String,
    pub background_image: Option<&'static str>,
    /// Accordion items, for the FAQ page only.
    pub faq: Option<Vec<FaqItemView>>,
}

// =============================================================================
// Loader
// =============================================================================

/// Data a page cannot render without.
pub struct PageCriticalData {
    pub header: HeaderData,
    pub page: Page,
}

/// Fetch header and page concurrently.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an empty handle, before any query
/// runs; `AppError::NotFound` if no page has the handle; otherwise any
/// upstream failure.
pub async fn load_critical_data(
    state: &AppState,
    locale: &RequestLocale,
    handle: &str,
) -> Result<PageCriticalData, AppError> {
    if handle.trim().is_empty() {
        return Err(missing_handle_error());
    }

    let storefront = state.storefront();
    let (header, page) = tokio::try_join!(
        storefront.get_header(&locale.locale, &state.config().header_menu_handle),
        storefront.get_page(&locale.locale, handle),
    )?;

    Ok(PageCriticalData { header, page })
}

fn missing_handle_error() -> AppError {
    AppError::BadRequest("Missing page handle".to_string())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display a CMS page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let locale = RequestLocale::default_for(&state);
    render(&state, &locale, &handle, query.as_deref()).await
}

/// Display a CMS page under a locale prefix.
#[instrument(skip(state))]
pub async fn show_localized(
    State(state): State<AppState>,
    Path((locale, handle)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let locale = RequestLocale::from_segment(&state, &locale)?;
    render(&state, &locale, &handle, query.as_deref()).await
}

/// `/pages` with no handle.
///
/// # Errors
///
/// Always returns `AppError::BadRequest`.
pub async fn missing_handle() -> Result<Response, AppError> {
    Err(missing_handle_error())
}

/// `/{locale}/pages` with no handle.
///
/// # Errors
///
/// `AppError::NotFound` for an invalid locale, otherwise
/// `AppError::BadRequest`.
pub async fn missing_handle_localized(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Response, AppError> {
    RequestLocale::from_segment(&state, &locale)?;
    Err(missing_handle_error())
}

async fn render(
    state: &AppState,
    locale: &RequestLocale,
    handle: &str,
    query: Option<&str>,
) -> Result<Response, AppError> {
    let PageCriticalData { header, page } = load_critical_data(state, locale, handle).await?;

    // Localized handles redirect to the canonical one
    if page.handle != handle {
        let canonical = locale.path(&format!("/pages/{}", page.handle));
        let target = match query {
            Some(query) if !query.is_empty() => format!("{canonical}?{query}"),
            _ => canonical,
        };
        tracing::debug!(requested = handle, canonical = %page.handle, "Redirecting to canonical page handle");
        return Ok(Redirect::temporary(&target).into_response());
    }

    add_breadcrumb("navigation", "Viewed page", Some(&[("handle", handle)]));

    let params = QueryParams::parse(query);
    let path = locale.path(&format!("/pages/{}", page.handle));
    let layout = LayoutView::new(
        state,
        &header,
        locale,
        &path,
        &params,
        content::page_title(&page.title),
    )
    .with_description(page.seo.as_ref().and_then(|seo| seo.description.clone()));

    let faq = (page.handle == FAQ_PAGE_HANDLE).then(|| faq_items(&path, &params));
    let background_image = (page.handle == ABOUT_PAGE_HANDLE).then_some(ABOUT_BACKGROUND);

    Ok(PageTemplate {
        layout,
        heading: page.title,
        body: page.body,
        background_image,
        faq,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_items_start_closed() {
        let items = faq_items("/pages/frequently-asked-questions", &QueryParams::default());
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|item| !item.open));
        assert_eq!(
            items[2].toggle_href,
            "/pages/frequently-asked-questions?open=2#shipping-time"
        );
    }

    #[test]
    fn test_faq_toggle_links_keep_other_open_items() {
        let params = QueryParams::parse(Some("open=0,3"));
        let items = faq_items("/pages/faq", &params);
        assert!(items[0].open);
        assert!(items[3].open);
        assert!(!items[1].open);
        assert_eq!(items[0].toggle_href, "/pages/faq?open=3#shipping-discreet");
        assert_eq!(items[1].toggle_href, "/pages/faq?open=0%2C1%2C3#shipping-partners");
    }

    #[test]
    fn test_faq_closing_last_item_drops_param() {
        let params = QueryParams::parse(Some("open=4&panel=cart"));
        let items = faq_items("/pages/faq", &params);
        assert_eq!(items[4].toggle_href, "/pages/faq?panel=cart#return-policy");
    }
}
