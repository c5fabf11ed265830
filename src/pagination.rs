//! Cursor pagination.
//!
//! Ashby list endpoints take a `limit` and an opaque `cursor` in the JSON body
//! and answer with an envelope such as:
//!
//! ```json
//! { "success": true, "results": [ ... ], "moreDataAvailable": true, "nextCursor": "c1" }
//! ```
//!
//! [`collect_pages`] drives the loop: it keeps requesting pages with the cursor
//! echoed back from the previous response until the server reports no more
//! data, and returns every item in page order.

use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::defaults;
use crate::error::AshbyError;
use crate::types::Payload;

/// Request field carrying the page size
pub const LIMIT_FIELD: &str = "limit";
/// Request field carrying the cursor
pub const CURSOR_FIELD: &str = "cursor";
/// Response flag announcing further pages
pub const MORE_DATA_FIELD: &str = "moreDataAvailable";
/// Response field carrying the cursor of the next page
pub const NEXT_CURSOR_FIELD: &str = "nextCursor";

/// Pagination settings.
///
/// `max_pages` and `max_duration` are unset by default: the loop trusts the
/// server to eventually report `moreDataAvailable: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Records requested per page
    pub page_size: u32,
    /// Fail once this many pages were fetched and the server still reports more
    pub max_pages: Option<u32>,
    /// Fail when the whole aggregation takes longer than this
    pub max_duration: Option<Duration>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: defaults::pagination::PAGE_SIZE,
            max_pages: None,
            max_duration: None,
        }
    }
}

impl PaginationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub const fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub const fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }
}

/// One decoded page of a list response
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    pub more_data_available: bool,
    pub next_cursor: Option<Value>,
}

impl Page {
    /// Split a response envelope into its items and continuation data.
    pub fn from_response(response: Value) -> Self {
        let more_data_available = is_truthy(response.get(MORE_DATA_FIELD));
        let next_cursor = response
            .get(NEXT_CURSOR_FIELD)
            .filter(|c| !c.is_null())
            .cloned();

        let items = match extract_results(&response) {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        };

        Self {
            items,
            more_data_available,
            next_cursor,
        }
    }

    /// Cursor to request next, or `None` when this is the last page
    pub fn continuation(&self) -> Option<&Value> {
        if self.more_data_available {
            self.next_cursor.as_ref()
        } else {
            None
        }
    }
}

/// Result payload of an envelope: `data`, then `results`, then the envelope
/// itself.
///
/// Only absent and `null` fields are skipped. An empty `data` or `results`
/// list is taken as-is, so an empty last page adds no items instead of the
/// whole envelope.
pub fn extract_results(response: &Value) -> &Value {
    ["data", "results"]
        .iter()
        .find_map(|key| response.get(*key).filter(|v| !v.is_null()))
        .unwrap_or(response)
}

fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

/// Fetch every page and concatenate their items.
///
/// `fetch` receives the request payload for one page (the base payload plus
/// `limit` and, after the first page, `cursor`) and returns the raw response.
/// Pages are requested strictly one after another.
pub async fn collect_pages<F, Fut>(
    endpoint: &str,
    base: &Payload,
    options: &PaginationOptions,
    fetch: F,
) -> Result<Vec<Value>, AshbyError>
where
    F: FnMut(Payload) -> Fut,
    Fut: Future<Output = Result<Value, AshbyError>>,
{
    let pages = collect_pages_inner(endpoint, base, options, fetch);
    match options.max_duration {
        Some(max_duration) => tokio::time::timeout(max_duration, pages)
            .await
            .map_err(|_| {
                AshbyError::TimeoutError(format!(
                    "pagination of {endpoint} did not finish within {max_duration:?}"
                ))
            })?,
        None => pages.await,
    }
}

async fn collect_pages_inner<F, Fut>(
    endpoint: &str,
    base: &Payload,
    options: &PaginationOptions,
    mut fetch: F,
) -> Result<Vec<Value>, AshbyError>
where
    F: FnMut(Payload) -> Fut,
    Fut: Future<Output = Result<Value, AshbyError>>,
{
    let mut results = Vec::new();
    let mut cursor: Option<Value> = None;
    let mut page_index: u32 = 0;

    loop {
        if let (Some(max_pages), Some(_)) = (options.max_pages, &cursor) {
            if page_index >= max_pages {
                tracing::warn!(target: "ashby::pagination", endpoint, max_pages, "page cap reached with more data available");
                return Err(AshbyError::PaginationLimitExceeded { max_pages });
            }
        }

        let mut payload = base.clone();
        payload.remove(CURSOR_FIELD);
        payload.insert(LIMIT_FIELD.to_string(), Value::from(options.page_size));
        if let Some(cursor) = cursor.take() {
            payload.insert(CURSOR_FIELD.to_string(), cursor);
        }

        let page = Page::from_response(fetch(payload).await?);
        page_index += 1;
        tracing::debug!(
            target: "ashby::pagination",
            endpoint,
            page = page_index,
            items = page.items.len(),
            more = page.more_data_available,
            "page received"
        );

        cursor = page.continuation().cloned();
        results.extend(page.items);

        if cursor.is_none() {
            return Ok(results);
        }
    }
}
