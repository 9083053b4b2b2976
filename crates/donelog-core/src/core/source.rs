//! Capability set of a paginatable GraphQL source
//!
//! A source supplies everything the generic pipeline needs to talk to one
//! API: the fixed query text, the variable builder, how to pull a page out of
//! the response payload, which fetched items count as done, and how a raw
//! item flattens into an export record.

use crate::api::graphql::Variables;
use crate::api::models::PageInfo;
use serde_json::Value;

/// Items per request. Sent as the `first` variable.
pub const PAGE_SIZE: u64 = 100;

/// One page of raw items plus its pagination marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
    /// Server-reported total across all pages, when the API offers one.
    pub total_count: Option<u64>,
}

pub trait WorkSource {
    /// Raw API-shaped record.
    type Item;
    /// Flat, presentation-ready record.
    type Record;

    /// Plural noun used in progress output ("issues").
    const NAME: &'static str;
    const QUERY: &'static str;
    const CURSOR_VARIABLE: &'static str = "after";

    /// Variables shared by every page request; the cursor is added per page.
    fn base_variables(&self) -> Variables;

    fn extract_page(&self, data: Value) -> Result<Page<Self::Item>, serde_json::Error>;

    /// Client-side completion check applied after all pages are fetched.
    fn is_done(item: &Self::Item) -> bool;

    fn project(item: &Self::Item) -> Self::Record;

    fn project_all(items: &[Self::Item]) -> Vec<Self::Record> {
        items.iter().map(Self::project).collect()
    }
}
