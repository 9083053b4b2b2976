//! Cursor pagination driver

use crate::api::client::Transport;
use crate::api::graphql::{GraphqlRequest, Variables};
use crate::core::source::WorkSource;
use crate::error::ApiError;
use crate::utils::error_helpers::convert_schema_error;
use serde_json::Value;

/// Fetch every page of `source`, in order, into one sequence.
///
/// Pages are requested strictly one after another: the next cursor is only
/// known once the previous response is parsed. The first failure aborts the
/// loop and nothing accumulated so far is returned. Items are appended as
/// they arrive; overlapping pages are not deduplicated.
pub async fn fetch_all<S, T>(
    transport: &T,
    source: &S,
    base_variables: &Variables,
) -> Result<Vec<S::Item>, ApiError>
where
    S: WorkSource,
    T: Transport + ?Sized,
{
    let mut items: Vec<S::Item> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page_number = 0usize;

    loop {
        page_number += 1;
        let variables = with_cursor(base_variables, S::CURSOR_VARIABLE, cursor.as_deref());
        let request = GraphqlRequest::new(S::QUERY, variables);

        log::debug!("Requesting page {} of {}", page_number, S::NAME);
        let data = transport
            .send(&request)
            .await?
            .into_data(transport.endpoint())?;
        let page = source
            .extract_page(data)
            .map_err(|e| convert_schema_error(e, transport.endpoint()))?;

        let fetched = page.items.len();
        items.extend(page.items);

        match page.total_count {
            Some(total) => log::info!(
                "Fetched {} {} (total: {} / {})",
                fetched,
                S::NAME,
                items.len(),
                total
            ),
            None => log::info!("Fetched {} {} (total: {})", fetched, S::NAME, items.len()),
        }

        if !page.page_info.has_next_page {
            break;
        }

        match page.page_info.end_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(ApiError::Schema {
                    endpoint: transport.endpoint().to_string(),
                    message: format!(
                        "page {} reports more results but no end cursor",
                        page_number
                    ),
                });
            }
        }
    }

    Ok(items)
}

/// Base variables plus the cursor entry (`null` on the first page).
pub fn with_cursor(base: &Variables, name: &str, cursor: Option<&str>) -> Variables {
    let mut variables = base.clone();
    let value = cursor.map_or(Value::Null, |c| Value::String(c.to_string()));
    variables.insert(name.to_string(), value);
    variables
}
