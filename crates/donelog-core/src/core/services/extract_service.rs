//! Fetch-then-filter orchestration over any work source

use crate::api::client::Transport;
use crate::core::filter::retain_matching;
use crate::core::pagination::fetch_all;
use crate::core::source::WorkSource;
use crate::error::ApiError;

/// Finished items plus how many were fetched before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub fetched: usize,
}

impl<T> Extraction<T> {
    /// Items the completion predicate rejected.
    pub fn dropped(&self) -> usize {
        self.fetched - self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Extraction service bound to one transport
pub struct ExtractService<T: Transport> {
    transport: T,
}

impl<T: Transport> ExtractService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch every page for `source`, then keep only finished items.
    pub async fn extract<S: WorkSource>(
        &self,
        source: &S,
    ) -> Result<Extraction<S::Item>, ApiError> {
        let base_variables = source.base_variables();
        let fetched = fetch_all(&self.transport, source, &base_variables).await?;
        let fetched_count = fetched.len();

        let items = retain_matching(fetched, S::is_done);
        let extraction = Extraction {
            items,
            fetched: fetched_count,
        };

        log::debug!(
            "Kept {} of {} {} ({} not finished)",
            extraction.items.len(),
            extraction.fetched,
            S::NAME,
            extraction.dropped()
        );
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::graphql::{GraphqlRequest, GraphqlResponse};
    use crate::core::sources::LinearSource;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct OnePage(Value);

    #[async_trait]
    impl Transport for OnePage {
        fn endpoint(&self) -> &str {
            "one-page"
        }

        async fn send(
            &self,
            _request: &GraphqlRequest<'_>,
        ) -> Result<GraphqlResponse<Value>, ApiError> {
            Ok(GraphqlResponse {
                data: Some(self.0.clone()),
                errors: None,
            })
        }
    }

    fn node(identifier: &str, state_type: &str) -> Value {
        json!({
            "id": identifier,
            "identifier": identifier,
            "title": "Title",
            "url": "https://linear.app/acme/issue/x",
            "priority": 0,
            "createdAt": "2025-05-01T00:00:00.000Z",
            "updatedAt": "2025-05-01T00:00:00.000Z",
            "completedAt": "2025-05-02T00:00:00.000Z",
            "state": {"id": "s", "name": "State", "type": state_type},
            "team": {"id": "t", "name": "Core", "key": "CORE"}
        })
    }

    #[tokio::test]
    async fn test_extract_filters_unfinished() {
        let transport = OnePage(json!({
            "viewer": {
                "id": "u1",
                "name": "Sam",
                "assignedIssues": {
                    "nodes": [
                        node("CORE-1", "completed"),
                        node("CORE-2", "started"),
                        node("CORE-3", "canceled"),
                        node("CORE-4", "completed")
                    ],
                    "pageInfo": {"hasNextPage": false, "endCursor": null}
                }
            }
        }));
        let service = ExtractService::new(transport);
        let source = LinearSource::new("2025-01-01T00:00:00.000Z", "2025-12-31T23:59:59.999Z");

        let extraction = service.extract(&source).await.unwrap();

        assert_eq!(extraction.fetched, 4);
        assert_eq!(extraction.dropped(), 2);
        let ids: Vec<&str> = extraction
            .items
            .iter()
            .map(|issue| issue.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["CORE-1", "CORE-4"]);
    }
}
