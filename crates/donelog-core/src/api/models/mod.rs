//! Raw API-shaped records
//!
//! These mirror the selection sets of the fixed queries. Nullable relations
//! are `Option`s so an absent project or cycle never collapses into an empty
//! string.

use serde::{Deserialize, Serialize};

pub mod github;
pub mod linear;

/// Relay-style pagination marker attached to every connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// `labels { nodes { name } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    #[serde(default)]
    pub nodes: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Label {
    pub name: String,
}

impl Labels {
    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|label| label.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_without_cursor() {
        let page_info: PageInfo =
            serde_json::from_str(r#"{"hasNextPage": false, "endCursor": null}"#).unwrap();
        assert!(!page_info.has_next_page);
        assert_eq!(page_info.end_cursor, None);

        let page_info: PageInfo = serde_json::from_str(r#"{"hasNextPage": false}"#).unwrap();
        assert_eq!(page_info.end_cursor, None);
    }

    #[test]
    fn test_label_names_keep_order() {
        let labels: Labels = serde_json::from_str(
            r#"{"nodes": [{"name": "bug"}, {"name": "backend"}, {"name": "p1"}]}"#,
        )
        .unwrap();
        assert_eq!(labels.names(), vec!["bug", "backend", "p1"]);
    }
}
