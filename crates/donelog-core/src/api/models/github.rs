use super::{Labels, PageInfo};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GithubData {
    pub search: SearchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub issue_count: Option<u64>,
    #[serde(default)]
    pub edges: Vec<PullRequestEdge>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestEdge {
    /// `None` for search hits that are not pull requests.
    #[serde(default, deserialize_with = "deserialize_search_node")]
    pub node: Option<PullRequest>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// The query only selects `... on PullRequest`, so any other hit arrives as
/// `{}`. A partially populated node is still a schema error.
fn deserialize_search_node<'de, D>(deserializer: D) -> Result<Option<PullRequest>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// `PullRequest.state`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum PullRequestState {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
    #[serde(rename = "MERGED")]
    Merged,
    #[serde(other)]
    Unknown,
}

impl PullRequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullRequestState::Open => "OPEN",
            PullRequestState::Closed => "CLOSED",
            PullRequestState::Merged => "MERGED",
            PullRequestState::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: PullRequestState,
    #[serde(default)]
    pub merged_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changed_files: u64,
    pub head_ref_name: String,
    pub repository: Repository,
    #[serde(default)]
    pub reviews: CountNode,
    #[serde(default)]
    pub comments: CountNode,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    pub owner: RepositoryOwner,
}

impl Repository {
    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryOwner {
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountNode {
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_page() {
        let json = r#"{
            "search": {
                "issueCount": 1,
                "edges": [{
                    "cursor": "Y3Vyc29yOjE=",
                    "node": {
                        "number": 42,
                        "title": "Add retries",
                        "url": "https://github.com/acme/api/pull/42",
                        "body": "",
                        "state": "MERGED",
                        "mergedAt": "2025-02-03T10:11:12Z",
                        "createdAt": "2025-02-01T10:11:12Z",
                        "updatedAt": "2025-02-03T10:11:12Z",
                        "additions": 120,
                        "deletions": 7,
                        "changedFiles": 4,
                        "headRefName": "feature/retries",
                        "repository": {"name": "api", "owner": {"login": "acme"}},
                        "reviews": {"totalCount": 2},
                        "comments": {"totalCount": 5},
                        "labels": {"nodes": [{"name": "enhancement"}]}
                    }
                }],
                "pageInfo": {"hasNextPage": false, "endCursor": "Y3Vyc29yOjE="}
            }
        }"#;

        let data: GithubData = serde_json::from_str(json).unwrap();
        assert_eq!(data.search.issue_count, Some(1));
        let pr = data.search.edges[0].node.as_ref().unwrap();
        assert_eq!(pr.number, 42);
        assert_eq!(pr.state, PullRequestState::Merged);
        assert_eq!(pr.repository.full_name(), "acme/api");
        assert_eq!(pr.reviews.total_count, 2);
        assert_eq!(pr.labels.names(), vec!["enhancement"]);
    }

    #[test]
    fn test_non_pull_request_hit_has_no_node() {
        let json = r#"{
            "search": {
                "issueCount": 2,
                "edges": [{"cursor": "a", "node": {}}, {"cursor": "b", "node": null}],
                "pageInfo": {"hasNextPage": false, "endCursor": "b"}
            }
        }"#;

        let data: GithubData = serde_json::from_str(json).unwrap();
        assert_eq!(data.search.edges.len(), 2);
        assert!(data.search.edges.iter().all(|edge| edge.node.is_none()));
    }

    #[test]
    fn test_partial_pull_request_node_is_rejected() {
        let json = r#"{
            "search": {
                "edges": [{"cursor": "a", "node": {"title": "No number"}}],
                "pageInfo": {"hasNextPage": false, "endCursor": null}
            }
        }"#;

        assert!(serde_json::from_str::<GithubData>(json).is_err());
    }

    #[test]
    fn test_unknown_state_does_not_fail() {
        let state: PullRequestState = serde_json::from_str(r#""DRAFT""#).unwrap();
        assert_eq!(state, PullRequestState::Unknown);
        assert_eq!(PullRequestState::Merged.as_str(), "MERGED");
    }
}
