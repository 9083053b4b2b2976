//! Merged pull requests found through GitHub search

use crate::api::client::{AuthScheme, Credential};
use crate::api::graphql::Variables;
use crate::api::models::github::{GithubData, PullRequest, PullRequestState};
use crate::core::source::{PAGE_SIZE, Page, WorkSource};
use crate::export::csv::CsvRecord;
use crate::utils::datetime::{MINUTES_FORMAT, format_optional_timestamp, format_timestamp};
use crate::utils::text::or_not_available;
use serde::Serialize;
use serde_json::{Value, json};

pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_SEARCH_QUERY: &str = "is:pr author:@me is:merged merged:2025-01-01..2026-02-28";
/// Output files are `<stem>.json` and `<stem>.csv`.
pub const EXPORT_FILE_STEM: &str = "pull_requests_merged";

const LABEL_DELIMITER: &str = "; ";

const MERGED_PULL_REQUESTS_QUERY: &str = r#"
query GetMergedPRs($queryString: String!, $first: Int!, $after: String) {
  search(query: $queryString, type: ISSUE, first: $first, after: $after) {
    issueCount
    edges {
      cursor
      node {
        ... on PullRequest {
          number
          title
          url
          body
          state
          mergedAt
          createdAt
          updatedAt
          additions
          deletions
          changedFiles
          headRefName
          repository {
            name
            owner { login }
          }
          reviews { totalCount }
          comments { totalCount }
          labels(first: 20) {
            nodes { name }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
"#;

/// Flat, presentation-ready pull request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRecord {
    pub repository: String,
    pub number: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub branch: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
    pub reviews: u64,
    pub comments: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl PullRequestRecord {
    /// `+120/-7`
    pub fn line_delta(&self) -> String {
        format!("+{}/-{}", self.additions, self.deletions)
    }
}

impl CsvRecord for PullRequestRecord {
    const HEADER: &'static [&'static str] = &[
        "Repository",
        "PR#",
        "Title",
        "URL",
        "Branch",
        "State",
        "Merged At",
        "Created At",
        "Updated At",
        "Additions",
        "Deletions",
        "Changed Files",
        "Reviews",
        "Comments",
        "Labels",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.repository.clone(),
            self.number.to_string(),
            self.title.clone(),
            self.url.clone(),
            self.branch.clone(),
            self.state.clone(),
            or_not_available(self.merged_at.as_deref()),
            self.created_at.clone(),
            self.updated_at.clone(),
            self.additions.to_string(),
            self.deletions.to_string(),
            self.changed_files.to_string(),
            self.reviews.to_string(),
            self.comments.to_string(),
            self.labels.join(LABEL_DELIMITER),
        ]
    }
}

/// Pull requests matching a search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSource {
    search_query: String,
}

impl GithubSource {
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
        }
    }

    pub fn credential(token: impl Into<String>) -> Credential {
        Credential::new(token, AuthScheme::Bearer)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}

impl WorkSource for GithubSource {
    type Item = PullRequest;
    type Record = PullRequestRecord;

    const NAME: &'static str = "pull requests";
    const QUERY: &'static str = MERGED_PULL_REQUESTS_QUERY;

    fn base_variables(&self) -> Variables {
        let mut variables = Variables::new();
        variables.insert("queryString".to_string(), json!(self.search_query));
        variables.insert("first".to_string(), json!(PAGE_SIZE));
        variables
    }

    fn extract_page(&self, data: Value) -> Result<Page<PullRequest>, serde_json::Error> {
        let data: GithubData = serde_json::from_value(data)?;
        let search = data.search;
        Ok(Page {
            items: search.edges.into_iter().filter_map(|edge| edge.node).collect(),
            page_info: search.page_info,
            total_count: search.issue_count,
        })
    }

    fn is_done(item: &PullRequest) -> bool {
        item.state == PullRequestState::Merged
    }

    fn project(pr: &PullRequest) -> PullRequestRecord {
        PullRequestRecord {
            repository: pr.repository.full_name(),
            number: pr.number,
            title: pr.title.clone(),
            description: pr.body.clone().unwrap_or_default(),
            url: pr.url.clone(),
            branch: pr.head_ref_name.clone(),
            state: pr.state.as_str().to_string(),
            merged_at: format_optional_timestamp(pr.merged_at.as_deref(), MINUTES_FORMAT),
            created_at: format_timestamp(&pr.created_at, MINUTES_FORMAT),
            updated_at: format_timestamp(&pr.updated_at, MINUTES_FORMAT),
            additions: pr.additions,
            deletions: pr.deletions,
            changed_files: pr.changed_files,
            reviews: pr.reviews.total_count,
            comments: pr.comments.total_count,
            labels: pr.labels.names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::retain_matching;

    fn pull_request(number: u64, state: &str, merged_at: Option<&str>) -> PullRequest {
        serde_json::from_value(json!({
            "number": number,
            "title": "Retry webhook delivery",
            "url": format!("https://github.com/acme/hooks/pull/{}", number),
            "body": "Adds exponential backoff",
            "state": state,
            "mergedAt": merged_at,
            "createdAt": "2025-04-01T09:15:00Z",
            "updatedAt": "2025-04-03T16:20:45Z",
            "additions": 120,
            "deletions": 7,
            "changedFiles": 4,
            "headRefName": "feature/webhook-retry",
            "repository": {"name": "hooks", "owner": {"login": "acme"}},
            "reviews": {"totalCount": 2},
            "comments": {"totalCount": 5},
            "labels": {"nodes": [{"name": "reliability"}, {"name": "backend"}]}
        }))
        .unwrap()
    }

    #[test]
    fn test_base_variables() {
        let source = GithubSource::new(DEFAULT_SEARCH_QUERY);
        let variables = source.base_variables();
        assert_eq!(variables["queryString"], json!(DEFAULT_SEARCH_QUERY));
        assert_eq!(variables["first"], json!(100));
        assert!(GithubSource::QUERY.contains("$after: String"));
    }

    #[test]
    fn test_only_merged_survive() {
        let items = vec![
            pull_request(1, "MERGED", Some("2025-04-03T16:20:45Z")),
            pull_request(2, "OPEN", None),
            pull_request(3, "CLOSED", None),
            pull_request(4, "MERGED", Some("2025-04-05T10:00:00Z")),
        ];
        let kept = retain_matching(items, GithubSource::is_done);
        let numbers: Vec<u64> = kept.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![1, 4]);
    }

    #[test]
    fn test_project_pull_request() {
        let record =
            GithubSource::project(&pull_request(42, "MERGED", Some("2025-04-03T16:20:45Z")));

        assert_eq!(record.repository, "acme/hooks");
        assert_eq!(record.branch, "feature/webhook-retry");
        assert_eq!(record.state, "MERGED");
        assert_eq!(record.merged_at.as_deref(), Some("2025-04-03 16:20"));
        assert_eq!(record.created_at, "2025-04-01 09:15");
        assert_eq!(record.reviews, 2);
        assert_eq!(record.comments, 5);
        assert_eq!(record.line_delta(), "+120/-7");
    }

    #[test]
    fn test_csv_row() {
        let record = GithubSource::project(&pull_request(42, "MERGED", None));
        let row = record.to_row();

        assert_eq!(row.len(), PullRequestRecord::HEADER.len());
        assert_eq!(row[0], "acme/hooks");
        assert_eq!(row[1], "42");
        assert_eq!(row[6], "N/A");
        assert_eq!(row[14], "reliability; backend");
    }

    #[test]
    fn test_json_omits_absent_merge_and_empty_labels() {
        let mut raw = pull_request(7, "MERGED", None);
        raw.labels.nodes.clear();
        let json = serde_json::to_value(GithubSource::project(&raw)).unwrap();

        assert!(json.get("mergedAt").is_none());
        assert!(json.get("labels").is_none());
        assert_eq!(json["repository"], "acme/hooks");
        assert_eq!(json["changedFiles"], 4);
    }

    #[test]
    fn test_extract_page_flattens_edges() {
        let data = json!({
            "search": {
                "issueCount": 250,
                "edges": [
                    {"cursor": "a", "node": serde_json::to_value(pull_request(1, "MERGED", None)).unwrap()},
                    {"cursor": "b", "node": serde_json::to_value(pull_request(2, "MERGED", None)).unwrap()}
                ],
                "pageInfo": {"hasNextPage": true, "endCursor": "b"}
            }
        });

        let page = GithubSource::new("is:pr").extract_page(data).unwrap();
        let numbers: Vec<u64> = page.items.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(page.total_count, Some(250));
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("b"));
    }

    #[test]
    fn test_extract_page_skips_non_pull_request_hits() {
        let data = json!({
            "search": {
                "issueCount": 3,
                "edges": [
                    {"cursor": "a", "node": serde_json::to_value(pull_request(1, "MERGED", None)).unwrap()},
                    {"cursor": "b", "node": {}},
                    {"cursor": "c", "node": serde_json::to_value(pull_request(3, "MERGED", None)).unwrap()}
                ],
                "pageInfo": {"hasNextPage": false, "endCursor": "c"}
            }
        });

        let page = GithubSource::new("author:@me").extract_page(data).unwrap();
        let numbers: Vec<u64> = page.items.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(page.total_count, Some(3));
    }
}
