//! Completed tickets assigned to the authenticated Linear user

use crate::api::client::{AuthScheme, Credential};
use crate::api::graphql::Variables;
use crate::api::models::linear::{Issue, LinearData};
use crate::core::source::{PAGE_SIZE, Page, WorkSource};
use crate::export::csv::CsvRecord;
use crate::utils::datetime::{SECONDS_FORMAT, format_optional_timestamp, format_timestamp};
use crate::utils::text::or_not_available;
use serde::Serialize;
use serde_json::{Value, json};

pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";
pub const DEFAULT_START_DATE: &str = "2025-01-01T00:00:00.000Z";
pub const DEFAULT_END_DATE: &str = "2026-02-28T23:59:59.999Z";
/// Output files are `<stem>.json` and `<stem>.csv`.
pub const EXPORT_FILE_STEM: &str = "linear_completed_tickets";

const COMPLETED_STATE_TYPE: &str = "completed";
const LABEL_DELIMITER: &str = ", ";

const COMPLETED_ISSUES_QUERY: &str = r#"
query GetCompletedIssues($after: String, $first: Int!, $startDate: DateTimeOrDuration!, $endDate: DateTimeOrDuration!) {
  viewer {
    id
    name
    email
    assignedIssues(
      first: $first
      after: $after
      includeArchived: true
      filter: { completedAt: { gte: $startDate, lte: $endDate } }
    ) {
      nodes {
        id
        identifier
        title
        description
        url
        priority
        estimate
        createdAt
        updatedAt
        completedAt
        state { id name type }
        team { id name key }
        project { id name }
        cycle { number name }
        labels { nodes { name } }
        assignee { id name email }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}
"#;

/// Linear priority codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    NoPriority,
    Urgent,
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Priority::NoPriority,
            1 => Priority::Urgent,
            2 => Priority::High,
            3 => Priority::Medium,
            4 => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No priority",
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unknown => "Unknown",
        }
    }
}

/// Flat, presentation-ready ticket.
///
/// `state` and `assignee` appear in the CSV and table only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub identifier: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub team: String,
    #[serde(skip)]
    pub state: String,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip)]
    pub assignee: Option<String>,
}

impl CsvRecord for IssueRecord {
    const HEADER: &'static [&'static str] = &[
        "Identifier",
        "Title",
        "URL",
        "Team",
        "State",
        "Priority",
        "Estimate",
        "Labels",
        "Project",
        "Cycle",
        "Created At",
        "Completed At",
        "Assignee",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.identifier.clone(),
            self.title.clone(),
            self.url.clone(),
            self.team.clone(),
            self.state.clone(),
            self.priority.clone(),
            or_not_available(self.estimate.as_deref()),
            self.labels.join(LABEL_DELIMITER),
            or_not_available(self.project.as_deref()),
            or_not_available(self.cycle.as_deref()),
            self.created_at.clone(),
            or_not_available(self.completed_at.as_deref()),
            or_not_available(self.assignee.as_deref()),
        ]
    }
}

/// Issues whose completion falls inside `[start_date, end_date]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSource {
    start_date: String,
    end_date: String,
}

impl LinearSource {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Linear expects the API key as the bare `Authorization` value.
    pub fn credential(api_key: impl Into<String>) -> Credential {
        Credential::new(api_key, AuthScheme::Raw)
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }
}

impl WorkSource for LinearSource {
    type Item = Issue;
    type Record = IssueRecord;

    const NAME: &'static str = "issues";
    const QUERY: &'static str = COMPLETED_ISSUES_QUERY;

    fn base_variables(&self) -> Variables {
        let mut variables = Variables::new();
        variables.insert("first".to_string(), json!(PAGE_SIZE));
        variables.insert("startDate".to_string(), json!(self.start_date));
        variables.insert("endDate".to_string(), json!(self.end_date));
        variables
    }

    fn extract_page(&self, data: Value) -> Result<Page<Issue>, serde_json::Error> {
        let data: LinearData = serde_json::from_value(data)?;
        log::debug!("Authenticated as {}", data.viewer.name);
        let connection = data.viewer.assigned_issues;
        Ok(Page {
            items: connection.nodes,
            page_info: connection.page_info,
            total_count: None,
        })
    }

    fn is_done(item: &Issue) -> bool {
        item.state.state_type == COMPLETED_STATE_TYPE
    }

    fn project(issue: &Issue) -> IssueRecord {
        IssueRecord {
            identifier: issue.identifier.clone(),
            title: issue.title.clone(),
            description: issue.description.clone().unwrap_or_default(),
            url: issue.url.clone(),
            team: issue.team.name.clone(),
            state: issue.state.name.clone(),
            priority: Priority::from_code(issue.priority).label().to_string(),
            estimate: issue.estimate.map(|estimate| format!("{:.0}", estimate)),
            labels: issue.labels.names(),
            project: issue.project.as_ref().map(|project| project.name.clone()),
            cycle: issue
                .cycle
                .as_ref()
                .and_then(|cycle| cycle.name.clone())
                .filter(|name| !name.is_empty()),
            created_at: format_timestamp(&issue.created_at, SECONDS_FORMAT),
            completed_at: format_optional_timestamp(issue.completed_at.as_deref(), SECONDS_FORMAT),
            assignee: issue.assignee.as_ref().map(|user| user.name.clone()),
        }
    }
}
