//! Grouped statistics printed after the table

use crate::core::sources::{IssueRecord, PullRequestRecord};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub heading: String,
    pub counts: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_label: String,
    pub total: usize,
    pub period: String,
    pub sections: Vec<SummarySection>,
    pub totals: Vec<(String, String)>,
}

/// Count items per key, largest group first; ties sort by key.
pub fn count_by<T, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> &str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl Summary {
    pub fn for_issues(issues: &[IssueRecord], period: &str) -> Self {
        Self {
            total_label: "Total completed issues".to_string(),
            total: issues.len(),
            period: period.to_string(),
            sections: vec![
                SummarySection {
                    heading: "By team".to_string(),
                    counts: count_by(issues, |issue| issue.team.as_str()),
                },
                SummarySection {
                    heading: "By priority".to_string(),
                    counts: count_by(issues, |issue| issue.priority.as_str()),
                },
            ],
            totals: Vec::new(),
        }
    }

    pub fn for_pull_requests(pull_requests: &[PullRequestRecord], period: &str) -> Self {
        let additions: u64 = pull_requests.iter().map(|pr| pr.additions).sum();
        let deletions: u64 = pull_requests.iter().map(|pr| pr.deletions).sum();

        Self {
            total_label: "Total merged pull requests".to_string(),
            total: pull_requests.len(),
            period: period.to_string(),
            sections: vec![SummarySection {
                heading: "By repository".to_string(),
                counts: count_by(pull_requests, |pr| pr.repository.as_str()),
            }],
            totals: vec![
                ("Lines added".to_string(), format!("+{}", additions)),
                ("Lines deleted".to_string(), format!("-{}", deletions)),
            ],
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Summary")?;
        writeln!(f, "{}: {}", self.total_label, self.total)?;
        writeln!(f, "Period: {}", self.period)?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}:", section.heading)?;
            for (name, count) in &section.counts {
                writeln!(f, "  {}: {}", name, count)?;
            }
        }

        if !self.totals.is_empty() {
            writeln!(f)?;
            for (label, value) in &self.totals {
                writeln!(f, "{}: {}", label, value)?;
            }
        }
        Ok(())
    }
}
