use crate::core::sources::{IssueRecord, PullRequestRecord};
use crate::utils::text::{clip_text, or_not_available, truncate_text};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

const ISSUE_ID_WIDTH: usize = 15;
const ISSUE_TITLE_WIDTH: usize = 50;
const ISSUE_TEAM_WIDTH: usize = 20;
const ISSUE_COMPLETED_WIDTH: usize = 20;

const PR_REPO_WIDTH: usize = 30;
const PR_TITLE_WIDTH: usize = 42;
const PR_BRANCH_WIDTH: usize = 25;

pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => Some((cols as usize).clamp(40, 250)),
            Err(_) => None,
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str], color: Color) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }
        let cells: Vec<Cell> = headers.iter().map(|h| self.bold_header(h, color)).collect();
        table.set_header(cells);
        table
    }

    pub fn render_issues(&self, issues: &[IssueRecord]) -> String {
        let mut table = self.new_table(&["ID", "Title", "Team", "Completed"], Color::Cyan);

        for issue in issues {
            let completed = or_not_available(issue.completed_at.as_deref());
            table.add_row(vec![
                self.colored_cell(
                    &clip_text(&issue.identifier, ISSUE_ID_WIDTH),
                    Color::Cyan,
                ),
                Cell::new(truncate_text(&issue.title, ISSUE_TITLE_WIDTH)),
                Cell::new(clip_text(&issue.team, ISSUE_TEAM_WIDTH)),
                self.colored_cell(
                    &clip_text(&completed, ISSUE_COMPLETED_WIDTH),
                    Color::DarkGrey,
                ),
            ]);
        }

        table.to_string()
    }

    pub fn render_pull_requests(&self, pull_requests: &[PullRequestRecord]) -> String {
        let mut table = self.new_table(
            &["Repo", "PR#", "Title", "Branch", "Merged At", "+/-"],
            Color::Green,
        );

        for pr in pull_requests {
            let merged_at = or_not_available(pr.merged_at.as_deref());
            table.add_row(vec![
                Cell::new(truncate_text(&pr.repository, PR_REPO_WIDTH)),
                self.colored_cell(&format!("#{}", pr.number), Color::Cyan),
                Cell::new(truncate_text(&pr.title, PR_TITLE_WIDTH)),
                Cell::new(truncate_text(&pr.branch, PR_BRANCH_WIDTH)),
                self.colored_cell(&merged_at, Color::DarkGrey),
                Cell::new(pr.line_delta()),
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> TableDisplay {
        TableDisplay::new().with_colors(false).with_max_width(220)
    }

    fn issue(identifier: &str, title: &str) -> IssueRecord {
        IssueRecord {
            identifier: identifier.to_string(),
            title: title.to_string(),
            description: String::new(),
            url: "https://linear.app/acme/issue/x".to_string(),
            team: "Platform".to_string(),
            state: "Done".to_string(),
            priority: "High".to_string(),
            estimate: None,
            labels: Vec::new(),
            project: None,
            cycle: None,
            created_at: "2025-03-01 08:00:00".to_string(),
            completed_at: None,
            assignee: None,
        }
    }

    #[test]
    fn test_render_issues() {
        let long_title = "Rewrite the invoice reconciliation job so it streams rows instead of buffering";
        let output = display().render_issues(&[issue("PLAT-1", "Short"), issue("PLAT-2", long_title)]);

        assert!(output.contains("ID"));
        assert!(output.contains("Completed"));
        assert!(output.contains("PLAT-1"));
        assert!(output.contains("Platform"));
        assert!(output.contains("N/A"));
        assert!(!output.contains(long_title));
        assert!(output.contains("Rewrite the invoice reconciliation job so it st..."));
    }

    #[test]
    fn test_render_issues_clips_short_columns_without_marker() {
        let mut record = issue("INFRASTRUCTURE-12345", "Short");
        record.team = "Platform Infrastructure Team".to_string();
        let output = display().render_issues(&[record]);

        assert!(output.contains("INFRASTRUCTURE-"));
        assert!(!output.contains("INFRASTRUCTURE-1"));
        assert!(output.contains("Platform Infrastruct"));
        assert!(!output.contains("Platform Infrastructure"));
        assert!(!output.contains("..."));
    }

    #[test]
    fn test_render_pull_requests() {
        let pr = PullRequestRecord {
            repository: "acme/hooks".to_string(),
            number: 42,
            title: "Retry webhook delivery".to_string(),
            description: String::new(),
            url: "https://github.com/acme/hooks/pull/42".to_string(),
            branch: "feature/webhook-retry".to_string(),
            state: "MERGED".to_string(),
            merged_at: Some("2025-04-03 16:20".to_string()),
            created_at: "2025-04-01 09:15".to_string(),
            updated_at: "2025-04-03 16:20".to_string(),
            additions: 120,
            deletions: 7,
            changed_files: 4,
            reviews: 2,
            comments: 5,
            labels: Vec::new(),
        };

        let output = display().render_pull_requests(&[pr]);
        assert!(output.contains("acme/hooks"));
        assert!(output.contains("#42"));
        assert!(output.contains("2025-04-03 16:20"));
        assert!(output.contains("+120/-7"));
    }
}
