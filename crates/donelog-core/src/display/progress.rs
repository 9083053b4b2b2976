//! Status lines for the console run

use crate::export::ExportOutcome;

const BANNER_RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    InProgress,
    Success,
    Warning,
    Error,
}

/// One formatted status line, e.g. ` ✅ Completed: JSON export`.
pub fn status_line(operation: &str, status: OperationStatus) -> String {
    let (symbol, message) = match status {
        OperationStatus::InProgress => ("⏳", format!("In progress: {}", operation)),
        OperationStatus::Success => ("✅", format!("Completed: {}", operation)),
        OperationStatus::Warning => ("⚠️", format!("Warning: {}", operation)),
        OperationStatus::Error => ("❌", format!("Error: {}", operation)),
    };

    // Leading space keeps wide emoji from being clipped by some terminals
    format!(" {} {}", symbol, message)
}

pub fn display_status(operation: &str, status: OperationStatus) {
    println!("{}", status_line(operation, status));
}

/// Title line followed by a rule.
pub fn banner(title: &str) -> String {
    format!("🚀 {}\n{}", title, "=".repeat(BANNER_RULE_WIDTH))
}

/// Print the success or failure line for one export format.
pub fn display_export_outcome(outcome: &ExportOutcome) {
    match &outcome.result {
        Ok(count) => display_status(
            &format!(
                "Exported {} records to {}",
                count,
                outcome.path.display()
            ),
            OperationStatus::Success,
        ),
        Err(e) => display_status(
            &format!("{} export failed: {}", outcome.format.label(), e),
            OperationStatus::Error,
        ),
    }
}
