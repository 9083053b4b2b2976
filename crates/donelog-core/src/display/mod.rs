pub mod progress;
pub mod summary;
pub mod table;

pub use progress::{OperationStatus, banner, display_export_outcome, display_status, status_line};
pub use summary::{Summary, SummarySection, count_by};
pub use table::TableDisplay;
