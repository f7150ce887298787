/// Output formatting for token reports.
pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::analyzers::TokenReport;
use crate::error::AppError;

/// Renders a [`TokenReport`] for stdout.
pub trait Formatter {
    /// Format a single report.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the report cannot be serialized.
    fn format_report(&self, report: &TokenReport) -> Result<String, AppError>;
}
