/// JSON formatter for scripting.
use crate::analyzers::TokenReport;
use crate::error::AppError;
use crate::output::Formatter;

/// Pretty-printed JSON formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &TokenReport) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
