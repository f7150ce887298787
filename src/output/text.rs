/// Human-readable, line-oriented formatter.
use crate::analyzers::TokenReport;
use crate::error::AppError;
use crate::output::Formatter;
use crate::sources::SourceLabel;
use crate::utils::numbers::group_thousands;

/// Plain text formatter.
///
/// Lines always appear in the same order (source, model, count, details,
/// chunks) so that scripts can consume the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format_report(&self, report: &TokenReport) -> Result<String, AppError> {
        let mut output = Vec::new();

        match &report.source {
            SourceLabel::File(path) => output.push(format!("File: {}", path.display())),
            SourceLabel::Clipboard => output.push("Source: Clipboard".to_string()),
        }
        output.push(format!("Model/Encoding: {}", report.model));
        output.push(format!(
            "Token count: {}",
            group_thousands(report.token_count)
        ));

        if let Some(details) = &report.details {
            output.push(format!(
                "Character count: {}",
                group_thousands(details.char_count)
            ));
            let ratio = details
                .chars_per_token
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| "N/A".to_string());
            output.push(format!("Chars per token: {}", ratio));
            if let Some(cost) = &details.cost {
                output.push(format!(
                    "Estimated cost: ${:.4} (input) / ${:.4} (output)",
                    cost.input, cost.output
                ));
            }
        }

        if let Some(chunks) = &report.chunks {
            output.push(String::new());
            output.push("Chunk breakdown:".to_string());
            for chunk in chunks {
                output.push(format!(
                    "  Chunk {}/{}: {}-{} tokens ({:.1}%)",
                    chunk.index + 1,
                    chunks.len(),
                    chunk.start,
                    chunk.end,
                    chunk.percentage
                ));
            }
        }

        Ok(output.join("\n"))
    }
}
