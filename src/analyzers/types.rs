/// Data structures describing a token count report.
use crate::analyzers::chunks;
use crate::models::ModelPricing;
use crate::sources::SourceLabel;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Read-only view over one encoded text.
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    /// Where the text came from
    pub source: SourceLabel,
    /// The encoding name when one was given, otherwise the model alias
    pub model: String,
    /// Number of tokens
    pub token_count: usize,
    /// Character statistics and cost, present in detail mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ReportDetails>,
    /// Chunk breakdown in ascending index order, present in chunk mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<ChunkRange>>,
}

/// Detail-mode statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDetails {
    /// Unicode scalar values in the text
    pub char_count: usize,
    /// `char_count / token_count`; `None` when there are no tokens
    pub chars_per_token: Option<f64>,
    /// Present only for priced models
    pub cost: Option<CostEstimate>,
}

/// Estimated USD cost of sending (input) or generating (output) the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub input: f64,
    pub output: f64,
}

impl CostEstimate {
    /// Cost of `token_count` tokens at per-1K prices.
    pub fn for_tokens(token_count: usize, pricing: ModelPricing) -> Self {
        let thousands = token_count as f64 / 1000.0;
        Self {
            input: thousands * pricing.input,
            output: thousands * pricing.output,
        }
    }
}

/// One contiguous window `[start, end)` of the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkRange {
    /// 0-based position of the chunk
    pub index: usize,
    pub start: usize,
    pub end: usize,
    /// Share of all tokens, rounded to one decimal
    pub percentage: f64,
}

impl ChunkRange {
    /// Number of tokens in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl TokenReport {
    /// Start a report with just the token count.
    pub fn new(source: SourceLabel, model: impl Into<String>, token_count: usize) -> Self {
        Self {
            source,
            model: model.into(),
            token_count,
            details: None,
            chunks: None,
        }
    }

    /// Add character statistics and, when `pricing` is known, a cost estimate.
    pub fn with_details(mut self, text: &str, pricing: Option<ModelPricing>) -> Self {
        let char_count = text.chars().count();
        let chars_per_token = if self.token_count == 0 {
            None
        } else {
            Some(char_count as f64 / self.token_count as f64)
        };

        self.details = Some(ReportDetails {
            char_count,
            chars_per_token,
            cost: pricing.map(|p| CostEstimate::for_tokens(self.token_count, p)),
        });
        self
    }

    /// Add a breakdown into windows of `chunk_size` tokens.
    pub fn with_chunks(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunks = Some(chunks::partition(self.token_count, chunk_size));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(tokens: usize) -> TokenReport {
        TokenReport::new(SourceLabel::Clipboard, "gpt-4", tokens)
    }

    #[test]
    fn chars_per_token_is_ratio() {
        let details = report(4)
            .with_details("abcdefghij", None)
            .details
            .expect("details present");
        assert_eq!(details.char_count, 10);
        assert_eq!(details.chars_per_token, Some(2.5));
        assert!(details.cost.is_none());
    }

    #[test]
    fn chars_per_token_is_undefined_without_tokens() {
        let details = report(0).with_details("", None).details.expect("details present");
        assert_eq!(details.char_count, 0);
        assert_eq!(details.chars_per_token, None);
    }

    #[test]
    fn char_count_uses_scalar_values() {
        let details = report(1).with_details("héllo", None).details.expect("details");
        assert_eq!(details.char_count, 5);
    }

    #[test]
    fn cost_scales_per_thousand_tokens() {
        let pricing = ModelPricing {
            input: 0.03,
            output: 0.06,
        };
        let cost = CostEstimate::for_tokens(2000, pricing);
        assert!((cost.input - 0.06).abs() < 1e-12);
        assert!((cost.output - 0.12).abs() < 1e-12);

        let details = report(500)
            .with_details("text", Some(pricing))
            .details
            .expect("details");
        let cost = details.cost.expect("priced");
        assert!((cost.input - 0.015).abs() < 1e-12);
    }

    #[test]
    fn json_omits_unrequested_sections() {
        let value = serde_json::to_value(report(3)).expect("serialize");
        assert_eq!(value["token_count"], 3);
        assert_eq!(value["source"]["kind"], "clipboard");
        assert!(value.get("details").is_none());
        assert!(value.get("chunks").is_none());
    }
}
