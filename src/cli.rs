use crate::analyzers::TokenReport;
use crate::error::AppError;
use crate::models::ModelRegistry;
use crate::output::{Formatter, JsonFormatter, TextFormatter};
use crate::sources::{self, ClipboardProvider, SystemClipboard};
/// CLI argument parsing and command execution.
use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Model used when neither `--model` nor `--encoding` is given.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// count-tokens - Count the number of tokens in a file using tiktoken.
#[derive(Parser, Debug)]
#[command(name = "count-tokens")]
#[command(about = "Count the number of tokens in a file using tiktoken")]
#[command(
    long_about = r#"Count the number of tokens in a file (or the clipboard) using tiktoken encodings.

EXAMPLES:
  # Token count under the gpt-4 encoding
  count-tokens prompt.txt

  # Pick a model, show character statistics and cost
  count-tokens prompt.txt --model gpt-4o --details

  # Use an encoding directly and split into 4K-token chunks
  count-tokens notes.md --encoding o200k_base --chunks 4096

  # Count whatever is on the clipboard
  count-tokens --clipboard

Available encodings: gpt2, cl100k_base, o200k_base, p50k_base, p50k_edit, r50k_base"#
)]
#[command(version)]
pub struct Cli {
    /// Path to the file to analyze (required unless --clipboard)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// OpenAI model to use for encoding
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Specific encoding to use (overrides model)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Show detailed token information (characters, ratio, cost)
    #[arg(short, long)]
    pub details: bool,

    /// Split output into chunks of specified token size
    #[arg(short, long, value_name = "SIZE", allow_negative_numbers = true)]
    pub chunks: Option<String>,

    /// Read text from the system clipboard instead of a file
    #[arg(long)]
    pub clipboard: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a custom pricing configuration (TOML)
    #[arg(long, value_name = "FILE")]
    pub pricing_file: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

/// Resolved, validated options for one invocation.
#[derive(Debug, Clone)]
pub struct InvocationOptions {
    pub source_path: Option<PathBuf>,
    pub use_clipboard: bool,
    pub model: String,
    pub encoding: Option<String>,
    pub show_details: bool,
    pub chunk_size: Option<NonZeroUsize>,
    pub format: OutputFormat,
    pub pricing_file: Option<PathBuf>,
}

impl TryFrom<Cli> for InvocationOptions {
    type Error = AppError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let chunk_size = cli.chunks.as_deref().map(parse_chunk_size).transpose()?;

        Ok(Self {
            source_path: cli.file,
            use_clipboard: cli.clipboard,
            model: cli.model,
            encoding: cli.encoding,
            show_details: cli.details,
            chunk_size,
            format: cli.format,
            pricing_file: cli.pricing_file,
        })
    }
}

/// Parse a `--chunks` value: a positive integer.
pub fn parse_chunk_size(raw: &str) -> Result<NonZeroUsize, AppError> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| AppError::InvalidChunkSize(raw.to_string()))
}

impl Cli {
    /// Execute the command and print the report to stdout.
    pub fn run(self) -> Result<(), AppError> {
        let options = InvocationOptions::try_from(self)?;
        let output = execute(&options, &SystemClipboard)?;
        println!("{}", output);
        Ok(())
    }
}

/// Run the whole pipeline and return the rendered report.
///
/// Nothing is written anywhere; the caller prints the result only once
/// encoding has succeeded.
///
/// # Errors
///
/// Any `AppError` from configuration, input, tokenizer resolution or formatting.
pub fn execute(
    options: &InvocationOptions,
    clipboard: &dyn ClipboardProvider,
) -> Result<String, AppError> {
    let registry = ModelRegistry::new_with_pricing(options.pricing_file.as_deref())?;

    let source = sources::resolve(
        options.source_path.as_deref(),
        options.use_clipboard,
        clipboard,
    )?;

    let report = {
        // Dropping the tokenizer at the end of this block frees the BPE tables
        // whether or not encoding succeeded.
        let tokenizer = registry.get_tokenizer(options.encoding.as_deref(), &options.model)?;
        let token_count = tokenizer.count_tokens(&source.content)?;
        tracing::debug!(token_count, tokenizer = tokenizer.name(), "encoded input");

        let label = options.encoding.as_deref().unwrap_or(&options.model);
        TokenReport::new(source.label.clone(), label, token_count)
    };

    let report = if options.show_details {
        let pricing = registry.pricing_for(&options.model);
        if pricing.is_none() {
            tracing::debug!(model = %options.model, "no pricing for model; skipping cost");
        }
        report.with_details(&source.content, pricing)
    } else {
        report
    };

    let report = match options.chunk_size {
        Some(size) => report.with_chunks(size),
        None => report,
    };

    let formatter: Box<dyn Formatter> = match options.format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    };
    formatter.format_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SourceError, TokenizerError};

    struct NoClipboard;

    impl ClipboardProvider for NoClipboard {
        fn read_text(&self) -> Result<String, SourceError> {
            Ok(String::new())
        }
    }

    fn options_from(args: &[&str]) -> InvocationOptions {
        let cli = Cli::try_parse_from(args).expect("CLI args should parse");
        InvocationOptions::try_from(cli).expect("options should validate")
    }

    fn write_input(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, content).expect("write input");
        (dir, path)
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["count-tokens", "prompt.txt"]).expect("parse");
        assert_eq!(cli.file, Some(PathBuf::from("prompt.txt")));
        assert_eq!(cli.model, "gpt-4");
        assert!(cli.encoding.is_none());
        assert!(!cli.details);
        assert!(!cli.clipboard);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_all_short_flags() {
        let options = options_from(&[
            "count-tokens",
            "-m",
            "gpt-4o",
            "-e",
            "cl100k_base",
            "-d",
            "-c",
            "512",
            "-f",
            "json",
            "notes.md",
        ]);
        assert_eq!(options.source_path, Some(PathBuf::from("notes.md")));
        assert_eq!(options.model, "gpt-4o");
        assert_eq!(options.encoding.as_deref(), Some("cl100k_base"));
        assert!(options.show_details);
        assert_eq!(options.chunk_size.map(NonZeroUsize::get), Some(512));
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_invalid_chunk_sizes() {
        for raw in ["0", "-3", "abc", "1.5", ""] {
            let cli = Cli::try_parse_from(["count-tokens", "a.txt", "--chunks", raw])
                .expect("raw chunk value parses");
            let err = InvocationOptions::try_from(cli).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidChunkSize(ref value) if value == raw),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn chunks_does_not_swallow_following_flag() {
        let err = Cli::try_parse_from(["count-tokens", "a.txt", "-c", "-d"]).unwrap_err();
        assert_ne!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.use_stderr());

        let cli = Cli::try_parse_from(["count-tokens", "a.txt", "-c", "-3", "-d"])
            .expect("negative chunk value parses");
        assert_eq!(cli.chunks.as_deref(), Some("-3"));
        assert!(cli.details);
    }

    #[test]
    fn special_token_input_fails_before_output() {
        let (_dir, path) = write_input("a <|endoftext|> b");
        let mut options = options_from(&["count-tokens"]);
        options.source_path = Some(path);

        let err = execute(&options, &NoClipboard).unwrap_err();
        assert!(matches!(
            err,
            AppError::Tokenizer(TokenizerError::EncodingFailed(_))
        ));
    }

    #[test]
    fn counts_tokens_in_file() {
        let (_dir, path) = write_input("hello world");
        let mut options = options_from(&["count-tokens"]);
        options.source_path = Some(path.clone());

        let output = execute(&options, &NoClipboard).expect("execute");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], format!("File: {}", path.display()));
        assert_eq!(lines[1], "Model/Encoding: gpt-4");
        assert_eq!(lines[2], "Token count: 2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn encoding_label_and_cost_use_separate_inputs() {
        let (_dir, path) = write_input("hello world");
        let mut options = options_from(&["count-tokens", "--encoding", "o200k_base", "-d"]);
        options.source_path = Some(path);

        let output = execute(&options, &NoClipboard).expect("execute");
        assert!(output.contains("Model/Encoding: o200k_base"));
        assert!(output.contains("Character count: 11"));
        // Cost is still keyed on the (default) model.
        assert!(output.contains("Estimated cost: $"));
    }

    #[test]
    fn unpriced_model_omits_cost() {
        let (_dir, path) = write_input("hello world");
        let mut options = options_from(&["count-tokens", "-m", "text-davinci-003", "-d"]);
        options.source_path = Some(path);

        let output = execute(&options, &NoClipboard).expect("execute");
        assert!(output.contains("Chars per token:"));
        assert!(!output.contains("Estimated cost"));
    }

    #[test]
    fn empty_file_reports_undefined_ratio() {
        let (_dir, path) = write_input("");
        let mut options = options_from(&["count-tokens", "-d", "-c", "10"]);
        options.source_path = Some(path);

        let output = execute(&options, &NoClipboard).expect("execute");
        assert!(output.contains("Token count: 0"));
        assert!(output.contains("Chars per token: N/A"));
        assert!(output.ends_with("Chunk breakdown:"));
    }

    #[test]
    fn invalid_model_and_encoding_fail() {
        let (_dir, path) = write_input("hello");

        let mut options = options_from(&["count-tokens", "-m", "not-a-model"]);
        options.source_path = Some(path.clone());
        let err = execute(&options, &NoClipboard).unwrap_err();
        assert!(matches!(
            err,
            AppError::Model(crate::error::ModelError::Tokenizer(
                TokenizerError::InvalidModel { .. }
            ))
        ));

        let mut options = options_from(&["count-tokens", "-e", "bogus"]);
        options.source_path = Some(path);
        let err = execute(&options, &NoClipboard).unwrap_err();
        assert!(err.to_string().contains("Available encodings"));
    }

    #[test]
    fn missing_file_argument_fails() {
        let options = options_from(&["count-tokens"]);
        let err = execute(&options, &NoClipboard).unwrap_err();
        assert!(matches!(err, AppError::Source(SourceError::MissingArgument)));
    }

    #[test]
    fn empty_clipboard_fails() {
        let options = options_from(&["count-tokens", "--clipboard"]);
        let err = execute(&options, &NoClipboard).unwrap_err();
        assert!(matches!(err, AppError::Source(SourceError::EmptyClipboard)));
    }
}
