/// Error types for the count-tokens crate.
use std::path::PathBuf;
use thiserror::Error;

/// Encodings accepted by `--encoding`, in the order they are listed to users.
pub const AVAILABLE_ENCODINGS: &str = "gpt2, cl100k_base, o200k_base, p50k_base, p50k_edit, r50k_base";

/// Model aliases suggested when a model cannot be resolved.
pub const COMMON_MODELS: &str = "gpt-4, gpt-3.5-turbo, text-davinci-003, text-embedding-ada-002";

/// Errors that can occur while acquiring the input text.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No input file specified. Provide a file path or use --clipboard")]
    MissingArgument,

    #[error("File \"{}\" does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Clipboard is empty")]
    EmptyClipboard,

    #[error("Clipboard is empty or unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during tokenizer resolution and tokenization.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Invalid encoding \"{name}\"\nAvailable encodings: {}", AVAILABLE_ENCODINGS)]
    InvalidEncoding { name: String },

    #[error("Invalid model \"{model}\"\nCommon models: {}", COMMON_MODELS)]
    InvalidModel { model: String },

    #[error("Failed to initialize tokenizer: {0}")]
    InitializationFailed(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Errors related to the model registry and pricing configuration.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to load pricing configuration '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    #[error("Invalid pricing for model {model}: {reason}")]
    InvalidPricing { model: String, reason: String },

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid chunk size \"{0}\": must be a positive integer")]
    InvalidChunkSize(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
