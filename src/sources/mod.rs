/// Input acquisition: files and the system clipboard.
pub mod clipboard;
pub mod file;

pub use clipboard::{ClipboardProvider, SystemClipboard};

use crate::error::SourceError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum SourceLabel {
    /// An absolute file path.
    File(PathBuf),
    Clipboard,
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLabel::File(path) => write!(f, "{}", path.display()),
            SourceLabel::Clipboard => f.write_str("Clipboard"),
        }
    }
}

/// Resolved input text plus a human-readable label.
#[derive(Debug, Clone)]
pub struct TextSource {
    pub content: String,
    pub label: SourceLabel,
}

/// Resolve the input for one invocation.
///
/// The clipboard is used when `use_clipboard` is set, otherwise `path` is
/// required. Exactly one of the two is read; there is no fallback.
///
/// # Errors
///
/// `SourceError::MissingArgument` when neither input is given, plus whatever
/// the chosen reader reports.
pub fn resolve(
    path: Option<&Path>,
    use_clipboard: bool,
    clipboard: &dyn ClipboardProvider,
) -> Result<TextSource, SourceError> {
    if use_clipboard {
        if let Some(path) = path {
            tracing::warn!(path = %path.display(), "--clipboard given; ignoring file argument");
        }
        return clipboard::read(clipboard);
    }

    match path {
        Some(path) => file::read(path),
        None => Err(SourceError::MissingArgument),
    }
}
