/// System clipboard input.
use crate::error::SourceError;
use crate::sources::{SourceLabel, TextSource};

/// Something that can hand over the current clipboard text.
pub trait ClipboardProvider {
    /// Read the clipboard as text. Blocks until the OS call returns.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if no text is available.
    fn read_text(&self) -> Result<String, SourceError>;
}

/// The OS clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardProvider for SystemClipboard {
    fn read_text(&self) -> Result<String, SourceError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| SourceError::ClipboardUnavailable(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(SourceError::EmptyClipboard),
            Err(e) => Err(SourceError::ClipboardUnavailable(e.to_string())),
        }
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardProvider for SystemClipboard {
    fn read_text(&self) -> Result<String, SourceError> {
        Err(SourceError::ClipboardUnavailable(
            "built without clipboard support".to_string(),
        ))
    }
}

/// Read the clipboard once; empty text is an error.
pub fn read(provider: &dyn ClipboardProvider) -> Result<TextSource, SourceError> {
    let content = provider.read_text()?;
    if content.is_empty() {
        return Err(SourceError::EmptyClipboard);
    }
    tracing::debug!(bytes = content.len(), "read clipboard");

    Ok(TextSource {
        content,
        label: SourceLabel::Clipboard,
    })
}
