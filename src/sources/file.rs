/// File input.
use crate::error::SourceError;
use crate::sources::{SourceLabel, TextSource};
use std::path::Path;

/// Read a whole file as UTF-8, labelled with its absolute path.
///
/// # Errors
///
/// `SourceError::FileNotFound` (with the resolved path) if nothing exists at
/// `path`, `SourceError::Read` for any other I/O or UTF-8 failure.
pub fn read(path: &Path) -> Result<TextSource, SourceError> {
    let resolved = std::path::absolute(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !resolved.exists() {
        return Err(SourceError::FileNotFound { path: resolved });
    }

    let content = std::fs::read_to_string(&resolved).map_err(|source| SourceError::Read {
        path: resolved.clone(),
        source,
    })?;
    tracing::debug!(path = %resolved.display(), bytes = content.len(), "read input file");

    Ok(TextSource {
        content,
        label: SourceLabel::File(resolved),
    })
}
