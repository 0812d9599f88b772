//! Document export with atomic writes
//!
//! File operations for the export path: filename sanitization, the atomic
//! temp-file-then-rename write, and the validate-render-write pipeline.
//! Export is all-or-nothing per invocation; a failed write never leaves a
//! partial document behind, and there is nothing to clean up after a
//! failure beyond retrying.

use atomic_write_file::AtomicWriteFile;
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::store::DocumentStore;
use crate::core::validator::{validate_for_export, ValidationError};
use crate::core::variant::VariantConfig;
use crate::render::document::render_document;

/// Fixed suffix appended to every export file name.
pub const FILE_SUFFIX: &str = "_source_document.html";

/// Maximum length of the sanitized name stem.
const MAX_STEM_LENGTH: usize = 40;

/// Stem used when the naming header field is empty or sanitizes away.
const FALLBACK_STEM: &str = "untitled";

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document failed the export gate (see `core::validator`).
    #[error("Export blocked: {0}")]
    Validation(#[from] ValidationError),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sanitizes a header value into a file-name stem.
///
/// Runs of non-alphanumeric characters collapse to a single underscore,
/// leading/trailing underscores are trimmed, and the result is truncated
/// to [`MAX_STEM_LENGTH`] characters.
pub fn sanitize_stem(value: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators = SEPARATORS
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("hard-coded pattern compiles"));

    let collapsed = separators.replace_all(value, "_");
    let trimmed = collapsed.trim_matches('_');
    let stem: String = trimmed.chars().take(MAX_STEM_LENGTH).collect();

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// The export file name for a document, from its naming header field.
pub fn suggested_file_name(variant: &VariantConfig, store: &DocumentStore) -> String {
    let value = store.header_value(&variant.file_name_field);
    format!("{}{}", sanitize_stem(value), FILE_SUFFIX)
}

/// Writes rendered content to `path` atomically.
///
/// Uses temp-file-then-rename so a crash or full disk never corrupts an
/// existing export at the same path.
pub fn write_document(path: &Path, content: &str) -> Result<(), ExportError> {
    let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
        ExportError::WriteFailed(format!("Failed to open for atomic write: {}", e))
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ExportError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ExportError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}

/// Validates, renders, and writes a document to an explicit path.
pub fn export_document(
    variant: &VariantConfig,
    store: &DocumentStore,
    path: &Path,
) -> Result<(), ExportError> {
    validate_for_export(variant, store)?;
    write_document(path, &render_document(variant, store))
}

/// Validates, renders, and writes a document into a directory, deriving the
/// file name from the variant's naming field. Returns the written path.
pub fn export_to_dir(
    variant: &VariantConfig,
    store: &DocumentStore,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(suggested_file_name(variant, store));
    export_document(variant, store, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests;
