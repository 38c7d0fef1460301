//! # Orthometry Reporter
//!
//! Turns the presentation-neutral `analytics::Report` into the documents the
//! user keeps: a standalone HTML page (with an optional screenshot reference)
//! or the raw JSON report.

use crate::error::ReporterError;
use std::fs;
use std::path::Path;

pub mod document;
pub mod error;
pub mod html;

pub use document::ReportDocument;
pub use html::{escape_html, render_document, render_fragment};

/// Writes the document as HTML, creating missing parent directories.
///
/// A relative screenshot path is taken relative to the working directory and
/// written out as an absolute path, since the browser would otherwise resolve
/// it against the report's own directory.
pub fn write_html(doc: &ReportDocument, path: &Path) -> Result<(), ReporterError> {
    let mut doc = doc.clone();
    if let Some(screenshot) = doc.screenshot.take() {
        let resolved = std::path::absolute(&screenshot).unwrap_or(screenshot);
        if !resolved.exists() {
            tracing::warn!(path = %resolved.display(), "Screenshot file not found; the report will reference it anyway.");
        }
        doc.screenshot = Some(resolved);
    }
    write_file(path, render_document(&doc).as_bytes())?;
    tracing::info!(path = %path.display(), id = %doc.id, "HTML report written.");
    Ok(())
}

/// Writes the document, including its report, as pretty-printed JSON.
pub fn write_json(doc: &ReportDocument, path: &Path) -> Result<(), ReporterError> {
    let json = serde_json::to_string_pretty(doc)?;
    write_file(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), id = %doc.id, "JSON report written.");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ReporterError> {
    let io_err = |source| ReporterError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}
