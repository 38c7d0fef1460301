use analytics::Report;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// A report ready to be written: the analysis output plus the document-level
/// metadata the imaging host used to add (title, timestamp, screenshot).
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub decimals: usize,
    pub screenshot: Option<PathBuf>,
    pub report: Report,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>, report: Report, decimals: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            title: title.into(),
            decimals,
            screenshot: None,
            report,
        }
    }

    /// References an externally captured screenshot from the document.
    pub fn with_screenshot(mut self, path: PathBuf) -> Self {
        self.screenshot = Some(path);
        self
    }

    /// A file name derived from the analysis slug and generation time,
    /// e.g. `bolton-20261016-142501.html`.
    pub fn default_file_name(&self, slug: &str, extension: &str) -> String {
        format!("{}-{}.{}", slug, self.generated_at.format("%Y%m%d-%H%M%S"), extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_name_uses_slug_and_timestamp() {
        let doc = ReportDocument::new("Report", Report::new("Bolton Analysis", vec![]), 2);
        let name = doc.default_file_name("bolton", "html");
        assert!(name.starts_with("bolton-"));
        assert!(name.ends_with(".html"));
        assert_eq!(name.len(), "bolton-YYYYmmdd-HHMMSS.html".len());
    }

    #[test]
    fn each_document_gets_a_fresh_id() {
        let a = ReportDocument::new("Report", Report::new("x", vec![]), 2);
        let b = ReportDocument::new("Report", Report::new("x", vec![]), 2);
        assert_ne!(a.id, b.id);
    }
}
