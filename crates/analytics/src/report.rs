use serde::{Deserialize, Serialize};

/// The unit a reported value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Millimeters,
    Percent,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Millimeters => " mm",
            Unit::Percent => "%",
        }
    }
}

/// One keyed numeric result, e.g. "Required Space: 72.40 mm".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn mm(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, unit: Unit::Millimeters }
    }

    pub fn percent(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, unit: Unit::Percent }
    }

    /// The value rounded to `decimals` places with its unit suffix.
    ///
    /// Values that round to zero print unsigned, never as `-0.00`.
    pub fn formatted(&self, decimals: usize) -> String {
        let text = format!("{:.*}", decimals, self.value);
        let negative_zero = text
            .strip_prefix('-')
            .is_some_and(|magnitude| magnitude.bytes().all(|b| b == b'0' || b == b'.'));
        let text = if negative_zero { text[1..].to_string() } else { text };
        format!("{}{}", text, self.unit.suffix())
    }
}

/// A titled block of a report: keyed results followed by narrative lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub results: Vec<Measurement>,
    pub notes: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), results: Vec::new(), notes: Vec::new() }
    }

    pub fn with_result(mut self, measurement: Measurement) -> Self {
        self.results.push(measurement);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// The presentation-neutral output of an analysis run.
///
/// Built once per invocation and handed to a writer (HTML, JSON, terminal).
/// Values are kept unrounded; rounding happens only when formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self { title: title.into(), sections }
    }

    /// Looks up a result by section and label. Mostly useful in tests and
    /// for terminal summaries.
    pub fn value(&self, section: &str, label: &str) -> Option<f64> {
        self.sections
            .iter()
            .filter(|s| s.title == section)
            .flat_map(|s| s.results.iter())
            .find(|m| m.label == label)
            .map(|m| m.value)
    }
}

/// Implemented by every typed analysis result so it can be rendered
/// through the common `Report` shape.
pub trait ReportSections {
    /// The report heading for this result.
    fn title(&self) -> String;

    /// The sections, in display order.
    fn sections(&self) -> Vec<Section>;

    fn to_report(&self) -> Report {
        Report::new(self.title(), self.sections())
    }
}
