use crate::report::{Measurement, ReportSections, Section};
use core_types::Tooth;
use serde::{Deserialize, Serialize};

/// Where a measured index sits relative to its published normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeAssessment {
    Below,
    Within,
    Above,
}

impl RangeAssessment {
    pub fn describe(&self) -> &'static str {
        match self {
            RangeAssessment::Below => "below normal",
            RangeAssessment::Within => "within normal",
            RangeAssessment::Above => "above normal",
        }
    }
}

/// A published normal range for the Peck & Peck index, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    pub const LATERAL_INCISOR: NormalRange = NormalRange { min: 90.0, max: 95.0 };
    pub const CENTRAL_INCISOR: NormalRange = NormalRange { min: 88.0, max: 92.0 };

    /// The range for a lower incisor: laterals 90-95 %, centrals 88-92 %.
    pub fn for_tooth(tooth: Tooth) -> NormalRange {
        if tooth.position() == 1 {
            Self::CENTRAL_INCISOR
        } else {
            Self::LATERAL_INCISOR
        }
    }

    /// Bounds are inclusive.
    pub fn assess(&self, index: f64) -> RangeAssessment {
        if index < self.min {
            RangeAssessment::Below
        } else if index > self.max {
            RangeAssessment::Above
        } else {
            RangeAssessment::Within
        }
    }
}

/// The Peck & Peck index of one lower incisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncisorIndex {
    pub tooth: Tooth,
    pub mesiodistal: f64,
    pub faciolingual: f64,
    /// `mesiodistal / faciolingual * 100`.
    pub index: f64,
    pub normal: NormalRange,
    pub assessment: RangeAssessment,
}

impl IncisorIndex {
    pub fn new(tooth: Tooth, mesiodistal: f64, faciolingual: f64) -> Self {
        let index = mesiodistal / faciolingual * 100.0;
        let normal = NormalRange::for_tooth(tooth);
        Self {
            tooth,
            mesiodistal,
            faciolingual,
            index,
            normal,
            assessment: normal.assess(index),
        }
    }
}

/// Result of the Peck & Peck analysis of the four lower incisors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeckReport {
    pub incisors: Vec<IncisorIndex>,
}

impl ReportSections for PeckReport {
    fn title(&self) -> String {
        "Peck & Peck Analysis".to_string()
    }

    fn sections(&self) -> Vec<Section> {
        let mut results = Section::new("Peck & Peck Analysis");
        let mut diameters = Section::new("Peck & Peck Diameters");
        for incisor in &self.incisors {
            results = results
                .with_result(Measurement::percent(format!("Tooth {}", incisor.tooth), incisor.index))
                .with_note(format!(
                    "Tooth {}: Normal: {}-{}% ({}).",
                    incisor.tooth,
                    incisor.normal.min,
                    incisor.normal.max,
                    incisor.assessment.describe()
                ));
            diameters = diameters
                .with_result(Measurement::mm(
                    format!("Mesiodistal Tooth {}", incisor.tooth),
                    incisor.mesiodistal,
                ))
                .with_result(Measurement::mm(
                    format!("Faciolingual Tooth {}", incisor.tooth),
                    incisor.faciolingual,
                ));
        }
        vec![results, diameters]
    }
}
