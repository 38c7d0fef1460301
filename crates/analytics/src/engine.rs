use crate::bolton::{BoltonPartition, BoltonReport, BoltonScope};
use crate::error::AnalyticsError;
use crate::peck::{IncisorIndex, PeckReport};
use crate::report::{ReportSections, Section};
use crate::space::{SpaceReport, ToothDiameter};
use core_types::catalog::{self, PECK_TEETH};
use core_types::{AnalysisKind, Arch, LandmarkSet, Tooth, ToothSurface};
use serde::{Deserialize, Serialize};

/// Every analysis run over one shared landmark set, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeReport {
    pub superior: SpaceReport,
    pub inferior: SpaceReport,
    pub bolton: BoltonReport,
    pub peck: PeckReport,
}

impl ReportSections for CompositeReport {
    fn title(&self) -> String {
        AnalysisKind::All.title().to_string()
    }

    fn sections(&self) -> Vec<Section> {
        let mut sections = self.superior.sections();
        sections.extend(self.inferior.sections());
        sections.extend(self.bolton.sections());
        sections.extend(self.peck.sections());
        sections
    }
}

/// The typed result of `AnalysisEngine::run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "kebab-case")]
pub enum AnalysisOutcome {
    Space(SpaceReport),
    Bolton(BoltonReport),
    PeckAndPeck(PeckReport),
    All(CompositeReport),
}

impl AnalysisOutcome {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisOutcome::Space(r) => match r.arch {
                Arch::Superior => AnalysisKind::SuperiorSpace,
                Arch::Inferior => AnalysisKind::InferiorSpace,
            },
            AnalysisOutcome::Bolton(_) => AnalysisKind::Bolton,
            AnalysisOutcome::PeckAndPeck(_) => AnalysisKind::PeckAndPeck,
            AnalysisOutcome::All(_) => AnalysisKind::All,
        }
    }
}

impl ReportSections for AnalysisOutcome {
    fn title(&self) -> String {
        match self {
            AnalysisOutcome::Space(r) => r.title(),
            AnalysisOutcome::Bolton(r) => r.title(),
            AnalysisOutcome::PeckAndPeck(r) => r.title(),
            AnalysisOutcome::All(r) => r.title(),
        }
    }

    fn sections(&self) -> Vec<Section> {
        match self {
            AnalysisOutcome::Space(r) => r.sections(),
            AnalysisOutcome::Bolton(r) => r.sections(),
            AnalysisOutcome::PeckAndPeck(r) => r.sections(),
            AnalysisOutcome::All(r) => r.sections(),
        }
    }
}

/// A stateless calculator for the dental model analyses.
///
/// Every method is a pure function of the landmark set it is given.
#[derive(Debug, Default)]
pub struct AnalysisEngine {}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: validates the landmark set for `kind` and runs it.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which analysis to run. `All` runs the four single analyses.
    /// * `landmarks` - The named landmark positions supplied by the caller.
    ///
    /// # Returns
    ///
    /// The typed outcome, or `MissingRequiredLandmark` naming the first
    /// absent label in placement order.
    pub fn run(&self, kind: AnalysisKind, landmarks: &LandmarkSet) -> Result<AnalysisOutcome, AnalyticsError> {
        tracing::info!(kind = %kind, landmarks = landmarks.len(), "Running analysis.");

        let missing = self.missing_landmarks(kind, landmarks);
        if let Some(label) = missing.first() {
            tracing::warn!(kind = %kind, missing = missing.len(), "Landmark set is incomplete.");
            return Err(AnalyticsError::MissingRequiredLandmark {
                kind,
                label: label.clone(),
            });
        }

        // Exhaustive on purpose: a new kind must be wired in here.
        let outcome = match kind {
            AnalysisKind::SuperiorSpace => {
                AnalysisOutcome::Space(self.compute_space_analysis(Arch::Superior, landmarks)?)
            }
            AnalysisKind::InferiorSpace => {
                AnalysisOutcome::Space(self.compute_space_analysis(Arch::Inferior, landmarks)?)
            }
            AnalysisKind::Bolton => AnalysisOutcome::Bolton(self.compute_bolton_analysis(landmarks)?),
            AnalysisKind::PeckAndPeck => {
                AnalysisOutcome::PeckAndPeck(self.compute_peck_and_peck_analysis(landmarks)?)
            }
            AnalysisKind::All => AnalysisOutcome::All(self.compute_all_analysis(landmarks)?),
        };
        Ok(outcome)
    }

    /// Required labels for `kind` that are absent, in placement order.
    pub fn missing_landmarks(&self, kind: AnalysisKind, landmarks: &LandmarkSet) -> Vec<String> {
        catalog::required_labels(kind)
            .into_iter()
            .filter(|label| !landmarks.contains(label))
            .collect()
    }

    /// Compares the arch perimeter with the space the teeth need.
    pub fn compute_space_analysis(&self, arch: Arch, landmarks: &LandmarkSet) -> Result<SpaceReport, AnalyticsError> {
        let kind = match arch {
            Arch::Superior => AnalysisKind::SuperiorSpace,
            Arch::Inferior => AnalysisKind::InferiorSpace,
        };

        let diameters = self.mesiodistal_diameters(kind, catalog::space_teeth(arch), landmarks)?;
        let required_space: f64 = diameters.iter().map(|d| d.value).sum();

        let segment = catalog::segment_labels(arch);
        let mut rated_space = 0.0;
        for pair in segment.windows(2) {
            rated_space += required_distance(kind, landmarks, pair[0], pair[1])?;
        }

        let mut third_molars = Vec::new();
        let mut unreported_third_molars = Vec::new();
        for tooth in catalog::third_molars(arch) {
            let width = landmarks
                .distance(
                    &tooth.label(ToothSurface::Distal),
                    &tooth.label(ToothSurface::Mesial),
                    false,
                )
                .map_err(AnalyticsError::for_kind(kind))?;
            match width {
                Some(value) => third_molars.push(ToothDiameter { tooth: *tooth, value }),
                None => unreported_third_molars.push(*tooth),
            }
        }

        let discrepancy = rated_space - required_space;
        tracing::debug!(
            arch = %arch,
            required_space,
            rated_space,
            discrepancy,
            "Space analysis computed."
        );

        Ok(SpaceReport {
            arch,
            required_space,
            rated_space,
            discrepancy,
            diameters,
            third_molars,
            unreported_third_molars,
        })
    }

    /// Computes the total (12-tooth) and anterior (6-tooth) Bolton ratios.
    pub fn compute_bolton_analysis(&self, landmarks: &LandmarkSet) -> Result<BoltonReport, AnalyticsError> {
        let kind = AnalysisKind::Bolton;
        let superior = self.mesiodistal_diameters(kind, catalog::bolton_teeth(Arch::Superior), landmarks)?;
        let inferior = self.mesiodistal_diameters(kind, catalog::bolton_teeth(Arch::Inferior), landmarks)?;

        let total = BoltonPartition::evaluate(BoltonScope::Total, arch_sum(&superior, false), arch_sum(&inferior, false))?;
        let anterior =
            BoltonPartition::evaluate(BoltonScope::Anterior, arch_sum(&superior, true), arch_sum(&inferior, true))?;

        Ok(BoltonReport {
            superior_diameters: superior,
            inferior_diameters: inferior,
            total,
            anterior,
        })
    }

    /// Computes the mesiodistal / faciolingual index of the lower incisors.
    pub fn compute_peck_and_peck_analysis(&self, landmarks: &LandmarkSet) -> Result<PeckReport, AnalyticsError> {
        let kind = AnalysisKind::PeckAndPeck;
        let mut incisors = Vec::with_capacity(PECK_TEETH.len());
        for tooth in &PECK_TEETH {
            let mesiodistal = tooth_width(kind, landmarks, tooth, ToothSurface::Distal, ToothSurface::Mesial)?;
            let faciolingual = tooth_width(kind, landmarks, tooth, ToothSurface::Vestibular, ToothSurface::Lingual)?;
            if faciolingual == 0.0 {
                return Err(AnalyticsError::DegenerateMeasurement(format!(
                    "faciolingual diameter of tooth {tooth}"
                )));
            }
            incisors.push(IncisorIndex::new(*tooth, mesiodistal, faciolingual));
        }
        Ok(PeckReport { incisors })
    }

    /// Runs the four analyses over one shared landmark set.
    pub fn compute_all_analysis(&self, landmarks: &LandmarkSet) -> Result<CompositeReport, AnalyticsError> {
        Ok(CompositeReport {
            superior: self.compute_space_analysis(Arch::Superior, landmarks)?,
            inferior: self.compute_space_analysis(Arch::Inferior, landmarks)?,
            bolton: self.compute_bolton_analysis(landmarks)?,
            peck: self.compute_peck_and_peck_analysis(landmarks)?,
        })
    }

    fn mesiodistal_diameters(
        &self,
        kind: AnalysisKind,
        teeth: &[Tooth],
        landmarks: &LandmarkSet,
    ) -> Result<Vec<ToothDiameter>, AnalyticsError> {
        teeth
            .iter()
            .map(|tooth| {
                let value = tooth_width(kind, landmarks, tooth, ToothSurface::Distal, ToothSurface::Mesial)?;
                Ok(ToothDiameter { tooth: *tooth, value })
            })
            .collect()
    }
}

fn required_distance(kind: AnalysisKind, landmarks: &LandmarkSet, a: &str, b: &str) -> Result<f64, AnalyticsError> {
    landmarks
        .distance(a, b, true)
        .map_err(AnalyticsError::for_kind(kind))?
        .ok_or_else(|| AnalyticsError::MissingRequiredLandmark {
            kind,
            label: a.to_string(),
        })
}

fn tooth_width(
    kind: AnalysisKind,
    landmarks: &LandmarkSet,
    tooth: &Tooth,
    from: ToothSurface,
    to: ToothSurface,
) -> Result<f64, AnalyticsError> {
    required_distance(kind, landmarks, &tooth.label(from), &tooth.label(to))
}

/// Sums the diameters of an arch, optionally restricted to canine-to-canine.
fn arch_sum(diameters: &[ToothDiameter], anterior_only: bool) -> f64 {
    diameters
        .iter()
        .filter(|d| !anterior_only || d.tooth.is_anterior())
        .map(|d| d.value)
        .sum()
}
