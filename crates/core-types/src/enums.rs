use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two dental arches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    /// The upper (maxillary) arch.
    Superior,
    /// The lower (mandibular) arch.
    Inferior,
}

impl Arch {
    /// Returns the opposing arch.
    pub fn opposite(&self) -> Self {
        match self {
            Arch::Superior => Arch::Inferior,
            Arch::Inferior => Arch::Superior,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Arch::Superior => "Superior",
            Arch::Inferior => "Inferior",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies which analysis to run over a landmark set.
///
/// `All` is the composition of the four other kinds, run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    SuperiorSpace,
    InferiorSpace,
    Bolton,
    PeckAndPeck,
    All,
}

impl AnalysisKind {
    /// Every kind, in the order they are offered to the user.
    pub const VARIANTS: [AnalysisKind; 5] = [
        AnalysisKind::SuperiorSpace,
        AnalysisKind::InferiorSpace,
        AnalysisKind::Bolton,
        AnalysisKind::PeckAndPeck,
        AnalysisKind::All,
    ];

    /// The single analyses this kind is made of. For everything but `All`
    /// this is the kind itself.
    pub fn components(&self) -> Vec<AnalysisKind> {
        match self {
            AnalysisKind::All => vec![
                AnalysisKind::SuperiorSpace,
                AnalysisKind::InferiorSpace,
                AnalysisKind::Bolton,
                AnalysisKind::PeckAndPeck,
            ],
            other => vec![*other],
        }
    }

    /// The machine-friendly identifier accepted by `FromStr`.
    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisKind::SuperiorSpace => "superior-space",
            AnalysisKind::InferiorSpace => "inferior-space",
            AnalysisKind::Bolton => "bolton",
            AnalysisKind::PeckAndPeck => "peck-and-peck",
            AnalysisKind::All => "all",
        }
    }

    /// The heading used for this analysis in reports.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::SuperiorSpace => "Superior Space Analysis",
            AnalysisKind::InferiorSpace => "Inferior Space Analysis",
            AnalysisKind::Bolton => "Bolton Analysis",
            AnalysisKind::PeckAndPeck => "Peck & Peck Analysis",
            AnalysisKind::All => "All Analysis",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AnalysisKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "superior-space" | "superior" => Ok(AnalysisKind::SuperiorSpace),
            "inferior-space" | "inferior" => Ok(AnalysisKind::InferiorSpace),
            "bolton" => Ok(AnalysisKind::Bolton),
            "peck-and-peck" | "peck-peck" | "peck" => Ok(AnalysisKind::PeckAndPeck),
            "all" => Ok(AnalysisKind::All),
            _ => Err(CoreError::InvalidAnalysisKind(s.to_string())),
        }
    }
}

/// The anatomical point of a tooth a landmark marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToothSurface {
    Distal,
    Mesial,
    /// Facial (buccal/labial) side.
    Vestibular,
    Lingual,
}

impl ToothSurface {
    pub fn name(&self) -> &'static str {
        match self {
            ToothSurface::Distal => "Distal",
            ToothSurface::Mesial => "Mesial",
            ToothSurface::Vestibular => "Vestibular",
            ToothSurface::Lingual => "Lingual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_aliases_case_insensitively() {
        assert_eq!("Bolton".parse::<AnalysisKind>().unwrap(), AnalysisKind::Bolton);
        assert_eq!(
            "SUPERIOR_SPACE".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::SuperiorSpace
        );
        assert_eq!(
            "peck and peck".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::PeckAndPeck
        );
        assert_eq!(" all ".parse::<AnalysisKind>().unwrap(), AnalysisKind::All);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "cephalometric".parse::<AnalysisKind>().unwrap_err();
        assert_eq!(err, CoreError::InvalidAnalysisKind("cephalometric".to_string()));
    }

    #[test]
    fn slug_round_trips_through_from_str() {
        for kind in AnalysisKind::VARIANTS {
            assert_eq!(kind.slug().parse::<AnalysisKind>().unwrap(), kind);
        }
    }

    #[test]
    fn all_is_composed_of_the_four_single_analyses() {
        let parts = AnalysisKind::All.components();
        assert_eq!(
            parts,
            vec![
                AnalysisKind::SuperiorSpace,
                AnalysisKind::InferiorSpace,
                AnalysisKind::Bolton,
                AnalysisKind::PeckAndPeck,
            ]
        );
        assert_eq!(AnalysisKind::Bolton.components(), vec![AnalysisKind::Bolton]);
    }

    #[test]
    fn arch_opposite() {
        assert_eq!(Arch::Superior.opposite(), Arch::Inferior);
        assert_eq!(Arch::Inferior.opposite(), Arch::Superior);
    }
}
