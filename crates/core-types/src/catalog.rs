//! The fixed landmark vocabulary of every analysis.
//!
//! Labels are the contract with the landmark provider: the placement
//! sequence returned here is the order an upstream tool asks the user to
//! place points in, and the names are the keys the analyses look up.

use crate::enums::{AnalysisKind, Arch, ToothSurface};
use crate::structs::Tooth;

/// Teeth measured for the space analysis of the upper arch, right to left.
pub const SUPERIOR_SPACE_TEETH: [Tooth; 10] = [
    Tooth::fdi(15),
    Tooth::fdi(14),
    Tooth::fdi(13),
    Tooth::fdi(12),
    Tooth::fdi(11),
    Tooth::fdi(21),
    Tooth::fdi(22),
    Tooth::fdi(23),
    Tooth::fdi(24),
    Tooth::fdi(25),
];

/// Teeth measured for the space analysis of the lower arch, left to right.
pub const INFERIOR_SPACE_TEETH: [Tooth; 10] = [
    Tooth::fdi(35),
    Tooth::fdi(34),
    Tooth::fdi(33),
    Tooth::fdi(32),
    Tooth::fdi(31),
    Tooth::fdi(41),
    Tooth::fdi(42),
    Tooth::fdi(43),
    Tooth::fdi(44),
    Tooth::fdi(45),
];

pub const SUPERIOR_THIRD_MOLARS: [Tooth; 2] = [Tooth::fdi(18), Tooth::fdi(28)];
pub const INFERIOR_THIRD_MOLARS: [Tooth; 2] = [Tooth::fdi(38), Tooth::fdi(48)];

/// First molar to first molar, upper arch.
pub const BOLTON_SUPERIOR_TEETH: [Tooth; 12] = [
    Tooth::fdi(16),
    Tooth::fdi(15),
    Tooth::fdi(14),
    Tooth::fdi(13),
    Tooth::fdi(12),
    Tooth::fdi(11),
    Tooth::fdi(21),
    Tooth::fdi(22),
    Tooth::fdi(23),
    Tooth::fdi(24),
    Tooth::fdi(25),
    Tooth::fdi(26),
];

/// First molar to first molar, lower arch.
pub const BOLTON_INFERIOR_TEETH: [Tooth; 12] = [
    Tooth::fdi(36),
    Tooth::fdi(35),
    Tooth::fdi(34),
    Tooth::fdi(33),
    Tooth::fdi(32),
    Tooth::fdi(31),
    Tooth::fdi(41),
    Tooth::fdi(42),
    Tooth::fdi(43),
    Tooth::fdi(44),
    Tooth::fdi(45),
    Tooth::fdi(46),
];

/// Lower incisors evaluated by the Peck & Peck index.
pub const PECK_TEETH: [Tooth; 4] = [Tooth::fdi(32), Tooth::fdi(31), Tooth::fdi(41), Tooth::fdi(42)];

const SUPERIOR_SEGMENT: [&str; 7] = [
    "Distal point of Teeth segment 15-14",
    "Mesial point of Teeth segment 15-14 and Distal of Tooth 13",
    "Mesial point of Tooth segment 13",
    "Superior Arch Midpoint",
    "Mesial point of Tooth segment 23",
    "Mesial point of Teeth segment 25-24 and Distal of Tooth 23",
    "Distal point of Teeth segment 25-24",
];

const INFERIOR_SEGMENT: [&str; 7] = [
    "Distal point of Teeth segment 35-34",
    "Mesial point of Teeth segment 35-34 and Distal of Tooth 33",
    "Mesial point of Tooth segment 33",
    "Inferior Arch Midpoint",
    "Mesial point of Tooth segment 43",
    "Mesial point of Teeth segment 45-44 and Distal of Tooth 43",
    "Distal point of Teeth segment 45-44",
];

/// The ten teeth whose widths make up an arch's required space.
pub fn space_teeth(arch: Arch) -> &'static [Tooth; 10] {
    match arch {
        Arch::Superior => &SUPERIOR_SPACE_TEETH,
        Arch::Inferior => &INFERIOR_SPACE_TEETH,
    }
}

pub fn third_molars(arch: Arch) -> &'static [Tooth; 2] {
    match arch {
        Arch::Superior => &SUPERIOR_THIRD_MOLARS,
        Arch::Inferior => &INFERIOR_THIRD_MOLARS,
    }
}

pub fn bolton_teeth(arch: Arch) -> &'static [Tooth; 12] {
    match arch {
        Arch::Superior => &BOLTON_SUPERIOR_TEETH,
        Arch::Inferior => &BOLTON_INFERIOR_TEETH,
    }
}

/// The arch-perimeter polyline, molar region to midline to the mirrored molar
/// region. Consecutive points form the measured segments.
pub fn segment_labels(arch: Arch) -> &'static [&'static str; 7] {
    match arch {
        Arch::Superior => &SUPERIOR_SEGMENT,
        Arch::Inferior => &INFERIOR_SEGMENT,
    }
}

/// A landmark the user is asked to place, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSpec {
    pub label: String,
    pub required: bool,
}

impl LandmarkSpec {
    fn required(label: impl Into<String>) -> Self {
        Self { label: label.into(), required: true }
    }

    fn optional(label: impl Into<String>) -> Self {
        Self { label: label.into(), required: false }
    }
}

fn mesiodistal_pair(tooth: &Tooth) -> [String; 2] {
    [tooth.label(ToothSurface::Distal), tooth.label(ToothSurface::Mesial)]
}

fn faciolingual_pair(tooth: &Tooth) -> [String; 2] {
    [tooth.label(ToothSurface::Vestibular), tooth.label(ToothSurface::Lingual)]
}

fn space_sequence(arch: Arch) -> Vec<LandmarkSpec> {
    let mut seq: Vec<LandmarkSpec> = space_teeth(arch)
        .iter()
        .flat_map(mesiodistal_pair)
        .map(LandmarkSpec::required)
        .collect();
    seq.extend(segment_labels(arch).iter().map(|l| LandmarkSpec::required(*l)));
    seq.extend(
        third_molars(arch)
            .iter()
            .flat_map(mesiodistal_pair)
            .map(LandmarkSpec::optional),
    );
    seq
}

fn bolton_sequence() -> Vec<LandmarkSpec> {
    BOLTON_SUPERIOR_TEETH
        .iter()
        .chain(BOLTON_INFERIOR_TEETH.iter())
        .flat_map(mesiodistal_pair)
        .map(LandmarkSpec::required)
        .collect()
}

fn peck_sequence() -> Vec<LandmarkSpec> {
    PECK_TEETH
        .iter()
        .flat_map(|t| {
            let [d, m] = mesiodistal_pair(t);
            let [v, l] = faciolingual_pair(t);
            [d, m, v, l]
        })
        .map(LandmarkSpec::required)
        .collect()
}

/// Every landmark an analysis uses, in placement order.
///
/// For `All` this is the de-duplicated union of the four single analyses;
/// a label shared by several analyses appears once, at its first position.
/// Required labels come before optional ones.
pub fn placement_sequence(kind: AnalysisKind) -> Vec<LandmarkSpec> {
    let seq = match kind {
        AnalysisKind::SuperiorSpace => space_sequence(Arch::Superior),
        AnalysisKind::InferiorSpace => space_sequence(Arch::Inferior),
        AnalysisKind::Bolton => bolton_sequence(),
        AnalysisKind::PeckAndPeck => peck_sequence(),
        AnalysisKind::All => {
            let mut merged: Vec<LandmarkSpec> = Vec::new();
            for part in kind.components() {
                for spec in placement_sequence(part) {
                    if !merged.iter().any(|s| s.label == spec.label) {
                        merged.push(spec);
                    }
                }
            }
            merged
        }
    };
    let (required, optional): (Vec<_>, Vec<_>) = seq.into_iter().partition(|s| s.required);
    required.into_iter().chain(optional).collect()
}

/// Labels that must be present for the analysis to run.
pub fn required_labels(kind: AnalysisKind) -> Vec<String> {
    placement_sequence(kind)
        .into_iter()
        .filter(|s| s.required)
        .map(|s| s.label)
        .collect()
}

/// Labels that are reported when present and skipped otherwise.
pub fn optional_labels(kind: AnalysisKind) -> Vec<String> {
    placement_sequence(kind)
        .into_iter()
        .filter(|s| !s.required)
        .map(|s| s.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_sequence_counts() {
        for kind in [AnalysisKind::SuperiorSpace, AnalysisKind::InferiorSpace] {
            assert_eq!(required_labels(kind).len(), 27);
            assert_eq!(optional_labels(kind).len(), 4);
        }
        let seq = placement_sequence(AnalysisKind::SuperiorSpace);
        assert_eq!(seq[0].label, "Distal point of Tooth 15");
        assert_eq!(seq[1].label, "Mesial point of Tooth 15");
        assert_eq!(seq[20].label, "Distal point of Teeth segment 15-14");
        assert_eq!(seq[23].label, "Superior Arch Midpoint");
        assert_eq!(seq[27].label, "Distal point of Tooth 18");
        assert!(!seq[27].required);
    }

    #[test]
    fn bolton_and_peck_counts() {
        assert_eq!(required_labels(AnalysisKind::Bolton).len(), 48);
        assert!(optional_labels(AnalysisKind::Bolton).is_empty());
        let peck = required_labels(AnalysisKind::PeckAndPeck);
        assert_eq!(peck.len(), 16);
        assert_eq!(peck[2], "Vestibular point of Tooth 32");
        assert_eq!(peck[3], "Lingual point of Tooth 32");
    }

    #[test]
    fn all_sequence_is_the_deduplicated_union() {
        let required = required_labels(AnalysisKind::All);
        // 48 tooth points, 14 segment points, 8 faciolingual points.
        assert_eq!(required.len(), 70);
        let mut unique = required.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), required.len());
        assert_eq!(optional_labels(AnalysisKind::All).len(), 8);
        for part in AnalysisKind::All.components() {
            for label in required_labels(part) {
                assert!(required.contains(&label), "{label} missing from All");
            }
        }
    }

    #[test]
    fn anterior_subset_is_canine_to_canine() {
        let anterior: Vec<u8> = BOLTON_SUPERIOR_TEETH
            .iter()
            .filter(|t| t.is_anterior())
            .map(|t| t.number())
            .collect();
        assert_eq!(anterior, vec![13, 12, 11, 21, 22, 23]);
    }
}
