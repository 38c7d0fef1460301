use crate::report::{Measurement, ReportSections, Section};
use core_types::{Arch, Tooth};
use serde::{Deserialize, Serialize};

/// A mesiodistal tooth width measured between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothDiameter {
    pub tooth: Tooth,
    pub value: f64,
}

/// How the available arch space compares with what the teeth need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceBalance {
    Surplus,
    Deficit,
    Balanced,
}

/// Result of the space (model discrepancy) analysis of one arch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceReport {
    pub arch: Arch,
    /// Sum of the mesiodistal widths of premolars, canines and incisors.
    pub required_space: f64,
    /// Length of the arch-perimeter polyline.
    pub rated_space: f64,
    /// `rated_space - required_space`; positive is surplus, negative crowding.
    pub discrepancy: f64,
    pub diameters: Vec<ToothDiameter>,
    /// Third molars whose landmarks were both placed. Not part of the required space.
    pub third_molars: Vec<ToothDiameter>,
    /// Third molars skipped because a landmark was absent.
    pub unreported_third_molars: Vec<Tooth>,
}

impl SpaceReport {
    pub fn balance(&self) -> SpaceBalance {
        if self.discrepancy > 0.0 {
            SpaceBalance::Surplus
        } else if self.discrepancy < 0.0 {
            SpaceBalance::Deficit
        } else {
            SpaceBalance::Balanced
        }
    }
}

impl ReportSections for SpaceReport {
    fn title(&self) -> String {
        format!("{} Space Analysis", self.arch)
    }

    fn sections(&self) -> Vec<Section> {
        let narrative = match self.balance() {
            SpaceBalance::Surplus => "Positive discrepancy: there is an excess of space available.",
            SpaceBalance::Deficit => "Negative discrepancy: there is a space deficit.",
            SpaceBalance::Balanced => "No discrepancy: available space matches the required space.",
        };
        let spaces = Section::new(format!("{} Space Analysis", self.arch))
            .with_result(Measurement::mm(
                format!("{} arch discrepancy", self.arch),
                self.discrepancy,
            ))
            .with_result(Measurement::mm("Required Space", self.required_space))
            .with_result(Measurement::mm("Rated Space", self.rated_space))
            .with_note(narrative);

        let mut diameters = self
            .diameters
            .iter()
            .chain(self.third_molars.iter())
            .fold(Section::new(format!("{} Tooth Diameters", self.arch)), |section, d| {
                section.with_result(Measurement::mm(format!("Diameter Tooth {}", d.tooth), d.value))
            });
        for tooth in &self.unreported_third_molars {
            diameters = diameters.with_note(format!("Tooth {tooth}: not reported."));
        }

        vec![spaces, diameters]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(discrepancy: f64) -> SpaceReport {
        SpaceReport {
            arch: Arch::Inferior,
            required_space: 70.0,
            rated_space: 70.0 + discrepancy,
            discrepancy,
            diameters: vec![ToothDiameter { tooth: Tooth::fdi(35), value: 7.0 }],
            third_molars: vec![ToothDiameter { tooth: Tooth::fdi(38), value: 10.5 }],
            unreported_third_molars: vec![Tooth::fdi(48)],
        }
    }

    #[test]
    fn balance_follows_sign_of_discrepancy() {
        assert_eq!(report(2.0).balance(), SpaceBalance::Surplus);
        assert_eq!(report(-2.0).balance(), SpaceBalance::Deficit);
        assert_eq!(report(0.0).balance(), SpaceBalance::Balanced);
    }

    #[test]
    fn sections_list_spaces_then_diameters() {
        let sections = report(-1.5).sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Inferior Space Analysis");
        assert_eq!(sections[0].results[0].label, "Inferior arch discrepancy");
        assert_eq!(sections[0].results[0].value, -1.5);
        assert!(sections[0].notes[0].contains("deficit"));

        let labels: Vec<&str> = sections[1].results.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Diameter Tooth 35", "Diameter Tooth 38"]);
        assert_eq!(sections[1].notes, vec!["Tooth 48: not reported.".to_string()]);
    }
}
