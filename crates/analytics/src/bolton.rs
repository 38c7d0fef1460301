//! Bolton tooth-size ratio analysis.
//!
//! Bolton compares the summed mesiodistal widths of the lower teeth with
//! those of the upper teeth against a population-derived ideal ratio. The
//! arch that is too large relative to the ideal carries the excess tooth
//! material.

use crate::error::AnalyticsError;
use crate::report::{Measurement, ReportSections, Section};
use crate::space::ToothDiameter;
use core_types::Arch;
use serde::{Deserialize, Serialize};

/// Which group of teeth a Bolton ratio is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltonScope {
    /// First molar to first molar, 12 teeth per arch.
    Total,
    /// Canine to canine, 6 teeth per arch.
    Anterior,
}

impl BoltonScope {
    pub fn teeth_per_arch(&self) -> usize {
        match self {
            BoltonScope::Total => 12,
            BoltonScope::Anterior => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoltonScope::Total => "Total Bolton Analysis",
            BoltonScope::Anterior => "Anterior Bolton Analysis",
        }
    }

    pub fn table(&self) -> &'static BandingTable {
        match self {
            BoltonScope::Total => &BandingTable::TOTAL,
            BoltonScope::Anterior => &BandingTable::ANTERIOR,
        }
    }
}

/// One calibration pair of a Bolton reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandingRow {
    pub upper: f64,
    pub lower: f64,
}

/// Published Bolton reference data: ideal lower-arch sums for a range of
/// upper-arch sums, plus the reference ratio the decision is made against.
///
/// A row matches a measured sum when it falls in `[row - window, row + window)`.
#[derive(Debug)]
pub struct BandingTable {
    pub reference_percent: f64,
    pub upper_window: f64,
    pub lower_window: f64,
    rows: &'static [(f64, f64)],
}

impl BandingTable {
    pub const TOTAL: BandingTable = BandingTable {
        reference_percent: 91.3,
        upper_window: 0.5,
        lower_window: 0.5,
        rows: &[
            (85.0, 77.6),
            (86.0, 78.5),
            (87.0, 79.4),
            (88.0, 80.3),
            (89.0, 81.3),
            (90.0, 82.1),
            (91.0, 83.1),
            (92.0, 84.0),
            (93.0, 84.9),
            (94.0, 85.8),
            (95.0, 86.7),
            (96.0, 87.6),
            (97.0, 88.6),
            (98.0, 89.5),
            (99.0, 90.4),
            (100.0, 91.3),
            (101.0, 92.2),
            (102.0, 93.1),
            (103.0, 94.0),
            (104.0, 95.0),
            (105.0, 95.9),
            (106.0, 96.8),
            (107.0, 97.8),
            (108.0, 98.6),
            (109.0, 99.5),
            (110.0, 100.4),
        ],
    };

    pub const ANTERIOR: BandingTable = BandingTable {
        reference_percent: 77.2,
        upper_window: 0.25,
        lower_window: 0.2,
        rows: &[
            (40.0, 30.9),
            (40.5, 31.3),
            (41.0, 31.7),
            (41.5, 32.0),
            (42.0, 32.4),
            (42.5, 32.8),
            (43.0, 33.2),
            (43.5, 33.6),
            (44.0, 34.0),
            (44.5, 34.4),
            (45.0, 34.7),
            (45.5, 35.1),
            (46.0, 35.5),
            (46.5, 35.9),
            (47.0, 36.3),
            (47.5, 36.7),
            (48.0, 37.1),
            (48.5, 37.4),
            (49.0, 37.8),
            (49.5, 38.2),
            (50.0, 38.6),
            (50.5, 39.0),
            (51.0, 39.4),
            (51.5, 39.8),
            (52.0, 40.1),
            (52.5, 40.5),
            (53.0, 40.9),
            (53.5, 41.3),
            (54.0, 41.7),
            (54.5, 42.1),
            (55.0, 42.5),
        ],
    };

    pub fn rows(&self) -> impl Iterator<Item = BandingRow> + '_ {
        self.rows.iter().map(|&(upper, lower)| BandingRow { upper, lower })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the row whose `anchor`-arch column matches the measured sum.
    pub fn lookup(&self, anchor: Arch, measured: f64) -> Option<BandingRow> {
        let window = match anchor {
            Arch::Superior => self.upper_window,
            Arch::Inferior => self.lower_window,
        };
        self.rows().find(|row| {
            let key = match anchor {
                Arch::Superior => row.upper,
                Arch::Inferior => row.lower,
            };
            key - window <= measured && measured < key + window
        })
    }
}

/// The outcome of one Bolton ratio (total or anterior).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltonPartition {
    pub scope: BoltonScope,
    pub upper_sum: f64,
    pub lower_sum: f64,
    /// `lower_sum / upper_sum * 100`.
    pub ratio: f64,
    pub reference_percent: f64,
    /// The arch carrying the excess tooth material.
    pub excess_arch: Arch,
    /// Millimetres of excess on `excess_arch`; never negative.
    pub excess: f64,
    pub ideal_upper: f64,
    pub ideal_lower: f64,
    /// The nearest row of the published table, if the anchoring sum is in range.
    pub reference_row: Option<BandingRow>,
}

impl BoltonPartition {
    /// Applies the Bolton decision to measured arch sums.
    ///
    /// A ratio above the reference means the lower arch is too large: the
    /// upper sum anchors and the lower arch carries the excess. Otherwise the
    /// lower sum anchors and the upper arch carries it.
    pub fn evaluate(scope: BoltonScope, upper_sum: f64, lower_sum: f64) -> Result<Self, AnalyticsError> {
        if upper_sum <= 0.0 {
            return Err(AnalyticsError::DegenerateMeasurement(format!(
                "{} superior arch sum",
                scope.title().to_lowercase()
            )));
        }

        let table = scope.table();
        let reference = table.reference_percent / 100.0;
        let ratio = lower_sum / upper_sum * 100.0;

        let (excess_arch, excess, ideal_upper, ideal_lower) = if ratio > table.reference_percent {
            let ideal_lower = upper_sum * reference;
            (Arch::Inferior, lower_sum - ideal_lower, upper_sum, ideal_lower)
        } else {
            let ideal_upper = lower_sum / reference;
            (Arch::Superior, upper_sum - ideal_upper, ideal_upper, lower_sum)
        };

        let anchor = excess_arch.opposite();
        let anchor_sum = match anchor {
            Arch::Superior => upper_sum,
            Arch::Inferior => lower_sum,
        };
        let reference_row = table.lookup(anchor, anchor_sum);

        tracing::debug!(
            scope = ?scope,
            ratio,
            excess_arch = %excess_arch,
            excess,
            "Bolton partition evaluated."
        );

        Ok(Self {
            scope,
            upper_sum,
            lower_sum,
            ratio,
            reference_percent: table.reference_percent,
            excess_arch,
            excess,
            ideal_upper,
            ideal_lower,
            reference_row,
        })
    }

    fn section(&self) -> Section {
        let excess_label = format!("Excess on {} arch", self.excess_arch.name().to_lowercase());
        let mut section = Section::new(format!(
            "{} ({} teeth)",
            self.scope.title(),
            self.scope.teeth_per_arch()
        ))
        .with_result(Measurement::percent("Bolton ratio", self.ratio))
        .with_result(Measurement::mm("Superior arch sum", self.upper_sum))
        .with_result(Measurement::mm("Inferior arch sum", self.lower_sum))
        .with_result(Measurement::mm(excess_label, self.excess))
        .with_result(Measurement::mm("Ideal superior arch diameter", self.ideal_upper))
        .with_result(Measurement::mm("Ideal inferior arch diameter", self.ideal_lower))
        .with_note(format!(
            "Reference ratio {}%: excess tooth material on the {} arch.",
            self.reference_percent,
            self.excess_arch.name().to_lowercase()
        ));

        section = match self.reference_row {
            Some(row) => section.with_note(format!(
                "Reference table row: superior {} mm / inferior {} mm.",
                row.upper, row.lower
            )),
            None => section.with_note("Measured sum is outside the reference table range."),
        };
        section
    }
}

/// Result of the Bolton analysis over both arches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltonReport {
    pub superior_diameters: Vec<ToothDiameter>,
    pub inferior_diameters: Vec<ToothDiameter>,
    pub total: BoltonPartition,
    pub anterior: BoltonPartition,
}

impl ReportSections for BoltonReport {
    fn title(&self) -> String {
        "Bolton Analysis".to_string()
    }

    fn sections(&self) -> Vec<Section> {
        let diameters = self
            .superior_diameters
            .iter()
            .chain(self.inferior_diameters.iter())
            .fold(Section::new("Bolton Tooth Diameters"), |section, d| {
                section.with_result(Measurement::mm(format!("Diameter Tooth {}", d.tooth), d.value))
            });
        vec![self.total.section(), self.anterior.section(), diameters]
    }
}
