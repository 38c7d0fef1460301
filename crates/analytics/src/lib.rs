//! # Orthometry Analytics Engine
//!
//! This crate performs the clinical arithmetic of dental model analysis over
//! named 3-D landmarks: arch-space discrepancy, Bolton tooth-size ratios and
//! the Peck & Peck lower-incisor index.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   the imaging host, or HTML. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalysisEngine` takes a `LandmarkSet` and
//!   produces typed reports. Every report can be flattened into the common
//!   `Report` shape that the `reporter` crate renders.
//!
//! ## Public API
//!
//! - `AnalysisEngine`: The main struct that contains the calculation logic.
//! - `SpaceReport`, `BoltonReport`, `PeckReport`, `CompositeReport`: typed results.
//! - `Report` / `ReportSections`: the presentation-neutral report.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod bolton;
pub mod engine;
pub mod error;
pub mod peck;
pub mod report;
pub mod space;

// Re-export the key components to create a clean, public-facing API.
pub use bolton::{BandingRow, BandingTable, BoltonPartition, BoltonReport, BoltonScope};
pub use engine::{AnalysisEngine, AnalysisOutcome, CompositeReport};
pub use error::AnalyticsError;
pub use peck::{IncisorIndex, NormalRange, PeckReport, RangeAssessment};
pub use report::{Measurement, Report, ReportSections, Section, Unit};
pub use space::{SpaceBalance, SpaceReport, ToothDiameter};
