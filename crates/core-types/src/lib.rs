pub mod catalog;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use catalog::{LandmarkSpec, placement_sequence, required_labels, optional_labels};
pub use enums::{AnalysisKind, Arch, ToothSurface};
pub use error::CoreError;
pub use structs::{LandmarkSet, Point3, Tooth};
