use anyhow::{Context, Result};
use core_types::{LandmarkSet, Point3};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// The landmark file shapes accepted on the command line.
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    /// A markups document as exported by the imaging host.
    Markups { markups: Vec<Markup> },
    /// `[ { "label": ..., "position": [x, y, z] }, ... ]`
    List(Vec<ControlPoint>),
    /// `{ "<label>": [x, y, z], ... }`
    Flat(FlatPoints),
}

#[derive(Deserialize)]
struct Markup {
    #[serde(rename = "controlPoints", default)]
    control_points: Vec<ControlPoint>,
}

#[derive(Deserialize)]
struct ControlPoint {
    label: String,
    position: Point3,
}

/// A JSON object read entry by entry, so repeated keys survive until
/// `LandmarkSet::from_pairs` can reject them.
struct FlatPoints(Vec<(String, Point3)>);

impl<'de> Deserialize<'de> for FlatPoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlatVisitor;

        impl<'de> Visitor<'de> for FlatVisitor {
            type Value = FlatPoints;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping landmark labels to [x, y, z]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Point3>()? {
                    pairs.push(entry);
                }
                Ok(FlatPoints(pairs))
            }
        }

        deserializer.deserialize_map(FlatVisitor)
    }
}

/// Parses landmark JSON in any of the accepted shapes.
pub fn parse_landmarks(text: &str) -> Result<LandmarkSet> {
    let file: LandmarkFile = serde_json::from_str(text).context(
        "Landmark JSON must be a label->[x,y,z] object, a list of {label, position}, or a markups document",
    )?;

    let pairs: Vec<(String, Point3)> = match file {
        LandmarkFile::Markups { markups } => markups
            .into_iter()
            .flat_map(|m| m.control_points)
            .map(|cp| (cp.label, cp.position))
            .collect(),
        LandmarkFile::List(points) => points.into_iter().map(|cp| (cp.label, cp.position)).collect(),
        LandmarkFile::Flat(FlatPoints(pairs)) => pairs,
    };

    Ok(LandmarkSet::from_pairs(pairs)?)
}

/// Reads and parses a landmark file.
pub fn load_landmarks(path: &Path) -> Result<LandmarkSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read landmark file '{}'", path.display()))?;
    let landmarks = parse_landmarks(&text)
        .with_context(|| format!("Failed to load landmarks from '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), count = landmarks.len(), "Landmarks loaded.");
    Ok(landmarks)
}
