use crate::enums::{Arch, ToothSurface};
use crate::error::CoreError;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A landmark position in the imaging host's patient coordinate system (mm).
///
/// Serialized as a plain `[x, y, z]` array, which is how markup exports and
/// hand-written landmark files express positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

/// A permanent tooth identified by its FDI two-digit number (11-48).
///
/// The first digit is the quadrant (1 upper right, 2 upper left, 3 lower left,
/// 4 lower right), the second the position from the midline (1 central
/// incisor .. 8 third molar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tooth(u8);

impl Tooth {
    /// Builds a tooth from a constant FDI number. Invalid numbers fail to compile
    /// when used in a const context.
    pub const fn fdi(number: u8) -> Self {
        assert!(Self::is_valid(number), "invalid FDI tooth number");
        Self(number)
    }

    const fn is_valid(number: u8) -> bool {
        let quadrant = number / 10;
        let position = number % 10;
        quadrant >= 1 && quadrant <= 4 && position >= 1 && position <= 8
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn quadrant(&self) -> u8 {
        self.0 / 10
    }

    /// Position from the midline, 1 (central incisor) to 8 (third molar).
    pub fn position(&self) -> u8 {
        self.0 % 10
    }

    pub fn arch(&self) -> Arch {
        match self.quadrant() {
            1 | 2 => Arch::Superior,
            _ => Arch::Inferior,
        }
    }

    /// Incisors and canines.
    pub fn is_anterior(&self) -> bool {
        self.position() <= 3
    }

    pub fn is_third_molar(&self) -> bool {
        self.position() == 8
    }

    /// The fixed landmark label for one surface point of this tooth,
    /// e.g. `"Distal point of Tooth 16"`.
    pub fn label(&self, surface: ToothSurface) -> String {
        format!("{} point of Tooth {}", surface.name(), self.0)
    }
}

impl TryFrom<u8> for Tooth {
    type Error = CoreError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if Self::is_valid(number) {
            Ok(Self(number))
        } else {
            Err(CoreError::InvalidInput(
                "tooth".to_string(),
                format!("{number} is not an FDI permanent tooth number"),
            ))
        }
    }
}

impl From<Tooth> for u8 {
    fn from(tooth: Tooth) -> Self {
        tooth.0
    }
}

impl fmt::Display for Tooth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named 3-D landmark positions supplied by the landmark provider.
///
/// Deserializes from a `{label: [x, y, z]}` object through `from_pairs`, so a
/// repeated key is an error rather than last-one-wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: BTreeMap<String, Point3>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(label, point)` pairs, rejecting repeated labels
    /// and non-finite coordinates.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, Point3)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (label, point) in pairs {
            let label = label.into();
            if !point.is_finite() {
                return Err(CoreError::InvalidInput(
                    label,
                    "coordinates must be finite numbers".to_string(),
                ));
            }
            if set.points.contains_key(&label) {
                return Err(CoreError::DuplicateLandmark(label));
            }
            set.points.insert(label, point);
        }
        Ok(set)
    }

    /// Inserts or replaces a landmark, returning the previous position.
    pub fn insert(&mut self, label: impl Into<String>, point: Point3) -> Option<Point3> {
        self.points.insert(label.into(), point)
    }

    pub fn get(&self, label: &str) -> Option<&Point3> {
        self.points.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.points.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    /// Looks up a landmark that must be present.
    pub fn require(&self, label: &str) -> Result<&Point3, CoreError> {
        self.points
            .get(label)
            .ok_or_else(|| CoreError::MissingRequiredLandmark(label.to_string()))
    }

    /// Euclidean distance between two named landmarks.
    ///
    /// When `required` is false a missing label yields `Ok(None)`; when it is
    /// true the first missing label is reported as `MissingRequiredLandmark`.
    pub fn distance(&self, a: &str, b: &str, required: bool) -> Result<Option<f64>, CoreError> {
        match (self.points.get(a), self.points.get(b)) {
            (Some(pa), Some(pb)) => Ok(Some(pa.distance_to(pb))),
            _ if !required => {
                tracing::debug!(a, b, "Optional landmark pair incomplete, skipping.");
                Ok(None)
            }
            (None, _) => Err(CoreError::MissingRequiredLandmark(a.to_string())),
            (_, None) => Err(CoreError::MissingRequiredLandmark(b.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for LandmarkSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelledPoints;

        impl<'de> Visitor<'de> for LabelledPoints {
            type Value = LandmarkSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping landmark labels to [x, y, z]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Point3>()? {
                    pairs.push(entry);
                }
                LandmarkSet::from_pairs(pairs).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(LabelledPoints)
    }
}
