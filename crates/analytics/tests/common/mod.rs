#![allow(dead_code)]

use core_types::{LandmarkSet, Point3, Tooth, ToothSurface};

/// Mesiodistal landmarks (tooth, distal, mesial) of a full permanent dentition
/// placed on a parabolic arch form, first molar to first molar.
pub const BOLTON_POINTS: [(u8, [f64; 3], [f64; 3]); 24] = [
    (16, [-47.20, -17.82, 10.00], [-37.00, -10.95, 10.00]),
    (15, [-37.00, -10.95, 10.00], [-30.10, -7.25, 10.00]),
    (14, [-30.10, -7.25, 10.00], [-23.00, -4.23, 10.00]),
    (13, [-23.00, -4.23, 10.00], [-15.10, -1.82, 10.00]),
    (12, [-15.10, -1.82, 10.00], [-8.40, -0.56, 10.00]),
    (11, [-8.40, -0.56, 10.00], [0.30, 0.00, 10.00]),
    (21, [0.30, 0.00, 10.00], [8.90, -0.63, 10.00]),
    (22, [8.90, -0.63, 10.00], [15.50, -1.92, 10.00]),
    (23, [15.50, -1.92, 10.00], [23.30, -4.34, 10.00]),
    (24, [23.30, -4.34, 10.00], [30.30, -7.34, 10.00]),
    (25, [30.30, -7.34, 10.00], [37.10, -11.01, 10.00]),
    (26, [37.10, -11.01, 10.00], [47.20, -17.82, 10.00]),
    (36, [-44.00, -15.49, -10.00], [-32.90, -8.66, -10.00]),
    (35, [-32.90, -8.66, -10.00], [-25.70, -5.28, -10.00]),
    (34, [-25.70, -5.28, -10.00], [-18.60, -2.77, -10.00]),
    (33, [-18.60, -2.77, -10.00], [-11.70, -1.10, -10.00]),
    (32, [-11.70, -1.10, -10.00], [-5.70, -0.26, -10.00]),
    (31, [-5.70, -0.26, -10.00], [-0.30, 0.00, -10.00]),
    (41, [-0.30, 0.00, -10.00], [5.20, -0.22, -10.00]),
    (42, [5.20, -0.22, -10.00], [11.30, -1.02, -10.00]),
    (43, [11.30, -1.02, -10.00], [18.30, -2.68, -10.00]),
    (44, [18.30, -2.68, -10.00], [25.50, -5.20, -10.00]),
    (45, [25.50, -5.20, -10.00], [32.80, -8.61, -10.00]),
    (46, [32.80, -8.61, -10.00], [44.00, -15.49, -10.00]),
];

/// Arch-perimeter points, molar mesial face through the midline.
pub const SUPERIOR_SEGMENT_POINTS: [[f64; 3]; 7] = [
    [-37.00, -11.40, 10.00],
    [-23.00, -4.60, 10.00],
    [-15.10, -2.10, 10.00],
    [0.00, 0.40, 10.00],
    [15.50, -2.20, 10.00],
    [23.30, -4.70, 10.00],
    [37.10, -11.50, 10.00],
];

pub const INFERIOR_SEGMENT_POINTS: [[f64; 3]; 7] = [
    [-32.90, -9.10, -10.00],
    [-18.60, -3.10, -10.00],
    [-11.70, -1.40, -10.00],
    [0.00, 0.30, -10.00],
    [11.30, -1.30, -10.00],
    [18.30, -3.00, -10.00],
    [32.80, -9.00, -10.00],
];

/// Faciolingual landmarks (tooth, vestibular, lingual) of the lower incisors.
pub const PECK_POINTS: [(u8, [f64; 3], [f64; 3]); 4] = [
    (32, [-8.70, 1.50, -10.00], [-8.70, -4.85, -10.00]),
    (31, [-3.00, 1.20, -10.00], [-3.00, -4.80, -10.00]),
    (41, [2.45, 1.20, -10.00], [2.45, -4.85, -10.00]),
    (42, [8.25, 1.40, -10.00], [8.25, -5.10, -10.00]),
];

pub const SUPERIOR_THIRD_MOLAR_POINTS: [(u8, [f64; 3], [f64; 3]); 2] = [
    (18, [-62.10, -31.00, 10.00], [-57.40, -27.20, 10.00]),
    (28, [57.50, -27.10, 10.00], [62.00, -30.90, 10.00]),
];

fn insert_pairs(set: &mut LandmarkSet, pairs: &[(u8, [f64; 3], [f64; 3])], from: ToothSurface, to: ToothSurface) {
    for (number, a, b) in pairs {
        let tooth = Tooth::try_from(*number).expect("fixture tooth");
        set.insert(tooth.label(from), Point3::from(*a));
        set.insert(tooth.label(to), Point3::from(*b));
    }
}

pub fn bolton_landmarks() -> LandmarkSet {
    let mut set = LandmarkSet::new();
    insert_pairs(&mut set, &BOLTON_POINTS, ToothSurface::Distal, ToothSurface::Mesial);
    set
}

/// Every landmark of the composite analysis, including the upper third molars.
pub fn full_landmarks() -> LandmarkSet {
    let mut set = bolton_landmarks();
    insert_pairs(&mut set, &PECK_POINTS, ToothSurface::Vestibular, ToothSurface::Lingual);
    insert_pairs(
        &mut set,
        &SUPERIOR_THIRD_MOLAR_POINTS,
        ToothSurface::Distal,
        ToothSurface::Mesial,
    );
    for (label, point) in core_types::catalog::segment_labels(core_types::Arch::Superior)
        .iter()
        .zip(SUPERIOR_SEGMENT_POINTS)
    {
        set.insert(*label, Point3::from(point));
    }
    for (label, point) in core_types::catalog::segment_labels(core_types::Arch::Inferior)
        .iter()
        .zip(INFERIOR_SEGMENT_POINTS)
    {
        set.insert(*label, Point3::from(point));
    }
    set
}
