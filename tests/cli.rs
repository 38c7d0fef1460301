use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use core_types::{LandmarkSet, Point3, Tooth, ToothSurface};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Lower incisors as (tooth, mesiodistal, faciolingual) widths in mm.
const INCISORS: [(u8, f64, f64); 4] = [(32, 8.0, 8.42), (31, 5.4, 6.0), (41, 5.4, 6.0), (42, 6.0, 6.5)];

fn peck_landmarks() -> LandmarkSet {
    let mut set = LandmarkSet::new();
    for (i, (number, md, fl)) in INCISORS.into_iter().enumerate() {
        let tooth = Tooth::try_from(number).unwrap();
        let x = i as f64 * 10.0;
        set.insert(tooth.label(ToothSurface::Distal), Point3::new(x, 0.0, 0.0));
        set.insert(tooth.label(ToothSurface::Mesial), Point3::new(x + md, 0.0, 0.0));
        set.insert(tooth.label(ToothSurface::Vestibular), Point3::new(x, 0.0, 0.0));
        set.insert(tooth.label(ToothSurface::Lingual), Point3::new(x, fl, 0.0));
    }
    set
}

fn write_landmarks(dir: &Path, set: &LandmarkSet) -> PathBuf {
    let path = dir.join("landmarks.json");
    fs::write(&path, serde_json::to_string(set).unwrap()).unwrap();
    path
}

/// A command isolated from any orthometry.toml or .env in the developer's tree.
fn orthometry(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("orthometry");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("ORTHOMETRY__LOGGING__LEVEL", "warn");
    cmd
}

#[test]
fn points_lists_the_placement_sequence() {
    let tmp = TempDir::new().unwrap();
    orthometry(tmp.path())
        .args(["points", "--kind", "superior-space"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Superior Space Analysis"))
        .stdout(predicate::str::contains("Distal point of Teeth segment 15-14"))
        .stdout(predicate::str::contains("Distal point of Tooth 18"))
        .stdout(predicate::str::contains("optional"));
}

#[test]
fn unknown_kind_is_rejected() {
    let tmp = TempDir::new().unwrap();
    orthometry(tmp.path())
        .args(["points", "--kind", "cephalometric"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid analysis kind"));
}

#[test]
fn check_passes_for_a_complete_set() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    orthometry(tmp.path())
        .args(["check", "--kind", "peck", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .success()
        .stdout(predicate::str::contains("All required landmarks"));
}

#[test]
fn check_lists_missing_landmarks_and_fails() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    orthometry(tmp.path())
        .args(["check", "--kind", "bolton", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Distal point of Tooth 16"))
        .stderr(predicate::str::contains("required landmark(s) missing for bolton analysis"));
}

#[test]
fn analyze_prints_a_summary_table() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    orthometry(tmp.path())
        .args(["analyze", "--kind", "peck-and-peck", "--format", "table", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .success()
        .stdout(predicate::str::contains("95.01%"))
        .stdout(predicate::str::contains("90.00%"))
        .stdout(predicate::str::contains("Faciolingual Tooth 32"));
}

#[test]
fn analyze_writes_html_to_the_requested_path() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    let output = tmp.path().join("out").join("peck.html");
    fs::write(tmp.path().join("model.png"), b"png").unwrap();
    orthometry(tmp.path())
        .args(["analyze", "--kind", "peck", "--screenshot", "model.png", "--landmarks"])
        .arg(&landmarks)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Orthodontic Analysis Report</h1>"));
    assert!(html.contains("<h2 class=\"analysis\">Peck &amp; Peck Analysis</h2>"));
    assert!(html.contains("<td>95.01%</td>"));
    // The screenshot link must resolve from the report's directory.
    let src = html.split("src=\"").nth(1).and_then(|rest| rest.split('"').next()).unwrap();
    assert!(Path::new(src).is_absolute());
    assert!(Path::new(src).exists(), "{src}");
}

#[test]
fn analyze_defaults_to_the_configured_output_dir() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    fs::write(
        tmp.path().join("orthometry.toml"),
        "[report]\ntitle = \"Clinic A\"\ndecimals = 1\noutput_dir = \"out\"\n",
    )
    .unwrap();

    orthometry(tmp.path())
        .args(["analyze", "--kind", "peck", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .success()
        .stdout(predicate::str::contains("95.0%"));

    let written: Vec<_> = fs::read_dir(tmp.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("peck-and-peck-"));
    assert!(written[0].ends_with(".html"));
    let html = fs::read_to_string(tmp.path().join("out").join(&written[0])).unwrap();
    assert!(html.contains("<h1>Clinic A</h1>"));
}

#[test]
fn analyze_emits_json_on_stdout() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    let out = orthometry(tmp.path())
        .args(["analyze", "--kind", "peck", "--format", "json", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["report"]["title"], "Peck & Peck Analysis");
    let index = value["report"]["sections"][0]["results"][0]["value"].as_f64().unwrap();
    assert!((index - 8.0 / 8.42 * 100.0).abs() < 1e-9);
}

#[test]
fn analyze_names_the_missing_landmark_and_kind() {
    let tmp = TempDir::new().unwrap();
    let landmarks = write_landmarks(tmp.path(), &peck_landmarks());
    orthometry(tmp.path())
        .args(["analyze", "--kind", "inferior-space", "--landmarks"])
        .arg(&landmarks)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required landmark"))
        .stderr(predicate::str::contains("inferior-space analysis"));
}

#[test]
fn duplicate_labels_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dup.json");
    fs::write(
        &path,
        r#"[{"label": "Superior Arch Midpoint", "position": [0, 0, 0]},
            {"label": "Superior Arch Midpoint", "position": [1, 0, 0]}]"#,
    )
    .unwrap();
    orthometry(tmp.path())
        .args(["check", "--kind", "superior-space", "--landmarks"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));
}
