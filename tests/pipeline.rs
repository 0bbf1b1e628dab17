//! Loading pipeline documents from disk.

use std::io::Write;

use shape_variants::basics::PointD;
use shape_variants::extent::Extent;
use shape_variants::frame::RenderFrame;
use shape_variants::pipeline::load_file;
use shape_variants::variant::VariantKind;
use shape_variants::VariantError;
use tempfile::NamedTempFile;

const EPS: f64 = 1e-9;

fn write_doc(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_document_from_file() {
    let file = write_doc(
        r#"{
            "points": [[0, 0], [5, 0], [5, 5], [0, 5]],
            "rotation": {"angle": 90},
            "scale": {"value": [2, 1]},
            "translation": {"value": [3, -1]},
            "reflection": {"axis": "v"},
            "comment": "unknown keys are skipped"
        }"#,
    );
    let loaded = load_file(file.path()).unwrap();
    let reg = &loaded.registry;
    assert_eq!(
        reg.kinds(),
        vec![
            VariantKind::Original,
            VariantKind::Rotation,
            VariantKind::Scale,
            VariantKind::Translation,
        ]
    );
    assert!(!reg.contains(VariantKind::Reflection));

    // Row-vector rotation by 90° sends (5, 0) to (0, -5).
    let rotated = reg.get(VariantKind::Rotation).unwrap();
    assert!(rotated.points.points()[1].approx_eq(&PointD::new(0.0, -5.0), EPS));

    let translated = reg.get(VariantKind::Translation).unwrap();
    assert_eq!(translated.points.points()[2], PointD::new(8.0, 4.0));

    // Scale x reaches 10.
    assert!((loaded.max_abs - 10.0).abs() < EPS);
    assert_eq!(loaded.extent(), Extent::MaxAbs { value: loaded.max_abs });
}

#[test]
fn empty_blocks_use_defaults() {
    let file = write_doc(r#"{"points": [[1, 2]], "rotation": {}, "scale": {}}"#);
    let loaded = load_file(file.path()).unwrap();
    let rotated = loaded.registry.get(VariantKind::Rotation).unwrap();
    assert!(rotated.points.points()[0].approx_eq(&PointD::new(2.0, -1.0), EPS));
    let scaled = loaded.registry.get(VariantKind::Scale).unwrap();
    assert_eq!(scaled.points.points()[0], PointD::new(1.0, 2.0));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VariantError::Io(_)));
}

#[test]
fn broken_json_is_json_error() {
    let file = write_doc(r#"{"points": [[0, 0]"#);
    assert!(matches!(
        load_file(file.path()),
        Err(VariantError::Json(_))
    ));
}

#[test]
fn bad_points_are_rejected() {
    let file = write_doc(r#"{"points": [[0, 0], [1]]}"#);
    assert!(matches!(
        load_file(file.path()),
        Err(VariantError::Parse(_))
    ));

    let file = write_doc(r#"{"rotation": {"angle": 45}}"#);
    assert!(matches!(
        load_file(file.path()),
        Err(VariantError::EmptyInput)
    ));
}

#[test]
fn frame_json_round_trips_through_serde_value() {
    let file = write_doc(r#"{"points": [[0, 0], [2, 0], [2, 2]], "scale": {"value": [-3, 1]}}"#);
    let loaded = load_file(file.path()).unwrap();
    let frame = RenderFrame::from_pipeline(&loaded).unwrap();
    let value: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
    assert_eq!(value["variants"].as_array().unwrap().len(), 2);
    assert_eq!(value["variants"][1]["name"], "scale");
    assert_eq!(value["variants"][1]["color"], "#33FF57");
    assert_eq!(value["variants"][1]["points"].as_array().unwrap().len(), 4);
    assert_eq!(value["extent"]["value"], 6.0);
}
