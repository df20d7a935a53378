//! End-to-end smoke tests driving the same path as `main`.

use tempfile::tempdir;

use cumulus_cli::{Args, run};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn args_with(output: String, format: Option<&str>) -> Args {
    Args {
        output: Some(output),
        format: format.map(str::to_string),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_png() {
    let temp_dir = tempdir().expect("failed to create temp directory");
    let output = temp_dir.path().join("architecture.png");

    let rendered = run(&args_with(output.to_string_lossy().to_string(), None))
        .expect("the bundled declaration must render");

    assert_eq!(rendered.path(), output.as_path());

    let bytes = std::fs::read(&output).expect("output file must exist");
    assert!(bytes.starts_with(PNG_SIGNATURE), "output must be a PNG");
}

#[test]
fn e2e_renders_svg_with_clusters_and_styles() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("architecture.svg");

    run(&args_with(output.to_string_lossy().to_string(), Some("svg")))
        .expect("the bundled declaration must render as SVG");

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Course Seat Tracker"));
    assert!(svg.contains("API Functions"), "nested cluster label expected");
    assert!(svg.contains("stroke-dasharray"), "dashed/dotted edges expected");
    assert!(svg.contains("deliver email"), "edge labels expected");
}

#[test]
fn e2e_unsupported_format_fails_without_output() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("architecture.webp");

    let err = run(&args_with(output.to_string_lossy().to_string(), Some("webp")))
        .expect_err("unsupported formats must be rejected");

    assert!(err.to_string().contains("webp"));
    assert!(!output.exists(), "no output may be written on failure");
}

#[test]
fn e2e_repeated_runs_are_identical() {
    let temp_dir = tempdir().unwrap();
    let first_path = temp_dir.path().join("first.svg");
    let second_path = temp_dir.path().join("second.svg");

    run(&args_with(first_path.to_string_lossy().to_string(), Some("svg"))).unwrap();
    run(&args_with(second_path.to_string_lossy().to_string(), Some("svg"))).unwrap();

    let first = std::fs::read(&first_path).unwrap();
    let second = std::fs::read(&second_path).unwrap();
    assert_eq!(first, second, "repeated runs must produce identical output");
}
