//! Integration tests for loading recorded frames.

mod common;

use std::io::Write;

use visiontarget::recording::{load_frames, parse_frames};

use common::*;

#[test]
fn test_parse_frames() -> anyhow::Result<()> {
    let json = r#"[
        [
            [[10, 10], [29, 10], [29, 89], [10, 89]],
            [[70, 10], [89, 10], [89, 89], [70, 89]]
        ],
        [],
        [[[5, 5]]]
    ]"#;

    let frames = parse_frames(json)?;

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].len(), 2);
    assert!(frames[1].is_empty());
    assert_eq!(frames[2][0][0].x, 5);

    let detector = TargetDetector::default();
    let estimate = detector.detect(&frames[0]).estimate().expect("target");
    assert_eq!(estimate.center_x, 50.0);
    assert_eq!(
        detector.detect(&frames[1]),
        FrameOutcome::InsufficientCandidates { candidates: 0 }
    );

    Ok(())
}

#[test]
fn test_parse_frames_rejects_bad_points() {
    assert!(parse_frames("[[[[1, 2, 3]]]]").is_err());
    assert!(parse_frames("{}").is_err());
}

#[test]
fn test_load_frames_from_file() -> anyhow::Result<()> {
    // 1. Write a recording with a single target frame
    let (rect1, rect2) = ideal_pair();
    let frame: Vec<Vec<[i32; 2]>> = [rect1, rect2]
        .iter()
        .map(|r| rect_points(r).iter().map(|p| [p.x, p.y]).collect())
        .collect();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_json::to_string(&vec![frame])?.as_bytes())?;

    // 2. Load it back
    let frames = load_frames(file.path())?;

    // 3. The detector finds the target
    assert_eq!(frames.len(), 1);
    assert!(TargetDetector::default().detect(&frames[0]).is_published());

    Ok(())
}

#[test]
fn test_load_frames_missing_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let result = load_frames(dir.path().join("nope.json"));
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(error_msg.contains("Failed to read frames"), "got: {}", error_msg);
}
