//! Integration tests for configuration loading and validation.

mod common;

use std::io::Write;

use visiontarget::ConfigError;

use common::*;

#[test]
fn test_defaults_are_valid() {
    let config = VisionConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.image_width, 320);
    assert_eq!(config.image_height, 240);
    assert_eq!(config.target_height_in, 15.3);
    assert_eq!(config.camera_fov_vert_deg, 41.0);
    assert_eq!(config.score_threshold, 450.0);
    assert_eq!(config.min_sub_score, 0.0);
}

#[test]
fn test_load_partial_json() -> anyhow::Result<()> {
    // 1. Only override a few fields
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "image_width": 640, "image_height": 480, "score_threshold": 500 }}"#
    )?;

    // 2. Load
    let config = VisionConfig::from_json_file(file.path())?;

    // 3. The rest keeps its defaults
    assert_eq!(config.image_width, 640);
    assert_eq!(config.image_height, 480);
    assert_eq!(config.score_threshold, 500.0);
    assert_eq!(config.target_height_in, 15.3);
    assert_eq!(config.camera_fov_vert_deg, 41.0);

    Ok(())
}

#[test]
fn test_load_rejects_invalid_values() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "camera_fov_vert_deg": 0 }}"#)?;

    let result = VisionConfig::from_json_file(file.path());
    assert!(result.is_err());
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(
        error_msg.contains("field of view"),
        "Error should mention the field of view, got: {}",
        error_msg
    );

    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let result = VisionConfig::from_json_file(dir.path().join("missing.json"));
    assert!(result.is_err());
}

#[test]
fn test_validate_each_field() {
    let base = VisionConfig::default();

    let cases = [
        (
            VisionConfig {
                image_height: 0,
                ..base.clone()
            },
            ConfigError::EmptyImage {
                width: 320,
                height: 0,
            },
        ),
        (
            VisionConfig {
                target_height_in: -1.0,
                ..base.clone()
            },
            ConfigError::TargetHeight(-1.0),
        ),
        (
            VisionConfig {
                camera_fov_vert_deg: 180.0,
                ..base.clone()
            },
            ConfigError::FieldOfView(180.0),
        ),
        (
            VisionConfig {
                score_threshold: 601.0,
                ..base.clone()
            },
            ConfigError::Threshold(601.0),
        ),
        (
            VisionConfig {
                min_sub_score: 101.0,
                ..base.clone()
            },
            ConfigError::MinSubScore(101.0),
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
        assert!(TargetDetector::new(config).is_err());
    }
}

#[test]
fn test_nan_values_are_rejected() {
    let config = VisionConfig {
        camera_fov_vert_deg: f64::NAN,
        ..VisionConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))));

    let config = VisionConfig {
        score_threshold: f64::NAN,
        ..VisionConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Threshold(_))));
}

#[test]
fn test_horizontal_offset() {
    let config = VisionConfig::default();
    assert_eq!(config.horizontal_offset(160.0), 0.0);
    assert_eq!(config.horizontal_offset(0.0), -1.0);
    assert_eq!(config.horizontal_offset(320.0), 1.0);
    assert_eq!(config.horizontal_offset(240.0), 0.5);
}
