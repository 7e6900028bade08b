use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highest combined score a pair can reach (six criteria of 100 each).
pub const MAX_SCORE: f64 = 600.0;

/// Errors returned when a configuration cannot be used.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("target height must be a positive number of inches (got {0})")]
    TargetHeight(f64),
    #[error("vertical field of view must lie in (0, 180) degrees (got {0})")]
    FieldOfView(f64),
    #[error("score threshold must lie in [0, 600] (got {0})")]
    Threshold(f64),
    #[error("minimum sub-score must lie in [0, 100] (got {0})")]
    MinSubScore(f64),
}

/// Deployment constants for the camera and the physical target.
///
/// Fixed once a detector is built; defaults describe a 320x240 Microsoft
/// Lifecam looking at the 15.3 inch tall two-strip target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Physical height of the target in inches.
    pub target_height_in: f64,
    /// Camera vertical field of view in degrees.
    pub camera_fov_vert_deg: f64,
    /// Acceptance threshold on the 0-600 scale.
    pub score_threshold: f64,
    /// Reject pairs with any single sub-score below this floor. Zero disables the check.
    pub min_sub_score: f64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            image_width: 320,
            image_height: 240,
            target_height_in: 15.3,
            camera_fov_vert_deg: 41.0,
            // "Average" score of 75 per criterion
            score_threshold: 75.0 * 6.0,
            min_sub_score: 0.0,
        }
    }
}

impl VisionConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if !(self.target_height_in.is_finite() && self.target_height_in > 0.0) {
            return Err(ConfigError::TargetHeight(self.target_height_in));
        }
        if !(self.camera_fov_vert_deg > 0.0 && self.camera_fov_vert_deg < 180.0) {
            return Err(ConfigError::FieldOfView(self.camera_fov_vert_deg));
        }
        if !(0.0..=MAX_SCORE).contains(&self.score_threshold) {
            return Err(ConfigError::Threshold(self.score_threshold));
        }
        if !(0.0..=100.0).contains(&self.min_sub_score) {
            return Err(ConfigError::MinSubScore(self.min_sub_score));
        }
        Ok(())
    }

    /// Normalised horizontal offset of `center_x` from the image centre,
    /// -1 at the left edge and +1 at the right edge.
    pub fn horizontal_offset(&self, center_x: f64) -> f64 {
        let half = self.image_width as f64 / 2.0;
        (center_x - half) / half
    }
}
