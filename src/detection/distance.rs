use crate::config::VisionConfig;
use crate::models::{BoundingPair, TargetEstimate};

/// Distance to the target from its apparent height, using a pinhole model.
///
/// target height / pixel height equals view height / image height, which gives
/// the height of the whole view at the target's range. Half of that view and
/// half the vertical FOV form a right triangle whose adjacent side is the
/// distance. Returns `None` when the bounding box has no height.
pub fn distance_to_target(bounding: &BoundingPair, config: &VisionConfig) -> Option<f64> {
    let pixel_height = bounding.height();
    if pixel_height <= 0 {
        return None;
    }

    let view_height = config.target_height_in * config.image_height as f64 / pixel_height as f64;
    let half_fov = (config.camera_fov_vert_deg / 2.0).to_radians();
    let distance = 0.5 * view_height / half_fov.tan();

    distance.is_finite().then_some(distance)
}

/// Centre and distance for a winning pair's bounding box.
pub fn resolve(bounding: &BoundingPair, config: &VisionConfig) -> Option<TargetEstimate> {
    let distance = distance_to_target(bounding, config)?;
    Some(TargetEstimate {
        center_x: bounding.center_x(),
        distance,
    })
}
