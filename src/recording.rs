//! Recorded frames for replay: a JSON array of frames, each an array of
//! contours, each an array of `[x, y]` points.

use anyhow::Context;
use imageproc::point::Point;
use std::path::Path;

/// One frame's contours as point lists.
pub type RecordedFrame = Vec<Vec<Point<i32>>>;

pub fn parse_frames(json: &str) -> anyhow::Result<Vec<RecordedFrame>> {
    let raw: Vec<Vec<Vec<[i32; 2]>>> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|frame| {
            frame
                .into_iter()
                .map(|contour| contour.into_iter().map(|[x, y]| Point::new(x, y)).collect())
                .collect()
        })
        .collect())
}

pub fn load_frames<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RecordedFrame>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read frames {}", path.display()))?;
    parse_frames(&text).with_context(|| format!("Failed to parse frames {}", path.display()))
}
