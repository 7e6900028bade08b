mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from visiontarget for tests
pub use visiontarget::{
    BoundingPair, FrameOutcome, PairScore, Rect, SharedEstimate, TargetDetector, TargetEstimate,
    VisionConfig,
};
