pub mod config;
pub mod detection;
pub mod estimate;
pub mod models;
pub mod pipeline;
pub mod recording;

pub use config::{ConfigError, VisionConfig};
pub use detection::contours::BoundingRect;
pub use detection::{FrameOutcome, TargetDetector};
pub use estimate::SharedEstimate;
pub use models::{BoundingPair, PairScore, Rect, ScoredPair, TargetEstimate};
pub use pipeline::{FrameContext, FrameReport, FrameStats, FrameWorker, WorkerError};
