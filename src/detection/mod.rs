pub mod contours;
pub mod distance;
pub mod pairs;
pub mod scoring;

use crate::config::{ConfigError, VisionConfig};
use crate::estimate::SharedEstimate;
use crate::models::{Rect, TargetEstimate};
use contours::BoundingRect;
use scoring::{Selection, SelectionPolicy};

/// What one frame produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// A pair cleared the threshold and its estimate was published.
    Published(TargetEstimate),
    /// Fewer than two usable contours.
    InsufficientCandidates { candidates: usize },
    /// Pairs were scored but none was accepted.
    NoQualifyingPair { best_score: f64 },
    /// The winning pair's bounding box has no height.
    DegenerateGeometry,
}

impl FrameOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, FrameOutcome::Published(_))
    }

    pub fn estimate(&self) -> Option<TargetEstimate> {
        match self {
            FrameOutcome::Published(target) => Some(*target),
            _ => None,
        }
    }
}

/// Finds the two-strip target among a frame's contours and estimates its range.
#[derive(Debug, Clone)]
pub struct TargetDetector {
    config: VisionConfig,
    policy: SelectionPolicy,
}

impl TargetDetector {
    pub fn new(config: VisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = SelectionPolicy::from(&config);
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Score all pairs of rectangles and return the selection.
    pub fn best_pair(&self, rects: &[Rect]) -> Selection {
        scoring::select_best(rects, &self.policy)
    }

    /// Evaluate a frame without publishing anything.
    pub fn detect<C: BoundingRect>(&self, contours: &[C]) -> FrameOutcome {
        let rects = contours::frame_rects(contours);
        if rects.len() < 2 {
            log::debug!("{} usable contours, need at least 2", rects.len());
            return FrameOutcome::InsufficientCandidates {
                candidates: rects.len(),
            };
        }

        let selection = self.best_pair(&rects);
        let Some(winner) = selection.best else {
            log::debug!(
                "no pair accepted ({} scored, best {:.1}, threshold {:.1})",
                selection.pairs_scored,
                selection.best_score,
                self.policy.threshold
            );
            return FrameOutcome::NoQualifyingPair {
                best_score: selection.best_score,
            };
        };

        let bounding = winner.bounding();
        match distance::resolve(&bounding, &self.config) {
            Some(estimate) => {
                log::debug!(
                    "pair {:?} wins with {:.1}: {:?}",
                    winner.indices,
                    winner.total_score,
                    winner.score
                );
                FrameOutcome::Published(estimate)
            }
            None => {
                log::warn!("winning pair {:?} has degenerate bounds {:?}", winner.indices, bounding);
                FrameOutcome::DegenerateGeometry
            }
        }
    }

    /// Evaluate a frame and publish the estimate if a target was found.
    ///
    /// All work happens before the lock is taken; frames without a target
    /// leave the previous estimate in place.
    pub fn process_frame<C: BoundingRect>(
        &self,
        contours: &[C],
        estimate: &SharedEstimate,
    ) -> FrameOutcome {
        let outcome = self.detect(contours);
        if let FrameOutcome::Published(target) = &outcome {
            estimate.publish(*target);
            log::info!(
                "target at x={:.1}, distance {:.1} in",
                target.center_x,
                target.distance
            );
        }
        outcome
    }
}

impl Default for TargetDetector {
    fn default() -> Self {
        let config = VisionConfig::default();
        let policy = SelectionPolicy::from(&config);
        Self { config, policy }
    }
}
