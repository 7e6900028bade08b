//! Pairwise geometric similarity scoring.
//!
//! Each criterion expresses one expectation about the physical target as a
//! ratio that equals 1.0 for a perfect match, then maps it through
//! [`ratio_to_score`]. The target is two vertical strips: the box around both
//! is twice as tall as it is wide, each strip is a quarter of that width, and
//! the left edges sit three quarters of the width apart.

use crate::config::VisionConfig;
use crate::detection::pairs::rect_pairs;
use crate::models::{BoundingPair, PairScore, Rect, ScoredPair};

/// Piecewise linear map from (0,0) to (1,100) to (2,0), zero outside [0, 2].
///
/// Non-finite ratios (a zero denominator somewhere upstream) score 0.
pub fn ratio_to_score(ratio: f64) -> f64 {
    if !ratio.is_finite() {
        return 0.0;
    }
    (100.0 * (1.0 - (1.0 - ratio).abs())).clamp(0.0, 100.0)
}

/// Bounding box height should be double its width.
pub fn bounding_ratio_score(bounding: &BoundingPair) -> f64 {
    ratio_to_score(bounding.height() as f64 / (2.0 * bounding.width() as f64))
}

/// Each contour should span a quarter of the bounding width.
pub fn contour_width_score(rect1: &Rect, bounding: &BoundingPair) -> f64 {
    ratio_to_score(rect1.width as f64 * 4.0 / bounding.width() as f64)
}

/// Top edges should be level. The difference is ideally 0, hence the +1 shift.
pub fn top_edge_score(rect1: &Rect, rect2: &Rect, bounding: &BoundingPair) -> f64 {
    ratio_to_score(1.0 + (rect1.top() - rect2.top()) as f64 / bounding.height() as f64)
}

/// Left edges should be 3/4 of the bounding width apart.
///
/// Normalised form: the ratio is `|dx| / (0.75 * width)`, which is 1 exactly at
/// that separation.
pub fn left_spacing_score(rect1: &Rect, rect2: &Rect, bounding: &BoundingPair) -> f64 {
    let spacing = (rect2.left() - rect1.left()).abs() as f64;
    ratio_to_score(spacing / (0.75 * bounding.width() as f64))
}

pub fn width_ratio_score(rect1: &Rect, rect2: &Rect) -> f64 {
    ratio_to_score(rect1.width as f64 / rect2.width as f64)
}

pub fn height_ratio_score(rect1: &Rect, rect2: &Rect) -> f64 {
    ratio_to_score(rect1.height as f64 / rect2.height as f64)
}

/// All six sub-scores for one pair. A degenerate member zeroes the whole pair.
pub fn score_pair(rect1: &Rect, rect2: &Rect) -> PairScore {
    if rect1.is_degenerate() || rect2.is_degenerate() {
        return PairScore::default();
    }

    let bounding = BoundingPair::enclosing(rect1, rect2);
    let score = PairScore {
        bounding_ratio: bounding_ratio_score(&bounding),
        contour_width: contour_width_score(rect1, &bounding),
        top_edge: top_edge_score(rect1, rect2, &bounding),
        left_spacing: left_spacing_score(rect1, rect2, &bounding),
        width_ratio: width_ratio_score(rect1, rect2),
        height_ratio: height_ratio_score(rect1, rect2),
    };
    log::trace!("{:?} + {:?} -> {:?}", rect1, rect2, score);
    score
}

/// Acceptance rules for a pair's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    /// Combined score must be strictly above this.
    pub threshold: f64,
    /// Every sub-score must be at least this. Zero disables the check.
    pub min_sub_score: f64,
}

impl From<&VisionConfig> for SelectionPolicy {
    fn from(config: &VisionConfig) -> Self {
        Self {
            threshold: config.score_threshold,
            min_sub_score: config.min_sub_score,
        }
    }
}

impl SelectionPolicy {
    pub fn accepts(&self, score: &PairScore) -> bool {
        score.total() > self.threshold
            && (self.min_sub_score <= 0.0 || score.min_component() >= self.min_sub_score)
    }
}

/// Result of scanning one frame's pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Winning pair, if any cleared the policy.
    pub best: Option<ScoredPair>,
    /// Highest combined score seen, accepted or not.
    pub best_score: f64,
    pub pairs_scored: usize,
}

/// Score every pair and keep the highest accepted one.
///
/// A pair replaces the running winner only when strictly better, so on exact
/// ties the first pair in enumeration order wins.
pub fn select_best(rects: &[Rect], policy: &SelectionPolicy) -> Selection {
    rect_pairs(rects).fold(Selection::default(), |mut sel, (indices, rect1, rect2)| {
        let score = score_pair(rect1, rect2);
        let total = score.total();
        log::debug!("pair {:?}: total {:.1}", indices, total);

        sel.pairs_scored += 1;
        if total > sel.best_score {
            sel.best_score = total;
        }

        let beats_winner = sel.best.as_ref().is_none_or(|b| total > b.total_score);
        if beats_winner && policy.accepts(&score) {
            sel.best = Some(ScoredPair {
                indices,
                rect1: *rect1,
                rect2: *rect2,
                score,
                total_score: total,
            });
        }
        sel
    })
}
