use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in image coordinates (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    // Edges are i64 so `x + width` cannot overflow.
    pub fn left(&self) -> i64 {
        self.x as i64
    }

    pub fn top(&self) -> i64 {
        self.y as i64
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// A rectangle without positive extent in both directions cannot take part in a match.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Smallest axis-aligned rectangle enclosing both members of a candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingPair {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl BoundingPair {
    pub fn enclosing(rect1: &Rect, rect2: &Rect) -> Self {
        Self {
            top: rect1.top().min(rect2.top()),
            bottom: rect1.bottom().max(rect2.bottom()),
            left: rect1.left().min(rect2.left()),
            right: rect1.right().max(rect2.right()),
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left as f64 + self.right as f64) / 2.0
    }
}

/// The six per-criterion sub-scores of a candidate pair, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub bounding_ratio: f64,
    pub contour_width: f64,
    pub top_edge: f64,
    pub left_spacing: f64,
    pub width_ratio: f64,
    pub height_ratio: f64,
}

impl PairScore {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.bounding_ratio,
            self.contour_width,
            self.top_edge,
            self.left_spacing,
            self.width_ratio,
            self.height_ratio,
        ]
    }

    /// Combined score on the 0-600 scale.
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn min_component(&self) -> f64 {
        self.as_array().into_iter().fold(f64::INFINITY, f64::min)
    }
}

/// A candidate target hypothesis: two rectangles and how well they match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    /// Indices of the two members in the frame's rectangle list, `first < second`.
    pub indices: (usize, usize),
    pub rect1: Rect,
    pub rect2: Rect,
    pub score: PairScore,
    pub total_score: f64,
}

impl ScoredPair {
    pub fn bounding(&self) -> BoundingPair {
        BoundingPair::enclosing(&self.rect1, &self.rect2)
    }
}

/// Published position of the target: horizontal centre (pixels) and distance (inches).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetEstimate {
    pub center_x: f64,
    pub distance: f64,
}

impl TargetEstimate {
    /// The initial zero estimate means "nothing seen yet".
    pub fn has_target(&self) -> bool {
        self.distance > 0.0
    }
}
