use imageproc::contours::Contour;
use imageproc::point::Point;

use crate::models::Rect;

/// Anything the upstream extraction stage hands over as "a contour".
///
/// The detector never looks at point data: it only needs the axis-aligned
/// bounding rectangle. `None` means the shape has no usable extent.
pub trait BoundingRect {
    fn bounding_rect(&self) -> Option<Rect>;
}

impl BoundingRect for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<T: Copy + Into<i64>> BoundingRect for [Point<T>] {
    fn bounding_rect(&self) -> Option<Rect> {
        points_bounding_rect(self)
    }
}

impl<T: Copy + Into<i64>> BoundingRect for Vec<Point<T>> {
    fn bounding_rect(&self) -> Option<Rect> {
        points_bounding_rect(self)
    }
}

impl<T: Copy + Into<i64>> BoundingRect for Contour<T> {
    fn bounding_rect(&self) -> Option<Rect> {
        points_bounding_rect(&self.points)
    }
}

impl<B: BoundingRect + ?Sized> BoundingRect for &B {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

/// Bounding box of a point set with inclusive pixel extents, so a single
/// point yields a 1x1 rectangle.
fn points_bounding_rect<T: Copy + Into<i64>>(points: &[Point<T>]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let start: (i64, i64) = (first.x.into(), first.y.into());

    let ((min_x, min_y), (max_x, max_y)) =
        rest.iter().fold((start, start), |((min_x, min_y), (max_x, max_y)), p| {
            let (x, y): (i64, i64) = (p.x.into(), p.y.into());
            ((min_x.min(x), min_y.min(y)), (max_x.max(x), max_y.max(y)))
        });

    Some(Rect {
        x: i32::try_from(min_x).ok()?,
        y: i32::try_from(min_y).ok()?,
        width: i32::try_from(max_x - min_x + 1).ok()?,
        height: i32::try_from(max_y - min_y + 1).ok()?,
    })
}

/// Derive rectangles for one frame, dropping contours without extent.
pub fn frame_rects<C: BoundingRect>(contours: &[C]) -> Vec<Rect> {
    contours
        .iter()
        .enumerate()
        .filter_map(|(i, c)| {
            let rect = c.bounding_rect();
            if rect.is_none() {
                log::debug!("contour {} has no bounding rectangle, skipped", i);
            }
            rect
        })
        .collect()
}
