use crate::models::Rect;

/// Every unordered pair `(i, j)` with `i < j`, outer index ascending, then inner.
///
/// Fewer than two items produce nothing.
pub fn candidate_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Candidate pairs with their rectangles attached.
pub fn rect_pairs(rects: &[Rect]) -> impl Iterator<Item = ((usize, usize), &Rect, &Rect)> + '_ {
    candidate_pairs(rects.len()).map(move |(i, j)| ((i, j), &rects[i], &rects[j]))
}

/// Number of pairs `candidate_pairs(count)` yields.
pub fn pair_count(count: usize) -> usize {
    count * count.saturating_sub(1) / 2
}
