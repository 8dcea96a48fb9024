use crate::layout::LegendLayout;

/// Maps a pointer coordinate back to the legend entry under it.
///
/// Returns `None` when the point lies outside the legend's bounding
/// rectangle. Inside the rectangle the result is always a hit: a point in
/// the trailing padding of the last row (past the final entry) reports the
/// last display entry's ordinal rather than a miss, so "inside the legend
/// box" and "found" stay the same predicate. The ordinal indexes the
/// unfiltered aggregate entry list, in the same order the renderer drew.
pub fn hit_test(point: [f32; 2], layout: &LegendLayout) -> Option<usize> {
    if layout.entry_count == 0 || !layout.rect.contains(point) {
        return None;
    }

    let col = ((point[0] - layout.rect.left() - layout.char_size / 2.0) / layout.cell_width)
        .floor()
        .max(0.0) as usize;
    let col = col.min(layout.columns - 1);
    let row = ((point[1] - layout.rect.top()) / layout.cell_height)
        .floor()
        .max(0.0) as usize;

    let target = col + row * layout.columns;
    // Clamp into the real entries: trailing empty cells resolve to the last
    // display entry
    let slot = target.min(layout.entry_count - 1);
    Some(layout.display_order[slot])
}
