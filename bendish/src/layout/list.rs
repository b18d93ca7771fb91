//! List solver: a column of uniformly tall rows.

use crate::area::Axis;
use crate::primitives::{Rect, Size};

use super::{ChildInfo, Solved, separators};

/// Stack children top to bottom, each `row_height` tall and full width.
///
/// Rows past the bottom edge are still placed; the total content height is
/// reported so a scrolling parent can size its scrollbar.
pub fn solve_list(
    row_height: f32,
    bounds: Rect,
    children: &[ChildInfo],
    separator_thickness: f32,
) -> Solved {
    let rects: Vec<Rect> = (0..children.len())
        .map(|i| Rect::new(bounds.x, bounds.y + i as f32 * row_height, bounds.width, row_height))
        .collect();
    let separators = separators(Axis::Vertical, bounds, children, &rects, separator_thickness);

    Solved {
        rects,
        content: Size::new(bounds.width, children.len() as f32 * row_height),
        separators,
    }
}
