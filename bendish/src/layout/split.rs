//! Split solver: two children sharing one axis at a ratio.

use crate::area::Axis;
use crate::error::{LayoutError, Result};
use crate::primitives::Rect;

use super::{ChildInfo, Solved, separators};

/// Divide `bounds` along `axis`: the first child gets `round(ratio * size)`,
/// the second the remainder. Both fill the cross axis.
pub fn solve_split(
    ratio: f32,
    axis: Axis,
    bounds: Rect,
    children: &[ChildInfo],
    separator_thickness: f32,
) -> Result<Solved> {
    if children.len() != 2 {
        return Err(LayoutError::InvalidChildCount {
            expected: 2,
            found: children.len(),
        });
    }

    let cross_axis = axis.cross();
    let main = axis.extent(bounds.size()).max(0.0);
    let cross = cross_axis.extent(bounds.size()).max(0.0);
    let main_pos = axis.start(&bounds);
    let cross_pos = cross_axis.start(&bounds);

    let first = (ratio.clamp(0.0, 1.0) * main).round();
    let second = main - first;

    let rects = vec![
        axis.rect(main_pos, cross_pos, first, cross),
        axis.rect(main_pos + first, cross_pos, second, cross),
    ];
    let separators = separators(axis, bounds, children, &rects, separator_thickness);

    Ok(Solved {
        rects,
        content: bounds.size(),
        separators,
    })
}
