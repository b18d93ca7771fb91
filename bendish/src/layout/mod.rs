//! Container solvers.
//!
//! Each container kind has a solver that takes the container's resolved
//! rectangle plus its children's flags and natural sizes, and returns one
//! rectangle per child. Solvers are pure: they never touch the node store.
//!
//! ```text
//! measure (bottom-up natural sizes) -> solve (top-down rects per container)
//! ```

pub mod distribute;
pub mod grid;
pub mod linear;
pub mod list;
pub mod measure;
pub mod split;

pub use distribute::{compress, distribute};
pub use grid::{grid_dimensions, solve_grid};
pub use linear::solve_linear;
pub use list::solve_list;
pub use measure::natural_size;
pub use split::solve_split;

use crate::area::Axis;
use crate::flags::LayoutFlags;
use crate::primitives::{Rect, Size};

/// What a solver needs to know about one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildInfo {
    pub flags: LayoutFlags,
    pub natural: Size,
}

impl ChildInfo {
    pub fn new(flags: LayoutFlags, natural: Size) -> Self {
        Self { flags, natural }
    }
}

/// Output of one container solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solved {
    /// One rectangle per child, in insertion order.
    pub rects: Vec<Rect>,
    /// Extent of the laid-out content; larger than the container when it overflows.
    pub content: Size,
    /// Divider lines between children flagged with `separator`.
    pub separators: Vec<Rect>,
}

// =========================================================================
// Axis helpers
// =========================================================================

impl Axis {
    #[inline]
    pub(crate) fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub(crate) fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub(crate) fn start(self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }

    #[inline]
    pub(crate) fn expands(self, flags: LayoutFlags) -> bool {
        match self {
            Axis::Horizontal => flags.expand_h(),
            Axis::Vertical => flags.expand_v(),
        }
    }

    #[inline]
    pub(crate) fn scrolls(self, flags: LayoutFlags) -> bool {
        match self {
            Axis::Horizontal => flags.scroll_h(),
            Axis::Vertical => flags.scroll_v(),
        }
    }

    /// Build a size from main/cross extents along this axis.
    #[inline]
    pub(crate) fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a rect from main/cross origin and extents along this axis.
    #[inline]
    pub(crate) fn rect(self, main_pos: f32, cross_pos: f32, main: f32, cross: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_pos, cross_pos, main, cross),
            Axis::Vertical => Rect::new(cross_pos, main_pos, cross, main),
        }
    }
}

/// Divider lines for children flagged with `separator` that have a successor.
///
/// Each line is `thickness` wide, centered on the boundary after the child
/// along `axis`, and spans the container's cross extent.
pub(crate) fn separators(
    axis: Axis,
    bounds: Rect,
    children: &[ChildInfo],
    rects: &[Rect],
    thickness: f32,
) -> Vec<Rect> {
    let cross_axis = axis.cross();
    let cross_pos = cross_axis.start(&bounds);
    let cross = cross_axis.extent(bounds.size());

    children
        .iter()
        .zip(rects)
        .take(children.len().saturating_sub(1))
        .filter(|(child, _)| child.flags.separator())
        .map(|(_, rect)| {
            let boundary = axis.start(rect) + axis.extent(rect.size());
            axis.rect(boundary - thickness / 2.0, cross_pos, thickness, cross)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_only_between_siblings() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        let sep = LayoutFlags::EMPTY.set_separator();
        let children = [
            ChildInfo::new(sep, Size::ZERO),
            ChildInfo::new(LayoutFlags::EMPTY, Size::ZERO),
            ChildInfo::new(sep, Size::ZERO),
        ];
        let rects = [
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::new(30.0, 0.0, 30.0, 20.0),
            Rect::new(60.0, 0.0, 40.0, 20.0),
        ];
        let lines = separators(Axis::Horizontal, bounds, &children, &rects, 2.0);
        // The last child has no successor, so only one divider.
        assert_eq!(lines, vec![Rect::new(29.0, 0.0, 2.0, 20.0)]);
    }

    #[test]
    fn vertical_separator_spans_width() {
        let bounds = Rect::new(5.0, 0.0, 80.0, 100.0);
        let children = [
            ChildInfo::new(LayoutFlags::EMPTY.set_separator(), Size::ZERO),
            ChildInfo::new(LayoutFlags::EMPTY, Size::ZERO),
        ];
        let rects = [Rect::new(5.0, 0.0, 80.0, 40.0), Rect::new(5.0, 40.0, 80.0, 60.0)];
        let lines = separators(Axis::Vertical, bounds, &children, &rects, 1.0);
        assert_eq!(lines, vec![Rect::new(5.0, 39.5, 80.0, 1.0)]);
    }
}
