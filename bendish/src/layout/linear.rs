//! Row and Column solver.
//!
//! Row and Column are the same algorithm along different axes: children flow
//! along the main axis in insertion order, expanding children share the
//! leftover main-axis space, and every child is start-aligned on the cross
//! axis.

use crate::area::Axis;
use crate::primitives::Rect;

use super::distribute::{compress, distribute};
use super::{ChildInfo, Solved, separators};

/// Lay out `children` along `axis` inside `bounds`.
///
/// - Non-expanding children take their natural main size.
/// - Leftover space is split evenly among children expanding on `axis`, on
///   top of their natural size. Without expanders it stays unused.
/// - On overflow, a container scrolling on `axis` keeps natural sizes and
///   reports the overflow through `Solved::content`; otherwise children are
///   compressed to fit.
/// - On the cross axis a child fills the container unless it does not expand
///   on that axis and has a non-zero natural extent smaller than the container.
pub fn solve_linear(
    axis: Axis,
    bounds: Rect,
    scroll_main: bool,
    children: &[ChildInfo],
    separator_thickness: f32,
) -> Solved {
    if children.is_empty() {
        return Solved::default();
    }

    let cross_axis = axis.cross();
    let main_size = axis.extent(bounds.size()).max(0.0);
    let cross_size = cross_axis.extent(bounds.size()).max(0.0);

    let naturals: Vec<f32> = children.iter().map(|c| axis.extent(c.natural)).collect();
    let total_natural: f32 = naturals.iter().sum();

    let main_sizes: Vec<f32> = if total_natural <= main_size {
        let expanders = children.iter().filter(|c| axis.expands(c.flags)).count();
        let mut shares = distribute(main_size - total_natural, expanders).into_iter();
        children
            .iter()
            .zip(&naturals)
            .map(|(child, &natural)| {
                if axis.expands(child.flags) {
                    natural + shares.next().unwrap_or(0.0)
                } else {
                    natural
                }
            })
            .collect()
    } else if scroll_main {
        naturals
    } else {
        tracing::warn!(
            ?axis,
            available = main_size,
            content = total_natural,
            "content overflows a non-scrolling container, compressing children"
        );
        compress(&naturals, main_size)
    };

    let main_origin = axis.start(&bounds);
    let cross_origin = cross_axis.start(&bounds);
    let mut cursor = main_origin;
    let mut rects = Vec::with_capacity(children.len());

    for (child, &main) in children.iter().zip(&main_sizes) {
        let natural_cross = cross_axis.extent(child.natural);
        let cross = if !cross_axis.expands(child.flags)
            && natural_cross > 0.0
            && natural_cross < cross_size
        {
            natural_cross
        } else {
            cross_size
        };

        rects.push(axis.rect(cursor, cross_origin, main, cross));
        cursor += main;
    }

    let separators = separators(axis, bounds, children, &rects, separator_thickness);

    Solved {
        rects,
        content: axis.size(cursor - main_origin, cross_size),
        separators,
    }
}
