//! Natural size of a container from its children's natural sizes.

use crate::area::{Axis, Container};
use crate::primitives::Size;

use super::grid::grid_dimensions;

/// Natural size of a node given its own preferred size and its children's.
///
/// The result is never smaller than `own` on either axis.
pub fn natural_size(container: &Container, own: Size, children: &[Size]) -> Size {
    if children.is_empty() {
        return own;
    }

    let max_width = children.iter().map(|s| s.width).fold(0.0, f32::max);
    let max_height = children.iter().map(|s| s.height).fold(0.0, f32::max);

    let computed = match *container {
        Container::Row => stacked(Axis::Horizontal, children),
        Container::Column => stacked(Axis::Vertical, children),
        Container::Split { axis, .. } => stacked(axis, children),
        Container::List { row_height } => Size::new(max_width, row_height * children.len() as f32),
        Container::Grid => {
            let (cols, rows) = grid_dimensions(children.len());
            Size::new(max_width * cols as f32, max_height * rows as f32)
        }
    };

    computed.max(own)
}

/// Sum along `axis`, max across it.
fn stacked(axis: Axis, children: &[Size]) -> Size {
    let cross_axis = axis.cross();
    let main = children.iter().map(|&s| axis.extent(s)).sum();
    let cross = children.iter().map(|&s| cross_axis.extent(s)).fold(0.0, f32::max);
    axis.size(main, cross)
}
