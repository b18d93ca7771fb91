//! Grid solver: uniform cells in row-major order.

use crate::primitives::Rect;

use super::distribute::distribute;
use super::{ChildInfo, Solved};

/// Columns and rows for `count` cells: `cols = ceil(sqrt(count))`,
/// `rows = ceil(count / cols)`.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = (count as f64).sqrt() as usize;
    if cols * cols < count {
        cols += 1;
    }
    (cols, count.div_ceil(cols))
}

/// Place children into a row-major grid of uniform cells.
///
/// Column widths and row heights come from splitting the container evenly;
/// leftover pixels widen the first columns and heighten the first rows.
/// Trailing cells of an under-filled last row receive nothing.
pub fn solve_grid(bounds: Rect, children: &[ChildInfo]) -> Solved {
    let (cols, rows) = grid_dimensions(children.len());
    if cols == 0 {
        return Solved::default();
    }

    let widths = distribute(bounds.width, cols);
    let heights = distribute(bounds.height, rows);
    let xs = offsets(bounds.x, &widths);
    let ys = offsets(bounds.y, &heights);

    let rects = (0..children.len())
        .map(|i| {
            let (col, row) = (i % cols, i / cols);
            Rect::new(xs[col], ys[row], widths[col], heights[row])
        })
        .collect();

    Solved {
        rects,
        content: bounds.size(),
        separators: Vec::new(),
    }
}

fn offsets(origin: f32, extents: &[f32]) -> Vec<f32> {
    extents
        .iter()
        .scan(origin, |pos, &extent| {
            let start = *pos;
            *pos += extent;
            Some(start)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::LayoutFlags;
    use crate::primitives::Size;

    fn leaves(n: usize) -> Vec<ChildInfo> {
        vec![ChildInfo::new(LayoutFlags::EMPTY, Size::ZERO); n]
    }

    #[test]
    fn dimensions() {
        assert_eq!(grid_dimensions(0), (0, 0));
        assert_eq!(grid_dimensions(1), (1, 1));
        assert_eq!(grid_dimensions(2), (2, 1));
        assert_eq!(grid_dimensions(4), (2, 2));
        assert_eq!(grid_dimensions(5), (3, 2));
        assert_eq!(grid_dimensions(9), (3, 3));
        assert_eq!(grid_dimensions(10), (4, 3));
    }

    #[test]
    fn five_children_in_three_by_two() {
        let solved = solve_grid(Rect::new(0.0, 0.0, 300.0, 200.0), &leaves(5));
        assert_eq!(
            solved.rects,
            vec![
                Rect::new(0.0, 0.0, 100.0, 100.0),
                Rect::new(100.0, 0.0, 100.0, 100.0),
                Rect::new(200.0, 0.0, 100.0, 100.0),
                Rect::new(0.0, 100.0, 100.0, 100.0),
                Rect::new(100.0, 100.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn uneven_cells_favor_first_column() {
        let solved = solve_grid(Rect::new(0.0, 0.0, 101.0, 50.0), &leaves(2));
        assert_eq!(solved.rects[0], Rect::new(0.0, 0.0, 51.0, 50.0));
        assert_eq!(solved.rects[1], Rect::new(51.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn offset_bounds() {
        let solved = solve_grid(Rect::new(10.0, 20.0, 100.0, 100.0), &leaves(4));
        assert_eq!(solved.rects[3], Rect::new(60.0, 70.0, 50.0, 50.0));
    }

    #[test]
    fn empty_grid() {
        assert!(solve_grid(Rect::new(0.0, 0.0, 10.0, 10.0), &[]).rects.is_empty());
    }
}
