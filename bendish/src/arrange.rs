//! Arrangement driver.
//!
//! One pass resolves an area's whole tree into rectangles:
//!
//! ```text
//! measure (post-order natural sizes) -> place (pre-order, one solver per container)
//! ```
//!
//! The pass only reads the node store and either returns a complete
//! `Arrangement` or an error; there is no partial output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::area::{Area, Axis, Container, LayoutHandle, LayoutNode};
use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::flags::LayoutFlags;
use crate::layout::{self, ChildInfo, Solved};
use crate::primitives::{Color, Point, Rect, Size};
use crate::property::PropertyHandle;

/// Everything a consumer needs about one node after a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNode {
    pub handle: LayoutHandle,
    pub rect: Rect,
    /// Extent of the node's laid-out children (its own size for leaves).
    pub content: Size,
    pub flags: LayoutFlags,
    pub background: Option<Color>,
    pub property: Option<PropertyHandle>,
    /// Nesting level, 0 for top-level nodes.
    pub depth: usize,
}

impl ResolvedNode {
    /// How far the content extends past the node's rect on each axis.
    pub fn overflow(&self) -> Size {
        Size::new(
            (self.content.width - self.rect.width).max(0.0),
            (self.content.height - self.rect.height).max(0.0),
        )
    }
}

/// Result of one arrangement pass: a rect for every live node, in pre-order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement {
    root: Rect,
    nodes: IndexMap<LayoutHandle, ResolvedNode>,
    separators: Vec<Rect>,
}

impl Arrangement {
    /// The rect the pass was run against.
    pub fn root_rect(&self) -> Rect {
        self.root
    }

    pub fn get(&self, handle: LayoutHandle) -> Option<&ResolvedNode> {
        self.nodes.get(&handle)
    }

    pub fn rect(&self, handle: LayoutHandle) -> Option<Rect> {
        self.nodes.get(&handle).map(|n| n.rect)
    }

    pub fn content_size(&self, handle: LayoutHandle) -> Option<Size> {
        self.nodes.get(&handle).map(|n| n.content)
    }

    pub fn overflow(&self, handle: LayoutHandle) -> Option<Size> {
        self.nodes.get(&handle).map(ResolvedNode::overflow)
    }

    /// Separator lines, in solve order.
    pub fn separators(&self) -> &[Rect] {
        &self.separators
    }

    /// Resolved nodes in pre-order (parents before children, siblings in
    /// insertion order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ResolvedNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Topmost node containing `point`: the last one in pre-order, which is
    /// the deepest and most recently inserted.
    pub fn hit_test(&self, point: Point) -> Option<LayoutHandle> {
        self.nodes
            .values()
            .rev()
            .find(|n| n.rect.contains(point))
            .map(|n| n.handle)
    }
}

/// Runs arrangement passes with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct Arranger {
    config: LayoutConfig,
}

impl Arranger {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolve every node of `area`. Top-level nodes each receive `root`.
    pub fn arrange(&self, area: &Area, root: Rect) -> Result<Arrangement> {
        let naturals = self.measure(area)?;
        let out = self.place(area, root, &naturals)?;

        tracing::debug!(
            area = area.id().raw(),
            nodes = out.len(),
            width = root.width,
            height = root.height,
            "arrangement pass complete"
        );
        Ok(out)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.config.max_depth {
            return Err(LayoutError::MaxDepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Post-order: natural size of every node, indexed by slot.
    ///
    /// Both passes walk with an explicit stack, so tree depth is bounded by
    /// `max_depth` alone and never by the thread's stack.
    fn measure(&self, area: &Area) -> Result<Vec<Size>> {
        let mut naturals = vec![Size::ZERO; area.len()];
        let mut stack: Vec<(u32, usize, bool)> = area
            .top_level_indices()
            .iter()
            .rev()
            .map(|&top| (top, 0, false))
            .collect();
        let mut children = Vec::new();

        while let Some((index, depth, expanded)) = stack.pop() {
            let node = area.slot(index);
            if !expanded {
                self.check_depth(depth)?;
                stack.push((index, depth, true));
                stack.extend(node.children.iter().rev().map(|&c| (c, depth + 1, false)));
                continue;
            }

            children.clear();
            children.extend(node.children.iter().map(|&c| naturals[c as usize]));
            naturals[index as usize] = layout::natural_size(&node.container, node.natural, &children);
        }
        Ok(naturals)
    }

    /// Pre-order: record each node's rect, then solve its children's rects.
    fn place(&self, area: &Area, root: Rect, naturals: &[Size]) -> Result<Arrangement> {
        let mut out = Arrangement {
            root,
            nodes: IndexMap::with_capacity(area.len()),
            separators: Vec::new(),
        };
        let mut stack: Vec<(u32, Rect, usize)> = area
            .top_level_indices()
            .iter()
            .rev()
            .map(|&top| (top, root, 0))
            .collect();

        while let Some((index, rect, depth)) = stack.pop() {
            self.check_depth(depth)?;
            let node = area.slot(index);

            let children: Vec<ChildInfo> = node
                .children
                .iter()
                .map(|&c| ChildInfo::new(area.slot(c).flags, naturals[c as usize]))
                .collect();
            let solved = self.solve(node, rect, &children)?;
            let content = if children.is_empty() { rect.size() } else { solved.content };

            let handle = area.handle(index);
            out.nodes.insert(
                handle,
                ResolvedNode {
                    handle,
                    rect,
                    content,
                    flags: node.flags,
                    background: node.background,
                    property: node.property,
                    depth,
                },
            );
            out.separators.extend(solved.separators);

            // Reversed so the first child is popped next.
            stack.extend(
                node.children
                    .iter()
                    .zip(solved.rects)
                    .rev()
                    .map(|(&child, child_rect)| (child, child_rect, depth + 1)),
            );
        }
        Ok(out)
    }

    fn solve(&self, node: &LayoutNode, rect: Rect, children: &[ChildInfo]) -> Result<Solved> {
        let thickness = self.config.separator_thickness;
        let solved = match node.container {
            Container::Row | Container::Column => {
                let axis = if matches!(node.container, Container::Row) { Axis::Horizontal } else { Axis::Vertical };
                layout::solve_linear(axis, rect, axis.scrolls(node.flags), children, thickness)
            }
            Container::Split { ratio, axis } => layout::solve_split(ratio, axis, rect, children, thickness)?,
            Container::List { row_height } => layout::solve_list(row_height, rect, children, thickness),
            Container::Grid => layout::solve_grid(rect, children),
        };

        tracing::trace!(
            kind = ?node.container.kind(),
            children = children.len(),
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "solved container"
        );
        Ok(solved)
    }
}

/// Arrange `area` inside `root` with the default configuration.
pub fn arrange(area: &Area, root: Rect) -> Result<Arrangement> {
    Arranger::default().arrange(area, root)
}
