//! Areas and the layout node store.
//!
//! An `Area` owns every layout node created under it for the current frame.
//! Nodes live in a flat arena and are referenced by `LayoutHandle`, an index
//! tagged with the owning area and the frame generation. `reset()` drops the
//! whole tree and bumps the generation, so handles from a previous frame are
//! rejected instead of silently aliasing new nodes.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::flags::{ContainerKind, LayoutFlags};
use crate::primitives::{Color, Size};
use crate::property::PropertyHandle;

static AREA_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Index reserved for the sentinel root handle.
const ROOT_INDEX: u32 = u32::MAX;

/// Process-unique identifier of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AreaId(u32);

impl AreaId {
    fn next() -> Self {
        Self(AREA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque reference to a layout node within one area and one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LayoutHandle {
    area: AreaId,
    generation: u32,
    index: u32,
}

impl LayoutHandle {
    pub const fn area(self) -> AreaId {
        self.area
    }

    /// Whether this is an area's sentinel root handle.
    pub const fn is_root(self) -> bool {
        self.index == ROOT_INDEX
    }

    pub(crate) const fn index(self) -> usize {
        self.index as usize
    }
}

/// Primary axis of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Container kind together with its kind-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Container {
    /// Children flow left to right.
    #[default]
    Row,
    /// Children flow top to bottom.
    Column,
    /// Exactly two children sharing the axis at `ratio`.
    Split {
        ratio: f32,
        #[serde(default)]
        axis: Axis,
    },
    /// A column of uniformly tall rows.
    List { row_height: f32 },
    /// Row-major grid of uniform cells.
    Grid,
}

impl Container {
    pub const fn kind(&self) -> ContainerKind {
        match self {
            Container::Row => ContainerKind::Row,
            Container::Column => ContainerKind::Column,
            Container::Split { .. } => ContainerKind::Split,
            Container::List { .. } => ContainerKind::List,
            Container::Grid => ContainerKind::Grid,
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Container::Split { ratio, .. } if !(0.0..=1.0).contains(&ratio) => {
                Err(LayoutError::InvalidRatio(ratio))
            }
            Container::List { row_height } if !row_height.is_finite() || row_height < 0.0 => {
                Err(LayoutError::InvalidRowHeight(row_height))
            }
            _ => Ok(()),
        }
    }
}

/// Natural sizes must be finite and non-negative on both axes.
pub(crate) fn validate_natural(size: Size) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if valid(size.width) && valid(size.height) {
        Ok(())
    } else {
        Err(LayoutError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// Arena index for the next node; `ROOT_INDEX` is never handed out.
fn next_index(len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|&i| i != ROOT_INDEX)
        .ok_or(LayoutError::AreaFull)
}

/// One arena slot.
#[derive(Debug, Clone)]
pub(crate) struct LayoutNode {
    pub parent: Option<u32>,
    pub flags: LayoutFlags,
    pub container: Container,
    /// Caller-supplied preferred content size.
    pub natural: Size,
    /// `None` inherits the theme default.
    pub background: Option<Color>,
    pub property: Option<PropertyHandle>,
    pub children: Vec<u32>,
}

/// A rectangular screen region owning one layout tree per frame.
#[derive(Debug)]
pub struct Area {
    id: AreaId,
    generation: u32,
    nodes: Vec<LayoutNode>,
    /// Nodes created directly under the sentinel root, in creation order.
    top_level: Vec<u32>,
}

impl Default for Area {
    fn default() -> Self {
        Self::new()
    }
}

impl Area {
    pub fn new() -> Self {
        Self {
            id: AreaId::next(),
            generation: 0,
            nodes: Vec::new(),
            top_level: Vec::new(),
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    /// Current frame generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Sentinel handle standing for the area itself.
    pub fn root(&self) -> LayoutHandle {
        LayoutHandle {
            area: self.id,
            generation: self.generation,
            index: ROOT_INDEX,
        }
    }

    /// Drop the tree and invalidate every outstanding handle.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.top_level.clear();
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(area = self.id.0, generation = self.generation, "area reset");
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `handle` refers to a live node of this area.
    pub fn contains(&self, handle: LayoutHandle) -> bool {
        self.node_index(handle).is_ok()
    }

    /// Append a container as the last child of `parent`.
    ///
    /// Passing `self.root()` creates a top-level node. The kind bits of
    /// `flags` are taken from `container`. The store is unchanged on error.
    pub fn create_container(
        &mut self,
        parent: LayoutHandle,
        container: Container,
        flags: LayoutFlags,
    ) -> Result<LayoutHandle> {
        let parent = self.resolve_parent(parent)?;
        container.validate()?;

        let index = next_index(self.nodes.len())?;

        self.nodes.push(LayoutNode {
            parent,
            flags: flags.with_kind(container.kind()),
            container,
            natural: Size::ZERO,
            background: None,
            property: None,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p as usize].children.push(index),
            None => self.top_level.push(index),
        }

        Ok(self.handle(index))
    }

    /// Create a childless node with a preferred size.
    pub fn create_leaf(
        &mut self,
        parent: LayoutHandle,
        natural: Size,
        flags: LayoutFlags,
    ) -> Result<LayoutHandle> {
        validate_natural(natural)?;
        let handle = self.create_container(parent, Container::Row, flags)?;
        self.nodes[handle.index()].natural = natural;
        Ok(handle)
    }

    pub fn flags(&self, handle: LayoutHandle) -> Result<LayoutFlags> {
        Ok(self.node(handle)?.flags)
    }

    /// Replace a node's flags. The container kind cannot change.
    pub fn set_flags(&mut self, handle: LayoutHandle, flags: LayoutFlags) -> Result<()> {
        let node = self.node_mut(handle)?;
        node.flags = node.flags.merge_keeping_kind(flags);
        Ok(())
    }

    pub fn container(&self, handle: LayoutHandle) -> Result<Container> {
        Ok(self.node(handle)?.container)
    }

    pub fn natural_size(&self, handle: LayoutHandle) -> Result<Size> {
        Ok(self.node(handle)?.natural)
    }

    pub fn set_natural_size(&mut self, handle: LayoutHandle, size: Size) -> Result<()> {
        validate_natural(size)?;
        self.node_mut(handle)?.natural = size;
        Ok(())
    }

    /// Background override, `None` when the theme default applies.
    pub fn background_color(&self, handle: LayoutHandle) -> Result<Option<Color>> {
        Ok(self.node(handle)?.background)
    }

    pub fn set_background_color(&mut self, handle: LayoutHandle, color: Color) -> Result<()> {
        self.node_mut(handle)?.background = Some(color);
        Ok(())
    }

    pub fn clear_background_color(&mut self, handle: LayoutHandle) -> Result<()> {
        self.node_mut(handle)?.background = None;
        Ok(())
    }

    /// Attach a registry property whose draw callback renders this node.
    pub fn bind_property(&mut self, handle: LayoutHandle, property: PropertyHandle) -> Result<()> {
        self.node_mut(handle)?.property = Some(property);
        Ok(())
    }

    pub fn property(&self, handle: LayoutHandle) -> Result<Option<PropertyHandle>> {
        Ok(self.node(handle)?.property)
    }

    pub fn parent(&self, handle: LayoutHandle) -> Result<Option<LayoutHandle>> {
        Ok(self.node(handle)?.parent.map(|p| self.handle(p)))
    }

    pub fn children(&self, handle: LayoutHandle) -> Result<Vec<LayoutHandle>> {
        let node = self.node(handle)?;
        Ok(node.children.iter().map(|&c| self.handle(c)).collect())
    }

    /// Top-level nodes in creation order.
    pub fn top_level(&self) -> impl Iterator<Item = LayoutHandle> + '_ {
        self.top_level.iter().map(|&i| self.handle(i))
    }

    // =====================================================================
    // Crate-internal access for the arrangement driver
    // =====================================================================

    pub(crate) fn handle(&self, index: u32) -> LayoutHandle {
        LayoutHandle {
            area: self.id,
            generation: self.generation,
            index,
        }
    }

    pub(crate) fn top_level_indices(&self) -> &[u32] {
        &self.top_level
    }

    pub(crate) fn slot(&self, index: u32) -> &LayoutNode {
        &self.nodes[index as usize]
    }

    fn owns(&self, handle: LayoutHandle) -> bool {
        handle.area == self.id && handle.generation == self.generation
    }

    fn resolve_parent(&self, handle: LayoutHandle) -> Result<Option<u32>> {
        if !self.owns(handle) {
            return Err(LayoutError::InvalidParent);
        }
        if handle.is_root() {
            return Ok(None);
        }
        if handle.index() >= self.nodes.len() {
            return Err(LayoutError::InvalidParent);
        }
        Ok(Some(handle.index))
    }

    fn node_index(&self, handle: LayoutHandle) -> Result<usize> {
        if !self.owns(handle) || handle.is_root() || handle.index() >= self.nodes.len() {
            return Err(LayoutError::InvalidHandle);
        }
        Ok(handle.index())
    }

    fn node(&self, handle: LayoutHandle) -> Result<&LayoutNode> {
        let index = self.node_index(handle)?;
        Ok(&self.nodes[index])
    }

    fn node_mut(&mut self, handle: LayoutHandle) -> Result<&mut LayoutNode> {
        let index = self.node_index(handle)?;
        Ok(&mut self.nodes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_get_distinct_ids() {
        let a = Area::new();
        let b = Area::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut area = Area::new();
        let row = area
            .create_container(area.root(), Container::Row, LayoutFlags::EMPTY)
            .unwrap();
        let a = area.create_leaf(row, Size::new(10.0, 10.0), LayoutFlags::EMPTY).unwrap();
        let b = area.create_leaf(row, Size::new(20.0, 10.0), LayoutFlags::EMPTY).unwrap();
        let c = area.create_leaf(row, Size::new(30.0, 10.0), LayoutFlags::EMPTY).unwrap();

        assert_eq!(area.children(row).unwrap(), vec![a, b, c]);
        assert_eq!(area.parent(b).unwrap(), Some(row));
        assert_eq!(area.parent(row).unwrap(), None);
        assert_eq!(area.top_level().collect::<Vec<_>>(), vec![row]);
        assert_eq!(area.len(), 4);
    }

    #[test]
    fn kind_bits_come_from_the_container() {
        let mut area = Area::new();
        let flags = LayoutFlags::EMPTY.with_kind(ContainerKind::Grid).set_box();
        let col = area.create_container(area.root(), Container::Column, flags).unwrap();
        let stored = area.flags(col).unwrap();
        assert_eq!(stored.kind(), Some(ContainerKind::Column));
        assert!(stored.is_box());
    }

    #[test]
    fn set_flags_cannot_change_kind() {
        let mut area = Area::new();
        let list = area
            .create_container(area.root(), Container::List { row_height: 20.0 }, LayoutFlags::EMPTY)
            .unwrap();
        let attempt = LayoutFlags::EMPTY
            .with_kind(ContainerKind::Row)
            .set_scroll(false, true);
        area.set_flags(list, attempt).unwrap();
        let stored = area.flags(list).unwrap();
        assert_eq!(stored.kind(), Some(ContainerKind::List));
        assert!(stored.scroll_v());
    }

    #[test]
    fn split_ratio_is_validated() {
        let mut area = Area::new();
        for ratio in [-0.1, 1.5, f32::NAN] {
            let err = area
                .create_container(
                    area.root(),
                    Container::Split { ratio, axis: Axis::Horizontal },
                    LayoutFlags::EMPTY,
                )
                .unwrap_err();
            assert!(matches!(err, LayoutError::InvalidRatio(_)));
        }
        assert!(area.is_empty());

        for ratio in [0.0, 0.5, 1.0] {
            area.create_container(
                area.root(),
                Container::Split { ratio, axis: Axis::Vertical },
                LayoutFlags::EMPTY,
            )
            .unwrap();
        }
        assert_eq!(area.len(), 3);
    }

    #[test]
    fn list_row_height_is_validated() {
        let mut area = Area::new();
        let err = area
            .create_container(area.root(), Container::List { row_height: -1.0 }, LayoutFlags::EMPTY)
            .unwrap_err();
        assert_eq!(err, LayoutError::InvalidRowHeight(-1.0));
        assert!(area.is_empty());
    }

    #[test]
    fn leaf_natural_size_is_validated() {
        let mut area = Area::new();
        let row = area.create_container(area.root(), Container::Row, LayoutFlags::EMPTY).unwrap();

        assert_eq!(
            area.create_leaf(row, Size::new(-80.0, 0.0), LayoutFlags::EMPTY),
            Err(LayoutError::InvalidSize { width: -80.0, height: 0.0 })
        );
        let nan = area.create_leaf(row, Size::new(f32::NAN, 10.0), LayoutFlags::EMPTY);
        assert!(matches!(nan, Err(LayoutError::InvalidSize { .. })));
        let inf = area.create_leaf(row, Size::new(0.0, f32::INFINITY), LayoutFlags::EMPTY);
        assert!(matches!(inf, Err(LayoutError::InvalidSize { .. })));

        assert_eq!(area.len(), 1);
        assert!(area.children(row).unwrap().is_empty());
    }

    #[test]
    fn set_natural_size_keeps_old_value_on_error() {
        let mut area = Area::new();
        let leaf = area
            .create_leaf(area.root(), Size::new(50.0, 20.0), LayoutFlags::EMPTY)
            .unwrap();

        assert!(area.set_natural_size(leaf, Size::new(f32::NAN, 20.0)).is_err());
        assert!(area.set_natural_size(leaf, Size::new(10.0, -1.0)).is_err());
        assert_eq!(area.natural_size(leaf), Ok(Size::new(50.0, 20.0)));

        area.set_natural_size(leaf, Size::ZERO).unwrap();
        assert_eq!(area.natural_size(leaf), Ok(Size::ZERO));
    }

    #[test]
    fn index_space_excludes_the_root_sentinel() {
        assert_eq!(next_index(0), Ok(0));
        assert_eq!(next_index(ROOT_INDEX as usize - 1), Ok(ROOT_INDEX - 1));
        assert_eq!(next_index(ROOT_INDEX as usize), Err(LayoutError::AreaFull));
    }

    #[test]
    fn foreign_parent_is_rejected_and_both_stores_unchanged() {
        let mut a = Area::new();
        let mut b = Area::new();
        let a_root = a.create_container(a.root(), Container::Row, LayoutFlags::EMPTY).unwrap();
        b.create_container(b.root(), Container::Column, LayoutFlags::EMPTY).unwrap();

        assert_eq!(
            b.create_container(a_root, Container::Row, LayoutFlags::EMPTY),
            Err(LayoutError::InvalidParent)
        );
        assert_eq!(
            b.create_container(a.root(), Container::Row, LayoutFlags::EMPTY),
            Err(LayoutError::InvalidParent)
        );
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(a.children(a_root).unwrap().is_empty());
    }

    #[test]
    fn reset_invalidates_old_handles() {
        let mut area = Area::new();
        let old_root = area.root();
        let node = area.create_container(old_root, Container::Row, LayoutFlags::EMPTY).unwrap();

        area.reset();
        assert!(area.is_empty());
        assert!(!area.contains(node));
        assert_eq!(area.flags(node), Err(LayoutError::InvalidHandle));
        assert_eq!(
            area.create_container(node, Container::Row, LayoutFlags::EMPTY),
            Err(LayoutError::InvalidParent)
        );
        assert_eq!(
            area.create_container(old_root, Container::Row, LayoutFlags::EMPTY),
            Err(LayoutError::InvalidParent)
        );

        let fresh = area.create_container(area.root(), Container::Row, LayoutFlags::EMPTY).unwrap();
        assert_ne!(fresh, node);
        assert!(area.contains(fresh));
    }

    #[test]
    fn background_defaults_to_inherit() {
        let mut area = Area::new();
        let node = area.create_container(area.root(), Container::Row, LayoutFlags::EMPTY).unwrap();
        assert_eq!(area.background_color(node).unwrap(), None);

        let red = Color::rgba(1.0, 0.0, 0.0, 1.0);
        area.set_background_color(node, red).unwrap();
        assert_eq!(area.background_color(node).unwrap(), Some(red));

        area.clear_background_color(node).unwrap();
        assert_eq!(area.background_color(node).unwrap(), None);
    }

    #[test]
    fn root_sentinel_is_not_a_node() {
        let area = Area::new();
        assert!(area.root().is_root());
        assert!(!area.contains(area.root()));
        assert_eq!(area.flags(area.root()), Err(LayoutError::InvalidHandle));
    }
}
