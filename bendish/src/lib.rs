//! bendish: retained layout arrangement for an immediate-mode widget layer.
//!
//! Callers rebuild a tree of layout nodes inside an [`Area`] every frame and
//! resolve it into pixel rectangles with [`arrange`]. Containers arrange their
//! children as rows, columns, two-way splits, uniform lists or grids, driven by
//! a packed [`LayoutFlags`] word per node.
//!
//! # Architecture
//!
//! ```text
//! Area (node arena) -> Arranger: measure + solve per container -> Arrangement
//!                                                              -> DrawList (renderer hand-off)
//! ```
//!
//! # Usage
//!
//! ```
//! use bendish::{arrange, Area, Container, LayoutFlags, Rect, Size};
//!
//! let mut area = Area::new();
//! let row = area.create_container(area.root(), Container::Row, LayoutFlags::EMPTY)?;
//! let icon = area.create_leaf(row, Size::new(24.0, 24.0), LayoutFlags::EMPTY)?;
//! let label = area.create_leaf(row, Size::ZERO, LayoutFlags::EMPTY.set_expand(true, false))?;
//!
//! let arrangement = arrange(&area, Rect::new(0.0, 0.0, 200.0, 24.0))?;
//! assert_eq!(arrangement.rect(icon), Some(Rect::new(0.0, 0.0, 24.0, 24.0)));
//! assert_eq!(arrangement.rect(label), Some(Rect::new(24.0, 0.0, 176.0, 24.0)));
//! # Ok::<(), bendish::LayoutError>(())
//! ```

// Core primitives
pub mod primitives;
pub mod flags;
pub mod error;

// Node store and solvers
pub mod area;
pub mod layout;
pub mod arrange;

// Renderer hand-off and widget state
pub mod draw;
pub mod property;

// Configuration and documents
pub mod config;
pub mod document;

pub use primitives::{Color, Point, Rect, Size};
pub use flags::{ContainerKind, LayoutFlags};
pub use error::{ConfigError, LayoutError, PropertyError};
pub use area::{Area, AreaId, Axis, Container, LayoutHandle};
pub use arrange::{arrange, Arrangement, Arranger, ResolvedNode};
pub use draw::{DrawCommand, DrawList};
pub use property::{PropertyCallbacks, PropertyHandle, PropertyRegistry, PropertyValue};
pub use config::{LayoutConfig, Theme, DEFAULT_MAX_DEPTH};
pub use document::{FlagSpec, LayoutDocument, NodeSpec};
