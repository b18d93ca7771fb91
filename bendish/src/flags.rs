//! Layout flags word.
//!
//! Every node carries a packed 16-bit word with orthogonal attributes:
//!
//! ```text
//! bit  0      expand horizontally
//! bit  1      expand vertically
//! bit  2      scroll horizontally
//! bit  3      scroll vertically
//! bit  4      separator after this node
//! bit  5      box (draw a background)
//! bits 8..=10 container kind
//! ```
//!
//! Bits outside these fields are carried through untouched.

use serde::{Deserialize, Serialize};

const EXPAND_H: u16 = 1 << 0;
const EXPAND_V: u16 = 1 << 1;
const SCROLL_H: u16 = 1 << 2;
const SCROLL_V: u16 = 1 << 3;
const SEPARATOR: u16 = 1 << 4;
const BOX: u16 = 1 << 5;

const KIND_SHIFT: u16 = 8;
const KIND_MASK: u16 = 0b111 << KIND_SHIFT;

/// The arrangement algorithm a container uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    #[default]
    Row,
    Column,
    Split,
    List,
    Grid,
}

impl ContainerKind {
    const fn code(self) -> u16 {
        match self {
            ContainerKind::Row => 0,
            ContainerKind::Column => 1,
            ContainerKind::Split => 2,
            ContainerKind::List => 3,
            ContainerKind::Grid => 4,
        }
    }

    const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(ContainerKind::Row),
            1 => Some(ContainerKind::Column),
            2 => Some(ContainerKind::Split),
            3 => Some(ContainerKind::List),
            4 => Some(ContainerKind::Grid),
            _ => None,
        }
    }
}

/// Packed layout flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutFlags(u16);

impl LayoutFlags {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    const fn with(self, mask: u16, on: bool) -> Self {
        if on {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }

    /// Set both expand bits to the given values.
    pub const fn set_expand(self, horizontal: bool, vertical: bool) -> Self {
        self.with(EXPAND_H, horizontal).with(EXPAND_V, vertical)
    }

    pub const fn clear_expand(self) -> Self {
        Self(self.0 & !(EXPAND_H | EXPAND_V))
    }

    /// Set both scroll bits to the given values.
    pub const fn set_scroll(self, horizontal: bool, vertical: bool) -> Self {
        self.with(SCROLL_H, horizontal).with(SCROLL_V, vertical)
    }

    pub const fn clear_scroll(self) -> Self {
        Self(self.0 & !(SCROLL_H | SCROLL_V))
    }

    pub const fn set_separator(self) -> Self {
        Self(self.0 | SEPARATOR)
    }

    pub const fn clear_separator(self) -> Self {
        Self(self.0 & !SEPARATOR)
    }

    pub const fn set_box(self) -> Self {
        Self(self.0 | BOX)
    }

    pub const fn clear_box(self) -> Self {
        Self(self.0 & !BOX)
    }

    #[inline]
    pub const fn expand_h(self) -> bool {
        self.0 & EXPAND_H != 0
    }

    #[inline]
    pub const fn expand_v(self) -> bool {
        self.0 & EXPAND_V != 0
    }

    #[inline]
    pub const fn scroll_h(self) -> bool {
        self.0 & SCROLL_H != 0
    }

    #[inline]
    pub const fn scroll_v(self) -> bool {
        self.0 & SCROLL_V != 0
    }

    #[inline]
    pub const fn separator(self) -> bool {
        self.0 & SEPARATOR != 0
    }

    #[inline]
    pub const fn is_box(self) -> bool {
        self.0 & BOX != 0
    }

    /// Decoded container kind, `None` for an unassigned code.
    #[inline]
    pub const fn kind(self) -> Option<ContainerKind> {
        ContainerKind::from_code((self.0 & KIND_MASK) >> KIND_SHIFT)
    }

    pub const fn with_kind(self, kind: ContainerKind) -> Self {
        Self((self.0 & !KIND_MASK) | (kind.code() << KIND_SHIFT))
    }

    /// Replace every bit except the kind field with `other`'s.
    pub(crate) const fn merge_keeping_kind(self, other: LayoutFlags) -> Self {
        Self((other.0 & !KIND_MASK) | (self.0 & KIND_MASK))
    }
}
