//! Error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("parent handle does not belong to this area or is stale")]
    InvalidParent,

    #[error("layout handle does not belong to this area or is stale")]
    InvalidHandle,

    #[error("split ratio {0} is outside [0, 1]")]
    InvalidRatio(f32),

    #[error("list row height {0} must be a finite non-negative value")]
    InvalidRowHeight(f32),

    #[error("natural size {width}x{height} must be finite and non-negative")]
    InvalidSize { width: f32, height: f32 },

    #[error("container expects {expected} children, found {found}")]
    InvalidChildCount { expected: usize, found: usize },

    #[error("layout tree deeper than {limit} levels")]
    MaxDepthExceeded { limit: usize },

    #[error("area has no free node slots")]
    AreaFull,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("property already registered: {0}")]
    DuplicateName(String),

    #[error("unknown or unregistered property")]
    UnknownProperty,

    #[error("type mismatch: property holds {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
