//! Draw list - the hand-off to an external renderer.
//!
//! The layout engine does not draw. After an arrangement pass, `DrawList::build`
//! turns every resolved node into renderer-agnostic commands: box and
//! background fills, separator lines, and whatever the draw callbacks of bound
//! properties emit. Commands are in painter's order.

use serde::Serialize;

use crate::arrange::Arrangement;
use crate::config::Theme;
use crate::error::PropertyError;
use crate::primitives::{Color, Rect};
use crate::property::PropertyRegistry;

/// A single renderer-agnostic command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Solid background fill.
    Fill { rect: Rect, color: Color },
    /// Divider line between two siblings.
    Separator { rect: Rect, color: Color },
    /// A text label positioned in a rect.
    Text { rect: Rect, text: String, color: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    #[serde(skip)]
    text_color: Color,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            text_color: Theme::default().text,
        }
    }

    /// Build the draw list for an arrangement.
    ///
    /// Per node in pre-order: a fill (box nodes always, using the theme's box
    /// color when the node inherits; other nodes only with an explicit
    /// background), then the bound property's draw callback. Separators come
    /// last so they sit on top of child fills.
    pub fn build(
        arrangement: &Arrangement,
        theme: &Theme,
        properties: Option<&PropertyRegistry>,
    ) -> Result<Self, PropertyError> {
        let mut list = Self {
            commands: Vec::with_capacity(arrangement.len()),
            text_color: theme.text,
        };

        for node in arrangement.iter() {
            let fill = match (node.flags.is_box(), node.background) {
                (_, Some(color)) => Some(color),
                (true, None) => Some(theme.box_background),
                (false, None) => None,
            };
            if let Some(color) = fill {
                list.push_fill(node.rect, color);
            }

            if let (Some(registry), Some(property)) = (properties, node.property) {
                registry.draw(property, node.rect, &mut list)?;
            }
        }

        for &rect in arrangement.separators() {
            list.push_separator(rect, theme.separator);
        }

        tracing::debug!(commands = list.len(), "draw list built");
        Ok(list)
    }

    pub fn push_fill(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    pub fn push_separator(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Separator { rect, color });
    }

    /// Push a label using the list's theme text color.
    pub fn push_text(&mut self, rect: Rect, text: impl Into<String>) {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.into(),
            color: self.text_color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
