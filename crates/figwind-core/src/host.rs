//! Read interface onto the design tool hosting the document.

use async_trait::async_trait;

use crate::errors::HostError;
use crate::node::DesignNode;

/// A named paint style from the host document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaintStyle {
    pub name: String,
}

/// Resolved type of a host variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VariableType {
    Color,
    Float,
    String,
    Boolean,
}

/// A host variable that paints can be bound to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Variable {
    pub name: String,
    pub resolved_type: VariableType,
    /// Code syntax declared for the web platform, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub web_syntax: Option<String>,
}

impl Variable {
    /// Name to use for a color utility, preferring the web code syntax.
    /// Non-color variables have none.
    pub fn color_name(&self) -> Option<&str> {
        if self.resolved_type != VariableType::Color {
            return None;
        }
        Some(self.web_syntax.as_deref().unwrap_or(&self.name))
    }
}

/// Operations the generator needs from the host document.
///
/// Only image retrieval and vector export suspend; style and variable
/// lookups are synchronous and optional.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Bytes of the image behind an image paint reference.
    async fn image_bytes(&self, image_ref: &str) -> Option<Vec<u8>>;

    /// Export a node as an SVG document.
    async fn export_vector(&self, node: &DesignNode) -> Result<Vec<u8>, HostError>;

    fn paint_style(&self, _style_id: &str) -> Option<PaintStyle> {
        None
    }

    fn variable(&self, _variable_id: &str) -> Option<Variable> {
        None
    }
}
