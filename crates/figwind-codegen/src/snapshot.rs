//! A serializable document snapshot that stands in for a live host.
//!
//! ```json
//! {
//!   "selection": [{ "id": "1:2", "type": "FRAME", ... }],
//!   "images": { "<image ref>": "<base64 bytes>" },
//!   "vectors": { "<node id>": "<svg>...</svg>" },
//!   "paintStyles": { "S:1": { "name": "Brand/Primary" } },
//!   "variables": { "V:1": { "name": "surface", "resolvedType": "COLOR" } }
//! }
//! ```

use std::path::Path;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use figwind_core::{DesignNode, DocumentHost, HostError, NodeId, PaintStyle, Variable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Selected nodes plus everything the generator may ask the host for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub selection: Vec<DesignNode>,
    /// Base64 image bytes by image reference.
    pub images: IndexMap<String, String>,
    /// Exported SVG text by node id.
    pub vectors: IndexMap<NodeId, String>,
    pub paint_styles: IndexMap<String, PaintStyle>,
    pub variables: IndexMap<String, Variable>,
}

impl Snapshot {
    /// Parse snapshot JSON, rejecting image data that is not base64.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json).map_err(CodegenError::Snapshot)?;
        for (image_ref, data) in &snapshot.images {
            STANDARD
                .decode(data)
                .map_err(|source| CodegenError::ImageData {
                    image_ref: image_ref.clone(),
                    source,
                })?;
        }
        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn with_node(mut self, node: DesignNode) -> Self {
        self.selection.push(node);
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>, bytes: &[u8]) -> Self {
        self.images.insert(image_ref.into(), STANDARD.encode(bytes));
        self
    }

    pub fn with_vector(mut self, node: impl Into<NodeId>, svg: impl Into<String>) -> Self {
        self.vectors.insert(node.into(), svg.into());
        self
    }

    pub fn with_paint_style(mut self, id: impl Into<String>, style: PaintStyle) -> Self {
        self.paint_styles.insert(id.into(), style);
        self
    }

    pub fn with_variable(mut self, id: impl Into<String>, variable: Variable) -> Self {
        self.variables.insert(id.into(), variable);
        self
    }
}

#[async_trait]
impl DocumentHost for Snapshot {
    async fn image_bytes(&self, image_ref: &str) -> Option<Vec<u8>> {
        STANDARD.decode(self.images.get(image_ref)?).ok()
    }

    async fn export_vector(&self, node: &DesignNode) -> std::result::Result<Vec<u8>, HostError> {
        match self.vectors.get(&node.id) {
            Some(svg) if svg.trim().is_empty() => Err(HostError::ExportFailed {
                node: node.id.clone(),
                reason: "empty export".to_string(),
            }),
            Some(svg) => Ok(svg.clone().into_bytes()),
            None => Err(HostError::MissingExport {
                node: node.id.clone(),
            }),
        }
    }

    fn paint_style(&self, style_id: &str) -> Option<PaintStyle> {
        self.paint_styles.get(style_id).cloned()
    }

    fn variable(&self, variable_id: &str) -> Option<Variable> {
        self.variables.get(variable_id).cloned()
    }
}
