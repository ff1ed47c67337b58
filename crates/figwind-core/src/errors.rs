//! Error types shared across figwind crates.

use thiserror::Error;

use crate::types::NodeId;

/// Failures reported by the document host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Vector export failed for node {node}: {reason}")]
    ExportFailed { node: NodeId, reason: String },

    #[error("Node {node} has no exported vector graphic")]
    MissingExport { node: NodeId },
}
