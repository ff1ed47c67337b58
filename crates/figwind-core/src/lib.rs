//! Core types for figwind.
//!
//! This crate defines the read-only design node model, the generic markup
//! tree, generation options and the host interface the generator reads
//! images, vectors, styles and variables through.

pub mod element;
pub mod errors;
pub mod host;
pub mod node;
pub mod options;
pub mod types;

pub use element::{Content, Element, CLASS_ATTRIBUTE};
pub use errors::HostError;
pub use host::{DocumentHost, PaintStyle, Variable, VariableType};
pub use node::*;
pub use options::{CodegenOptions, ColorNaming};
pub use types::{Classes, Color, NodeId, Size, Vector};
