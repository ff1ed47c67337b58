//! Design node to utility-class markup generation.
//!
//! The [`MarkupGenerator`] walks selected design nodes and builds a
//! generic [`Element`](figwind_core::Element) tree whose elements carry
//! merged utility classes. The tree is turned into text by
//! [`serialize`](serialize::serialize).
//!
//! # Example
//!
//! ```ignore
//! use figwind_codegen::{generate, serialize, MarkupFormat, Snapshot};
//! use figwind_core::CodegenOptions;
//! use figwind_resolver::ClassResolver;
//!
//! let snapshot = Snapshot::load("selection.json")?;
//! let resolver = ClassResolver::tailwind()?;
//! let generated = generate(&snapshot, &resolver, &CodegenOptions::default(), &snapshot.selection).await;
//! println!("{}", serialize(&generated.root, MarkupFormat::Html));
//! ```

pub mod characters;
pub mod classify;
pub mod error;
pub mod ids;
pub mod image;
pub mod markup;
pub mod serialize;
pub mod snapshot;
pub mod style;
pub mod svg;
pub mod vector;

pub use error::{CodegenError, Result};
pub use markup::{Generated, LayoutContext, MarkupGenerator};
pub use serialize::{serialize, to_html, to_jsx, MarkupFormat};
pub use snapshot::Snapshot;
pub use style::{parse_font_style, StyleGenerator};

use figwind_core::{CodegenOptions, DesignNode, DocumentHost};
use figwind_resolver::ClassResolver;

/// Generate markup for a selection with a fresh generator.
pub async fn generate(
    host: &dyn DocumentHost,
    resolver: &ClassResolver,
    options: &CodegenOptions,
    nodes: &[DesignNode],
) -> Generated {
    MarkupGenerator::new(host, resolver, options)
        .generate_selection(nodes)
        .await
}

/// Parse options JSON. Missing fields take their defaults.
pub fn parse_options(json: &str) -> Result<CodegenOptions> {
    serde_json::from_str(json).map_err(CodegenError::Options)
}
