//! Utility class generators.
//!
//! Each generator reads one aspect of a node (position, auto layout, fill,
//! border, text, effects) and returns an ordered class list. Generators
//! never merge; the markup generator merges their output per node.

mod border;
mod effect;
mod fill;
mod layout;
mod position;
mod text;

pub use text::parse_font_style;

use convert_case::{Case, Casing};
use figwind_core::{CodegenOptions, DocumentHost, SolidPaint};
use figwind_resolver::ClassResolver;
use tracing::debug;

/// Shared state for the class generators of one traversal.
#[derive(Clone, Copy)]
pub struct StyleGenerator<'a> {
    resolver: &'a ClassResolver,
    options: &'a CodegenOptions,
    host: &'a dyn DocumentHost,
}

impl<'a> StyleGenerator<'a> {
    pub fn new(
        resolver: &'a ClassResolver,
        options: &'a CodegenOptions,
        host: &'a dyn DocumentHost,
    ) -> Self {
        Self {
            resolver,
            options,
            host,
        }
    }

    pub fn resolver(&self) -> &'a ClassResolver {
        self.resolver
    }

    /// Color class for a solid paint, e.g. `bg-red-500` or `border-[#123456]`.
    ///
    /// With color naming enabled, a paint style name or a bound color
    /// variable takes precedence over palette resolution. Names that would
    /// read as another utility (a style named `lg` giving `text-lg`) are
    /// not used.
    fn paint_color(&self, utility: &str, style_id: Option<&str>, paint: &SolidPaint) -> String {
        let resolved = format!("{utility}{}", self.resolver.color(&paint.to_hex()));
        let Some(name) = self.color_name(style_id, paint) else {
            return resolved;
        };
        let naming = &self.options.color_naming;
        let name = if naming.auto_kebab {
            name.replace('/', " ").to_case(Case::Kebab)
        } else {
            name
        };
        let named = format!("{utility}-{}{name}", naming.prefix);
        if self.resolver.category(&named) != self.resolver.category(&resolved) {
            debug!(class = %named, fallback = %resolved, "color name clashes with another utility");
            return resolved;
        }
        named
    }

    fn color_name(&self, style_id: Option<&str>, paint: &SolidPaint) -> Option<String> {
        if !self.options.color_naming.enabled {
            return None;
        }
        if let Some(style) = style_id.and_then(|id| self.host.paint_style(id)) {
            return Some(style.name);
        }
        let variable = self.host.variable(paint.bound_variable.as_deref()?)?;
        variable.color_name().map(str::to_string)
    }
}

impl std::fmt::Debug for StyleGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleGenerator")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use figwind_core::CodegenOptions;
    use figwind_resolver::ClassResolver;

    use crate::snapshot::Snapshot;

    /// Resolver, options and host for generator tests.
    pub struct Fixture {
        pub resolver: ClassResolver,
        pub options: CodegenOptions,
        pub host: Snapshot,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                resolver: ClassResolver::tailwind().unwrap(),
                options: CodegenOptions::default(),
                host: Snapshot::default(),
            }
        }

        pub fn styles(&self) -> super::StyleGenerator<'_> {
            super::StyleGenerator::new(&self.resolver, &self.options, &self.host)
        }
    }
}
