//! User-facing generation options.

/// Options controlling what the generator emits.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CodegenOptions {
    /// Emit `font-['Family']` for text nodes.
    pub emits_font_family: bool,
    /// Emit a sanitized, unique `id` attribute derived from the layer name.
    pub emits_layer_name: bool,
    pub color_naming: ColorNaming,
}

impl CodegenOptions {
    pub fn with_font_family(mut self, enabled: bool) -> Self {
        self.emits_font_family = enabled;
        self
    }

    pub fn with_layer_name(mut self, enabled: bool) -> Self {
        self.emits_layer_name = enabled;
        self
    }

    pub fn with_color_naming(mut self, color_naming: ColorNaming) -> Self {
        self.color_naming = color_naming;
        self
    }
}

/// Naming of colors that come from paint styles or variables.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ColorNaming {
    pub enabled: bool,
    /// Prepended to every named color, e.g. `brand-`.
    pub prefix: String,
    /// Convert names to kebab case.
    pub auto_kebab: bool,
}

impl ColorNaming {
    pub fn enabled(prefix: impl Into<String>, auto_kebab: bool) -> Self {
        Self {
            enabled: true,
            prefix: prefix.into(),
            auto_kebab,
        }
    }
}
