//! Design-system themes.
//!
//! A theme maps keywords to values for each scale the generators resolve
//! against. The JSON layout follows the utility framework's own theme
//! object, so a resolved framework config can be loaded directly. Scales
//! the generators never read (screens, shadows, ...) are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keywords::format_number;

const TAILWIND_THEME: &str = include_str!("../theme/tailwind.json");

/// Keyword to value map of one scale, in declaration order.
pub type Scale = IndexMap<String, ThemeValue>;

/// A value in a theme scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Number(f64),
    Text(String),
    /// Tuple form, as used by font sizes: `["1rem", { "lineHeight": ... }]`.
    List(Vec<ThemeValue>),
    /// Nested group, as used by color palettes.
    Group(IndexMap<String, ThemeValue>),
}

impl ThemeValue {
    /// The value as a string, if it is a scalar.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            ThemeValue::Number(n) => Some(format_number(*n)),
            ThemeValue::Text(s) => Some(s.clone()),
            ThemeValue::List(_) | ThemeValue::Group(_) => None,
        }
    }
}

/// The scales read by the class resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub spacing: Scale,
    pub line_height: Scale,
    pub letter_spacing: Scale,
    pub font_weight: Scale,
    pub font_size: Scale,
    pub border_width: Scale,
    pub border_radius: Scale,
    pub colors: Scale,
}

impl Theme {
    /// The framework's default theme.
    pub fn tailwind() -> Result<Self> {
        Self::from_json(TAILWIND_THEME)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_loads() {
        let theme = Theme::tailwind().unwrap();
        assert_eq!(
            theme.spacing.get("4"),
            Some(&ThemeValue::Text("1rem".to_string()))
        );
        assert!(matches!(theme.colors.get("red"), Some(ThemeValue::Group(_))));
        assert!(matches!(theme.font_size.get("base"), Some(ThemeValue::List(_))));
    }

    #[test]
    fn test_unknown_scales_are_ignored() {
        let theme = Theme::from_json(r#"{ "screens": { "sm": "640px" }, "spacing": { "1": 4 } }"#)
            .unwrap();
        assert_eq!(theme.spacing.get("1").and_then(ThemeValue::as_scalar), Some("4".to_string()));
        assert!(theme.colors.is_empty());
    }

    #[test]
    fn test_malformed_theme_is_an_error() {
        assert!(Theme::from_json("[1, 2]").is_err());
        assert!(Theme::from_json(r#"{ "spacing": { "1": null } }"#).is_err());
    }
}
