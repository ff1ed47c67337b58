//! Value to keyword lookup tables.
//!
//! Each theme scale is inverted once into a table keyed by the normalized
//! value string. Lookups are exact string matches, so resolvers must
//! render their input through [`format_number`] with the same unit.

use figwind_core::Color;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::theme::{Scale, Theme, ThemeValue};

/// Keyword that resolves to the bare utility name.
pub const DEFAULT_KEYWORD: &str = "DEFAULT";

/// An inverted theme scale.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    by_value: IndexMap<String, String>,
    keywords: IndexSet<String>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a value to a keyword. A later keyword for the same value wins.
    pub fn insert(&mut self, value: &str, keyword: &str) {
        self.by_value
            .insert(normalize_value(value), keyword.to_string());
        self.keywords.insert(keyword.to_string());
    }

    /// Keyword for an already normalized value.
    pub fn keyword_for(&self, value: &str) -> Option<&str> {
        self.by_value.get(value).map(String::as_str)
    }

    /// Whether `keyword` is declared by this scale.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.by_value.iter()
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    fn from_scale(scale_name: &'static str, scale: &Scale) -> Result<Self> {
        let mut table = Self::new();
        for (keyword, value) in scale {
            let value = value.as_scalar().ok_or_else(|| ThemeError::NonScalar {
                scale: scale_name,
                keyword: keyword.clone(),
            })?;
            table.insert(&value, keyword);
        }
        Ok(table)
    }

    /// Font sizes are either a plain size or a `[size, options]` tuple.
    fn from_font_sizes(scale: &Scale) -> Result<Self> {
        let mut table = Self::new();
        for (keyword, value) in scale {
            let size = match value {
                ThemeValue::List(items) => items
                    .first()
                    .ok_or_else(|| ThemeError::EmptyFontSize {
                        keyword: keyword.clone(),
                    })?
                    .as_scalar(),
                other => other.as_scalar(),
            };
            let size = size.ok_or_else(|| ThemeError::NonScalar {
                scale: "fontSize",
                keyword: keyword.clone(),
            })?;
            table.insert(&size, keyword);
        }
        Ok(table)
    }

    fn from_colors(scale: &Scale) -> Result<Self> {
        let mut table = Self::new();
        flatten_colors(&mut table, scale, "")?;
        Ok(table)
    }
}

fn flatten_colors(table: &mut KeywordTable, group: &Scale, prefix: &str) -> Result<()> {
    for (key, value) in group {
        let keyword = if key == DEFAULT_KEYWORD && !prefix.is_empty() {
            prefix.trim_end_matches('-').to_string()
        } else {
            format!("{prefix}{key}")
        };
        match value {
            ThemeValue::Group(nested) => flatten_colors(table, nested, &format!("{keyword}-"))?,
            ThemeValue::List(_) => {
                return Err(ThemeError::NonScalar {
                    scale: "colors",
                    keyword,
                })
            }
            scalar => {
                if let Some(value) = scalar.as_scalar() {
                    table.insert(&value, &keyword);
                }
            }
        }
    }
    Ok(())
}

/// Keyword tables for every scale the generators use.
#[derive(Debug, Clone, Default)]
pub struct KeywordTables {
    pub spacing: KeywordTable,
    pub line_height: KeywordTable,
    pub letter_spacing: KeywordTable,
    pub font_weight: KeywordTable,
    pub font_size: KeywordTable,
    pub border_width: KeywordTable,
    pub border_radius: KeywordTable,
    pub color: KeywordTable,
}

impl KeywordTables {
    pub fn build(theme: &Theme) -> Result<Self> {
        let tables = Self {
            spacing: KeywordTable::from_scale("spacing", &theme.spacing)?,
            line_height: KeywordTable::from_scale("lineHeight", &theme.line_height)?,
            letter_spacing: KeywordTable::from_scale("letterSpacing", &theme.letter_spacing)?,
            font_weight: KeywordTable::from_scale("fontWeight", &theme.font_weight)?,
            font_size: KeywordTable::from_font_sizes(&theme.font_size)?,
            border_width: KeywordTable::from_scale("borderWidth", &theme.border_width)?,
            border_radius: KeywordTable::from_scale("borderRadius", &theme.border_radius)?,
            color: KeywordTable::from_colors(&theme.colors)?,
        };
        debug!(
            spacing = tables.spacing.len(),
            colors = tables.color.len(),
            "Built keyword tables"
        );
        Ok(tables)
    }
}

/// Render a number the way class values are written: shortest form, no
/// trailing zeros, and never a negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

const UNITS: [&str; 4] = ["rem", "px", "em", "%"];

/// Normalize a theme value for exact matching.
///
/// Hex colors are lowercased and expanded (`#FFF` becomes `#ffffff`, and a
/// fully opaque alpha channel is dropped). Numbers, with or without a
/// unit, are re-rendered through [`format_number`] so `.75rem` and
/// `0.750rem` both become `0.75rem`.
pub fn normalize_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        return match Color::from_hex(trimmed) {
            Some(color) => color.to_hex().to_lowercase(),
            None => trimmed.to_lowercase(),
        };
    }
    for unit in UNITS {
        if let Some(number) = trimmed.strip_suffix(unit) {
            if let Ok(value) = number.parse::<f64>() {
                return format!("{}{}", format_number(value), unit);
            }
        }
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format_number(value),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tables() -> KeywordTables {
        KeywordTables::build(&Theme::tailwind().unwrap()).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.625), "0.625");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1.5), "-1.5");
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(".75rem"), "0.75rem");
        assert_eq!(normalize_value("#FFF"), "#ffffff");
        assert_eq!(normalize_value("#ef4444ff"), "#ef4444");
        assert_eq!(normalize_value("#00000080"), "#00000080");
        assert_eq!(normalize_value("-0.050em"), "-0.05em");
        assert_eq!(normalize_value("1.0"), "1");
        assert_eq!(normalize_value("currentColor"), "currentColor");
    }

    #[test]
    fn test_builtin_tables() {
        let tables = tables();
        assert_eq!(tables.spacing.keyword_for("1rem"), Some("4"));
        assert_eq!(tables.line_height.keyword_for("0.75rem"), Some("3"));
        assert_eq!(tables.line_height.keyword_for("1.5"), Some("normal"));
        assert_eq!(tables.font_size.keyword_for("1rem"), Some("base"));
        assert_eq!(tables.font_weight.keyword_for("700"), Some("bold"));
        assert_eq!(tables.border_width.keyword_for("1px"), Some(DEFAULT_KEYWORD));
        assert_eq!(tables.border_radius.keyword_for("0.25rem"), Some(DEFAULT_KEYWORD));
        assert_eq!(tables.color.keyword_for("#ef4444"), Some("red-500"));
        assert!(tables.font_size.contains_keyword("2xl"));
        assert!(!tables.border_width.contains_keyword("red-500"));
    }

    #[test]
    fn test_nested_default_color_uses_group_name() {
        let theme = Theme::from_json(
            r##"{ "colors": { "brand": { "DEFAULT": "#123456", "light": "#ABCDEF" } } }"##,
        )
        .unwrap();
        let tables = KeywordTables::build(&theme).unwrap();
        assert_eq!(tables.color.keyword_for("#123456"), Some("brand"));
        assert_eq!(tables.color.keyword_for("#abcdef"), Some("brand-light"));
    }

    #[test]
    fn test_later_keyword_wins_for_shared_value() {
        let theme = Theme::from_json(r#"{ "spacing": { "a": "1rem", "b": "1rem" } }"#).unwrap();
        let tables = KeywordTables::build(&theme).unwrap();
        assert_eq!(tables.spacing.keyword_for("1rem"), Some("b"));
    }

    #[test]
    fn test_non_scalar_values_are_rejected() {
        let theme = Theme::from_json(r#"{ "spacing": { "4": ["1rem"] } }"#).unwrap();
        assert!(matches!(
            KeywordTables::build(&theme),
            Err(ThemeError::NonScalar { scale: "spacing", .. })
        ));

        let theme = Theme::from_json(r#"{ "fontSize": { "xs": [] } }"#).unwrap();
        assert!(matches!(
            KeywordTables::build(&theme),
            Err(ThemeError::EmptyFontSize { .. })
        ));
    }
}
