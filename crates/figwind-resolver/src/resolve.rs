//! Numeric design values to utility class suffixes.
//!
//! Every resolver returns a suffix to append to a utility name: `-{keyword}`
//! when the value is on the theme scale, an empty string for the scale's
//! `DEFAULT` keyword, or an arbitrary-value literal `-[{value}]`.

use crate::error::Result;
use crate::keywords::{format_number, KeywordTable, KeywordTables, DEFAULT_KEYWORD};
use crate::merge::{category, merge_classes, Category};
use crate::theme::Theme;

/// Root font size used to convert pixels to rem.
pub const REM_PX: f64 = 16.0;

/// Resolves design values against a theme's keyword tables.
#[derive(Debug, Clone)]
pub struct ClassResolver {
    tables: KeywordTables,
}

impl ClassResolver {
    pub fn new(theme: &Theme) -> Result<Self> {
        Ok(Self::from_tables(KeywordTables::build(theme)?))
    }

    /// Resolver over the built-in default theme.
    pub fn tailwind() -> Result<Self> {
        Self::new(&Theme::tailwind()?)
    }

    pub fn from_tables(tables: KeywordTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Spacing in pixels (insets, sizes, gaps, paddings).
    pub fn spacing(&self, px: f64) -> String {
        if px == 0.0 {
            return "-0".to_string();
        }
        keyword_or_arbitrary(&self.tables.spacing, &rem(px))
    }

    pub fn line_height_px(&self, px: f64) -> String {
        keyword_or_arbitrary(&self.tables.line_height, &rem(px))
    }

    /// Line height given as a percentage of the font size.
    pub fn line_height_percent(&self, percent: f64) -> String {
        keyword_or_arbitrary(&self.tables.line_height, &format_number(percent / 100.0))
    }

    pub fn letter_spacing_percent(&self, percent: f64) -> String {
        let em = format!("{}em", format_number(percent / 100.0));
        keyword_or_arbitrary(&self.tables.letter_spacing, &em)
    }

    pub fn font_weight(&self, weight: u16) -> String {
        keyword_or_arbitrary(&self.tables.font_weight, &weight.to_string())
    }

    pub fn font_size(&self, px: f64) -> String {
        keyword_or_arbitrary(&self.tables.font_size, &rem(px))
    }

    /// Border widths stay in pixels.
    pub fn border_width(&self, px: f64) -> String {
        let value = format!("{}px", format_number(px));
        keyword_or_arbitrary(&self.tables.border_width, &value)
    }

    pub fn border_radius(&self, px: f64) -> String {
        keyword_or_arbitrary(&self.tables.border_radius, &rem(px))
    }

    /// Color given as `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// White, black and any fully transparent color resolve to fixed
    /// keywords regardless of the theme.
    pub fn color(&self, hex: &str) -> String {
        let hex = hex.to_lowercase();
        if hex == "#ffffff" {
            return "-white".to_string();
        }
        if hex == "#000000" {
            return "-black".to_string();
        }
        if hex.len() == 9 && hex.ends_with("00") {
            return "-transparent".to_string();
        }
        keyword_or_arbitrary(&self.tables.color, &hex)
    }

    /// Property category a class is merged under.
    pub fn category(&self, class: &str) -> Option<Category> {
        category(class, &self.tables)
    }

    /// Merge generator class lists into one `class` attribute value.
    ///
    /// See [`merge_classes`].
    pub fn merge<'a, I>(&self, lists: I) -> String
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        merge_classes(&self.tables, lists)
    }
}

fn rem(px: f64) -> String {
    format!("{}rem", format_number(px / REM_PX))
}

/// `-{keyword}`, `""` for the default keyword, or `-[{value}]`.
pub fn keyword_or_arbitrary(table: &KeywordTable, value: &str) -> String {
    match table.keyword_for(value) {
        Some(DEFAULT_KEYWORD) => String::new(),
        Some(keyword) => format!("-{keyword}"),
        None => format!("-[{value}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn resolver() -> ClassResolver {
        ClassResolver::tailwind().unwrap()
    }

    #[test]
    fn test_spacing() {
        let resolver = resolver();
        assert_eq!(resolver.spacing(16.0), "-4");
        assert_eq!(resolver.spacing(2.0), "-0.5");
        assert_eq!(resolver.spacing(0.0), "-0");
        assert_eq!(resolver.spacing(-0.0), "-0");
        assert_eq!(resolver.spacing(13.0), "-[0.8125rem]");
        assert_eq!(resolver.spacing(-8.0), "-[-0.5rem]");
    }

    #[test]
    fn test_typography() {
        let resolver = resolver();
        assert_eq!(resolver.font_size(16.0), "-base");
        assert_eq!(resolver.font_size(15.0), "-[0.9375rem]");
        assert_eq!(resolver.font_weight(600), "-semibold");
        assert_eq!(resolver.line_height_px(24.0), "-6");
        assert_eq!(resolver.line_height_percent(150.0), "-normal");
        assert_eq!(resolver.line_height_percent(120.0), "-[1.2]");
        assert_eq!(resolver.letter_spacing_percent(-5.0), "-tighter");
        assert_eq!(resolver.letter_spacing_percent(3.0), "-[0.03em]");
    }

    #[test]
    fn test_borders() {
        let resolver = resolver();
        assert_eq!(resolver.border_width(1.0), "");
        assert_eq!(resolver.border_width(2.0), "-2");
        assert_eq!(resolver.border_width(3.0), "-[3px]");
        assert_eq!(resolver.border_radius(4.0), "");
        assert_eq!(resolver.border_radius(8.0), "-lg");
        assert_eq!(resolver.border_radius(5.0), "-[0.3125rem]");
    }

    #[test]
    fn test_fixed_colors() {
        let resolver = resolver();
        assert_eq!(resolver.color("#FFFFFF"), "-white");
        assert_eq!(resolver.color("#000000"), "-black");
        assert_eq!(resolver.color("#12345600"), "-transparent");
        assert_eq!(resolver.color("#FFFFFF00"), "-transparent");
    }

    #[test]
    fn test_palette_and_arbitrary_colors() {
        let resolver = resolver();
        assert_eq!(resolver.color("#EF4444"), "-red-500");
        assert_eq!(resolver.color("#123456"), "-[#123456]");
        assert_eq!(resolver.color("#EF444480"), "-[#ef444480]");
    }

    #[test]
    fn test_category_of_text_classes() {
        let resolver = resolver();
        assert_eq!(resolver.category("text-lg"), Some(Category::FontSize));
        assert_eq!(resolver.category("text-red-500"), Some(Category::TextColor));
        assert_eq!(resolver.category("text-center"), Some(Category::TextAlign));
        assert_eq!(resolver.category("unknown"), None);
    }

    proptest! {
        #[test]
        fn prop_spacing_keywords_round_trip(index in 0usize..35) {
            let resolver = resolver();
            let entries: Vec<_> = resolver
                .tables()
                .spacing
                .iter()
                .filter(|(value, _)| value.ends_with("rem"))
                .map(|(value, keyword)| (value.clone(), keyword.clone()))
                .collect();
            let (value, keyword) = &entries[index % entries.len()];
            let rem: f64 = value.trim_end_matches("rem").parse().unwrap();
            prop_assert_eq!(resolver.spacing(rem * REM_PX), format!("-{keyword}"));
        }

        #[test]
        fn prop_off_scale_spacing_is_arbitrary(px in 1u32..2000) {
            let resolver = resolver();
            let px = px as f64 + 0.5;
            let suffix = resolver.spacing(px);
            prop_assert_eq!(suffix, format!("-[{}rem]", format_number(px / REM_PX)));
        }

        #[test]
        fn prop_arbitrary_colors_are_lowercase(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02X}{g:02X}{b:02X}");
            let suffix = resolver().color(&hex);
            prop_assert!(suffix.starts_with('-'));
            prop_assert_eq!(suffix.to_lowercase(), suffix.clone());
        }
    }
}
