//! Conflict-aware merging of utility class lists.
//!
//! Generators are run in a fixed order per node and may emit classes for
//! the same CSS property (a layout `w-fit` followed by a position
//! `w-[10rem]`). Merging keeps only the last class of each property
//! category, at the position where it was last seen.

use crate::keywords::KeywordTables;

/// The CSS property a utility class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Position,
    Left,
    Top,
    Width,
    Height,
    Display,
    FlexDirection,
    Flex,
    AlignSelf,
    Overflow,
    Gap,
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    JustifyContent,
    AlignItems,
    Background,
    BorderWidth,
    BorderWidthTop,
    BorderWidthRight,
    BorderWidthBottom,
    BorderWidthLeft,
    BorderColor,
    Rounded,
    RoundedTopLeft,
    RoundedTopRight,
    RoundedBottomRight,
    RoundedBottomLeft,
    TextAlign,
    FontSize,
    TextColor,
    FontFamily,
    FontWeight,
    FontStyle,
    LineHeight,
    LetterSpacing,
    Opacity,
}

/// Utilities whose category follows from the name alone, longest first
/// where names share a prefix.
const PREFIXES: &[(&str, Category)] = &[
    ("left", Category::Left),
    ("top", Category::Top),
    ("w", Category::Width),
    ("h", Category::Height),
    ("self", Category::AlignSelf),
    ("overflow", Category::Overflow),
    ("gap", Category::Gap),
    ("px", Category::PaddingX),
    ("py", Category::PaddingY),
    ("pt", Category::PaddingTop),
    ("pr", Category::PaddingRight),
    ("pb", Category::PaddingBottom),
    ("pl", Category::PaddingLeft),
    ("p", Category::Padding),
    ("justify", Category::JustifyContent),
    ("items", Category::AlignItems),
    ("bg", Category::Background),
    ("border-t", Category::BorderWidthTop),
    ("border-r", Category::BorderWidthRight),
    ("border-b", Category::BorderWidthBottom),
    ("border-l", Category::BorderWidthLeft),
    ("rounded-tl", Category::RoundedTopLeft),
    ("rounded-tr", Category::RoundedTopRight),
    ("rounded-br", Category::RoundedBottomRight),
    ("rounded-bl", Category::RoundedBottomLeft),
    ("rounded", Category::Rounded),
    ("leading", Category::LineHeight),
    ("tracking", Category::LetterSpacing),
    ("opacity", Category::Opacity),
];

/// Property category of a class, or `None` for classes we do not know.
pub fn category(class: &str, tables: &KeywordTables) -> Option<Category> {
    match class {
        "absolute" | "relative" | "fixed" | "static" | "sticky" => {
            return Some(Category::Position)
        }
        "flex" | "block" | "inline" | "inline-flex" | "hidden" => {
            return Some(Category::Display)
        }
        "flex-row" | "flex-col" => return Some(Category::FlexDirection),
        "flex-1" | "flex-auto" | "flex-none" => return Some(Category::Flex),
        "italic" | "not-italic" => return Some(Category::FontStyle),
        "border" => return Some(Category::BorderWidth),
        _ => {}
    }

    for (prefix, found) in PREFIXES {
        if class == *prefix || value_of(class, prefix).is_some() {
            return Some(*found);
        }
    }

    if let Some(value) = value_of(class, "border") {
        return Some(if is_border_width(value, tables) {
            Category::BorderWidth
        } else {
            Category::BorderColor
        });
    }
    if let Some(value) = value_of(class, "text") {
        return Some(match value {
            "left" | "center" | "right" | "justify" => Category::TextAlign,
            _ if is_font_size(value, tables) => Category::FontSize,
            _ => Category::TextColor,
        });
    }
    if let Some(value) = value_of(class, "font") {
        return Some(if is_font_weight(value, tables) {
            Category::FontWeight
        } else {
            Category::FontFamily
        });
    }
    None
}

/// Merge class lists in order.
///
/// Empty classes are skipped. A class replaces any earlier identical class
/// and any earlier class of the same category; the survivor keeps the
/// later position.
pub fn merge_classes<'a, I>(tables: &KeywordTables, lists: I) -> String
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut merged: Vec<(Option<Category>, &str)> = Vec::new();
    for class in lists.into_iter().flatten() {
        let class = class.as_str();
        if class.is_empty() {
            continue;
        }
        let category = category(class, tables);
        merged.retain(|(existing_category, existing)| {
            *existing != class && (category.is_none() || *existing_category != category)
        });
        merged.push((category, class));
    }
    merged
        .iter()
        .map(|(_, class)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_of<'a>(class: &'a str, utility: &str) -> Option<&'a str> {
    class
        .strip_prefix(utility)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|value| !value.is_empty())
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[').and_then(|v| v.strip_suffix(']'))
}

fn is_length(value: &str) -> bool {
    ["rem", "px", "em"]
        .iter()
        .filter_map(|unit| value.strip_suffix(unit))
        .any(|number| number.parse::<f64>().is_ok())
}

fn is_border_width(value: &str, tables: &KeywordTables) -> bool {
    match arbitrary(value) {
        Some(inner) => is_length(inner) || inner.parse::<f64>().is_ok(),
        None => tables.border_width.contains_keyword(value),
    }
}

fn is_font_size(value: &str, tables: &KeywordTables) -> bool {
    match arbitrary(value) {
        Some(inner) => is_length(inner),
        None => tables.font_size.contains_keyword(value),
    }
}

fn is_font_weight(value: &str, tables: &KeywordTables) -> bool {
    match arbitrary(value) {
        Some(inner) => inner.parse::<f64>().is_ok(),
        None => tables.font_weight.contains_keyword(value),
    }
}
