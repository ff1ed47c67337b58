use figwind_core::{Classes, LetterSpacingUnit, LineHeight, Paint, Text, TextAlign};
use figwind_resolver::format_number;

use super::StyleGenerator;

const DEFAULT_WEIGHT: u16 = 400;

const WEIGHT_NAMES: &[(&str, u16)] = &[
    ("thin", 100),
    ("hairline", 100),
    ("extralight", 200),
    ("ultralight", 200),
    ("light", 300),
    ("regular", 400),
    ("normal", 400),
    ("book", 400),
    ("medium", 500),
    ("semibold", 600),
    ("demibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("black", 900),
    ("heavy", 900),
    ("w1", 100),
    ("w2", 200),
    ("w3", 300),
    ("w4", 400),
    ("w5", 500),
    ("w6", 600),
    ("w7", 700),
    ("w8", 800),
    ("w9", 900),
];

/// Numeric weight and italic flag from a font style name such as
/// `"Semi Bold Italic"`. Unknown styles weigh 400.
pub fn parse_font_style(style: &str) -> (u16, bool) {
    let style = style.to_lowercase();
    let italic = style.contains("italic");
    let key: String = style
        .replace("italic", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let weight = WEIGHT_NAMES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_WEIGHT, |&(_, weight)| weight);
    (weight, italic)
}

impl StyleGenerator<'_> {
    /// Typography classes, sampled from the first character run.
    pub fn text(&self, text: &Text) -> Classes {
        let resolver = self.resolver;
        let mut classes = Classes::new();

        classes.push(
            match text.text_align_horizontal {
                TextAlign::Left => "text-left",
                TextAlign::Center => "text-center",
                TextAlign::Right => "text-right",
                TextAlign::Justified => "text-justify",
            }
            .to_string(),
        );

        let run = text.first_run();
        if let Some(run) = run {
            classes.push(format!("text{}", resolver.font_size(run.font_size)));

            if self.options.emits_font_family && !run.font_name.family.is_empty() {
                let family = run
                    .font_name
                    .family
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_");
                classes.push(format!("font-['{family}']"));
            }

            let (weight, italic) = parse_font_style(&run.font_name.style);
            classes.push(format!("font{}", resolver.font_weight(weight)));
            if italic {
                classes.push("italic".to_string());
            }
        }

        if let Some(fill) = text.paints.first_fill().and_then(Paint::as_solid) {
            classes.push(self.paint_color("text", text.paints.fill_style_id.as_deref(), fill));
        }

        let Some(run) = run else {
            return classes;
        };

        match run.line_height {
            LineHeight::Pixels { value } => {
                classes.push(format!("leading{}", resolver.line_height_px(value)));
            }
            LineHeight::Percent { value } => {
                classes.push(format!("leading{}", resolver.line_height_percent(value)));
            }
            LineHeight::Auto => {}
        }

        let spacing = run.letter_spacing;
        if spacing.value != 0.0 {
            classes.push(match spacing.unit {
                LetterSpacingUnit::Percent => {
                    format!("tracking{}", resolver.letter_spacing_percent(spacing.value))
                }
                LetterSpacingUnit::Pixels => {
                    format!("tracking-[{}px]", format_number(spacing.value))
                }
            });
        }
        classes
    }
}
