use figwind_core::{Classes, CornerRadii, Paint, Paints};

use super::StyleGenerator;

impl StyleGenerator<'_> {
    /// Border width and color from the first stroke, plus corner radii.
    pub fn border(&self, paints: &Paints, radii: Option<&CornerRadii>) -> Classes {
        let resolver = self.resolver;
        let mut classes = Classes::new();

        if let Some(stroke) = paints.first_stroke().and_then(Paint::as_solid) {
            let weights = paints.stroke_weights;
            if weights.is_uniform() {
                if weights.top != 0.0 {
                    classes.push(format!("border{}", resolver.border_width(weights.top)));
                }
            } else {
                for (utility, weight) in [
                    ("border-t", weights.top),
                    ("border-b", weights.bottom),
                    ("border-l", weights.left),
                    ("border-r", weights.right),
                ] {
                    if weight != 0.0 {
                        classes.push(format!("{utility}{}", resolver.border_width(weight)));
                    }
                }
            }
            classes.push(self.paint_color("border", paints.stroke_style_id.as_deref(), stroke));
        }

        if let Some(radii) = radii {
            if radii.is_uniform() {
                if radii.top_left != 0.0 {
                    classes.push(format!("rounded{}", resolver.border_radius(radii.top_left)));
                }
            } else {
                for (utility, radius) in [
                    ("rounded-tl", radii.top_left),
                    ("rounded-tr", radii.top_right),
                    ("rounded-bl", radii.bottom_left),
                    ("rounded-br", radii.bottom_right),
                ] {
                    if radius != 0.0 {
                        classes.push(format!("{utility}{}", resolver.border_radius(radius)));
                    }
                }
            }
        }
        classes
    }
}
