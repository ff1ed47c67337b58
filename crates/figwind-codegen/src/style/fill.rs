use figwind_core::{Classes, Paint, Paints};

use super::StyleGenerator;

impl StyleGenerator<'_> {
    /// Background color from the first fill, when it is solid.
    pub fn fill(&self, paints: &Paints) -> Classes {
        let mut classes = Classes::new();
        if let Some(fill) = paints.first_fill().and_then(Paint::as_solid) {
            classes.push(self.paint_color("bg", paints.fill_style_id.as_deref(), fill));
        }
        classes
    }
}
