use figwind_core::{
    AutoLayout, Classes, CounterAxisAlign, LayoutMode, Padding, PrimaryAxisAlign, SizingMode,
};

use super::StyleGenerator;

impl StyleGenerator<'_> {
    /// Flexbox classes for an auto-layout frame; empty without a layout mode.
    pub fn layout(&self, layout: &AutoLayout) -> Classes {
        let mut classes = Classes::new();
        let vertical = match layout.layout_mode {
            LayoutMode::None => return classes,
            LayoutMode::Horizontal => false,
            LayoutMode::Vertical => true,
        };

        classes.push("flex".to_string());
        if vertical {
            classes.push("flex-col".to_string());
        }
        if layout.item_spacing != 0.0 {
            classes.push(format!("gap{}", self.resolver.spacing(layout.item_spacing)));
        }
        self.padding(&layout.padding, &mut classes);

        classes.push(
            match layout.primary_axis_align_items {
                PrimaryAxisAlign::Min => "justify-start",
                PrimaryAxisAlign::Center => "justify-center",
                PrimaryAxisAlign::Max => "justify-end",
                PrimaryAxisAlign::SpaceBetween => "justify-between",
            }
            .to_string(),
        );
        classes.push(
            match layout.counter_axis_align_items {
                CounterAxisAlign::Min => "items-start",
                CounterAxisAlign::Center => "items-center",
                CounterAxisAlign::Max => "items-end",
                CounterAxisAlign::Baseline => "items-baseline",
            }
            .to_string(),
        );

        let (primary, counter) = if vertical { ("h-fit", "w-fit") } else { ("w-fit", "h-fit") };
        if layout.primary_axis_sizing_mode == SizingMode::Auto {
            classes.push(primary.to_string());
        }
        if layout.counter_axis_sizing_mode == SizingMode::Auto {
            classes.push(counter.to_string());
        }
        classes
    }

    /// Collapse paddings to `p`, `px`/`py` or per-edge classes. Zero edges
    /// are omitted.
    fn padding(&self, padding: &Padding, classes: &mut Classes) {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = *padding;
        let mut push = |utility: &str, value: f64| {
            if value != 0.0 {
                classes.push(format!("{utility}{}", self.resolver.spacing(value)));
            }
        };

        if top == right && top == bottom && top == left {
            push("p", top);
            return;
        }
        if top == bottom {
            push("py", top);
        } else {
            push("pt", top);
            push("pb", bottom);
        }
        if left == right {
            push("px", left);
        } else {
            push("pl", left);
            push("pr", right);
        }
    }
}
