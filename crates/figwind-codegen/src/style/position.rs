use figwind_core::{Classes, DesignNode, LayoutAlign, LayoutMode, TextAutoResize};

use super::StyleGenerator;
use crate::markup::LayoutContext;

impl StyleGenerator<'_> {
    /// Positioning and box size relative to the parent.
    pub fn position(&self, node: &DesignNode, ctx: &LayoutContext) -> Classes {
        let resolver = self.resolver;
        let mut classes = Classes::new();

        if ctx.parent_layout == Some(LayoutMode::None) || node.is_absolute() {
            classes.push("absolute".to_string());
            classes.push(format!("left{}", resolver.spacing(node.x - ctx.origin.x)));
            classes.push(format!("top{}", resolver.spacing(node.y - ctx.origin.y)));
        } else {
            classes.push("relative".to_string());
        }

        let mut width = Some(format!("w{}", resolver.spacing(node.width)));
        let mut height = Some(format!("h{}", resolver.spacing(node.height)));
        let grows = node.layout_grow != 0.0;
        let stretches = node.layout_align == LayoutAlign::Stretch;

        match ctx.parent_layout {
            Some(LayoutMode::Vertical) => {
                if grows {
                    classes.push("flex-1".to_string());
                    height = None;
                }
                if stretches {
                    classes.push("self-stretch".to_string());
                    width = None;
                }
            }
            Some(LayoutMode::Horizontal) => {
                if grows {
                    classes.push("flex-1".to_string());
                    width = None;
                }
                if stretches {
                    classes.push("self-stretch".to_string());
                    height = None;
                }
            }
            Some(LayoutMode::None) | None => {}
        }

        if let Some(text) = node.kind.text() {
            match text.text_auto_resize {
                TextAutoResize::WidthAndHeight => {
                    width = None;
                    height = None;
                }
                TextAutoResize::Height => height = None,
                TextAutoResize::None | TextAutoResize::Truncate => {}
            }
        }

        classes.extend(width);
        classes.extend(height);

        if node.kind.frame().is_some_and(|frame| frame.clips_content) {
            classes.push("overflow-hidden".to_string());
        }
        classes
    }
}
