//! Rendering strategy selection for a single node.

use figwind_core::{DesignNode, Frame, Group, NodeKind, Paint, Text};

use crate::vector::VectorLikeChecker;

/// Why a node produces no output at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Mask,
}

/// How a node is turned into markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy<'n> {
    Skip(SkipReason),
    /// Rectangle whose first fill is an image.
    Image { image_ref: &'n str },
    /// Exported from the host as one inline SVG.
    Vector,
    Text(&'n Text),
    Frame(&'n Frame),
    Group(&'n Group),
    Unsupported,
}

/// Pick the strategy for `node`, checking the gates in priority order.
///
/// A failed vector export falls back to [`by_kind`].
pub fn classify<'n>(node: &'n DesignNode, vectors: &VectorLikeChecker) -> Strategy<'n> {
    if !node.visible {
        return Strategy::Skip(SkipReason::Hidden);
    }
    if node.is_mask {
        return Strategy::Skip(SkipReason::Mask);
    }
    if let NodeKind::Rectangle(shape) = &node.kind {
        if let Some(Paint::Image(image)) = shape.paints.first_fill() {
            if let Some(image_ref) = image.image_ref.as_deref() {
                return Strategy::Image { image_ref };
            }
        }
    }
    if vectors.is_vector_like(node) {
        return Strategy::Vector;
    }
    by_kind(node)
}

/// Strategy from the node type alone.
pub fn by_kind(node: &DesignNode) -> Strategy<'_> {
    if let Some(frame) = node.kind.frame() {
        return Strategy::Frame(frame);
    }
    match &node.kind {
        NodeKind::Text(text) => Strategy::Text(text),
        NodeKind::Group(group) => Strategy::Group(group),
        _ => Strategy::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figwind_core::{Color, Paints, Shape};

    fn image_rect(image_ref: Option<&str>) -> DesignNode {
        let fill = match image_ref {
            Some(image_ref) => Paint::image(image_ref),
            None => Paint::Image(Default::default()),
        };
        DesignNode::new(
            "img",
            NodeKind::Rectangle(Shape {
                paints: Paints {
                    fills: vec![fill],
                    ..Paints::default()
                },
                ..Shape::default()
            }),
        )
    }

    #[test]
    fn test_gates_run_before_everything_else() {
        let vectors = VectorLikeChecker::new();
        let hidden = image_rect(Some("ref")).with_visible(false).with_mask(true);
        assert_eq!(classify(&hidden, &vectors), Strategy::Skip(SkipReason::Hidden));

        let mask = image_rect(Some("ref")).with_mask(true);
        assert_eq!(classify(&mask, &vectors), Strategy::Skip(SkipReason::Mask));
    }

    #[test]
    fn test_image_rectangle() {
        let vectors = VectorLikeChecker::new();
        let node = image_rect(Some("abc"));
        assert_eq!(classify(&node, &vectors), Strategy::Image { image_ref: "abc" });

        // Without a reference the rectangle is a plain vector shape.
        let node = image_rect(None);
        assert_eq!(classify(&node, &vectors), Strategy::Vector);
    }

    #[test]
    fn test_solid_rectangle_is_vector() {
        let vectors = VectorLikeChecker::new();
        let node = DesignNode::new(
            "r",
            NodeKind::Rectangle(Shape {
                paints: Paints {
                    fills: vec![Paint::solid(Color::WHITE)],
                    ..Paints::default()
                },
                ..Shape::default()
            }),
        );
        assert_eq!(classify(&node, &vectors), Strategy::Vector);
    }

    #[test]
    fn test_dispatch_by_kind() {
        let vectors = VectorLikeChecker::new();
        let frame = DesignNode::new("f", NodeKind::Component(Frame::default()));
        assert!(matches!(classify(&frame, &vectors), Strategy::Frame(_)));

        let group = DesignNode::new("g", NodeKind::Group(Group::default()));
        assert!(matches!(classify(&group, &vectors), Strategy::Group(_)));

        let text = DesignNode::new("t", NodeKind::Text(Text::default()));
        assert!(matches!(classify(&text, &vectors), Strategy::Text(_)));

        let slice = DesignNode::new("s", NodeKind::Unsupported);
        assert_eq!(classify(&slice, &vectors), Strategy::Unsupported);
    }

    #[test]
    fn test_by_kind_ignores_vector_likeness() {
        let node = DesignNode::new("v", NodeKind::Vector(Shape::default()));
        assert_eq!(by_kind(&node), Strategy::Unsupported);
    }
}
