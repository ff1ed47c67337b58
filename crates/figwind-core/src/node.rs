//! Read-only model of the host document's design nodes.
//!
//! Every host node type maps onto one variant of [`NodeKind`]. Capability
//! checks ("does this node have fills?", "is it a layout container?") are
//! expressed as variant membership rather than field probing.

use crate::types::{Color, NodeId};

/// A node of the source design document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DesignNode {
    pub id: NodeId,
    pub name: String,
    pub visible: bool,
    pub is_mask: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    /// Whether the node opts out of its parent's auto layout.
    pub layout_positioning: LayoutPositioning,
    /// Non-zero when the node grows along the parent's main axis.
    pub layout_grow: f64,
    /// Cross axis alignment inside an auto-layout parent.
    pub layout_align: LayoutAlign,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: NodeKind,
}

impl Default for DesignNode {
    fn default() -> Self {
        Self {
            id: NodeId::default(),
            name: String::new(),
            visible: true,
            is_mask: false,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            layout_positioning: LayoutPositioning::Auto,
            layout_grow: 0.0,
            layout_align: LayoutAlign::Inherit,
            kind: NodeKind::Unsupported,
        }
    }
}

impl DesignNode {
    /// Create a visible, fully opaque node at the origin.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_mask(mut self, is_mask: bool) -> Self {
        self.is_mask = is_mask;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_positioning(mut self, positioning: LayoutPositioning) -> Self {
        self.layout_positioning = positioning;
        self
    }

    pub fn with_grow(mut self, grow: f64) -> Self {
        self.layout_grow = grow;
        self
    }

    pub fn with_align(mut self, align: LayoutAlign) -> Self {
        self.layout_align = align;
        self
    }

    /// Host type tag, as the design tool spells it.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Children in document order; empty for leaf kinds.
    pub fn children(&self) -> &[DesignNode] {
        self.kind.children()
    }

    pub fn is_absolute(&self) -> bool {
        self.layout_positioning == LayoutPositioning::Absolute
    }
}

/// The closed set of node kinds the generator understands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum NodeKind {
    Rectangle(Shape),
    Line(Shape),
    Ellipse(Shape),
    Polygon(Shape),
    Star(Shape),
    Vector(Shape),
    BooleanOperation(Shape),
    Text(Text),
    Frame(Frame),
    Component(Frame),
    ComponentSet(Frame),
    Instance(Frame),
    Group(Group),
    /// Any host type without a rendering strategy (slices, sections, ...).
    #[cfg_attr(feature = "serde", serde(other))]
    Unsupported,
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Rectangle(_) => "RECTANGLE",
            NodeKind::Line(_) => "LINE",
            NodeKind::Ellipse(_) => "ELLIPSE",
            NodeKind::Polygon(_) => "POLYGON",
            NodeKind::Star(_) => "STAR",
            NodeKind::Vector(_) => "VECTOR",
            NodeKind::BooleanOperation(_) => "BOOLEAN_OPERATION",
            NodeKind::Text(_) => "TEXT",
            NodeKind::Frame(_) => "FRAME",
            NodeKind::Component(_) => "COMPONENT",
            NodeKind::ComponentSet(_) => "COMPONENT_SET",
            NodeKind::Instance(_) => "INSTANCE",
            NodeKind::Group(_) => "GROUP",
            NodeKind::Unsupported => "UNSUPPORTED",
        }
    }

    /// Shape kinds that always export cleanly as a vector graphic.
    pub fn is_vector_shape(&self) -> bool {
        matches!(
            self,
            NodeKind::Rectangle(_)
                | NodeKind::Line(_)
                | NodeKind::Ellipse(_)
                | NodeKind::Polygon(_)
                | NodeKind::Star(_)
                | NodeKind::Vector(_)
                | NodeKind::BooleanOperation(_)
        )
    }

    pub fn children(&self) -> &[DesignNode] {
        match self {
            NodeKind::Frame(frame)
            | NodeKind::Component(frame)
            | NodeKind::ComponentSet(frame)
            | NodeKind::Instance(frame) => &frame.children,
            NodeKind::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// The frame payload for frame-family kinds.
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            NodeKind::Frame(frame)
            | NodeKind::Component(frame)
            | NodeKind::ComponentSet(frame)
            | NodeKind::Instance(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn shape(&self) -> Option<&Shape> {
        match self {
            NodeKind::Rectangle(shape)
            | NodeKind::Line(shape)
            | NodeKind::Ellipse(shape)
            | NodeKind::Polygon(shape)
            | NodeKind::Star(shape)
            | NodeKind::Vector(shape)
            | NodeKind::BooleanOperation(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&Text> {
        match self {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Fill and stroke data, for kinds that carry it.
    pub fn paints(&self) -> Option<&Paints> {
        if let Some(frame) = self.frame() {
            return Some(&frame.paints);
        }
        if let Some(shape) = self.shape() {
            return Some(&shape.paints);
        }
        self.text().map(|text| &text.paints)
    }

    pub fn corner_radii(&self) -> Option<&CornerRadii> {
        self.frame()
            .map(|frame| &frame.corner_radii)
            .or_else(|| self.shape().map(|shape| &shape.corner_radii))
    }
}

/// A vector shape (rectangle, ellipse, star, ...).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Shape {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub paints: Paints,
    pub corner_radii: CornerRadii,
}

/// A frame, component, component set or instance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Frame {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub paints: Paints,
    pub corner_radii: CornerRadii,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub layout: AutoLayout,
    pub clips_content: bool,
    pub children: Vec<DesignNode>,
}

/// A group. Groups have no box of their own.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Group {
    pub children: Vec<DesignNode>,
}

/// A text layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Text {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub paints: Paints,
    pub characters: String,
    /// Styled character runs in string order.
    pub runs: Vec<TextRun>,
    pub text_align_horizontal: TextAlign,
    pub text_auto_resize: TextAutoResize,
}

impl Text {
    /// Style of the first character. Mixed-style strings are rendered with
    /// this sample only.
    pub fn first_run(&self) -> Option<&TextRun> {
        self.runs.first()
    }
}

/// Character styling shared by a contiguous range of a text layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TextRun {
    pub font_name: FontName,
    pub font_size: f64,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontName {
    pub family: String,
    /// Style name such as "Bold Italic" or "Regular".
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterSpacing {
    pub value: f64,
    pub unit: LetterSpacingUnit,
}

impl LetterSpacing {
    pub fn pixels(value: f64) -> Self {
        Self { value, unit: LetterSpacingUnit::Pixels }
    }

    pub fn percent(value: f64) -> Self {
        Self { value, unit: LetterSpacingUnit::Percent }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LetterSpacingUnit {
    #[default]
    Pixels,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TextAutoResize {
    #[default]
    None,
    Height,
    WidthAndHeight,
    Truncate,
}

/// Fills, strokes and the per-edge stroke weights.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Paints {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weights: StrokeWeights,
    /// Paint style applied to the fills, if any.
    pub fill_style_id: Option<String>,
    /// Paint style applied to the strokes, if any.
    pub stroke_style_id: Option<String>,
}

impl Paints {
    // Only the top paint of each stack is rendered.
    pub fn first_fill(&self) -> Option<&Paint> {
        self.fills.first()
    }

    pub fn first_stroke(&self) -> Option<&Paint> {
        self.strokes.first()
    }

    pub fn has_strokes(&self) -> bool {
        !self.strokes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Paint {
    Solid(SolidPaint),
    Image(ImagePaint),
    /// Gradients, videos and anything else we do not render.
    #[cfg_attr(feature = "serde", serde(other))]
    Unsupported,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid(SolidPaint {
            color,
            opacity: 1.0,
            bound_variable: None,
        })
    }

    pub fn image(image_ref: impl Into<String>) -> Self {
        Paint::Image(ImagePaint {
            image_ref: Some(image_ref.into()),
        })
    }

    pub fn as_solid(&self) -> Option<&SolidPaint> {
        match self {
            Paint::Solid(solid) => Some(solid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolidPaint {
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(default = "full_opacity"))]
    pub opacity: f64,
    /// Color variable bound to this paint.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bound_variable: Option<String>,
}

#[cfg(feature = "serde")]
fn full_opacity() -> f64 {
    1.0
}

impl SolidPaint {
    /// Hex string of the paint color. Alpha is the color alpha scaled by
    /// the paint opacity.
    pub fn to_hex(&self) -> String {
        self.color.with_alpha(self.color.a * self.opacity).to_hex()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ImagePaint {
    /// Reference the host resolves to image bytes.
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrokeWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl StrokeWeights {
    pub fn uniform(weight: f64) -> Self {
        Self {
            top: weight,
            right: weight,
            bottom: weight,
            left: weight,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_right
            && self.top_left == self.bottom_left
    }
}

/// Auto-layout settings of a frame.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    /// Gap between items
    pub item_spacing: f64,
    pub padding: Padding,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_items: CounterAxisAlign,
    pub primary_axis_sizing_mode: SizingMode,
    pub counter_axis_sizing_mode: SizingMode,
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Main axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutPositioning {
    #[default]
    Auto,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
    Min,
    Center,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
}

/// Whether an axis has a fixed size or hugs its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SizingMode {
    #[default]
    Fixed,
    Auto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &str) -> DesignNode {
        DesignNode::new(id, NodeKind::Rectangle(Shape::default()))
    }

    #[test]
    fn test_children_only_for_containers() {
        let group = DesignNode::new(
            "g",
            NodeKind::Group(Group {
                children: vec![rect("a"), rect("b")],
            }),
        );
        assert_eq!(group.children().len(), 2);
        assert!(rect("a").children().is_empty());
    }

    #[test]
    fn test_capabilities_follow_variant() {
        let frame = DesignNode::new("f", NodeKind::Instance(Frame::default()));
        assert!(frame.kind.frame().is_some());
        assert!(frame.kind.paints().is_some());
        assert!(!frame.kind.is_vector_shape());

        let group = DesignNode::new("g", NodeKind::Group(Group::default()));
        assert!(group.kind.paints().is_none());
        assert!(group.kind.corner_radii().is_none());
    }

    #[test]
    fn test_uniform_checks() {
        assert!(StrokeWeights::uniform(2.0).is_uniform());
        assert!(!StrokeWeights { top: 1.0, ..StrokeWeights::uniform(2.0) }.is_uniform());
        assert!(CornerRadii::uniform(4.0).is_uniform());
    }

    #[test]
    fn test_solid_paint_hex_uses_paint_opacity() {
        let paint = SolidPaint {
            color: Color::rgb(1.0, 1.0, 1.0),
            opacity: 0.0,
            bound_variable: None,
        };
        assert_eq!(paint.to_hex(), "#FFFFFF00");
    }

    #[test]
    fn test_solid_paint_hex_keeps_color_alpha() {
        let clear = Paint::solid(Color::rgba(0.2, 0.4, 0.6, 0.0));
        assert_eq!(clear.as_solid().unwrap().to_hex(), "#33669900");

        let half = SolidPaint {
            color: Color::rgba(0.0, 0.0, 0.0, 0.5),
            opacity: 0.5,
            bound_variable: None,
        };
        assert_eq!(half.to_hex(), "#00000040");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_frame_with_children() {
        let json = r#"{
            "id": "1:2",
            "name": "Card",
            "type": "FRAME",
            "width": 100,
            "height": 50,
            "layoutMode": "HORIZONTAL",
            "padding": { "top": 8, "right": 8, "bottom": 8, "left": 8 },
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
            "children": [
                { "id": "1:3", "type": "TEXT", "characters": "Hi" },
                { "id": "1:4", "type": "SLICE" }
            ]
        }"#;
        let node: DesignNode = serde_json::from_str(json).unwrap();
        let frame = node.kind.frame().unwrap();
        assert_eq!(frame.layout.layout_mode, LayoutMode::Horizontal);
        assert_eq!(frame.layout.padding, Padding::uniform(8.0));
        assert!(node.visible);
        assert_eq!(node.opacity, 1.0);
        assert_eq!(node.children()[0].type_name(), "TEXT");
        assert_eq!(node.children()[1].kind, NodeKind::Unsupported);
    }
}
