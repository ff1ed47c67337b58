//! Recursive traversal from design nodes to markup elements.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use figwind_core::{
    Classes, CodegenOptions, Content, DesignNode, DocumentHost, Element, Frame, LayoutMode,
    NodeId, Size, Vector, CLASS_ATTRIBUTE,
};
use figwind_resolver::ClassResolver;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use tracing::{debug, trace, warn};

use crate::characters::process_characters;
use crate::classify::{by_kind, classify, Strategy};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::image::image_data_url;
use crate::style::StyleGenerator;
use crate::svg::inline_svg;
use crate::vector::VectorLikeChecker;

/// Attribute carrying the layer-name id.
pub const ID_ATTRIBUTE: &str = "id";

/// Where a node sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Layout mode of the parent; `None` for selection roots.
    pub parent_layout: Option<LayoutMode>,
    /// Parent-space point that `left`/`top` offsets are measured from.
    pub origin: Vector,
}

impl LayoutContext {
    pub const fn new(parent_layout: Option<LayoutMode>, origin: Vector) -> Self {
        Self {
            parent_layout,
            origin,
        }
    }

    /// Context of a selected node, which has no parent.
    pub const fn root() -> Self {
        Self::new(None, Vector::ZERO)
    }

    /// Context for the children of a frame. Offsets start inside the
    /// stroke when the frame has one.
    pub fn for_frame(frame: &Frame) -> Self {
        let origin = if frame.paints.has_strokes() {
            let weights = frame.paints.stroke_weights;
            Vector::new(weights.left, weights.top)
        } else {
            Vector::ZERO
        };
        Self::new(Some(frame.layout.layout_mode), origin)
    }

    /// Context for the children of a group. Group children are positioned
    /// in the group's parent space, so they are re-anchored at the group.
    pub fn for_group(group: &DesignNode) -> Self {
        Self::new(Some(LayoutMode::None), Vector::new(group.x, group.y))
    }
}

/// Output of one selection traversal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generated {
    /// One element per rendered root, in selection order.
    pub root: Vec<Element>,
    /// Size of every selected node, rendered or not.
    pub sizes: Vec<Size>,
}

#[derive(Debug, Default)]
struct LayerIds {
    assigned: HashMap<NodeId, String>,
    generator: IdGenerator,
}

/// Turns design nodes into an element tree.
///
/// A generator is scoped to one traversal: the vector-likeness memo and
/// the layer ids it hands out are not reset between calls.
pub struct MarkupGenerator<'a> {
    host: &'a dyn DocumentHost,
    resolver: &'a ClassResolver,
    options: &'a CodegenOptions,
    vectors: VectorLikeChecker,
    layer_ids: Mutex<LayerIds>,
}

impl<'a> MarkupGenerator<'a> {
    pub fn new(
        host: &'a dyn DocumentHost,
        resolver: &'a ClassResolver,
        options: &'a CodegenOptions,
    ) -> Self {
        Self {
            host,
            resolver,
            options,
            vectors: VectorLikeChecker::new(),
            layer_ids: Mutex::new(LayerIds::default()),
        }
    }

    /// Generate markup for every selected node concurrently.
    pub async fn generate_selection(&self, nodes: &[DesignNode]) -> Generated {
        if self.options.emits_layer_name {
            self.assign_layer_ids(nodes);
        }

        let sizes = nodes
            .iter()
            .map(|node| Size {
                width: node.width,
                height: node.height,
            })
            .collect();
        let root = join_all(nodes.iter().map(|node| self.generate(node, LayoutContext::root())))
            .await
            .into_iter()
            .flatten()
            .collect();

        Generated { root, sizes }
    }

    /// Generate the element for one node and its subtree, or `None` when
    /// the node renders nothing.
    pub fn generate<'s>(
        &'s self,
        node: &'s DesignNode,
        ctx: LayoutContext,
    ) -> BoxFuture<'s, Option<Element>> {
        async move {
            let mut strategy = classify(node, &self.vectors);

            if strategy == Strategy::Vector {
                match self.vector(node, &ctx).await {
                    Ok(svg) => return Some(self.with_layer_id(node, svg)),
                    Err(err) => {
                        warn!(
                            node = %node.id,
                            name = %node.name,
                            error = %err,
                            "vector export failed, rendering by node type"
                        );
                        strategy = by_kind(node);
                    }
                }
            }

            let element = match strategy {
                Strategy::Skip(reason) => {
                    trace!(node = %node.id, ?reason, "skipping node");
                    return None;
                }
                Strategy::Image { image_ref } => self.image(node, &ctx, image_ref).await,
                Strategy::Text(text) => {
                    let styles = self.styles();
                    Element::new("div")
                        .with_class(self.merge(&[
                            styles.position(node, &ctx),
                            styles.text(text),
                            styles.effect(node),
                        ]))
                        .with_children(process_characters(&text.characters))
                }
                Strategy::Frame(frame) => {
                    let styles = self.styles();
                    let class = self.merge(&[
                        styles.fill(&frame.paints),
                        styles.border(&frame.paints, Some(&frame.corner_radii)),
                        styles.layout(&frame.layout),
                        styles.position(node, &ctx),
                        styles.effect(node),
                    ]);
                    let children = self
                        .generate_children(&frame.children, LayoutContext::for_frame(frame))
                        .await;
                    Element::new("div").with_class(class).with_children(children)
                }
                Strategy::Group(group) => {
                    let class = self.merge(&[self.styles().position(node, &ctx)]);
                    let children = self
                        .generate_children(&group.children, LayoutContext::for_group(node))
                        .await;
                    Element::new("div").with_class(class).with_children(children)
                }
                Strategy::Unsupported | Strategy::Vector => {
                    debug!(node = %node.id, kind = node.type_name(), "ignoring unsupported node");
                    return None;
                }
            };
            Some(self.with_layer_id(node, element))
        }
        .boxed()
    }

    /// Children in document order; skipped children are dropped.
    async fn generate_children(&self, children: &[DesignNode], ctx: LayoutContext) -> Vec<Content> {
        join_all(children.iter().map(|child| self.generate(child, ctx)))
            .await
            .into_iter()
            .flatten()
            .map(Content::Element)
            .collect()
    }

    async fn image(&self, node: &DesignNode, ctx: &LayoutContext, image_ref: &str) -> Element {
        let styles = self.styles();
        let mut lists = vec![styles.position(node, ctx)];
        if let Some(paints) = node.kind.paints() {
            lists.push(styles.border(paints, node.kind.corner_radii()));
        }
        lists.push(styles.effect(node));

        let mut element = Element::new("img").with_class(self.merge(&lists));
        let bytes = self.host.image_bytes(image_ref).await;
        match bytes.as_deref().and_then(image_data_url) {
            Some(src) => element = element.with_attribute("src", src),
            None => warn!(
                node = %node.id,
                image_ref,
                "image bytes missing or not PNG/JPEG, emitting img without src"
            ),
        }
        element
    }

    async fn vector(&self, node: &DesignNode, ctx: &LayoutContext) -> Result<Element> {
        let bytes = self.host.export_vector(node).await?;
        let mut svg = inline_svg(&bytes)?;
        let styles = self.styles();
        let class = self.merge(&[styles.position(node, ctx), styles.effect(node)]);
        svg.attributes.insert(CLASS_ATTRIBUTE.to_string(), class);
        Ok(svg)
    }

    fn styles(&self) -> StyleGenerator<'_> {
        StyleGenerator::new(self.resolver, self.options, self.host)
    }

    fn merge(&self, lists: &[Classes]) -> String {
        self.resolver.merge(lists.iter().map(|classes| classes.as_slice()))
    }

    /// Hand out ids in document order before any concurrent work starts,
    /// so duplicate names are numbered deterministically.
    fn assign_layer_ids(&self, nodes: &[DesignNode]) {
        for node in nodes {
            match classify(node, &self.vectors) {
                Strategy::Skip(_) | Strategy::Unsupported => continue,
                Strategy::Image { .. } | Strategy::Vector | Strategy::Text(_) => {
                    self.layer_id(node);
                }
                Strategy::Frame(_) | Strategy::Group(_) => {
                    self.layer_id(node);
                    self.assign_layer_ids(node.children());
                }
            }
        }
    }

    fn layer_id(&self, node: &DesignNode) -> String {
        let mut ids = self.layer_ids();
        if let Some(id) = ids.assigned.get(&node.id) {
            return id.clone();
        }
        let id = ids.generator.generate(&node.name);
        ids.assigned.insert(node.id.clone(), id.clone());
        id
    }

    fn with_layer_id(&self, node: &DesignNode, element: Element) -> Element {
        if !self.options.emits_layer_name {
            return element;
        }
        element.with_attribute(ID_ATTRIBUTE, self.layer_id(node))
    }

    fn layer_ids(&self) -> MutexGuard<'_, LayerIds> {
        self.layer_ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for MarkupGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupGenerator")
            .field("options", self.options)
            .field("vectors", &self.vectors)
            .finish_non_exhaustive()
    }
}
