//! Generic markup tree produced by the generator.
//!
//! This is deliberately format-agnostic: the same tree is serialized to
//! HTML or to a JSX-like template dialect.

use indexmap::IndexMap;

/// Attribute holding the merged utility class list.
pub const CLASS_ATTRIBUTE: &str = "class";

/// A markup element.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_class(self, classes: impl Into<String>) -> Self {
        self.with_attribute(CLASS_ATTRIBUTE, classes)
    }

    pub fn with_child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Content>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The merged class list, if set.
    pub fn class(&self) -> Option<&str> {
        self.attribute(CLASS_ATTRIBUTE)
    }

    /// Whether the class list contains the exact fragment.
    pub fn has_class(&self, fragment: &str) -> bool {
        self.class()
            .map(|classes| classes.split_whitespace().any(|c| c == fragment))
            .unwrap_or(false)
    }

    /// Child elements, skipping text and line breaks.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Content::as_element)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Content {
    Element(Element),
    Text { value: String },
    /// Explicit line break between text segments.
    LineBreak,
}

impl Content {
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text {
            value: value.into(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text { value } => Some(value),
            _ => None,
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_attribute_order() {
        let element = Element::new("img")
            .with_attribute("src", "data:,")
            .with_class("absolute w-4");
        let keys: Vec<_> = element.attributes.keys().cloned().collect();
        assert_eq!(keys, vec!["src", "class"]);
        assert!(element.has_class("w-4"));
        assert!(!element.has_class("w"));
    }

    #[test]
    fn test_child_elements_skip_text() {
        let element = Element::new("div")
            .with_child(Content::text("a"))
            .with_child(Content::LineBreak)
            .with_child(Element::new("span"));
        assert_eq!(element.child_elements().count(), 1);
        assert_eq!(element.children[0].as_text(), Some("a"));
    }
}
