//! Element tree to HTML or JSX text.
//!
//! Output is written on one line per root with no indentation.

use std::fmt;
use std::str::FromStr;

use convert_case::{Case, Casing};
use figwind_core::{Content, Element, CLASS_ATTRIBUTE};

/// Elements that never have children or a closing tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupFormat {
    #[default]
    Html,
    /// JSX-like component template markup.
    Jsx,
}

impl FromStr for MarkupFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(MarkupFormat::Html),
            "jsx" => Ok(MarkupFormat::Jsx),
            other => Err(format!("unknown markup format '{other}' (expected html or jsx)")),
        }
    }
}

impl fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarkupFormat::Html => "html",
            MarkupFormat::Jsx => "jsx",
        })
    }
}

pub fn serialize(elements: &[Element], format: MarkupFormat) -> String {
    match format {
        MarkupFormat::Html => to_html(elements),
        MarkupFormat::Jsx => to_jsx(elements),
    }
}

/// Root elements one per line.
pub fn to_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        MarkupWriter::new(&mut out, MarkupFormat::Html).element(element);
    }
    out
}

/// A single JSX expression; several roots are wrapped in a fragment.
pub fn to_jsx(elements: &[Element]) -> String {
    let mut out = String::new();
    match elements {
        [] => {}
        [element] => MarkupWriter::new(&mut out, MarkupFormat::Jsx).element(element),
        _ => {
            out.push_str("<>");
            for element in elements {
                MarkupWriter::new(&mut out, MarkupFormat::Jsx).element(element);
            }
            out.push_str("</>");
        }
    }
    out
}

struct MarkupWriter<'a> {
    out: &'a mut String,
    format: MarkupFormat,
}

impl<'a> MarkupWriter<'a> {
    fn new(out: &'a mut String, format: MarkupFormat) -> Self {
        Self { out, format }
    }

    fn element(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(&element.tag);
        for (key, value) in &element.attributes {
            self.out.push(' ');
            match self.format {
                MarkupFormat::Html => self.html_attribute(key, value),
                MarkupFormat::Jsx => self.jsx_attribute(key, value),
            }
        }

        let is_void = VOID_ELEMENTS.contains(&element.tag.as_str());
        match self.format {
            MarkupFormat::Html if is_void => {
                self.out.push('>');
                return;
            }
            MarkupFormat::Jsx if element.children.is_empty() => {
                self.out.push_str(" />");
                return;
            }
            _ => self.out.push('>'),
        }

        for child in &element.children {
            self.content(child);
        }
        self.out.push_str("</");
        self.out.push_str(&element.tag);
        self.out.push('>');
    }

    fn content(&mut self, content: &Content) {
        match content {
            Content::Element(element) => self.element(element),
            Content::Text { value } => match self.format {
                MarkupFormat::Html => escape_html_into(self.out, value, false),
                MarkupFormat::Jsx => escape_jsx_text_into(self.out, value),
            },
            Content::LineBreak => self.out.push_str(match self.format {
                MarkupFormat::Html => "<br>",
                MarkupFormat::Jsx => "<br />",
            }),
        }
    }

    fn html_attribute(&mut self, key: &str, value: &str) {
        self.out.push_str(key);
        self.out.push_str("=\"");
        escape_html_into(self.out, value, true);
        self.out.push('"');
    }

    fn jsx_attribute(&mut self, key: &str, value: &str) {
        if key == "style" {
            self.out.push_str("style={");
            self.out.push_str(&jsx_style_object(value));
            self.out.push('}');
            return;
        }
        self.out.push_str(&jsx_attribute_name(key));
        self.out.push('=');
        if value.contains(['"', '\\']) || value.contains('\n') {
            self.out.push('{');
            self.out.push_str(&js_string(value));
            self.out.push('}');
        } else {
            self.out.push('"');
            self.out.push_str(value);
            self.out.push('"');
        }
    }
}

fn jsx_attribute_name(key: &str) -> String {
    match key {
        CLASS_ATTRIBUTE => "className".to_string(),
        "for" => "htmlFor".to_string(),
        _ if key.starts_with("data-") || key.starts_with("aria-") => key.to_string(),
        _ if key.contains(['-', ':']) => key.replace(':', "-").to_case(Case::Camel),
        _ => key.to_string(),
    }
}

/// `fill: red; stroke-width: 2` becomes `{ fill: "red", strokeWidth: "2" }`.
fn jsx_style_object(style: &str) -> String {
    let entries: Vec<String> = style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(property, value)| {
            let property = property.trim();
            let key = if property.starts_with("--") {
                js_string(property)
            } else {
                property.to_case(Case::Camel)
            };
            format!("{key}: {}", js_string(value.trim()))
        })
        .collect();
    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

fn js_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn escape_html_into(out: &mut String, value: &str, in_attribute: bool) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn escape_jsx_text_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '{' => out.push_str("{\"{\"}"),
            '}' => out.push_str("{\"}\"}"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn card() -> Element {
        Element::new("div")
            .with_class("relative flex gap-2")
            .with_child(
                Element::new("div")
                    .with_class("text-left")
                    .with_child(Content::text("Hello {name}"))
                    .with_child(Content::LineBreak)
                    .with_child(Content::text("a < b & c")),
            )
            .with_child(Element::new("img").with_class("w-4").with_attribute("src", "data:,"))
    }

    fn icon() -> Element {
        Element::new("svg")
            .with_attribute("viewBox", "0 0 16 16")
            .with_attribute("class", "w-4 h-4")
            .with_child(
                Element::new("path")
                    .with_attribute("fill-rule", "evenodd")
                    .with_attribute("xlink:href", "#a")
                    .with_attribute("style", "stop-color: #fff; --tw-x: 1"),
            )
    }

    #[test]
    fn test_html() {
        assert_snapshot!(
            to_html(&[card()]),
            @r#"<div class="relative flex gap-2"><div class="text-left">Hello {name}<br>a &lt; b &amp; c</div><img class="w-4" src="data:,"></div>"#
        );
    }

    #[test]
    fn test_html_svg_and_multiple_roots() {
        assert_snapshot!(
            to_html(&[icon(), Element::new("div").with_attribute("title", "say \"hi\"")]),
            @r##"
        <svg viewBox="0 0 16 16" class="w-4 h-4"><path fill-rule="evenodd" xlink:href="#a" style="stop-color: #fff; --tw-x: 1"></path></svg>
        <div title="say &quot;hi&quot;"></div>
        "##
        );
    }

    #[test]
    fn test_jsx() {
        assert_snapshot!(
            to_jsx(&[card()]),
            @r#"<div className="relative flex gap-2"><div className="text-left">Hello {"{"}name{"}"}<br />a &lt; b &amp; c</div><img className="w-4" src="data:," /></div>"#
        );
    }

    #[test]
    fn test_jsx_svg_attributes_and_fragment() {
        assert_snapshot!(
            to_jsx(&[icon(), Element::new("div").with_attribute("title", "say \"hi\"")]),
            @r##"<><svg viewBox="0 0 16 16" className="w-4 h-4"><path fillRule="evenodd" xlinkHref="#a" style={{ stopColor: "#fff", "--tw-x": "1" }} /></svg><div title={"say \"hi\""} /></>"##
        );
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(to_html(&[]), "");
        assert_eq!(to_jsx(&[]), "");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSX".parse::<MarkupFormat>(), Ok(MarkupFormat::Jsx));
        assert_eq!(MarkupFormat::Html.to_string(), "html");
        assert!("vue".parse::<MarkupFormat>().is_err());
    }
}
