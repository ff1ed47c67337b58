//! Parsing of exported SVG documents into markup elements.
//!
//! Only the XML subset that vector exports use is supported: elements,
//! attributes, text, CDATA, comments, processing instructions and a
//! doctype without an internal subset.

use figwind_core::{Content, Element};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, recognize, value, verify},
    multi::many0,
    sequence::{delimited, pair, preceded, separated_pair, tuple},
    IResult,
};

use crate::error::{CodegenError, Result};

/// Parse an SVG document. The root element must be `<svg>`.
pub fn parse_svg(text: &str) -> Result<Element> {
    let offset = |rest: &str| text.len() - rest.len();
    let root = match tuple((misc, element, misc))(text) {
        Ok(("", (_, root, _))) => root,
        Ok((rest, _)) => {
            return Err(CodegenError::Svg {
                offset: offset(rest),
                message: "unexpected content after the root element".to_string(),
            })
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            return Err(CodegenError::Svg {
                offset: offset(e.input),
                message: format!("expected {:?}", e.code),
            })
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(CodegenError::Svg {
                offset: text.len(),
                message: "unexpected end of input".to_string(),
            })
        }
    };

    if root.tag != "svg" {
        return Err(CodegenError::Svg {
            offset: 0,
            message: format!("expected <svg> root element, found <{}>", root.tag),
        });
    }
    Ok(root)
}

/// Turn exported SVG bytes into an element ready for inlining: the
/// namespace declaration is dropped since inline SVG inherits it.
pub fn inline_svg(bytes: &[u8]) -> Result<Element> {
    let text = std::str::from_utf8(bytes)?;
    let mut root = parse_svg(text)?;
    root.attributes.shift_remove("xmlns");
    Ok(root)
}

fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_' || c == ':'),
        take_while(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')),
    ))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
    ))(input)
}

fn attribute(input: &str) -> IResult<&str, (&str, String)> {
    map(
        separated_pair(name, delimited(multispace0, char('='), multispace0), quoted),
        |(key, raw)| (key, decode_entities(raw)),
    )(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("<!--"), take_until("-->"), tag("-->"))(input)
}

fn processing_instruction(input: &str) -> IResult<&str, &str> {
    delimited(tag("<?"), take_until("?>"), tag("?>"))(input)
}

fn doctype(input: &str) -> IResult<&str, &str> {
    delimited(tag("<!DOCTYPE"), take_until(">"), char('>'))(input)
}

fn cdata(input: &str) -> IResult<&str, &str> {
    delimited(tag("<![CDATA["), take_until("]]>"), tag("]]>"))(input)
}

/// Whitespace, comments and prolog declarations around the root.
fn misc(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((multispace1, comment, processing_instruction, doctype))),
    )(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    let (input, _) = char('<')(input)?;
    let (input, tag_name) = name(input)?;
    let (input, attributes) = many0(preceded(multispace1, attribute))(input)?;
    let (input, _) = multispace0(input)?;

    let mut element = Element::new(tag_name);
    for (key, value) in attributes {
        element.attributes.insert(key.to_string(), value);
    }

    if let Ok((input, _)) = tag::<_, _, nom::error::Error<&str>>("/>")(input) {
        return Ok((input, element));
    }

    let (input, _) = char('>')(input)?;
    let (input, children) = many0(node)(input)?;
    let (input, _) = tag("</")(input)?;
    let (input, _) = verify(name, |closing: &str| closing == tag_name)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('>')(input)?;

    element.children = children.into_iter().flatten().collect();
    Ok((input, element))
}

fn node(input: &str) -> IResult<&str, Option<Content>> {
    alt((
        map(comment, |_| None),
        map(processing_instruction, |_| None),
        map(cdata, |text| Some(Content::text(text))),
        map(element, |e| Some(Content::Element(e))),
        map(take_while1(|c| c != '<'), |text: &str| {
            if text.trim().is_empty() {
                None
            } else {
                Some(Content::text(decode_entities(text)))
            }
        }),
    ))(input)
}

/// Decode the predefined XML entities and numeric character references.
/// Unknown references are kept verbatim.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        rest = &rest[start..];
        let replacement = rest.find(';').and_then(|end| {
            let entity = &rest[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, end))
        });
        match replacement {
            Some((c, end)) => {
                decoded.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ICON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M0 0H24V24H0Z" fill="#EF4444"/>
  <g clip-path='url(#a)'>
    <circle cx="12" cy="12" r="4" />
  </g>
</svg>
"##;

    #[test]
    fn test_parse_export() {
        let svg = parse_svg(ICON).unwrap();
        assert_eq!(svg.tag, "svg");
        assert_eq!(svg.attribute("viewBox"), Some("0 0 24 24"));
        let children: Vec<_> = svg.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag, "path");
        assert_eq!(children[0].attribute("fill"), Some("#EF4444"));
        assert_eq!(children[1].attribute("clip-path"), Some("url(#a)"));
        assert_eq!(children[1].child_elements().next().unwrap().tag, "circle");
    }

    #[test]
    fn test_inline_strips_namespace() {
        let svg = inline_svg(ICON.as_bytes()).unwrap();
        assert_eq!(svg.attribute("xmlns"), None);
        let keys: Vec<_> = svg.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["width", "height", "viewBox", "fill"]);
    }

    #[test]
    fn test_text_and_entities() {
        let svg = parse_svg(r#"<svg><text x="1">A &amp; B &#x41;</text><title><![CDATA[<raw>]]></title></svg>"#)
            .unwrap();
        let children: Vec<_> = svg.child_elements().collect();
        assert_eq!(children[0].children, vec![Content::text("A & B A")]);
        assert_eq!(children[1].children, vec![Content::text("<raw>")]);
    }

    #[test]
    fn test_rejects_mismatched_and_foreign_roots() {
        assert!(matches!(
            parse_svg("<svg><g></svg>"),
            Err(CodegenError::Svg { .. })
        ));
        assert!(matches!(
            parse_svg("<html></html>"),
            Err(CodegenError::Svg { offset: 0, .. })
        ));
        assert!(parse_svg("<svg></svg> trailing").is_err());
        assert!(inline_svg(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn test_decode_entities_keeps_unknown_references() {
        assert_eq!(decode_entities("a &nbsp; b & c"), "a &nbsp; b & c");
        assert_eq!(decode_entities("&lt;&#60;&gt;"), "<<>");
    }
}
