//! Trust boundary for caller-supplied SVG fragments.
//!
//! Generic visuals arrive as raw markup, usually straight from a language
//! model. Nothing downstream embeds that string; the only way to get
//! markup into the visual tree is a [`SanitizedMarkup`], and the only way
//! to get one of those is [`sanitize_svg`].
//!
//! The fragment is parsed, checked against an element allowlist and
//! re-serialized from the parsed tree, so the output never contains
//! anything the parser did not understand.

use std::fmt;

use roxmltree::{Document, Node, NodeType};
use serde::{Serialize, Serializer};

use crate::error::SanitizeError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const MAX_DEPTH: usize = 64;

/// Elements copied into the output.
const ALLOWED_ELEMENTS: &[&str] = &[
    "svg",
    "g",
    "rect",
    "circle",
    "ellipse",
    "line",
    "polyline",
    "polygon",
    "path",
    "text",
    "tspan",
    "title",
    "desc",
    "defs",
    "marker",
    "linearGradient",
    "radialGradient",
    "stop",
    "clipPath",
];

/// Elements whose presence rejects the whole fragment.
const FORBIDDEN_ELEMENTS: &[&str] = &[
    "script",
    "foreignObject",
    "iframe",
    "object",
    "embed",
    "image",
    "use",
    "style",
    "a",
    "animate",
    "animateMotion",
    "animateTransform",
    "set",
    "handler",
    "listener",
];

/// SVG markup that passed [`sanitize_svg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedMarkup(String);

impl SanitizedMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SanitizedMarkup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Parse `input` and rebuild it from allowlisted parts only.
///
/// Rejects malformed markup, DTDs, a non-`svg` root and any forbidden
/// element anywhere in the tree. Unknown but harmless elements are
/// dropped with their subtree. Event handlers, links, namespaced
/// attributes and script-bearing values are dropped.
pub fn sanitize_svg(input: &str) -> Result<SanitizedMarkup, SanitizeError> {
    let doc = Document::parse(input).map_err(|e| SanitizeError::Malformed(e.to_string()))?;
    let root = doc.root_element();

    check_forbidden(root, 0)?;

    let root_name = root.tag_name().name();
    if root_name != "svg" {
        return Err(SanitizeError::UnexpectedRoot(root_name.to_string()));
    }

    let mut out = String::with_capacity(input.len());
    write_element(root, &mut out, true);
    Ok(SanitizedMarkup(out))
}

fn check_forbidden(node: Node<'_, '_>, depth: usize) -> Result<(), SanitizeError> {
    if depth > MAX_DEPTH {
        return Err(SanitizeError::TooDeep(MAX_DEPTH));
    }
    if node.is_element() {
        let tag = node.tag_name();
        if let Some(ns) = tag.namespace()
            && ns != SVG_NS
        {
            return Err(SanitizeError::ForbiddenElement(tag.name().to_string()));
        }
        if FORBIDDEN_ELEMENTS
            .iter()
            .any(|f| f.eq_ignore_ascii_case(tag.name()))
        {
            return Err(SanitizeError::ForbiddenElement(tag.name().to_string()));
        }
    }
    for child in node.children() {
        check_forbidden(child, depth + 1)?;
    }
    Ok(())
}

fn write_element(node: Node<'_, '_>, out: &mut String, is_root: bool) {
    let name = node.tag_name().name();
    if !ALLOWED_ELEMENTS.contains(&name) {
        return;
    }

    out.push('<');
    out.push_str(name);
    if is_root {
        out.push_str(" xmlns=\"");
        out.push_str(SVG_NS);
        out.push('"');
    }
    for attr in node.attributes() {
        if attr.namespace().is_some() || !attribute_is_safe(attr.name(), attr.value()) {
            continue;
        }
        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        out.push_str(&escape_xml(attr.value()));
        out.push('"');
    }

    let mut children = node.children().peekable();
    if children.peek().is_none() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in children {
        match child.node_type() {
            NodeType::Element => write_element(child, out, false),
            NodeType::Text => {
                if let Some(text) = child.text() {
                    out.push_str(&escape_xml(text));
                }
            }
            NodeType::Root | NodeType::Comment | NodeType::PI => {}
        }
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn attribute_is_safe(name: &str, value: &str) -> bool {
    let lower_name = name.to_ascii_lowercase();
    if lower_name.starts_with("on") || lower_name == "href" {
        return false;
    }

    let lower_value = value.to_ascii_lowercase();
    // CSS escapes can spell `url(` without the literal text.
    if lower_value.contains('\\') {
        return false;
    }
    if lower_value.contains("javascript:") || lower_value.contains("data:") {
        return false;
    }
    if lower_name == "style" {
        return !(lower_value.contains("url(")
            || lower_value.contains("expression(")
            || lower_value.contains("@import"));
    }
    // Paint servers may only point inside the fragment.
    lower_value
        .match_indices("url(")
        .all(|(idx, _)| lower_value[idx + 4..].trim_start().starts_with('#'))
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
