//! HTML serialization.
//!
//! Output is deterministic: `id` first, then `class`, then the remaining
//! attributes in insertion order, then `style`. Live properties are
//! reflected (`checked`, `selected`, input `value`) in place of the
//! attributes they started from.

use std::fmt::Write;

use crate::document::{Document, NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serialize `node` and its subtree.
pub fn outer_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

/// Serialize the children of `node`.
pub fn inner_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    for child in doc.children(node) {
        write_node(doc, *child, &mut out);
    }
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    match doc.kind(node) {
        NodeKind::Document => {
            for child in doc.children(node) {
                write_node(doc, *child, out);
            }
        }
        NodeKind::Text => out.push_str(&escape_text(&doc.text(node))),
        NodeKind::Element => write_element(doc, node, out),
    }
}

fn write_element(doc: &Document, node: NodeId, out: &mut String) {
    let tag = doc.tag(node);
    let checkable = doc.is_checkable(node);
    let reflects_value = tag == "input" && !checkable;

    out.push('<');
    out.push_str(tag);

    if let Some(id) = doc.id(node) {
        write_attr(out, "id", id);
    }
    if !doc.classes(node).is_empty() {
        write_attr(out, "class", &doc.classes(node).join(" "));
    }
    for (name, value) in doc.attrs(node) {
        let reflected = match name.as_str() {
            "id" => true,
            "checked" => checkable,
            "selected" => tag == "option",
            "value" => reflects_value,
            _ => false,
        };
        if !reflected {
            write_attr(out, name, value);
        }
    }
    if reflects_value {
        if let Some(value) = doc.value(node).filter(|v| !v.is_empty()) {
            write_attr(out, "value", &value);
        }
    }
    if checkable && doc.is_checked(node) {
        out.push_str(" checked");
    }
    if tag == "option" && doc.is_selected(node) {
        out.push_str(" selected");
    }
    if !doc.styles(node).is_empty() {
        let mut style = String::new();
        for (property, value) in doc.styles(node) {
            let _ = write!(style, "{property}: {value};");
        }
        write_attr(out, "style", &style);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        return;
    }
    for child in doc.children(node) {
        write_node(doc, *child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        let _ = write!(out, " {name}");
    } else {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

impl Document {
    pub fn outer_html(&self, node: NodeId) -> String {
        outer_html(self, node)
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        inner_html(self, node)
    }
}
