//! Arena-backed document tree.
//!
//! Nodes are addressed by [`NodeId`]. Like the browser DOM, a node carries
//! attributes (markup state) and properties (live control state such as
//! `checked` or `value`) separately; properties start out from their
//! attributes when the node is mounted.

use std::collections::HashMap;

use crate::element::{Content, Element, TEXT_TAG};
use crate::selector::{SelectorError, SelectorList};

const DOCUMENT_TAG: &str = "#document";

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
}

/// Live control state, separate from attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub checked: bool,
    pub indeterminate: bool,
    /// Option selectedness.
    pub selected: bool,
    /// Current value of an input. `None` means "fall back to the attribute".
    pub value: Option<String>,
    /// Caret/selection range of a text input, in characters.
    pub selection: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    tag: String,
    /// Content of text nodes.
    text: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    props: Props,
    data: HashMap<String, String>,
    /// Detached child lists saved by [`Document::stash_children`].
    stash: HashMap<String, Vec<NodeId>>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            text: String::new(),
            classes: Vec::new(),
            attrs: Vec::new(),
            style: Vec::new(),
            props: Props::default(),
            data: HashMap::new(),
            stash: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The document: every node ever created, plus focus.
///
/// Detached nodes stay in the arena so handles remain valid, but
/// document-wide queries only visit connected nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document containing only the synthetic `#document` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document, DOCUMENT_TAG)],
            focused: None,
        }
    }

    /// A document whose root element is built from `root`.
    pub fn from_element(root: Element) -> Self {
        let mut doc = Self::new();
        let document = doc.root();
        doc.append_element(document, root);
        doc
    }

    /// The synthetic `#document` node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The first element under the root.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root())
            .iter()
            .copied()
            .find(|n| self.is_element(*n))
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::new(NodeKind::Element, tag.to_ascii_lowercase()))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        let mut node = Node::new(NodeKind::Text, TEXT_TAG);
        node.text = text.into();
        self.push(node)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Mount an element subtree as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.build(element);
        self.append(parent, id);
        id
    }

    fn build(&mut self, element: Element) -> NodeId {
        if element.is_text() {
            let text = match element.content {
                Content::Text(s) => s,
                _ => String::new(),
            };
            return self.create_text(text);
        }

        let mut node = Node::new(NodeKind::Element, element.tag);
        node.classes = element.classes;
        if let Some(id) = element.id {
            node.attrs.push(("id".to_string(), id));
        }
        node.attrs.extend(
            element
                .attrs
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value)),
        );
        node.style = element.style;
        node.props.checked = node.attrs.iter().any(|(n, _)| n == "checked");
        node.props.selected = node.attrs.iter().any(|(n, _)| n == "selected");
        let id = self.push(node);

        match element.content {
            Content::None => {}
            Content::Text(text) => {
                let text = self.create_text(text);
                self.append(id, text);
            }
            Content::Children(children) => {
                for child in children {
                    let child = self.build(child);
                    self.append(id, child);
                }
            }
        }
        id
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);

        // A checked radio entering the document wins its group.
        if self.is_element(child) && self.is_connected(child) {
            let checked_radios: Vec<NodeId> = std::iter::once(child)
                .chain(self.descendants(child))
                .filter(|n| self.is_radio(*n) && self.is_checked(*n))
                .collect();
            // Last one in document order wins, as in a browser.
            for radio in checked_radios.into_iter().rev() {
                if self.is_checked(radio) {
                    self.uncheck_group_peers(radio);
                }
            }
        }
    }

    fn is_radio(&self, node: NodeId) -> bool {
        self.tag(node) == "input" && self.input_type(node) == "radio"
    }

    /// Remove a node from its parent. The subtree stays addressable.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.node(node).parent {
            self.node_mut(parent).children.retain(|c| *c != node);
            self.node_mut(node).parent = None;
            if self
                .focused
                .is_some_and(|f| f == node || self.is_ancestor(node, f))
            {
                self.focused = None;
            }
        }
    }

    /// Detach every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        for child in self.node(node).children.clone() {
            self.detach(child);
        }
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.node(node).kind
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.node(node).kind == NodeKind::Element
    }

    /// Lowercase tag name (`#text` / `#document` for the synthetic kinds).
    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect()
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(n) = current {
            out.push(n);
            current = self.parent(n);
        }
        out
    }

    /// Whether `ancestor` contains `node` (strictly).
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).contains(&ancestor)
    }

    /// Whether the node is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root() || self.ancestors(node).last() == Some(&self.root())
    }

    /// Element descendants of `node` in document order (excluding `node`).
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            if self.is_element(n) {
                out.push(n);
                stack.extend(self.children(n).iter().rev().copied());
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn matches(&self, node: NodeId, selector: &SelectorList) -> bool {
        selector.matches(self, node)
    }

    /// `node` itself or its nearest ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &SelectorList) -> Option<NodeId> {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|n| selector.matches(self, *n))
    }

    pub fn find_first(&self, node: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|n| selector.matches(self, *n))
    }

    pub fn find_all(&self, node: NodeId, selector: &SelectorList) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect()
    }

    /// First connected element matching `selector`.
    pub fn query(&self, selector: &SelectorList) -> Option<NodeId> {
        self.find_first(self.root(), selector)
    }

    /// Every connected element matching `selector`, in document order.
    pub fn query_all(&self, selector: &SelectorList) -> Vec<NodeId> {
        self.find_all(self.root(), selector)
    }

    /// Parse `selector` and return all matches.
    pub fn select(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.query_all(&selector))
    }

    /// Parse `selector` and return the first match.
    pub fn select_first(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.query(&selector))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| self.id(*n) == Some(id))
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    /// Attribute value. Names are case-insensitive. `class` is not an
    /// attribute here; use [`Self::classes`].
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        if name == "class" {
            self.node_mut(node).classes = value.split_whitespace().map(String::from).collect();
            return;
        }
        let attrs = &mut self.node_mut(node).attrs;
        match attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        self.node_mut(node)
            .attrs
            .retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    /// Attributes in insertion order.
    pub fn attrs(&self, node: NodeId) -> &[(String, String)] {
        &self.node(node).attrs
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.attr(node, "id")
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.node(node).classes
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.node_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    // -------------------------------------------------------------------------
    // Inline style
    // -------------------------------------------------------------------------

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node)
            .style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn styles(&self, node: NodeId) -> &[(String, String)] {
        &self.node(node).style
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        let value = value.into();
        let style = &mut self.node_mut(node).style;
        match style.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value,
            None => style.push((property.to_string(), value)),
        }
    }

    pub fn remove_style(&mut self, node: NodeId, property: &str) {
        self.node_mut(node).style.retain(|(p, _)| p != property);
    }

    // -------------------------------------------------------------------------
    // Data store
    // -------------------------------------------------------------------------

    /// Stored data for `key`, falling back to the `data-<key>` attribute.
    pub fn data(&self, node: NodeId, key: &str) -> Option<&str> {
        match self.node(node).data.get(key) {
            Some(v) => Some(v.as_str()),
            None => self.attr(node, &format!("data-{key}")),
        }
    }

    /// Store data without touching attributes.
    pub fn set_data(&mut self, node: NodeId, key: &str, value: impl Into<String>) {
        self.node_mut(node).data.insert(key.to_string(), value.into());
    }

    pub fn remove_data(&mut self, node: NodeId, key: &str) -> Option<String> {
        self.node_mut(node).data.remove(key)
    }

    /// Stored data only (no attribute fallback).
    pub fn stored_data(&self, node: NodeId, key: &str) -> Option<&str> {
        self.node(node).data.get(key).map(String::as_str)
    }

    /// Detach the children of `node` and keep them under `key`, markup
    /// intact, until [`Self::unstash_children`]. Returns false (changing
    /// nothing) when something is already stashed under `key`.
    pub fn stash_children(&mut self, node: NodeId, key: &str) -> bool {
        if self.has_stash(node, key) {
            return false;
        }
        let children = self.node(node).children.clone();
        self.clear_children(node);
        self.node_mut(node).stash.insert(key.to_string(), children);
        true
    }

    /// Replace the children of `node` with the ones stashed under `key`.
    /// Returns false when nothing was stashed.
    pub fn unstash_children(&mut self, node: NodeId, key: &str) -> bool {
        let Some(children) = self.node_mut(node).stash.remove(key) else {
            return false;
        };
        self.clear_children(node);
        for child in children {
            self.append(node, child);
        }
        true
    }

    pub fn has_stash(&self, node: NodeId, key: &str) -> bool {
        self.node(node).stash.contains_key(key)
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Concatenated text of the node and its descendants.
    pub fn text(&self, node: NodeId) -> String {
        let n = self.node(node);
        if n.kind == NodeKind::Text {
            return n.text.clone();
        }
        let mut out = String::new();
        for child in &n.children {
            out.push_str(&self.text(*child));
        }
        out
    }

    /// Replace the node's children with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        let text = text.into();
        if self.node(node).kind == NodeKind::Text {
            self.node_mut(node).text = text;
            return;
        }
        self.clear_children(node);
        if !text.is_empty() {
            let child = self.create_text(text);
            self.append(node, child);
        }
    }

    // -------------------------------------------------------------------------
    // Form controls
    // -------------------------------------------------------------------------

    pub fn props(&self, node: NodeId) -> &Props {
        &self.node(node).props
    }

    pub fn is_form_control(&self, node: NodeId) -> bool {
        matches!(
            self.tag(node),
            "input" | "select" | "textarea" | "button" | "option"
        )
    }

    /// Lowercase `type` of an `<input>`, defaulting to `text`.
    pub fn input_type(&self, node: NodeId) -> String {
        self.attr(node, "type")
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "text".to_string())
    }

    /// The control a `<label>` stands for: the element named by its `for`
    /// attribute, else its first descendant input, select or textarea.
    pub fn labeled_control(&self, label: NodeId) -> Option<NodeId> {
        if self.tag(label) != "label" {
            return None;
        }
        let labelable = |n: &NodeId| matches!(self.tag(*n), "input" | "select" | "textarea");
        match self.attr(label, "for") {
            Some(id) => self.get_element_by_id(id).filter(labelable),
            None => self.descendants(label).into_iter().find(labelable),
        }
    }

    pub fn is_checkable(&self, node: NodeId) -> bool {
        self.tag(node) == "input" && matches!(self.input_type(node).as_str(), "checkbox" | "radio")
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.has_attr(node, "disabled")
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if disabled {
            self.set_attr(node, "disabled", "");
        } else {
            self.remove_attr(node, "disabled");
        }
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.node(node).props.checked
    }

    /// Set checkedness. Checking a radio unchecks the other connected radios
    /// sharing its `name`.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.node_mut(node).props.checked = checked;
        if checked && self.is_radio(node) {
            self.uncheck_group_peers(node);
        }
    }

    fn uncheck_group_peers(&mut self, radio: NodeId) {
        let Some(name) = self.attr(radio, "name").map(String::from) else {
            return;
        };
        if name.is_empty() || !self.is_connected(radio) {
            return;
        }
        for peer in self.radio_group(&name) {
            if peer != radio {
                self.node_mut(peer).props.checked = false;
            }
        }
    }

    /// Connected radio inputs with the given `name`, in document order.
    pub fn radio_group(&self, name: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.is_radio(*n) && self.attr(*n, "name") == Some(name))
            .collect()
    }

    pub fn is_indeterminate(&self, node: NodeId) -> bool {
        self.node(node).props.indeterminate
    }

    pub fn set_indeterminate(&mut self, node: NodeId, indeterminate: bool) {
        self.node_mut(node).props.indeterminate = indeterminate;
    }

    pub fn is_selected(&self, node: NodeId) -> bool {
        self.tag(node) == "option" && self.node(node).props.selected
    }

    /// Current value of a form control.
    ///
    /// Inputs report their live value, selects the value of the selected
    /// option, options their `value` attribute or text. Other elements have
    /// none.
    pub fn value(&self, node: NodeId) -> Option<String> {
        match self.tag(node) {
            "select" => self.select_value(node),
            "option" => Some(self.option_value(node)),
            "input" | "textarea" | "button" => {
                if let Some(v) = &self.node(node).props.value {
                    return Some(v.clone());
                }
                match self.attr(node, "value") {
                    Some(v) => Some(v.to_string()),
                    None if self.is_checkable(node) => Some("on".to_string()),
                    None if self.tag(node) == "textarea" => Some(self.text(node)),
                    None => Some(String::new()),
                }
            }
            _ => None,
        }
    }

    /// Set the live value. For a select this picks the matching option and
    /// returns whether one was found.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.tag(node) == "select" {
            return self.set_select_value(node, &value);
        }
        let props = &mut self.node_mut(node).props;
        props.value = Some(value);
        props.selection = None;
        true
    }

    fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(v) => v.to_string(),
            None => self.text(option).trim().to_string(),
        }
    }

    /// `<option>` elements of a select, in document order.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|n| self.tag(*n) == "option")
            .collect()
    }

    /// The selected option: the first one flagged selected, else the first.
    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.options(select);
        options
            .iter()
            .copied()
            .find(|o| self.node(*o).props.selected)
            .or_else(|| options.first().copied())
    }

    pub fn select_value(&self, select: NodeId) -> Option<String> {
        self.selected_option(select).map(|o| self.option_value(o))
    }

    /// Select the option whose value is `value`. Leaves the selection
    /// untouched and returns false when no option matches.
    pub fn set_select_value(&mut self, select: NodeId, value: &str) -> bool {
        let options = self.options(select);
        let Some(target) = options
            .iter()
            .copied()
            .find(|o| self.option_value(*o) == value)
        else {
            return false;
        };
        for option in options {
            self.node_mut(option).props.selected = option == target;
        }
        true
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Focus a connected element. Text inputs get the caret at the end.
    /// Returns true if focus changed.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if !self.is_element(node) || !self.is_connected(node) || self.is_disabled(node) {
            return false;
        }
        if self.tag(node) == "input" && !self.is_checkable(node) {
            let len = self.value(node).map(|v| v.chars().count()).unwrap_or(0);
            self.node_mut(node).props.selection = Some((len, len));
        }
        if self.focused == Some(node) {
            return false;
        }
        log::trace!("[focus] {:?} -> {}", self.focused, node);
        self.focused = Some(node);
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    pub fn selection(&self, node: NodeId) -> Option<(usize, usize)> {
        self.node(node).props.selection
    }
}
