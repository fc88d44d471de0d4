use super::Content;

/// Tag used for text runs.
pub const TEXT_TAG: &str = "#text";

/// Markup builder.
///
/// An `Element` is plain data: it describes a subtree that is turned into
/// live nodes by [`Document::append_element`](crate::Document::append_element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,

    // Attributes in declaration order (excluding `id` and `class`)
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations.
    pub style: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn label() -> Self {
        Self::new("label")
    }

    /// A `<button type="button">`.
    pub fn button() -> Self {
        Self::new("button").attr("type", "button")
    }

    /// An `<input>` of the given type.
    pub fn input(kind: &str) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// An `<option>` with a value and a visible label.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(label)
    }

    /// A bare text run.
    pub fn text_node(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more classes (whitespace separated).
    pub fn class(mut self, classes: &str) -> Self {
        for name in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value),
            "class" => return self.class(&value),
            _ => match self.attrs.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => self.attrs.push((name, value)),
            },
        }
        self
    }

    /// Set a `data-<key>` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    /// Set a boolean attribute (present when `on`).
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self = self.attr(name, "");
        } else {
            self.attrs.retain(|(n, _)| n != name);
        }
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.flag("disabled", disabled)
    }

    pub fn checked(self, checked: bool) -> Self {
        self.flag("checked", checked)
    }

    pub fn selected(self, selected: bool) -> Self {
        self.flag("selected", selected)
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    // Visual
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value,
            None => self.style.push((property.to_string(), value)),
        }
        self
    }

    // Children

    /// Append a text run.
    ///
    /// On a text element this replaces its content instead.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        if self.is_text() {
            self.content = Content::Text(text.into());
            return self;
        }
        match &mut self.content {
            Content::None => self.content = Content::Text(text.into()),
            Content::Text(existing) => {
                let first = Element::text_node(std::mem::take(existing));
                self.content = Content::Children(vec![first, Element::text_node(text)]);
            }
            Content::Children(children) => children.push(Element::text_node(text)),
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(existing) => {
                let first = Element::text_node(std::mem::take(existing));
                self.content = Content::Children(vec![first, child]);
            }
        }
        self
    }

    pub fn children(self, new_children: impl IntoIterator<Item = Element>) -> Self {
        new_children.into_iter().fold(self, Element::child)
    }
}
