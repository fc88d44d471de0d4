/// What an [`Element`](super::Element) holds before it is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// A single text run. Mounted as one text node.
    Text(String),
    /// Child elements (text runs are `#text` elements).
    Children(Vec<super::Element>),
}

