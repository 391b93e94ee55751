use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute name to attribute value, as found on an SVG element.
pub type AttributeMap = BTreeMap<String, String>;

/// One element of the scene tree.
///
/// Nodes are addressed by `id` when overlays are applied. An empty id is legal (the baker omits
/// ids on elements that never animate) and such elements are never overlay targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Stable id, unique within one tree.
    #[serde(default)]
    pub id: String,
    /// Element kind name (`svg`, `g`, `path`, ...).
    pub tag: String,
    /// Static attribute values.
    #[serde(default)]
    pub attributes: AttributeMap,
    /// Child elements and text, in document order.
    #[serde(default)]
    pub children: Vec<Child>,
}

/// A child slot of an [`ElementNode`]: either a nested element or literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// Literal text content. Carries no id.
    Text(String),
    /// Nested element.
    Element(ElementNode),
}

impl ElementNode {
    /// Create an element with no attributes and no children.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            attributes: AttributeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child element append.
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Builder-style text append.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Value of attribute `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(e) => Some(e),
            Child::Text(_) => None,
        })
    }

    /// Pre-order depth-first iterator over this element and all descendant elements.
    ///
    /// Children are visited in stored order. Text children are skipped.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First element (in depth-first order) whose id equals `id`.
    pub fn find(&self, id: &str) -> Option<&ElementNode> {
        if id.is_empty() {
            return None;
        }
        self.walk().find(|n| n.id == id)
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        self.walk().count()
    }
}

/// Iterator returned by [`ElementNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a ElementNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed push keeps the first child on top of the stack.
        for child in node.children.iter().rev() {
            if let Child::Element(e) = child {
                self.stack.push(e);
            }
        }
        Some(node)
    }
}
