//! Markup node tree.
//!
//! A parsed document is a single [`MarkupNode`] owning its children. Nodes are
//! built once by the parser and never mutated afterwards.

/// One element of a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    /// Element kind, without any XML namespace prefix.
    pub element_type: String,
    /// Value of the `name` attribute, if present.
    pub identifier: Option<String>,
    /// Child elements in document order.
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Creates a node with no identifier and no children.
    #[must_use]
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            identifier: None,
            children: Vec::new(),
        }
    }

    /// Creates a node carrying an identifier.
    #[must_use]
    pub fn named(element_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            identifier: Some(identifier.into()),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns the node.
    #[must_use]
    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children and returns the node.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the identifier if it is present and non-empty.
    #[must_use]
    pub fn binding_identifier(&self) -> Option<&str> {
        self.identifier.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns true if the node carries a non-empty identifier.
    #[must_use]
    pub fn is_bindable(&self) -> bool {
        self.binding_identifier().is_some()
    }

    /// Iterates over every descendant of this node, depth-first, parent
    /// before children. The node itself is not included.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// Returns the number of nodes in this subtree, including this node.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.descendants().count()
    }
}

/// Depth-first iterator over a forest of nodes.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Descendants<'a> {
    fn new(roots: &'a [MarkupNode]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Flattens a sequence of sibling nodes into document order.
///
/// Each node is followed by all of its descendants before the next sibling,
/// so the result is a pre-order walk of the whole forest.
#[must_use]
pub fn flatten(nodes: &[MarkupNode]) -> Vec<&MarkupNode> {
    Descendants::new(nodes).collect()
}
