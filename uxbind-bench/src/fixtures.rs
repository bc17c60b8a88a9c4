//! Synthetic markup documents.

use uxbind_markup::MarkupNode;

const ELEMENT_TYPES: [&str; 4] = ["Button", "Label", "Toggle", "Slider"];

/// Builds a document of nested panels.
///
/// Every panel has `breadth` children; leaves are named controls, panels are
/// unnamed. The tree is `depth` levels deep below the root.
#[must_use]
pub fn nested_document(depth: usize, breadth: usize) -> MarkupNode {
    let mut counter = 0;
    let children = (0..breadth)
        .map(|_| panel(depth, breadth, &mut counter))
        .collect::<Vec<_>>();
    MarkupNode::new("UXML").with_children(children)
}

fn panel(depth: usize, breadth: usize, counter: &mut usize) -> MarkupNode {
    if depth <= 1 {
        let ty = ELEMENT_TYPES[*counter % ELEMENT_TYPES.len()];
        let node = MarkupNode::named(ty, format!("control-{counter}"));
        *counter += 1;
        return node;
    }
    let children = (0..breadth)
        .map(|_| panel(depth - 1, breadth, counter))
        .collect::<Vec<_>>();
    MarkupNode::new("VisualElement").with_children(children)
}

/// Renders a document as UXML text.
#[must_use]
pub fn to_uxml(root: &MarkupNode) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &MarkupNode, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    let name = node
        .identifier
        .as_ref()
        .map(|id| format!(" name=\"{id}\""))
        .unwrap_or_default();

    if node.children.is_empty() {
        out.push_str(&format!("{indent}<ui:{}{name} />\n", node.element_type));
        return;
    }
    out.push_str(&format!("{indent}<ui:{}{name}>\n", node.element_type));
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
    out.push_str(&format!("{indent}</ui:{}>\n", node.element_type));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_document_size() {
        let doc = nested_document(3, 4);
        // 4 + 16 panels, 64 named leaves
        assert_eq!(doc.descendants().count(), 84);
        assert_eq!(doc.descendants().filter(|n| n.is_bindable()).count(), 64);
    }

    #[test]
    fn test_to_uxml_parses_back() {
        let doc = nested_document(2, 3);
        let parsed = uxbind_markup::parse_markup(&to_uxml(&doc)).expect("Failed to parse");
        assert_eq!(parsed, doc);
    }
}
