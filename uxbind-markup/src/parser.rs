//! UXML markup parser.
//!
//! This module turns UXML documents into a [`MarkupNode`] tree. Only elements
//! take part in the tree: text, comments, processing instructions and the XML
//! declaration are skipped. The element type is the local name of the tag, so
//! `<ui:Button>` and `<Button>` both yield `Button`.

use crate::error::ParseError;
use crate::node::MarkupNode;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Attribute carrying the stable element identifier.
pub const IDENTIFIER_ATTRIBUTE: &str = "name";

/// Parses a markup document from a string.
///
/// # Arguments
/// * `xml` - Markup document content
///
/// # Returns
/// The root node of the document.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, contains no root element,
/// contains more than one root element, or leaves an element unclosed.
pub fn parse_markup(xml: &str) -> Result<MarkupNode, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut open: Vec<MarkupNode> = Vec::new();
    let mut root: Option<MarkupNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                ensure_single_root(&root, &open)?;
                open.push(parse_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                ensure_single_root(&root, &open)?;
                let node = parse_element(e)?;
                attach(node, &mut open, &mut root);
            }
            Ok(Event::End(_)) => {
                let node = open
                    .pop()
                    .ok_or_else(|| ParseError::structure("closing tag without opening tag"))?;
                attach(node, &mut open, &mut root);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.pop() {
        return Err(ParseError::unclosed(unclosed.element_type));
    }

    let root = root.ok_or_else(|| ParseError::structure("no root element found"))?;
    tracing::debug!(
        root = %root.element_type,
        nodes = root.subtree_len(),
        "parsed markup document"
    );
    Ok(root)
}

/// Parses a markup document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or its content is not a
/// well-formed markup document.
pub fn parse_markup_file(path: &Path) -> Result<MarkupNode, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_markup(&xml)
}

/// Builds a childless node from a start or empty tag.
fn parse_element(e: &BytesStart<'_>) -> Result<MarkupNode, ParseError> {
    let local_name = e.local_name();
    let element_type = std::str::from_utf8(local_name.as_ref())?;
    let mut node = MarkupNode::new(element_type);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == IDENTIFIER_ATTRIBUTE {
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw).map_err(quick_xml::Error::Escape)?;
            node.identifier = Some(value.into_owned());
        }
    }

    Ok(node)
}

/// Hands a finished node to its parent, or makes it the document root.
fn attach(node: MarkupNode, open: &mut [MarkupNode], root: &mut Option<MarkupNode>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

fn ensure_single_root(root: &Option<MarkupNode>, open: &[MarkupNode]) -> Result<(), ParseError> {
    match root {
        Some(existing) if open.is_empty() => Err(ParseError::structure(format!(
            "multiple root elements: '{}' is followed by another top-level element",
            existing.element_type
        ))),
        _ => Ok(()),
    }
}
