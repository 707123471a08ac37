//! HTML front end: parse pages into a [`Document`] and serialize them back.
//!
//! Serialization goes through html5ever, so raw-text elements (`script`,
//! `style`, `noscript` and friends) are written verbatim, comments and the
//! doctype are kept, and void elements get no end tag.

use crate::dom::tree::{Document, NodeId};
use ego_tree::NodeRef;
use ego_tree::iter::Edge;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};
use scraper::{Html, Node};
use std::io;

/// Elements whose first newline the parser swallows
const NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

impl Document {
    /// Parse an HTML page. Parsing is lenient: fragments are wrapped in
    /// `<html><head></head><body>` like a browser would.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        if !parsed.errors.is_empty() {
            log::debug!("Parsed page with {} recoverable errors", parsed.errors.len());
        }
        Self::from_html(parsed)
    }

    /// Serialize the whole document, doctype and comments included
    pub fn to_html(&self) -> String {
        write_html(self.html().tree.root())
    }

    /// Serialize a single node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        self.node_ref(id).map(write_html).unwrap_or_default()
    }
}

fn write_html(node: NodeRef<'_, Node>) -> String {
    let opts = SerializeOpts {
        scripting_enabled: true,
        traversal_scope: TraversalScope::IncludeNode,
        create_missing_parent: false,
    };

    let mut buf = Vec::new();
    if let Err(e) = serialize(&mut buf, &Subtree(node), opts) {
        log::error!("Failed to serialize HTML: {}", e);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

struct Subtree<'a>(NodeRef<'a, Node>);

impl Serialize for Subtree<'_> {
    fn serialize<S>(&self, serializer: &mut S, _traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        for edge in self.0.traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Doctype(doctype) => serializer.write_doctype(doctype.name())?,
                    Node::Comment(comment) => serializer.write_comment(&comment.comment)?,
                    Node::Text(text) => {
                        if restores_leading_newline(node) {
                            serializer.write_text("\n")?;
                        }
                        serializer.write_text(&text.text)?;
                    }
                    Node::Element(element) => {
                        let attrs = element.attrs.iter().map(|(name, value)| (name, &value[..]));
                        serializer.start_elem(element.name.clone(), attrs)?;
                    }
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Some(element) = node.value().as_element() {
                        serializer.end_elem(element.name.clone())?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A text node opening a `pre`, `textarea` or `listing` with a newline needs
/// one more, since reparsing drops the first.
fn restores_leading_newline(text: NodeRef<'_, Node>) -> bool {
    let Some(parent) = text.parent() else {
        return false;
    };
    let opens_newline_element = parent
        .value()
        .as_element()
        .is_some_and(|element| NEWLINE_ELEMENTS.contains(&element.name()));

    opens_newline_element
        && parent.first_child() == Some(text)
        && text.value().as_text().is_some_and(|value| value.starts_with('\n'))
}
