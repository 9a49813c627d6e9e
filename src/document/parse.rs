use scraper::{ElementRef, Html, node::Node as HtmlNode};

use crate::document::node::{DocumentTree, Element, Node};

/// Parses an HTML fragment into a `DocumentTree`.
///
/// html5ever wraps fragments in a synthetic `<html>` root; only its children
/// are kept. Doctypes and processing instructions are dropped.
pub fn parse_fragment(html: &str) -> DocumentTree {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    DocumentTree::new(convert_children(root))
}

fn convert_children(parent: ElementRef<'_>) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in parent.children() {
        match child.value() {
            HtmlNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    nodes.push(Node::Element(convert_element(element)));
                }
            }
            HtmlNode::Text(text) => {
                let text: &str = text;
                // html5ever may split text runs; merge adjacent pieces.
                if let Some(Node::Text(previous)) = nodes.last_mut() {
                    previous.push_str(text);
                } else {
                    nodes.push(Node::text(text));
                }
            }
            HtmlNode::Comment(comment) => {
                let comment: &str = comment;
                nodes.push(Node::Comment(comment.to_string()));
            }
            _ => {}
        }
    }

    nodes
}

fn convert_element(element: ElementRef<'_>) -> Element {
    let value = element.value();
    Element {
        name: value.name().to_string(),
        attrs: value
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        children: convert_children(element),
    }
}
