use tracing::debug;
use url::Url;

use crate::{
    document::{DocumentTree, Element, Node},
    transform::{footnote::Footnotes, share::contains_share},
};

pub const REFERENCES_CLASS: &str = "references";
pub const REFERENCES_HEADING: &str = "References";

/// Replaces every anchor, in document order, with its text plus a
/// superscript `[n]` marker and records the target as footnote `n`.
///
/// Anchors whose text or href mentions "share", and anchors with no
/// visible text, are dropped without a footnote. An anchor with no `href`
/// still gets a marker; its footnote target is empty.
pub fn convert_links(tree: &mut DocumentTree, base_url: &Url) -> Footnotes {
    let mut footnotes = Footnotes::new();
    convert_in(&mut tree.children, base_url, &mut footnotes);
    footnotes
}

fn convert_in(nodes: &mut Vec<Node>, base_url: &Url, footnotes: &mut Footnotes) {
    let original = std::mem::take(nodes);

    for node in original {
        match node {
            Node::Element(anchor) if anchor.is("a") => {
                nodes.extend(replace_anchor(&anchor, base_url, footnotes));
            }
            Node::Element(mut element) => {
                convert_in(&mut element.children, base_url, footnotes);
                nodes.push(Node::Element(element));
            }
            other => nodes.push(other),
        }
    }
}

fn replace_anchor(anchor: &Element, base_url: &Url, footnotes: &mut Footnotes) -> Vec<Node> {
    let text = anchor.text_content();
    let href = anchor.attr("href");

    if contains_share(&text) || href.is_some_and(contains_share) || text.trim().is_empty() {
        debug!(href = ?href, "dropping share or empty link");
        return Vec::new();
    }

    let target = href
        .map(|href| resolve_target(href, base_url))
        .unwrap_or_default();
    let index = footnotes.push(target);
    vec![
        Node::Text(text),
        Element::new("sup")
            .with_child(Node::Text(format!("[{index}]")))
            .into(),
    ]
}

fn resolve_target(href: &str, base_url: &Url) -> String {
    base_url
        .join(href.trim())
        .map(|url| url.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Appends the references block listing every footnote as `[n] target`.
/// Nothing is appended when there are no footnotes.
pub fn append_references(tree: &mut DocumentTree, footnotes: &Footnotes) -> bool {
    if footnotes.is_empty() {
        return false;
    }

    let mut section = Element::new("div")
        .with_attr("class", REFERENCES_CLASS)
        .with_child(Element::new("h2").with_child(Node::text(REFERENCES_HEADING)).into());

    for footnote in footnotes.iter() {
        section
            .children
            .push(Element::new("p").with_child(Node::Text(footnote.to_string())).into());
    }

    tree.append(section);
    true
}
