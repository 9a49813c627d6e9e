use tracing::debug;

use crate::document::{DocumentTree, Element, Node};

// Also covers the dedicated `share-button` class through the partial match.
const SHARE_MARKER: &str = "share";

/// Removes share controls anywhere in the tree and returns how many
/// subtrees were dropped. A removed element takes its descendants with it.
pub fn remove_share_controls(tree: &mut DocumentTree) -> usize {
    remove_from(&mut tree.children)
}

fn remove_from(nodes: &mut Vec<Node>) -> usize {
    let before = nodes.len();
    nodes.retain(|node| match node {
        Node::Element(element) => !is_share_control(element),
        _ => true,
    });
    let mut removed = before - nodes.len();

    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            removed += remove_from(&mut element.children);
        }
    }

    removed
}

pub fn is_share_control(element: &Element) -> bool {
    if element.is("button") && contains_share(&element.text_content()) {
        debug!("removing share button");
        return true;
    }

    let has_marker = |attr: &str| element.attr(attr).is_some_and(contains_share);
    if has_marker("class") || has_marker("id") {
        debug!(element = %element.name, "removing element with share class/id");
        return true;
    }

    false
}

/// Case-insensitive substring match for the share heuristic.
pub(crate) fn contains_share(value: &str) -> bool {
    value.to_lowercase().contains(SHARE_MARKER)
}
