use tracing::debug;
use url::Url;

use crate::document::{DocumentTree, Element, Node};

pub const IMAGE_CONTAINER_CLASS: &str = "image-container";

/// Absolutizes `src`, marks the image lazy and wraps it in an image
/// container. Images without a usable `src` are left alone. Returns the
/// number of images rewritten.
pub fn normalize_images(tree: &mut DocumentTree, base_url: &Url) -> usize {
    normalize_in(&mut tree.children, base_url)
}

fn normalize_in(nodes: &mut [Node], base_url: &Url) -> usize {
    let mut rewritten = 0;

    for node in nodes.iter_mut() {
        let Node::Element(element) = node else {
            continue;
        };

        if element.is("img") && has_src(element) {
            let mut image = std::mem::replace(element, Element::new("div"));
            rewrite_image(&mut image, base_url);
            *element = Element::new("div")
                .with_attr("class", IMAGE_CONTAINER_CLASS)
                .with_child(Node::Element(image));
            rewritten += 1;
        } else {
            rewritten += normalize_in(&mut element.children, base_url);
        }
    }

    rewritten
}

fn has_src(image: &Element) -> bool {
    image.attr("src").is_some_and(|src| !src.is_empty())
}

fn rewrite_image(image: &mut Element, base_url: &Url) {
    if let Some(src) = image.attr("src").map(str::to_owned) {
        match base_url.join(src.trim()) {
            Ok(absolute) => image.set_attr("src", absolute.as_str()),
            Err(e) => debug!(src = %src, error = %e, "leaving unresolvable image src as-is"),
        }
    }
    image.set_attr("loading", "lazy");
}
