use ammonia::Builder;
use url::Url;

use crate::document::{DocumentTree, parse_fragment};

/// Attribute carrying a reference, per element.
const REFERENCE_ATTRS: &[(&str, &str)] = &[("a", "href"), ("img", "src")];

/// Strips scripts, styles and event handlers from extracted markup and
/// parses the result into a tree with references made absolute.
///
/// `button` elements and `class`/`id` attributes survive sanitizing so
/// share controls can still be recognised downstream.
pub fn sanitize_and_resolve_links(html: &str, base_url: &Url) -> DocumentTree {
    let clean_html = Builder::default()
        .add_tags(["button"])
        .add_generic_attributes(["class", "id"])
        .clean(html)
        .to_string();

    let mut tree = parse_fragment(&clean_html);
    resolve_links(&mut tree, base_url);
    tree
}

/// Resolves relative `href`/`src` attributes against the page URL.
/// Unresolvable values are left untouched.
pub fn resolve_links(tree: &mut DocumentTree, base_url: &Url) {
    tree.for_each_element_mut(|element| {
        for (tag, attr) in REFERENCE_ATTRS {
            if !element.is(tag) {
                continue;
            }
            let resolved = element
                .attr(attr)
                .filter(|value| !value.trim().is_empty())
                .and_then(|value| base_url.join(value.trim()).ok());
            if let Some(absolute) = resolved {
                element.set_attr(*attr, absolute.as_str());
            }
        }
    });
}
