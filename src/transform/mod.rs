pub mod errors;
pub mod footnote;
pub mod images;
pub mod links;
pub mod share;


pub use errors::TransformError;
pub use footnote::{Footnote, Footnotes};
pub use images::normalize_images;
pub use links::{append_references, convert_links};
pub use share::remove_share_controls;

use tracing::{info, instrument};
use url::Url;

use crate::document::DocumentTree;

/// What a transform pass did to the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub share_controls_removed: usize,
    pub images_normalized: usize,
    pub footnotes: Footnotes,
    pub references_appended: bool,
}

/// Rewrites extracted content for print, in order: share controls are
/// removed, images normalized, links turned into footnotes, and the
/// references block appended.
///
/// On error the tree may be partially rewritten and should be discarded.
#[instrument(skip_all, fields(base_url = %base_url))]
pub fn transform(tree: &mut DocumentTree, base_url: &str) -> Result<TransformReport, TransformError> {
    let base_url = parse_base_url(base_url)?;

    // 1. Drop share controls before links are counted
    let share_controls_removed = remove_share_controls(tree);

    // 2. Absolutize, lazy-load and wrap images
    let images_normalized = normalize_images(tree, &base_url);

    // 3. Convert links to footnotes
    let footnotes = convert_links(tree, &base_url);

    // 4. Synthesize the references block
    let references_appended = append_references(tree, &footnotes);

    info!(
        share_controls_removed,
        images_normalized,
        footnotes = footnotes.len(),
        "transformed article content"
    );

    Ok(TransformReport {
        share_controls_removed,
        images_normalized,
        footnotes,
        references_appended,
    })
}

pub fn parse_base_url(base_url: &str) -> Result<Url, TransformError> {
    let url = Url::parse(base_url).map_err(|source| TransformError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(TransformError::CannotBeABase(base_url.to_string()));
    }

    Ok(url)
}
