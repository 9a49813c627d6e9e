pub mod cleaner;
pub mod errors;
pub mod language;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use errors::ExtractionError;
pub use model::Article;

use tracing::{info, instrument};
use url::Url;

use crate::{extractor::model::normalize_whitespace, fetcher::types::PageResponse};

/// Isolates the main article of `html` and its title.
///
/// Relative references inside the content are resolved against `base_url`.
/// Pages with no identifiable article fail rather than yield an empty one.
#[instrument(skip_all, fields(url = %base_url))]
pub fn extract(html: &str, base_url: &Url) -> Result<Article, ExtractionError> {
    // 1. Extract readable content using readability
    let result = reader::extract(html, base_url).ok_or(ExtractionError::NoContent)?;

    // 2. Sanitize and resolve links into a document tree
    let content = cleaner::sanitize_and_resolve_links(&result.html, base_url);
    let text = normalize_whitespace(&content.text_content());
    if text.is_empty() {
        return Err(ExtractionError::NoContent);
    }

    let title = result.title.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        return Err(ExtractionError::MissingTitle);
    }

    // 3. Detect language
    let language = language::detect_language(&text);

    info!(
        title = %title,
        language = ?language,
        chars = text.len(),
        "extracted article"
    );

    Ok(Article {
        url: base_url.clone(),
        title,
        language,
        text,
        content,
    })
}

/// Extracts from a fetched page, resolving against the requested URL.
pub fn extract_page(resp: &PageResponse) -> Result<Article, ExtractionError> {
    extract(&resp.body_utf8, &resp.url_requested)
}
