//! End-to-end conversion of one article URL into a PDF.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    composer::compose,
    config::Config,
    extractor::{ExtractionError, extract_page},
    fetcher::{FetchError, Fetcher},
    render::{PageLayout, RenderError, Renderer},
    transform::{Footnotes, TransformError, transform},
};

const MAX_FILENAME_LEN: usize = 50;
const FALLBACK_FILENAME: &str = "article";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to fetch article: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to extract article: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("failed to transform article: {0}")]
    Transform(#[from] TransformError),

    #[error("pdf conversion failed: {0}")]
    Render(#[from] RenderError),
}

/// Composed markup, ready for the renderer.
#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub title: String,
    pub markup: String,
    pub footnotes: Footnotes,
}

#[derive(Debug, Clone)]
pub struct ConvertedDocument {
    pub title: String,
    /// Suggested download name, without extension.
    pub filename: String,
    pub pdf: Vec<u8>,
}

/// Runs fetch, extract, transform, compose and render for one request.
///
/// Every call builds its own article and footnotes; the converter itself
/// holds only configuration and the shared HTTP client.
#[derive(Clone)]
pub struct Converter {
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
    layout: PageLayout,
}

impl Converter {
    pub fn new(fetcher: Fetcher, renderer: Arc<dyn Renderer>, layout: PageLayout) -> Self {
        Self {
            fetcher,
            renderer,
            layout,
        }
    }

    pub fn from_config(config: &Config, renderer: Arc<dyn Renderer>) -> Result<Self, ConvertError> {
        let fetcher = Fetcher::new(&config.fetch)?;
        Ok(Self::new(fetcher, renderer, config.layout.clone()))
    }

    /// Everything up to, but not including, rendering.
    pub async fn prepare(&self, url: &str, author: &str) -> Result<PreparedDocument, ConvertError> {
        let page = self.fetcher.fetch(url).await?;
        let mut article = extract_page(&page)?;
        let report = transform(&mut article.content, page.url_requested.as_str())?;
        let markup = compose(&article, author);

        Ok(PreparedDocument {
            title: article.title,
            markup,
            footnotes: report.footnotes,
        })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn convert(&self, url: &str, author: &str) -> Result<ConvertedDocument, ConvertError> {
        let prepared = self.prepare(url, author).await?;
        let pdf = self.renderer.render(&prepared.markup, &self.layout).await?;
        let filename = safe_filename(&prepared.title);

        info!(
            filename = %filename,
            footnotes = prepared.footnotes.len(),
            bytes = pdf.len(),
            "converted article"
        );

        Ok(ConvertedDocument {
            title: prepared.title,
            filename,
            pdf,
        })
    }
}

/// Derives a download name from a title: ASCII alphanumerics survive, every
/// other run of characters becomes a single `_`, and the result is
/// lowercased and cut to 50 characters.
pub fn safe_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len().min(MAX_FILENAME_LEN));
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if !name.ends_with('_') {
            name.push('_');
        }
    }
    name.truncate(MAX_FILENAME_LEN);

    if name.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        name
    }
}
