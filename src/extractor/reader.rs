use readability::extractor;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::extractor::model::ReadabilityResult;

const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post",
    ".article",
    "#content",
    "#main",
    ".entry-content",
];

/// Minimum text length for a fallback container to count as the article.
const MIN_FALLBACK_TEXT: usize = 100;

pub fn extract(html: &str, url: &Url) -> Option<ReadabilityResult> {
    // Try readability first
    match extractor::extract(&mut html.as_bytes(), url) {
        Ok(article) if !article.text.trim().is_empty() => {
            let title = if article.title.trim().is_empty() {
                extract_title(&Html::parse_document(html)).unwrap_or_default()
            } else {
                article.title.trim().to_string()
            };
            return Some(ReadabilityResult {
                title,
                text: article.text,
                html: article.content,
            });
        }
        Ok(_) => debug!("readability found no text, falling back"),
        Err(e) => debug!(error = ?e, "readability failed, falling back"),
    }

    fallback_extract(html)
}

fn fallback_extract(html: &str) -> Option<ReadabilityResult> {
    let document = Html::parse_document(html);
    let (text, html_content) = extract_main_content(&document)?;

    Some(ReadabilityResult {
        title: extract_title(&document).unwrap_or_default(),
        text,
        html: html_content,
    })
}

/// `og:title`, then `<title>`, then the first `<h1>`.
fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        let og_title = document
            .select(&selector)
            .filter_map(|element| element.value().attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty());
        if let Some(title) = og_title {
            return Some(title.to_string());
        }
    }

    ["title", "h1"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .find(|title| !title.is_empty())
    })
}

fn extract_main_content(document: &Html) -> Option<(String, String)> {
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = element.text().collect::<String>();
            if text.trim().len() > MIN_FALLBACK_TEXT {
                return Some((text, element.inner_html()));
            }
        }
    }

    // Last resort: the whole body, if it says anything at all
    let body_selector = Selector::parse("body").ok()?;
    let body = document.select(&body_selector).next()?;
    let text = body.text().collect::<String>();
    if text.trim().is_empty() {
        return None;
    }
    Some((text, body.inner_html()))
}
