use bytes::Bytes;
use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fs;
use url::Url;

use crate::extractor::{ExtractionError, extract, extract_page};
use crate::fetcher::types::{Charset, PageResponse};
use crate::transform::transform;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_article() {
    let url = Url::parse("https://example.com/article").unwrap();
    let article = extract(&fixture("article.html"), &url).unwrap();

    assert!(article.title.contains("Sample Article"));
    assert!(article.text.contains("first paragraph"));
    assert!(article.text.contains("second paragraph"));
    assert_eq!(article.language, Some("en".to_string()));
    assert_eq!(article.url, url);

    let html = article.content.to_html();
    assert!(!html.contains("<script"));
    assert!(!html.contains("<style"));
    assert!(!html.contains("<nav"));

    // Relative links are resolved during extraction
    assert!(html.contains("https://example.com/related"));
    assert!(html.contains("https://example.com/images/sample.jpg"));
}

#[test]
fn test_extracted_article_transforms_to_footnotes() {
    let url = Url::parse("https://example.com/article").unwrap();
    let mut article = extract(&fixture("article.html"), &url).unwrap();

    let report = transform(&mut article.content, url.as_str()).unwrap();

    assert!(
        report
            .footnotes
            .iter()
            .any(|footnote| footnote.target == "https://example.com/related")
    );
    assert!(
        report
            .footnotes
            .iter()
            .all(|footnote| !footnote.target.contains("share"))
    );
    assert!(article.content.to_html().contains("related coverage<sup>["));
}

#[test]
fn test_page_without_content_is_an_error() {
    let url = Url::parse("https://example.com/empty").unwrap();
    let result = extract(&fixture("empty.html"), &url);

    assert!(matches!(result, Err(ExtractionError::NoContent)));
}

#[test]
fn test_short_article_is_extracted() {
    let html = r#"<!DOCTYPE html><html><head><title>Bike Lanes Approved</title></head><body><article><p>The council voted on Tuesday to add protected bike lanes along Main Street, with work starting next month.</p></article></body></html>"#;

    let url = Url::parse("https://example.com/bike-lanes").unwrap();
    let article = extract(html, &url).unwrap();

    assert!(article.text.chars().count() < 250);
    assert!(article.text.contains("protected bike lanes"));
}

#[test]
fn test_keyword_heavy_article_is_extracted() {
    let html = format!(
        r#"<html><head><title>Cookie Law Update</title></head><body><article><p>{}</p></article></body></html>"#,
        "New cookie consent and privacy policy terms take effect for every browser. ".repeat(6)
    );

    let url = Url::parse("https://example.com/cookie-law").unwrap();
    let article = extract(&html, &url).unwrap();

    assert_eq!(article.title, "Cookie Law Update");
    assert!(article.text.contains("cookie consent"));
}

#[test]
fn test_minimal_valid_content() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>"#,
        "This is a valid article with enough content to pass the minimum requirements for extraction. ".repeat(20)
    );

    let url = Url::parse("https://example.com/valid").unwrap();
    let article = extract(&html, &url).unwrap();

    assert_eq!(article.title, "Valid Article");
    assert!(article.text.len() > 250);
}

#[test]
fn test_blank_document_is_an_error() {
    let url = Url::parse("https://example.com/blank").unwrap();
    assert!(extract("<html><body></body></html>", &url).is_err());
}

#[test]
fn test_malformed_html() {
    let html = format!(
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>{}",
        "More content that keeps going without closing anything at all. ".repeat(10)
    );

    let url = Url::parse("https://example.com/broken").unwrap();

    // Should handle malformed HTML gracefully
    if let Ok(article) = extract(&html, &url) {
        assert_eq!(article.title, "Broken");
        assert!(article.text.contains("More content"));
    }
}

#[test]
fn test_extract_page_uses_requested_url() {
    let html = format!(
        r#"<html><head><title>Moved</title></head><body><article><p>{} The story goes on in the <a href="next">next part</a> of this series.</p></article></body></html>"#,
        "An article body that runs on for a few sentences before it links onward. ".repeat(8)
    );

    let response = create_test_response(
        html,
        "https://example.com/stories/original",
        "https://cdn.example.net/mirror/page",
    );
    let article = extract_page(&response).unwrap();

    assert_eq!(article.url.as_str(), "https://example.com/stories/original");
    assert!(article.content.to_html().contains("https://example.com/stories/next"));
}

fn create_test_response(html: String, requested: &str, final_url: &str) -> PageResponse {
    PageResponse {
        url_requested: Url::parse(requested).unwrap(),
        url_final: Url::parse(final_url).unwrap(),
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body_raw: Bytes::from(html.clone()),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            path in "[a-z]{0,12}"
        ) {
            let url = Url::parse(&format!("https://example.com/{path}")).unwrap();
            // Should never panic regardless of input
            let _ = extract(&html, &url);
        }

        #[test]
        fn test_extract_then_transform_never_panics(html in ".*") {
            let url = Url::parse("https://example.com/").unwrap();
            if let Ok(mut article) = extract(&html, &url) {
                prop_assert!(transform(&mut article.content, url.as_str()).is_ok());
            }
        }
    }
}
