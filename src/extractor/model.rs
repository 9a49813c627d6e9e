use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::document::DocumentTree;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid space regex"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("valid newline regex"));

/// The readable part of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Base URL for every relative reference in `content`.
    pub url: Url,
    pub title: String,
    pub language: Option<String>,
    pub text: String,
    pub content: DocumentTree,
}

/// Raw output of the readability pass, before sanitizing.
#[derive(Debug)]
pub struct ReadabilityResult {
    pub title: String,
    pub text: String,
    pub html: String,
}

pub fn normalize_whitespace(text: &str) -> String {
    let spaced = SPACE_RUNS.replace_all(text.trim(), " ");
    BLANK_LINES.replace_all(&spaced, "\n\n").to_string()
}
