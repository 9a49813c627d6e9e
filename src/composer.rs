//! Wraps a transformed article into a standalone, print-styled HTML page.

use crate::{
    document::{escape_attr, escape_text},
    extractor::Article,
};

pub const DEFAULT_BYLINE: &str = "Unknown Author";

const PRINT_STYLES: &str = r#"body {
    font-family: serif;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    line-height: 1.6;
}
h1 { margin-bottom: 10px; }
h3 { color: #666; margin-top: 0; }
.references {
    margin-top: 50px;
    border-top: 1px solid #ccc;
    padding-top: 20px;
}
sup {
    color: #666;
    text-decoration: none;
}
.image-container {
    margin: 20px 0;
    text-align: center;
}
img {
    max-width: 100%;
    height: auto;
    display: block;
    margin: 0 auto;
}
figure {
    margin: 20px 0;
    text-align: center;
}
figcaption {
    color: #666;
    font-size: 0.9em;
    margin-top: 5px;
}
"#;

/// Builds the full document: styles, title heading, byline and body.
///
/// The output is a pure function of its inputs.
pub fn compose(article: &Article, byline: &str) -> String {
    let byline = match byline.trim() {
        "" => DEFAULT_BYLINE,
        trimmed => trimmed,
    };
    let title = escape_text(&article.title);

    let mut html = String::with_capacity(PRINT_STYLES.len() + article.text.len() * 2);
    html.push_str("<!DOCTYPE html>\n");
    match &article.language {
        Some(lang) => html.push_str(&format!("<html lang=\"{}\">\n", escape_attr(lang))),
        None => html.push_str("<html>\n"),
    }
    html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(PRINT_STYLES);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!("<h3>By {}</h3>\n", escape_text(byline)));
    html.push_str(&article.content.to_html());
    html.push_str("\n</body>\n</html>\n");
    html
}
