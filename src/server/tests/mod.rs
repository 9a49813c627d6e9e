use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{
    app_state::AppState,
    convert::Converter,
    fetcher::{FetchOptions, Fetcher},
    render::{MockRenderer, PageLayout, RenderError},
    server::router,
};

const ARTICLE: &str = include_str!("../../extractor/tests/fixtures/article.html");

fn app(renderer: MockRenderer) -> Router {
    let fetcher = Fetcher::new(&FetchOptions::default()).unwrap();
    let converter = Converter::new(fetcher, Arc::new(renderer), PageLayout::default());
    router(AppState::new(converter))
}

fn convert_uri(url: &str, author: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("url", url);
    if let Some(author) = author {
        query.append_pair("author", author);
    }
    format!("/?{}", query.finish())
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn article_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(ARTICLE),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_missing_url_shows_form() {
    let mut renderer = MockRenderer::new();
    renderer.expect_render().never();

    let response = get(app(renderer), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn test_empty_url_shows_form() {
    let mut renderer = MockRenderer::new();
    renderer.expect_render().never();

    let response = get(app(renderer), "/?url=&author=Jane").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Article to PDF Converter"));
}

#[tokio::test]
async fn test_convert_returns_pdf_attachment() {
    let server = article_server().await;
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|markup, layout| {
            markup.contains("<h3>By Jane Doe</h3>")
                && markup.contains("<h2>References</h2>")
                && *layout == PageLayout::a4()
        })
        .times(1)
        .returning(|_, _| Ok(b"%PDF-1.7 test".to_vec()));

    let uri = convert_uri(&format!("{}/article", server.uri()), Some("Jane Doe"));
    let response = get(app(renderer), &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"sample_article"));
    assert!(disposition.ends_with(".pdf\""));
    assert_eq!(body_string(response).await, "%PDF-1.7 test");
}

#[tokio::test]
async fn test_missing_author_uses_default_byline() {
    let server = article_server().await;
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|markup, _| markup.contains("<h3>By Unknown Author</h3>"))
        .times(1)
        .returning(|_, _| Ok(b"%PDF".to_vec()));

    let uri = convert_uri(&format!("{}/article", server.uri()), None);
    let response = get(app(renderer), &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_fetch_failure_renders_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut renderer = MockRenderer::new();
    renderer.expect_render().never();

    let uri = convert_uri(&format!("{}/gone", server.uri()), Some("Jane"));
    let response = get(app(renderer), &uri).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("failed to fetch article: http error 404"));
    assert!(body.contains(r#"<a href="/">Back to converter</a>"#));
}

#[tokio::test]
async fn test_unextractable_page_never_reaches_renderer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loading"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(include_str!("../../extractor/tests/fixtures/empty.html")),
        )
        .mount(&server)
        .await;

    let mut renderer = MockRenderer::new();
    renderer.expect_render().never();

    let uri = convert_uri(&format!("{}/loading", server.uri()), None);
    let response = get(app(renderer), &uri).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("failed to extract article"));
}

#[tokio::test]
async fn test_render_failure_renders_error_page() {
    let server = article_server().await;
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .times(1)
        .returning(|_, _| Err(RenderError::Launch("chrome not found".to_string())));

    let uri = convert_uri(&format!("{}/article", server.uri()), None);
    let response = get(app(renderer), &uri).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("pdf conversion failed: failed to launch browser: chrome not found"));
}
