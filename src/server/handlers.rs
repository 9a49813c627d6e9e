use axum::{
    extract::{Query, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use crate::{app_state::AppState, composer::DEFAULT_BYLINE, server::pages};

#[derive(Debug, Default, Deserialize)]
pub struct ConvertParams {
    pub url: Option<String>,
    pub author: Option<String>,
}

/// `GET /`: the input form without a `url`, otherwise the converted PDF.
pub async fn convert(State(state): State<AppState>, Query(params): Query<ConvertParams>) -> Response {
    let Some(url) = params.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return Html(pages::form_page()).into_response();
    };
    let author = params
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(DEFAULT_BYLINE);

    match state.converter.convert(url, author).await {
        Ok(document) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, "application/pdf".to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}.pdf\"", document.filename),
                ),
            ],
            document.pdf,
        )
            .into_response(),
        Err(error) => {
            warn!(url = %url, error = %error, "conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::error_page(&error.to_string())),
            )
                .into_response()
        }
    }
}
