use async_trait::async_trait;
use chromiumoxide::{
    Browser, BrowserConfig,
    cdp::{browser_protocol::page::PrintToPdfParams, js_protocol::runtime::EvaluateParams},
};
use futures::StreamExt;
use std::{future::Future, path::PathBuf, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::render::{
    Renderer,
    errors::RenderError,
    layout::{PageLayout, mm_to_inches},
};

/// Longest wait for images before printing anyway.
const IMAGE_SETTLE_TIMEOUT: Duration = Duration::from_secs(15);

// Lazy images below the fold never start loading in a headless viewport, so
// they are switched to eager in the page before waiting on them.
const SETTLE_IMAGES_SCRIPT: &str = r#"Promise.all(Array.from(document.images).map((img) => {
    img.loading = "eager";
    if (img.complete) return true;
    return new Promise((resolve) => {
        img.addEventListener("load", () => resolve(true), { once: true });
        img.addEventListener("error", () => resolve(false), { once: true });
    });
})).then((loaded) => loaded.length)"#;

/// Launch settings for the headless browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Browser binary; auto-detected when `None`.
    pub chrome_executable: Option<PathBuf>,
    /// Upper bound for loading and printing one document.
    pub timeout: Duration,
    pub no_sandbox: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chrome_executable: None,
            timeout: Duration::from_secs(60),
            no_sandbox: true,
        }
    }
}

/// Renders through headless Chrome. Each call launches its own browser and
/// closes it before returning; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    options: RenderOptions,
}

impl ChromeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn browser_config(&self) -> Result<BrowserConfig, RenderError> {
        let mut builder = BrowserConfig::builder().request_timeout(self.options.timeout);
        if self.options.no_sandbox {
            builder = builder.no_sandbox().arg("--disable-setuid-sandbox");
        }
        if let Some(path) = &self.options.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(RenderError::Config)
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    #[instrument(skip_all, fields(markup_len = markup.len()))]
    async fn render(&self, markup: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let session = BrowserSession::launch(self.browser_config()?).await?;
        let pdf = render_scoped(session, markup, layout, self.options.timeout).await?;
        info!(bytes = pdf.len(), "rendered pdf");
        Ok(pdf)
    }
}

/// An acquired rendering engine. `close` must run exactly once.
pub(crate) trait EngineSession {
    fn print(
        &self,
        markup: &str,
        layout: &PageLayout,
    ) -> impl Future<Output = Result<Vec<u8>, RenderError>> + Send;

    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Prints with `session` and releases it whatever the outcome.
pub(crate) async fn render_scoped<S: EngineSession>(
    session: S,
    markup: &str,
    layout: &PageLayout,
    timeout: Duration,
) -> Result<Vec<u8>, RenderError> {
    let outcome = tokio::time::timeout(timeout, session.print(markup, layout)).await;
    session.close().await;

    match outcome {
        Ok(result) => result,
        Err(_) => Err(RenderError::Timeout(timeout)),
    }
}

struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(config: BrowserConfig) -> Result<Self, RenderError> {
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        // The CDP connection only makes progress while its handler is polled.
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "browser handler stopped");
                    break;
                }
            }
        });

        Ok(Self { browser, handler })
    }
}

impl EngineSession for BrowserSession {
    async fn print(&self, markup: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        page.set_content(markup)
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        match tokio::time::timeout(IMAGE_SETTLE_TIMEOUT, page.evaluate_expression(settle_params()?))
            .await
        {
            Ok(Ok(_)) => debug!("images settled"),
            Ok(Err(e)) => warn!(error = %e, "failed waiting for images"),
            Err(_) => warn!(timeout = ?IMAGE_SETTLE_TIMEOUT, "images still loading, printing anyway"),
        }

        page.pdf(print_params(layout))
            .await
            .map_err(|e| RenderError::Print(e.to_string()))
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "failed to close browser cleanly");
        }
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "failed to reap browser process");
        }
        self.handler.abort();
    }
}

fn settle_params() -> Result<EvaluateParams, RenderError> {
    EvaluateParams::builder()
        .expression(SETTLE_IMAGES_SCRIPT)
        .await_promise(true)
        .return_by_value(true)
        .build()
        .map_err(RenderError::Config)
}

fn print_params(layout: &PageLayout) -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(layout.print_background),
        paper_width: Some(mm_to_inches(layout.paper_width_mm)),
        paper_height: Some(mm_to_inches(layout.paper_height_mm)),
        margin_top: Some(mm_to_inches(layout.margins.top_mm)),
        margin_right: Some(mm_to_inches(layout.margins.right_mm)),
        margin_bottom: Some(mm_to_inches(layout.margins.bottom_mm)),
        margin_left: Some(mm_to_inches(layout.margins.left_mm)),
        ..Default::default()
    }
}
