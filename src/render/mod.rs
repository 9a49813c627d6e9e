pub mod chrome;
pub mod errors;
pub mod layout;

pub use chrome::{ChromeRenderer, RenderOptions};
pub use errors::RenderError;
pub use layout::{Margins, PageLayout};

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Turns composed markup into a paginated PDF.
///
/// Implementations own whatever engine resources they acquire and must
/// release them before `render` returns, on success and on error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, markup: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError>;
}
