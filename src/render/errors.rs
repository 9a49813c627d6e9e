use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid browser configuration: {0}")]
    Config(String),

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("failed to load document: {0}")]
    Navigation(String),

    #[error("failed to print document: {0}")]
    Print(String),

    #[error("rendering timed out after {0:?}")]
    Timeout(Duration),
}
