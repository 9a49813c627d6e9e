use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("no readable content found")]
    NoContent,

    #[error("article has no title")]
    MissingTitle,
}
