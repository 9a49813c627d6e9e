use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url {0:?} cannot resolve relative references")]
    CannotBeABase(String),
}
