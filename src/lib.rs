pub mod app_state;
pub mod composer;
pub mod config;
pub mod convert;
pub mod document;
pub mod extractor;
pub mod fetcher;
pub mod render;
pub mod server;
pub mod transform;
