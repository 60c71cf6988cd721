use splitbill_domain::{BillError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("item '{name}': {source}")]
    Item {
        name: String,
        #[source]
        source: BillError,
    },
    #[error("share of '{item}' for '{participant}': {source}")]
    Share {
        participant: String,
        item: String,
        #[source]
        source: BillError,
    },
    #[error("tax: {0}")]
    Tax(#[source] ValidationError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse summary SVG: {0}")]
    InvalidSvg(String),
    #[error("summary image has an empty canvas")]
    EmptyCanvas,
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session document: {0}")]
    Format(String),
}
