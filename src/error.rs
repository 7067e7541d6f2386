// src/error.rs
use thiserror::Error;
use trellis_layout::LayoutError;
use trellis_style::StyleParseError;

/// Errors raised while loading a layout document or running it.
#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("Constraint on '{node}' refers to unknown sibling '{reference}'")]
    UnknownReference { node: String, reference: String },

    #[error("Document is invalid: {0}")]
    Document(String),
}
