use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while rendering a node tree.
///
/// A failing node aborts the whole render; the error travels up through
/// composites, elements and conditionals without being wrapped again.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to encode value of attribute '{attribute}': {source}")]
    Encode {
        attribute: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Component failed: {0}")]
    Component(Box<dyn StdError + Send + Sync>),

    #[error("{0}")]
    Message(String),
}

impl RenderError {
    /// Wraps an error raised by a caller-defined node.
    pub fn component(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        RenderError::Component(err.into())
    }

    pub fn msg(message: impl Into<String>) -> Self {
        RenderError::Message(message.into())
    }
}
