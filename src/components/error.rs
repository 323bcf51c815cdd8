use thiserror::Error;

/// Failures that end an interactive session.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A numeric field received text that does not parse
    #[error("invalid {field}: '{input}' is not a number")]
    InvalidNumber { field: &'static str, input: String },

    /// Input closed while an operation was still prompting
    #[error("input closed while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),
}
