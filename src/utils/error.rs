use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error on {path}: {source}")]
    FileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },
}

impl ToolError {
    pub fn file(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::FileError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
