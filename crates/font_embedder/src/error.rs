//! Error types for font_embedder

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Failed to read input file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path '{path}' has no file name")]
    NoFileName { path: PathBuf },

    #[error("Input file name '{}' is not valid UTF-8", path.display())]
    NonUtf8FileName { path: PathBuf },

    #[error("Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported compression level: {level} (expected 1..=9)")]
    InvalidCompressionLevel { level: i64 },

    #[error("Archive entry '{entry}' does not match the input data")]
    VerifyMismatch { entry: String },

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EmbedError>;

impl EmbedError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput { path: path.into(), source }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput { path: path.into(), source }
    }
}
