use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("Invalid icon size: {0}. Must be between 1 and {1}")]
    InvalidSize(u32, u32),

    #[error("Invalid optimization level: {0}. Must be between 0 and {1}")]
    InvalidOptimizationLevel(u8, u8),

    #[error("Failed to create output directory {path:?}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {attempted} icons failed to convert")]
    BatchFailed { failed: usize, attempted: usize },
}

pub type Result<T> = std::result::Result<T, IconError>;
