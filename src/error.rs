use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdxError>;

#[derive(Debug, Error)]
pub enum IdxError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid format: expected magic {expected:#010x}, found {found:#010x}")]
    InvalidMagic { expected: u32, found: u32 },
    #[error("truncated data: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("invalid format: {rows}x{cols} images are too large to index")]
    DimensionOverflow { rows: u32, cols: u32 },
    #[error("invalid format: {count} images of {rows}x{cols} pixels")]
    EmptyImages { count: u32, rows: u32, cols: u32 },
    #[error("invalid format: label {value} at index {index} is not a digit")]
    LabelOutOfRange { index: usize, value: u8 },
    #[error("{images} images but {labels} labels")]
    CountMismatch { images: usize, labels: usize },
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl IdxError {
    /// True for errors caused by the file contents rather than by the stream.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IdxError::InvalidMagic { .. }
                | IdxError::DimensionOverflow { .. }
                | IdxError::EmptyImages { .. }
                | IdxError::LabelOutOfRange { .. }
        )
    }
}
