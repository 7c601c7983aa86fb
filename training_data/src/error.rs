use cistercian::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("batch {index} out of range, generator has {len} batches")]
    BatchOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DataError>;
