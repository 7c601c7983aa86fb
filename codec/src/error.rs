// errors raised by the codec; every one of them is fatal for the call that hit it

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Unexpected position token {0:?}")]
    InvalidToken(String),

    #[error("Unsupported number {0}, number should be 0-9 or a multiplication of 10/100/1000 of 1-9")]
    InvalidKey(String),

    #[error("Number out of range, supported range is [0, 9999], got {0}")]
    Range(String),

    #[error("Unsupported input, only int supported, got {0}")]
    Type(String),

    #[error(
        "Cannot add this symbol, already using order {order}, current value is {current}, attempting to add {rejected}"
    )]
    DuplicateOrder {
        order: usize,
        current: u32,
        rejected: u32,
    },

    #[error("Stroke of size {height}x{width} does not match any symbol in the mapping")]
    UnrecognizedStroke { height: usize, width: usize },

    #[error("Size mismatch between symbol and mapping, symbol shape: {found:?}, mapping shape: {expected:?}")]
    SizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Canvas dimensions must be at least 1x1, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
