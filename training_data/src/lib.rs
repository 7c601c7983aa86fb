//! Training images for reading Cistercian numerals: glyphs of every value at a range of
//! symbol sizes, resized to one network input size and re-binarized.

pub mod config;
pub mod consts;
pub mod error;
pub mod generator;
pub mod render;

pub use config::GeneratorConfig;
pub use error::{DataError, Result};
pub use generator::{Batch, CistercianImageGenerator};
