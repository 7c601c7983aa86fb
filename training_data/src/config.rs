use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cistercian::consts::MAX_VALUE;

use crate::consts::*;
use crate::error::{DataError, Result};

/// Ranges of values and symbol sizes to generate training images for.
///
/// Missing fields in a config file fall back to the defaults in `consts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub batch_size: usize,
    pub network_input_size: u32,
    pub min_value: u32,
    pub max_value: u32,
    pub min_height: usize,
    pub max_height: usize,
    pub min_width: usize,
    pub max_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            batch_size: BATCH_SIZE,
            network_input_size: INPUT_SIZE,
            min_value: DATA_MIN_VALUE,
            max_value: DATA_MAX_VALUE,
            min_height: DATA_MIN_HEIGHT,
            max_height: DATA_MAX_HEIGHT,
            min_width: DATA_MIN_WIDTH,
            max_width: DATA_MAX_WIDTH,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        GeneratorConfig::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| -> Result<()> { Err(DataError::InvalidConfig(reason.to_string())) };
        if self.batch_size == 0 {
            return invalid("batch_size must be positive");
        }
        if self.network_input_size == 0 {
            return invalid("network_input_size must be positive");
        }
        if self.min_value > self.max_value || self.max_value > MAX_VALUE {
            return invalid("values must satisfy min_value <= max_value <= 9999");
        }
        if self.min_height == 0 || self.min_height > self.max_height {
            return invalid("heights must satisfy 1 <= min_height <= max_height");
        }
        if self.min_width == 0 || self.min_width > self.max_width {
            return invalid("widths must satisfy 1 <= min_width <= max_width");
        }
        Ok(())
    }

    // one class per value
    pub fn number_of_classes(&self) -> usize {
        (self.max_value - self.min_value + 1) as usize
    }
}
