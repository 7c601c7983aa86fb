// batches of (image, value) pairs for every combination of value, symbol height and symbol width.
//
// the images are created on the fly instead of in advance: a time <> memory tradeoff, since
// saving every number at every size takes ~36MB per 10K numbers of a given size.

use std::collections::HashMap;

use candle_core::{Device, Tensor};
use tracing::{debug, info};

use cistercian::{arabic_to_cistercian, Arabic, StrokeMapping};

use crate::config::GeneratorConfig;
use crate::error::{DataError, Result};
use crate::render::{resize_binarized, to_f32};

pub struct Batch {
    // [batch, size, size], 0.0 / 1.0
    pub images: Tensor,
    pub labels: Vec<u32>,
}

impl Batch {
    pub fn label_tensor(&self, device: &Device) -> Result<Tensor> {
        Ok(Tensor::new(self.labels.as_slice(), device)?)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub struct CistercianImageGenerator {
    config: GeneratorConfig,
    labels: Vec<u32>,
    dims: Vec<(usize, usize)>,
    // one mapping per symbol size, created the first time the size comes up
    mappings: HashMap<(usize, usize), StrokeMapping>,
    device: Device,
}

impl CistercianImageGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let mut labels = Vec::new();
        let mut dims = Vec::new();
        // heights outermost, then values, then widths
        for height in config.min_height..=config.max_height {
            for value in config.min_value..=config.max_value {
                for width in config.min_width..=config.max_width {
                    labels.push(value);
                    dims.push((height, width));
                }
            }
        }
        info!(permutations = labels.len(), batch_size = config.batch_size, "created image generator");
        Ok(CistercianImageGenerator { config, labels, dims, mappings: HashMap::new(), device: Device::Cpu })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn total_length(&self) -> usize {
        self.labels.len()
    }

    // number of batches; the last one may be short
    pub fn len(&self) -> usize {
        self.labels.len().div_ceil(self.config.batch_size)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    // the (value, height, width) triple at a position in the permutation order
    pub fn sample(&self, index: usize) -> Option<(u32, usize, usize)> {
        let (height, width) = *self.dims.get(index)?;
        Some((self.labels[index], height, width))
    }

    pub fn cached_mappings(&self) -> usize {
        self.mappings.len()
    }

    fn image(&mut self, value: u32, height: usize, width: usize) -> Result<Vec<f32>> {
        let mapping = match self.mappings.entry((height, width)) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => entry.insert(StrokeMapping::new(height, width)?),
        };
        let cistercian = arabic_to_cistercian(Arabic::try_from(value)?, mapping)?;
        let resized = resize_binarized(cistercian.canvas(), self.config.network_input_size)?;
        Ok(to_f32(&resized))
    }

    pub fn batch(&mut self, index: usize) -> Result<Batch> {
        if index >= self.len() {
            return Err(DataError::BatchOutOfRange { index, len: self.len() });
        }
        let start = index * self.config.batch_size;
        let end = (start + self.config.batch_size).min(self.labels.len());
        let size = self.config.network_input_size as usize;

        let mut data = Vec::with_capacity((end - start) * size * size);
        for i in start..end {
            let (height, width) = self.dims[i];
            data.extend(self.image(self.labels[i], height, width)?);
        }
        let labels = self.labels[start..end].to_vec();
        let images = Tensor::from_vec(data, (labels.len(), size, size), &self.device)?;
        debug!(index, samples = labels.len(), "built batch");
        Ok(Batch { images, labels })
    }
}
