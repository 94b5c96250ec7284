use super::config::{FilterConfig, FilterParams};
use crate::error::{Result, ScreenError};
use bitvec::{bitvec, order::Lsb0, vec::BitVec};

/// A fixed-capacity Bloom filter over reference sequences.
///
/// Built once by bulk-loading a reference file, then persisted. Never
/// produces false negatives; false positives are bounded by the configured
/// rate.
pub struct ReferenceFilter {
    config: FilterConfig,
    params: FilterParams,
    bits: BitVec<u8, Lsb0>,
    insert_count: usize,
}

impl ReferenceFilter {
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;

        let params = FilterParams::from(&config);
        let bits = bitvec![u8, Lsb0; 0; params.bit_vector_size];

        Ok(Self {
            config,
            params,
            bits,
            insert_count: 0,
        })
    }

    /// Reassembles a filter from its persisted parts. Parameters come from
    /// the artifact, not recomputed from capacity.
    pub(crate) fn from_parts(
        config: FilterConfig,
        params: FilterParams,
        bits: BitVec<u8, Lsb0>,
    ) -> Self {
        Self {
            config,
            params,
            bits,
            insert_count: 0,
        }
    }

    pub fn insert(&mut self, item: &[u8]) -> Result<()> {
        let indices = (self.config.hash_function)(
            item,
            self.params.num_hashes,
            self.params.bit_vector_size,
        );

        for idx in indices {
            let idx = idx as usize;
            if idx >= self.params.bit_vector_size {
                return Err(ScreenError::IndexOutOfBounds {
                    index: idx,
                    capacity: self.params.bit_vector_size,
                });
            }
            self.bits.set(idx, true);
        }

        self.insert_count += 1;
        Ok(())
    }

    pub fn contains(&self, item: &[u8]) -> Result<bool> {
        let indices = (self.config.hash_function)(
            item,
            self.params.num_hashes,
            self.params.bit_vector_size,
        );

        for idx in indices {
            let idx = idx as usize;
            if idx >= self.params.bit_vector_size {
                return Err(ScreenError::IndexOutOfBounds {
                    index: idx,
                    capacity: self.params.bit_vector_size,
                });
            }
            if !self.bits[idx] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    pub(crate) fn bit_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}
