use crate::error::{Result, ScreenError};
use crate::hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
use derive_builder::Builder;

/// Default target false-positive rate when none is given on the command line.
pub const DEFAULT_ERROR_RATE: f64 = 0.0005;

/// Configuration for a reference filter.
///
/// Capacity and error rate are fixed at construction; a persisted filter is
/// never re-derived from its contents.
#[derive(Clone, Builder)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Expected number of reference reads (sized from an exact count)
    #[builder(default = "1_000_000")]
    pub capacity: usize,

    /// Target false positive rate (0.0 to 1.0)
    #[builder(default = "DEFAULT_ERROR_RATE")]
    pub false_positive_rate: f64,

    /// Hash function used for filter operations
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ScreenError::InvalidConfig(
                "Capacity must be > 0".into(),
            ));
        }
        if self.false_positive_rate <= 0.0 || self.false_positive_rate >= 1.0 {
            return Err(ScreenError::InvalidConfig(
                "False positive rate must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for FilterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterConfig")
            .field("capacity", &self.capacity)
            .field("false_positive_rate", &self.false_positive_rate)
            .finish()
    }
}

/// Derived parameters calculated from FilterConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub bit_vector_size: usize,
    pub num_hashes: usize,
}

impl From<&FilterConfig> for FilterParams {
    fn from(config: &FilterConfig) -> Self {
        let bit_vector_size =
            optimal_bit_vector_size(config.capacity, config.false_positive_rate);
        let num_hashes = optimal_num_hashes(config.capacity, bit_vector_size);

        Self {
            bit_vector_size,
            num_hashes,
        }
    }
}
