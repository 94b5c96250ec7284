//! Reference Bloom filter: construction, persistence, read-only querying.
pub mod bloom;
pub mod builder;
pub mod config;
pub mod persist;

pub use bloom::ReferenceFilter;
pub use builder::{BuildSummary, FilterBuilder, build_reference_filter};
pub use config::{
    DEFAULT_ERROR_RATE, FilterConfig, FilterConfigBuilder,
    FilterConfigBuilderError, FilterParams,
};
pub use persist::ScreenFilter;
