//! Bloom-filter contamination screening for sequencing-read files.
//!
//! Workflow:
//!    * Build: one pass over a reference FASTA/FASTQ counts its reads, a
//!      second pass populates a Bloom filter sized to that exact count and a
//!      target false-positive rate; the filter is persisted as a
//!      self-describing artifact.
//!    * Screen: a query file is sampled at a deterministic stride (every 1 in
//!      N reads, zero-based) and each sampled read is tested against one or
//!      more opened filters, accumulating per-filter checked/observed counts.
//!
//! The membership guarantee the rest of the system relies on: a filter never
//! produces false negatives, and false positives stay bounded by the error
//! rate it was built with. Filters are write-once; screening only ever opens
//! them read-only.

pub mod error;
pub mod fastx;
pub mod filter;
pub mod hash;
pub mod sampling;
pub mod screen;

pub use error::{Result, ScreenError};
pub use fastx::count_reads;
pub use filter::{
    BuildSummary, DEFAULT_ERROR_RATE, FilterBuilder, FilterConfig,
    FilterConfigBuilder, FilterConfigBuilderError, FilterParams,
    ReferenceFilter, ScreenFilter, build_reference_filter,
};
pub use hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
pub use sampling::{DEFAULT_SUBSET_SIZE, sampling_stride};
pub use screen::{FilterCounts, MatchResult, scan};
