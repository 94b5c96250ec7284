//! Deterministic sampling-stride computation.

use crate::error::{Result, ScreenError};

/// Default number of reads sampled from a query file.
pub const DEFAULT_SUBSET_SIZE: u64 = 10;

/// Maps a total read count and a desired subset size to the stride used when
/// sampling a query file, as in "check every 1 in `stride` reads".
///
/// Returns 1 whenever `subset_size >= total_reads` (a file smaller than the
/// requested subset is sampled in full), otherwise
/// `floor(total_reads / subset_size)`, which is at least 1. Pure: the same
/// inputs always produce the same stride.
pub fn sampling_stride(total_reads: u64, subset_size: u64) -> Result<u64> {
    if subset_size == 0 {
        return Err(ScreenError::InvalidSamplingRequest);
    }
    if subset_size >= total_reads {
        return Ok(1);
    }
    Ok(total_reads / subset_size)
}
