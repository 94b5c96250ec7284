//! Multi-filter matching over a sampled query stream.

use crate::error::{Result, ScreenError};
use crate::filter::ScreenFilter;
use needletail::FastxReader;
use std::collections::HashMap;
use tracing::debug;

/// Per-filter counts for one scan: reads sampled and examined, and of those,
/// reads the filter reported present (possibly false positives).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub checked: u64,
    pub observed: u64,
}

/// Scan results keyed by filter label. `checked` is identical across all
/// entries of one scan; `observed <= checked` for each.
pub type MatchResult = HashMap<String, FilterCounts>;

/// Streams the query once, sampling every record whose zero-based position
/// is a multiple of `stride`, and tests each sampled record against every
/// filter independently.
///
/// The sampling condition is `position % stride == 0` on a zero-based index:
/// position 0 is always sampled and the subset is reproducible for a given
/// stride, independent of content. Callers always pass a collection of
/// filters, even of size one; an empty collection is rejected rather than
/// returning an empty result. An exhausted stream ends the scan normally,
/// and an empty stream yields all-zero counts.
pub fn scan(
    reader: &mut dyn FastxReader,
    filters: &[ScreenFilter],
    stride: u64,
) -> Result<MatchResult> {
    if filters.is_empty() {
        return Err(ScreenError::InvalidConfig(
            "at least one filter is required".into(),
        ));
    }
    if stride == 0 {
        return Err(ScreenError::InvalidConfig(
            "stride must be at least 1".into(),
        ));
    }

    let mut counts = vec![FilterCounts::default(); filters.len()];
    let mut position: u64 = 0;
    while let Some(record) = reader.next() {
        let record = record?;
        if position % stride == 0 {
            let seq = record.seq();
            for (filter, c) in filters.iter().zip(counts.iter_mut()) {
                c.checked += 1;
                if filter.contains(&seq)? {
                    c.observed += 1;
                }
            }
        }
        position += 1;
    }

    debug!(reads = position, stride, "scan complete");
    Ok(filters
        .iter()
        .zip(counts)
        .map(|(filter, c)| (filter.label().to_string(), c))
        .collect())
}
