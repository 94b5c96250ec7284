use super::bloom::ReferenceFilter;
use super::config::{FilterConfig, FilterConfigBuilder};
use crate::error::{Result, ScreenError};
use crate::fastx::count_reads;
use needletail::{FastxReader, parse_fastx_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Populates one filter from a full pass over a reference stream, then
/// persists it. The builder owns the write path; once `finalize` consumes
/// it, the artifact is read-only for everyone.
pub struct FilterBuilder {
    filter: ReferenceFilter,
    dest: PathBuf,
    inserted: u64,
}

impl FilterBuilder {
    pub fn create(config: FilterConfig, dest: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            filter: ReferenceFilter::new(config)?,
            dest: dest.into(),
            inserted: 0,
        })
    }

    /// Inserts the sequence of every record in the stream. Returns the total
    /// inserted so far.
    pub fn insert_all(&mut self, reader: &mut dyn FastxReader) -> Result<u64> {
        while let Some(record) = reader.next() {
            let record = record?;
            self.filter.insert(&record.seq())?;
            self.inserted += 1;
        }
        Ok(self.inserted)
    }

    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Flushes the filter to its destination and consumes the builder.
    pub fn finalize(self) -> Result<()> {
        self.filter.finalize(&self.dest)
    }
}

/// What a finished build looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub capacity: usize,
    pub bit_vector_size: usize,
    pub num_hashes: usize,
}

/// The canonical two-pass build: count the reference reads to size the
/// filter exactly, then populate and persist it.
///
/// Sizing from the actual count (rather than a caller-supplied guess) keeps
/// the false-positive rate at its target without over-allocating.
pub fn build_reference_filter(
    reference: &Path,
    error_rate: f64,
    dest: &Path,
) -> Result<BuildSummary> {
    let mut reader = parse_fastx_file(reference)?;
    let total = count_reads(reader.as_mut())?;
    if total == 0 {
        return Err(ScreenError::EmptyInput);
    }
    info!(reads = total, reference = %reference.display(), "sizing filter");

    let config = FilterConfigBuilder::default()
        .capacity(total as usize)
        .false_positive_rate(error_rate)
        .build()
        .map_err(|e| ScreenError::InvalidConfig(e.to_string()))?;

    let mut builder = FilterBuilder::create(config, dest)?;
    let summary = BuildSummary {
        capacity: builder.filter.capacity(),
        bit_vector_size: builder.filter.params().bit_vector_size,
        num_hashes: builder.filter.params().num_hashes,
    };

    // Second pass over the same file; streams are single-use.
    let mut reader = parse_fastx_file(reference)?;
    let inserted = builder.insert_all(reader.as_mut())?;
    debug!(inserted, "reference pass complete");
    builder.finalize()?;

    Ok(summary)
}
