//! Consumption of the external FASTA/FASTQ reader contract.
//!
//! Parsing and record validation belong to `needletail`; this crate only
//! iterates the records it produces. Streams are single-pass: a second pass
//! means reopening the file.

use crate::error::Result;
use needletail::FastxReader;

/// Counts records in one full pass over the stream. O(1) memory; returns 0
/// for an empty stream. Parse errors propagate.
pub fn count_reads(reader: &mut dyn FastxReader) -> Result<u64> {
    let mut total: u64 = 0;
    while let Some(record) = reader.next() {
        record?;
        total += 1;
    }
    Ok(total)
}
