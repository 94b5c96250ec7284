//! On-disk filter artifact.
//!
//! Layout: 4 magic bytes, one format version byte, then a bincode-encoded
//! `(capacity, false_positive_rate, num_hashes, bit_len, bit bytes)` tuple.
//! The artifact is self-describing: opening re-reads the parameters the
//! filter was built with instead of recomputing them.

use super::bloom::ReferenceFilter;
use super::config::{FilterConfig, FilterParams};
use crate::error::{Result, ScreenError};
use crate::hash::default_hash_function;
use bitvec::{order::Lsb0, vec::BitVec};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

const MAGIC: [u8; 4] = *b"RSBF";
const FORMAT_VERSION: u8 = 1;

impl ReferenceFilter {
    /// Flushes the filter to `dest`. After this returns, the artifact is
    /// durable and openable by independent readers.
    pub fn finalize(&self, dest: &Path) -> Result<()> {
        let body = bincode::encode_to_vec(
            (
                self.capacity() as u64,
                self.false_positive_rate(),
                self.params().num_hashes as u32,
                self.params().bit_vector_size as u64,
                self.bit_bytes().to_vec(),
            ),
            bincode::config::standard(),
        )
        .map_err(|e| ScreenError::Serialization(e.to_string()))?;

        let mut file = File::create(dest)?;
        file.write_all(&MAGIC)?;
        file.write_all(&[FORMAT_VERSION])?;
        file.write_all(&body)?;
        file.sync_all()?;

        debug!(
            dest = %dest.display(),
            bytes = body.len() + MAGIC.len() + 1,
            "filter finalized"
        );
        Ok(())
    }
}

/// A read-only handle on a persisted filter, labeled by its path.
///
/// Opened filters never mutate their backing file; dropping the handle
/// releases everything.
pub struct ScreenFilter {
    label: String,
    filter: ReferenceFilter,
}

impl ScreenFilter {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScreenError::FilterNotFound(path.to_path_buf()));
        }

        let raw = fs::read(path)?;
        let filter = Self::decode(&raw)
            .map_err(|reason| ScreenError::CorruptFilter {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(
            path = %path.display(),
            capacity = filter.capacity(),
            num_hashes = filter.params().num_hashes,
            "filter opened"
        );
        Ok(Self {
            label: path.display().to_string(),
            filter,
        })
    }

    fn decode(raw: &[u8]) -> std::result::Result<ReferenceFilter, String> {
        if raw.len() < MAGIC.len() + 1 {
            return Err("truncated header".into());
        }
        if raw[..MAGIC.len()] != MAGIC {
            return Err("bad magic, not a filter artifact".into());
        }
        let version = raw[MAGIC.len()];
        if version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {version}, expected {FORMAT_VERSION}"
            ));
        }

        let body = &raw[MAGIC.len() + 1..];
        let ((capacity, fpr, num_hashes, bit_len, bytes), consumed): (
            (u64, f64, u32, u64, Vec<u8>),
            usize,
        ) = bincode::decode_from_slice(body, bincode::config::standard())
            .map_err(|e| format!("undecodable body: {e}"))?;

        if consumed != body.len() {
            return Err("trailing bytes after filter body".into());
        }
        if capacity == 0 {
            return Err("zero capacity".into());
        }
        if fpr <= 0.0 || fpr >= 1.0 {
            return Err(format!("false positive rate {fpr} out of range"));
        }
        if num_hashes == 0 {
            return Err("zero hash functions".into());
        }
        let bit_len = bit_len as usize;
        if bytes.len() != bit_len.div_ceil(8) {
            return Err(format!(
                "bit array length mismatch: {} bytes for {} bits",
                bytes.len(),
                bit_len
            ));
        }

        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(bit_len);

        let config = FilterConfig {
            capacity: capacity as usize,
            false_positive_rate: fpr,
            hash_function: default_hash_function,
        };
        let params = FilterParams {
            bit_vector_size: bit_len,
            num_hashes: num_hashes as usize,
        };
        Ok(ReferenceFilter::from_parts(config, params, bits))
    }

    /// Filter identity used to key scan results.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, item: &[u8]) -> Result<bool> {
        self.filter.contains(item)
    }

    pub fn capacity(&self) -> usize {
        self.filter.capacity()
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.filter.false_positive_rate()
    }
}

impl std::fmt::Debug for ScreenFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenFilter")
            .field("label", &self.label)
            .field("capacity", &self.filter.capacity())
            .field("false_positive_rate", &self.filter.false_positive_rate())
            .finish()
    }
}
