use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the hash function used in the Bloom filter.
///
/// Takes an item, the number of hash values to compute, and the size of the
/// bit vector; returns one index per hash, each within `[0, bit_len)`.
///
/// Persisted filters are always reopened with [`default_hash_function`], so
/// the indices a filter was built with stay valid across processes.
pub type HashFunction = fn(&[u8], usize, usize) -> Vec<u32>;

pub(crate) fn hash_murmur32(key: &[u8]) -> u32 {
    let mut cursor = Cursor::new(key);
    murmur3_32(&mut cursor, 0).expect("Failed to compute Murmur3 hash")
}

pub(crate) fn hash_fnv32(key: &[u8]) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish() as u32
}

pub fn default_hash_function(
    item: &[u8],
    num_hashes: usize,
    bit_len: usize,
) -> Vec<u32> {
    let h1 = hash_murmur32(item);
    let h2 = hash_fnv32(item);
    (0..num_hashes)
        .map(|i| h1.wrapping_add((i as u32).wrapping_mul(h2)) % bit_len as u32)
        .collect()
}

pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    ((-(n as f64) * fpr.ln()) / (ln2 * ln2)).ceil() as usize
}

pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    (((m as f64 / n as f64) * std::f64::consts::LN_2).round() as usize).max(1)
}
