//! Benchmark inputs and profiles for the skein sequence containers.
//!
//! Provides deterministic, seeded input generators so benchmark runs are
//! comparable across machines and commits:
//!
//! - [`seeded_u32s`]: uniform random `u32` values
//! - [`seeded_records`]: 16-byte records keyed by their leading 4 bytes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Width of one benchmark record in bytes.
pub const RECORD_WIDTH: usize = 16;

/// Generate `count` uniform random `u32` values from a fixed seed.
pub fn seeded_u32s(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}

/// Generate `count` 16-byte records from a fixed seed.
///
/// Each record's first 4 bytes are its sort key; the remainder is payload
/// that must travel with the key through container operations.
pub fn seeded_records(count: usize, seed: u64) -> Vec<[u8; RECORD_WIDTH]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut record = [0u8; RECORD_WIDTH];
            rng.fill(&mut record[..]);
            record
        })
        .collect()
}
