//! Seeded random streams.
//!
//! A run has one seed. Each component owns a `ChaCha20Rng` seeded from a
//! sub-seed derived from that seed and the component's stream name, so adding
//! draws to one component never shifts another's output. Parallel units derive
//! an indexed sub-seed the same way.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

pub const PATIENT_STREAM: &str = "patients";
pub const PROVIDER_STREAM: &str = "providers";
pub const CLAIM_STREAM: &str = "claims";
pub const NOTE_STREAM: &str = "notes";

/// Generator type used by every factory
pub type SynthRng = ChaCha20Rng;

/// Sub-seed for a named component stream
pub fn derive_seed(seed: u64, stream: &str) -> u64 {
    derive(seed, stream, None)
}

/// Sub-seed for the `index`-th unit of a named stream
pub fn derive_indexed_seed(seed: u64, stream: &str, index: u64) -> u64 {
    derive(seed, stream, Some(index))
}

pub fn seeded_rng(seed: u64) -> SynthRng {
    ChaCha20Rng::seed_from_u64(seed)
}

fn derive(seed: u64, stream: &str, index: Option<u64>) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(stream.as_bytes());
    if let Some(index) = index {
        hasher.update(index.to_le_bytes());
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_derivation_is_stable() {
        assert_eq!(derive_seed(42, CLAIM_STREAM), derive_seed(42, CLAIM_STREAM));
        assert_eq!(
            derive_indexed_seed(42, CLAIM_STREAM, 3),
            derive_indexed_seed(42, CLAIM_STREAM, 3)
        );
    }

    #[test]
    fn test_streams_are_distinct() {
        assert_ne!(derive_seed(42, CLAIM_STREAM), derive_seed(42, NOTE_STREAM));
        assert_ne!(derive_seed(42, CLAIM_STREAM), derive_seed(43, CLAIM_STREAM));
        assert_ne!(
            derive_indexed_seed(42, CLAIM_STREAM, 0),
            derive_indexed_seed(42, CLAIM_STREAM, 1)
        );
        assert_ne!(derive_seed(42, CLAIM_STREAM), derive_indexed_seed(42, CLAIM_STREAM, 0));
    }

    #[test]
    fn test_seeded_rng_replays() {
        let mut a = seeded_rng(derive_seed(1, PATIENT_STREAM));
        let mut b = seeded_rng(derive_seed(1, PATIENT_STREAM));
        let xs: Vec<u32> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
