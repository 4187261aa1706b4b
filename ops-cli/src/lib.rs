//! Synthetic claims dataset generation
//!
//! Sequences the generators of one run and writes the result to flat files:
//! - Code catalog, then patients and providers
//! - Claims from patients, providers and codes (sequential or parallel)
//! - Notes from claims
//! - CSV and JSON export
//!
//! # Example Usage
//!
//! ```bash
//! # defaults: 1000 patients, 100 providers, 3 claims per patient, seed 42
//! claimgen
//!
//! # small reproducible run with a fixed "today"
//! claimgen --patients 50 --providers 5 --seed 7 --reference-date 2024-06-30
//!
//! # layered configuration: file, then CLAIMGEN_* environment, then flags
//! CLAIMGEN_NOTES_PER_CLAIM=2 claimgen --config claimgen.toml --parallel --json-logs
//! ```

pub mod export;
pub mod orchestrator;

pub use export::*;
pub use orchestrator::*;
