//! Clinical Notes for synthetic healthcare claims
//!
//! Writes note text that agrees with the claim it describes:
//! - Note type chosen from claim status, type and procedure
//! - Per-diagnosis symptom and treatment vocabularies
//! - Independently sampled vital signs
//! - Denial explanations on every note of a denied claim

pub mod builder;
pub mod generator;
pub mod vitals;
pub mod vocabulary;

pub use builder::*;
pub use generator::*;
pub use vitals::*;
pub use vocabulary::*;
