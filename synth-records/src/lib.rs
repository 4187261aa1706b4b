//! Synthetic healthcare records
//!
//! Provides the shared building blocks of the claims generator:
//! - Entity records (patients, providers, codes, claims, notes)
//! - Construction-time invariant checks
//! - The fixed ICD-10 / CPT code catalog
//! - Patient and provider factories
//! - Seeded random streams and weighted categorical sampling

pub mod models;
pub mod validation;
pub mod catalog;
pub mod patients;
pub mod providers;
pub mod sampling;
pub mod seeds;
pub mod ids;
pub mod money;

pub use models::*;
pub use validation::*;
pub use catalog::*;
pub use patients::*;
pub use providers::*;
pub use sampling::*;
pub use seeds::*;
pub use ids::*;
pub use money::*;
