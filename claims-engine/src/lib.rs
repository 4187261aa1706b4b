//! Claims Engine for synthetic healthcare claims
//!
//! Provides coherent claim generation:
//! - Claim type, stay dates and charge bands
//! - First-applicable-rule denial decisions with contextual denial reasons
//! - Payment calculation by adjudication status
//! - Sequential and parallel bulk generation
//! - Claim set summaries

pub mod claims;
pub mod denial;
pub mod pricing;
pub mod payment;
pub mod reporting;

pub use claims::*;
pub use denial::*;
pub use pricing::*;
pub use payment::*;
pub use reporting::*;
