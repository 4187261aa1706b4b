//! Common error handling utilities for the synthetic claims generator
//! 
//! Every crate in the workspace reports failures through the types defined
//! here, so a generation run surfaces one consistent taxonomy to its caller.
//! 
//! # Error Categories
//! 
//! - **ValidationError**: a constructed record violates one of its invariants
//!   (identifier format, amount bounds, date ordering, status/denial pairing).
//!   Raised at construction time and never coerced away.
//! - **ConfigurationError**: generation parameters are degenerate (zero
//!   patients, empty code catalog, unparsable counts). Surfaced before any
//!   record is generated.
//! - **ExportError**: writing finished records to flat files failed. Only the
//!   command-line layer produces these.
//! 
//! The generation core is deterministic computation, so none of these are
//! retryable.
//! 
//! # Example
//! 
//! ```rust
//! use error_common::{codes, EntityKind, SynthError, ValidationError};
//! 
//! fn check_zip(zip: &str) -> Result<(), SynthError> {
//!     if zip.len() != 3 {
//!         return Err(ValidationError::new(
//!             EntityKind::Patient,
//!             "zip_code",
//!             codes::validation::INVALID_FORMAT,
//!             format!("expected 3 digits, got {:?}", zip),
//!         )
//!         .into());
//!     }
//!     Ok(())
//! }
//! 
//! assert!(check_zip("9021").is_err());
//! ```

pub mod types;
pub mod codes;

pub use types::*;
