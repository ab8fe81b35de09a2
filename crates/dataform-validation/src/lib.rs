//! dataform Validation Core
//!
//! Pure Rust validation functions compatible with both std and no_std environments.
//! Used by the form controller to check field values on blur and submit.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod rule;
pub mod string;

// Re-export all validators
pub use rule::*;
pub use string::*;
