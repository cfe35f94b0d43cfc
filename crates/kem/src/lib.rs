//! Module-lattice Key Encapsulation Mechanism (KEM)
//!
//! This crate implements the ML-KEM (Kyber) key encapsulation mechanism at
//! the three standardized security levels. Two parties derive a 32-byte
//! shared secret over an untrusted channel; security rests on the Module
//! Learning-With-Errors problem.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
pub use mlkem::{MlKem1024, MlKem512, MlKem768};
