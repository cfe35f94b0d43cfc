//! Lattice arithmetic primitives with constant-time implementation
//!
//! This crate provides the polynomial-ring arithmetic underlying the qcrypt
//! key encapsulation mechanism: modular reduction, the Number-Theoretic
//! Transform, deterministic samplers, and lossy coefficient compression.
//! All operations on secret-dependent data are written to execute in
//! data-independent time, and the library is usable in both `std` and
//! `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
