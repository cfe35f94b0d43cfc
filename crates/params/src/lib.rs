//! Algorithm constants for the qcrypt library
//!
//! This crate holds the published parameter sets consumed by the rest of the
//! workspace. It contains no code beyond constant definitions and is always
//! `no_std` compatible.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod pqc;
