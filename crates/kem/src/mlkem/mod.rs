//! ML-KEM Key Encapsulation Mechanism
//!
//! This module implements ML-KEM (Kyber), the lattice-based key
//! encapsulation mechanism selected for standardization by NIST. It provides
//! IND-CCA2 security via re-encryption-based implicit rejection over an
//! IND-CPA public-key encryption core.

// Modules defining the ML-KEM logic and parameters.
mod params;
mod poly; // Domain-tagged polynomial and polynomial-vector types
mod serialize; // Fixed-width codec for keys and ciphertexts
mod cpa_pke; // The IND-CPA-secure PKE scheme
mod ind_cca; // The Fujisaki-Okamoto transform for CCA security
mod kem; // The MlKemKem struct and api::Kem impls

// Concrete variants
mod mlkem512;
mod mlkem768;
mod mlkem1024;

// Re-export the primary KEM types for each security level.
pub use self::mlkem1024::MlKem1024;
pub use self::mlkem512::MlKem512;
pub use self::mlkem768::MlKem768;

// Re-export key/ciphertext types for users that need to name them directly.
pub use self::kem::{MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret};

// Re-export constants that external modules might need
pub use self::params::{MLKEM_SS_BYTES, MLKEM_SYM_BYTES};

#[cfg(test)]
mod tests;
