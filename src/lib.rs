//! # qcrypt
//!
//! A pure Rust implementation of the module-lattice key encapsulation
//! mechanism (ML-KEM / Kyber), providing post-quantum secure key exchange.
//!
//! ## Usage
//!
//! ```no_run
//! use qcrypt::api::Kem;
//! use qcrypt::kem::MlKem768;
//!
//! let mut rng = rand::rngs::OsRng;
//!
//! // Recipient generates a keypair and publishes the public key
//! let keypair = MlKem768::keypair(&mut rng).unwrap();
//! let pk = MlKem768::public_key(&keypair);
//! let sk = MlKem768::secret_key(&keypair);
//!
//! // Sender encapsulates a shared secret against the public key
//! let (ciphertext, ss_sender) = MlKem768::encapsulate(&mut rng, &pk).unwrap();
//!
//! // Recipient recovers the same secret from the ciphertext
//! let ss_recipient = MlKem768::decapsulate(&sk, &ciphertext).unwrap();
//! assert_eq!(ss_sender.as_ref(), ss_recipient.as_ref());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`qcrypt-api`]: Trait definitions, error types, and secure containers
//! - [`qcrypt-params`]: Published parameter sets
//! - [`qcrypt-algorithms`]: Polynomial-ring arithmetic (NTT, sampling,
//!   compression)
//! - [`qcrypt-kem`]: The ML-KEM scheme at the three security levels
//!
//! [`qcrypt-api`]: qcrypt_api
//! [`qcrypt-params`]: qcrypt_params
//! [`qcrypt-algorithms`]: qcrypt_algorithms
//! [`qcrypt-kem`]: qcrypt_kem

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use qcrypt_algorithms as algorithms;
pub use qcrypt_api as api;
pub use qcrypt_kem as kem;
pub use qcrypt_params as params;

// Workspace dependencies users are likely to need alongside the KEM
pub use rand;
pub use subtle;
pub use zeroize;

// Most-used items at the crate root
pub use qcrypt_api::{Error, Kem, Result};
pub use qcrypt_kem::{MlKem1024, MlKem512, MlKem768};
