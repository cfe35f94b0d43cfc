//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! This module provides a type-safe interface for key encapsulation
//! mechanisms, which are used for secure key exchange in public-key
//! cryptography.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for
/// serialization, preventing common security vulnerabilities.
pub trait Kem {
    /// Public key type.
    ///
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes`
    /// methods.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// Implements `Zeroize` for secure memory cleanup and `SerializeSecret`
    /// for safe serialization of key material.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// Implements `Zeroize`; should be converted to application keys
    /// immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys. It is an
    /// intermediate type and does not require a serialization contract.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// All randomness comes from the provided CSPRNG; the implementation
    /// never seeds its own.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// Must run in data-independent time and use implicit rejection where
    /// the algorithm calls for it: an invalid ciphertext yields a
    /// pseudorandom secret, not an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
