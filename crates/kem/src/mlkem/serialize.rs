//! Fixed-width serialization for ML-KEM keys and ciphertexts.
//!
//! Byte layouts match the published sizes exactly:
//!   public key  = 12-bit packed t_hat (384 * K bytes) || rho (32 bytes)
//!   secret key  = 12-bit packed s_hat || public key || H(pk) || z
//!   ciphertext  = du-bit packed compressed u || dv-bit packed compressed v
//!
//! Every unpack routine validates the input length against the parameter
//! set's declared size and reports `MalformedInput` on any mismatch; this is
//! the only explicit error condition in the core.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use qcrypt_algorithms::poly::compress::{compress_poly, decompress_poly};
use qcrypt_algorithms::poly::serialize::{
    CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
};

use super::cpa_pke::{CpaCiphertextInner, CpaPublicKeyInner, CpaSecretKeyInner};
use super::params::{MlKemParams, MLKEM_POLY_BITS, MLKEM_SYM_BYTES, POLY_PACKED_BYTES};
use super::poly::{NttPoly, NttPolyVec, Poly, PolyVec, RingPoly};
use crate::error::{Error, Result};

/// Bytes occupied by one packed polynomial at d bits per coefficient.
pub(crate) const fn compressed_poly_bytes(d: usize) -> usize {
    qcrypt_algorithms::poly::serialize::packed_bytes::<super::params::PolyModParams>(d)
}

fn pack_ring_poly(poly: &RingPoly, bits: usize) -> Result<Vec<u8>> {
    Ok(<DefaultCoefficientSerde as CoefficientPacker<_>>::pack_coeffs(poly, bits)?)
}

fn unpack_ring_poly(bytes: &[u8], bits: usize, context: &'static str) -> Result<RingPoly> {
    <DefaultCoefficientSerde as CoefficientUnpacker<_>>::unpack_coeffs(bytes, bits).map_err(|_| {
        Error::MalformedInput {
            context,
            expected: compressed_poly_bytes(bits),
            actual: bytes.len(),
        }
    })
}

/// Pack the public key: t_hat || rho.
pub(crate) fn pack_pk<P: MlKemParams>(pk: &CpaPublicKeyInner<P>) -> Result<Vec<u8>> {
    let (t_hat, rho) = pk;
    let mut packed = Vec::with_capacity(P::PUBLIC_KEY_BYTES);

    for poly in &t_hat.polys {
        packed.extend_from_slice(&pack_ring_poly(&poly.0, MLKEM_POLY_BITS)?);
    }
    packed.extend_from_slice(rho);

    Ok(packed)
}

/// Unpack a public key, validating its exact length.
pub(crate) fn unpack_pk<P: MlKemParams>(bytes: &[u8]) -> Result<CpaPublicKeyInner<P>> {
    if bytes.len() != P::PUBLIC_KEY_BYTES {
        return Err(Error::MalformedInput {
            context: "public key",
            expected: P::PUBLIC_KEY_BYTES,
            actual: bytes.len(),
        });
    }

    let mut t_hat = NttPolyVec::<P>::zero();
    for (i, poly) in t_hat.polys.iter_mut().enumerate() {
        let start = i * POLY_PACKED_BYTES;
        let ring =
            unpack_ring_poly(&bytes[start..start + POLY_PACKED_BYTES], MLKEM_POLY_BITS, "public key")?;
        *poly = NttPoly(ring);
    }
    // Untrusted 12-bit values may exceed q; restore the canonical range
    t_hat.reduce();

    let mut rho = [0u8; MLKEM_SYM_BYTES];
    rho.copy_from_slice(&bytes[P::K * POLY_PACKED_BYTES..]);

    Ok((t_hat, rho))
}

/// Pack the IND-CPA secret key: s_hat.
pub(crate) fn pack_sk<P: MlKemParams>(sk: &CpaSecretKeyInner<P>) -> Result<Vec<u8>> {
    let mut packed = Vec::with_capacity(P::K * POLY_PACKED_BYTES);
    for poly in &sk.polys {
        packed.extend_from_slice(&pack_ring_poly(&poly.0, MLKEM_POLY_BITS)?);
    }
    Ok(packed)
}

/// Unpack an IND-CPA secret key, validating its exact length.
pub(crate) fn unpack_sk<P: MlKemParams>(bytes: &[u8]) -> Result<CpaSecretKeyInner<P>> {
    if bytes.len() != P::K * POLY_PACKED_BYTES {
        return Err(Error::MalformedInput {
            context: "secret key",
            expected: P::K * POLY_PACKED_BYTES,
            actual: bytes.len(),
        });
    }

    let mut s_hat = NttPolyVec::<P>::zero();
    for (i, poly) in s_hat.polys.iter_mut().enumerate() {
        let start = i * POLY_PACKED_BYTES;
        let ring =
            unpack_ring_poly(&bytes[start..start + POLY_PACKED_BYTES], MLKEM_POLY_BITS, "secret key")?;
        *poly = NttPoly(ring);
    }
    s_hat.reduce();

    Ok(s_hat)
}

/// Compress and pack a ciphertext: u at du bits, v at dv bits.
pub(crate) fn pack_ciphertext<P: MlKemParams>(ct: &CpaCiphertextInner<P>) -> Result<Vec<u8>> {
    let (u, v) = ct;
    let mut packed = Vec::with_capacity(P::CIPHERTEXT_BYTES);

    for poly in &u.polys {
        let compressed = compress_poly(&poly.0, P::DU);
        packed.extend_from_slice(&pack_ring_poly(&compressed, P::DU)?);
    }

    let compressed = compress_poly(&v.0, P::DV);
    packed.extend_from_slice(&pack_ring_poly(&compressed, P::DV)?);

    Ok(packed)
}

/// Unpack and decompress a ciphertext, validating its exact length.
pub(crate) fn unpack_ciphertext<P: MlKemParams>(bytes: &[u8]) -> Result<CpaCiphertextInner<P>> {
    if bytes.len() != P::CIPHERTEXT_BYTES {
        return Err(Error::MalformedInput {
            context: "ciphertext",
            expected: P::CIPHERTEXT_BYTES,
            actual: bytes.len(),
        });
    }

    let u_poly_bytes = compressed_poly_bytes(P::DU);

    let mut u = PolyVec::<P>::zero();
    for (i, poly) in u.polys.iter_mut().enumerate() {
        let start = i * u_poly_bytes;
        let packed = unpack_ring_poly(&bytes[start..start + u_poly_bytes], P::DU, "ciphertext")?;
        *poly = Poly(decompress_poly(&packed, P::DU));
    }

    let v_start = P::K * u_poly_bytes;
    let packed = unpack_ring_poly(&bytes[v_start..], P::DV, "ciphertext")?;
    let v = Poly(decompress_poly(&packed, P::DV));

    Ok((u, v))
}
