//! Polynomial coefficient packing and unpacking
//!
//! Fixed-width little-endian bit packing: coefficient i occupies bits
//! [i*d, (i+1)*d) of the output, least significant bit first. The same
//! layout serves the 12-bit lossless encoding and every compressed width.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker<M: Modulus> {
    /// Packs the polynomial's coefficients into a byte vector
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>>;
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker<M: Modulus> {
    /// Unpacks coefficients from a byte slice into a new polynomial
    ///
    /// Fails if the input length does not equal the packed size exactly.
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>>;
}

/// Number of bytes a polynomial occupies at the given coefficient width
pub const fn packed_bytes<M: Modulus>(bits_per_coeff: usize) -> usize {
    (M::N * bits_per_coeff).div_ceil(8)
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

impl<M: Modulus> CoefficientPacker<M> for DefaultCoefficientSerde {
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>> {
        validate::parameter(
            (1..=16).contains(&bits_per_coeff),
            "bits_per_coeff",
            "coefficient width must be in range [1, 16]",
        )?;

        let mut packed = Vec::with_capacity(packed_bytes::<M>(bits_per_coeff));
        let mask = (1u64 << bits_per_coeff) - 1;

        let mut acc = 0u64;
        let mut acc_bits = 0usize;
        for &coeff in poly.as_coeffs_slice() {
            acc |= ((coeff as u64) & mask) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                packed.push(acc as u8);
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        if acc_bits > 0 {
            packed.push(acc as u8);
        }

        Ok(packed)
    }
}

impl<M: Modulus> CoefficientUnpacker<M> for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>> {
        validate::parameter(
            (1..=16).contains(&bits_per_coeff),
            "bits_per_coeff",
            "coefficient width must be in range [1, 16]",
        )?;
        validate::length(
            "packed polynomial",
            bytes.len(),
            packed_bytes::<M>(bits_per_coeff),
        )?;

        let mut poly = Polynomial::<M>::zero();
        let mask = (1u64 << bits_per_coeff) - 1;

        let mut acc = 0u64;
        let mut acc_bits = 0usize;
        let mut pos = 0usize;
        for coeff in poly.as_mut_coeffs_slice() {
            while acc_bits < bits_per_coeff {
                acc |= (bytes[pos] as u64) << acc_bits;
                pos += 1;
                acc_bits += 8;
            }
            *coeff = (acc & mask) as u32;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }

        Ok(poly)
    }
}
