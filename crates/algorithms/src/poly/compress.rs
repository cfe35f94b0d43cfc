//! Lossy coefficient compression
//!
//! Maps canonical coefficients to d-bit integers and back, rounding half
//! away from zero in both directions. Compression is lossy by design: the
//! contract is the bounded reconstruction error
//! |decompress(compress(x)) - x| <= q / 2^(d+1), not an exact round trip.
//! Division by q goes through the Barrett quotient so that no
//! data-dependent division instruction is emitted.

use super::params::Modulus;
use super::polynomial::Polynomial;

/// Compress a canonical coefficient to d bits: round(x * 2^d / q) mod 2^d
///
/// Valid for d <= 11 with a modulus below 2^12 (the shifted dividend must
/// stay within Barrett range).
#[inline(always)]
pub fn compress_coeff<M: Modulus>(x: u32, d: usize) -> u32 {
    let dividend = x << d;
    let mut quotient =
        ((dividend as u64).wrapping_mul(M::BARRETT_MULTIPLIER) >> M::BARRETT_SHIFT) as u32;
    let remainder = dividend.wrapping_sub(quotient.wrapping_mul(M::Q));

    // The Barrett remainder lies in [0, 2q); rounding to nearest splits it
    // into three spans: [0, q/2) adds 0, [q/2, 3q/2) adds 1, [3q/2, 2q)
    // adds 2. Each comparison is done by sign-bit extraction.
    quotient = quotient.wrapping_add((M::Q / 2).wrapping_sub(remainder) >> 31 & 1);
    quotient = quotient.wrapping_add((M::Q + M::Q / 2).wrapping_sub(remainder) >> 31 & 1);

    quotient & ((1 << d) - 1)
}

/// Decompress a d-bit integer to a canonical coefficient: round(y * q / 2^d)
#[inline(always)]
pub fn decompress_coeff<M: Modulus>(y: u32, d: usize) -> u32 {
    let dividend = y * M::Q;
    // The bit shifted out below the quotient decides rounding up
    (dividend >> d) + ((dividend >> (d - 1)) & 1)
}

/// Compress every coefficient of a polynomial to d bits
pub fn compress_poly<M: Modulus>(poly: &Polynomial<M>, d: usize) -> Polynomial<M> {
    let mut result = Polynomial::<M>::zero();
    for (r, &c) in result
        .as_mut_coeffs_slice()
        .iter_mut()
        .zip(poly.as_coeffs_slice())
    {
        *r = compress_coeff::<M>(c, d);
    }
    result
}

/// Decompress every coefficient of a polynomial from d bits
pub fn decompress_poly<M: Modulus>(poly: &Polynomial<M>, d: usize) -> Polynomial<M> {
    let mut result = Polynomial::<M>::zero();
    for (r, &c) in result
        .as_mut_coeffs_slice()
        .iter_mut()
        .zip(poly.as_coeffs_slice())
    {
        *r = decompress_coeff::<M>(c, d);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::params::MlKemModulus;
    use proptest::prelude::*;

    const Q: u32 = MlKemModulus::Q;

    fn roundtrip_error(x: u32, d: usize) -> u32 {
        let z = decompress_coeff::<MlKemModulus>(compress_coeff::<MlKemModulus>(x, d), d);
        // distance on the mod-q circle
        let diff = (z + Q - x) % Q;
        diff.min(Q - diff)
    }

    #[test]
    fn reconstruction_error_is_bounded_exhaustively() {
        for d in [1usize, 4, 5, 10, 11] {
            let bound = (Q + (1 << (d + 1)) - 1) / (1 << (d + 1));
            for x in 0..Q {
                assert!(
                    roundtrip_error(x, d) <= bound,
                    "x={} d={} exceeds bound {}",
                    x,
                    d,
                    bound
                );
            }
        }
    }

    #[test]
    fn compress_stays_within_d_bits() {
        for d in [1usize, 4, 5, 10, 11] {
            for x in 0..Q {
                assert!(compress_coeff::<MlKemModulus>(x, d) < (1 << d));
            }
        }
    }

    #[test]
    fn decompress_then_compress_is_identity() {
        // The d-bit lattice points are fixed points of the round trip
        for d in [1usize, 4, 5, 10, 11] {
            for y in 0..(1u32 << d) {
                let x = decompress_coeff::<MlKemModulus>(y, d);
                assert!(x < Q);
                assert_eq!(compress_coeff::<MlKemModulus>(x, d), y);
            }
        }
    }

    #[test]
    fn one_bit_compression_thresholds() {
        // d = 1 maps the ring onto {0, 1} by proximity to q/2
        assert_eq!(compress_coeff::<MlKemModulus>(0, 1), 0);
        assert_eq!(compress_coeff::<MlKemModulus>(1664, 1), 1);
        assert_eq!(compress_coeff::<MlKemModulus>(1665, 1), 1);
        assert_eq!(compress_coeff::<MlKemModulus>(2497, 1), 0);
        assert_eq!(decompress_coeff::<MlKemModulus>(1, 1), 1665);
    }

    proptest! {
        #[test]
        fn poly_level_matches_coeff_level(x in 0u32..3329, d in 1usize..12) {
            let poly = Polynomial::<MlKemModulus>::from_coeffs(&vec![x; 256]).unwrap();
            let compressed = compress_poly(&poly, d);
            prop_assert_eq!(compressed.coeffs[0], compress_coeff::<MlKemModulus>(x, d));
            let restored = decompress_poly(&compressed, d);
            prop_assert_eq!(restored.coeffs[0], decompress_coeff::<MlKemModulus>(compressed.coeffs[0], d));
        }
    }
}
