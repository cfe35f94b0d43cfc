//! Number-Theoretic Transform over the negacyclic ring
//!
//! Seven-layer Cooley-Tukey forward transform and Gentleman-Sande inverse
//! over Z_q\[X\]/(X^N + 1). Because q - 1 is divisible by N but not 2N, the
//! ring splits into N/2 quadratic factors X^2 - gamma rather than linear
//! ones, so NTT-domain multiplication is the paired-coefficient
//! `base_mul` below, not an elementwise product.
//!
//! Coefficients stay in the standard domain throughout: every butterfly
//! multiplies by a Montgomery-form table entry, so the R factors cancel
//! inside `montgomery_mul`. Montgomery form appears only transiently, when
//! one operand of a base multiplication has been preconditioned with
//! `to_montgomery`.

use super::params::NttModulus;
use super::polynomial::Polynomial;
use super::reduce::{barrett_reduce, montgomery_mul, montgomery_reduce};

impl<M: NttModulus> Polynomial<M> {
    /// In-place forward transform (normal -> NTT domain)
    ///
    /// Layered Cooley-Tukey butterflies over spans 128, 64, .., 2, each
    /// butterfly computing t = zeta * b via Montgomery multiplication and
    /// Barrett-reducing both outputs.
    pub fn ntt_inplace(&mut self) {
        debug_assert_eq!(M::ZETAS.len(), M::N / 2);

        let n = M::N;
        let coeffs = self.as_mut_coeffs_slice();

        let mut k = 1usize;
        let mut len = n / 2;
        while len >= 2 {
            for start in (0..n).step_by(2 * len) {
                let zeta = M::ZETAS[k];
                k += 1;
                for j in start..start + len {
                    let t = montgomery_mul::<M>(zeta, coeffs[j + len]);
                    coeffs[j + len] = barrett_reduce::<M>(coeffs[j] + M::Q - t);
                    coeffs[j] = barrett_reduce::<M>(coeffs[j] + t);
                }
            }
            len /= 2;
        }
    }

    /// In-place inverse transform (NTT -> normal domain)
    ///
    /// Gentleman-Sande butterflies mirroring `ntt_inplace`, walking the zeta
    /// table backwards, followed by the (N/2)^-1 scaling folded into a
    /// single Montgomery multiplication per coefficient.
    pub fn from_ntt_inplace(&mut self) {
        debug_assert_eq!(M::ZETAS.len(), M::N / 2);

        let n = M::N;
        let coeffs = self.as_mut_coeffs_slice();

        let mut k = M::N / 2 - 1;
        let mut len = 2;
        while len <= n / 2 {
            for start in (0..n).step_by(2 * len) {
                let zeta = M::ZETAS[k];
                k -= 1;
                for j in start..start + len {
                    let t = coeffs[j];
                    coeffs[j] = barrett_reduce::<M>(t + coeffs[j + len]);
                    let diff = barrett_reduce::<M>(coeffs[j + len] + M::Q - t);
                    coeffs[j + len] = montgomery_mul::<M>(zeta, diff);
                }
            }
            len *= 2;
        }

        for c in coeffs.iter_mut() {
            *c = montgomery_mul::<M>(*c, M::N_INV);
        }
    }

    /// Shift every coefficient into the Montgomery domain (multiply by R)
    ///
    /// Used to precondition an NTT-domain operand that will be fed to
    /// `base_mul` or a pointwise accumulation many times.
    pub fn to_montgomery(&self) -> Self {
        let mut result = self.clone();
        for c in result.as_mut_coeffs_slice() {
            *c = montgomery_mul::<M>(*c, M::MONT_R2);
        }
        result
    }

    /// Shift every coefficient out of the Montgomery domain (divide by R)
    pub fn from_montgomery(&self) -> Self {
        let mut result = self.clone();
        for c in result.as_mut_coeffs_slice() {
            *c = montgomery_reduce::<M>(*c as u64);
        }
        result
    }

    /// Pointwise multiplication of two NTT-domain polynomials
    ///
    /// Each coefficient pair is an element of Z_q\[X\]/(X^2 - gamma):
    ///   (a0 + a1 X)(b0 + b1 X) = (a0 b0 + a1 b1 gamma) + (a0 b1 + a1 b0) X
    ///
    /// `self` must be in Montgomery form (see `to_montgomery`); `other` in
    /// the standard domain. The result is in the standard domain.
    pub fn base_mul(&self, other: &Self) -> Self {
        debug_assert_eq!(M::GAMMAS.len(), M::N / 2);

        let mut result = Self::zero();
        for i in 0..M::N / 2 {
            let (a0, a1) = (self.coeffs[2 * i], self.coeffs[2 * i + 1]);
            let (b0, b1) = (other.coeffs[2 * i], other.coeffs[2 * i + 1]);

            let a1b1 = montgomery_mul::<M>(a1, b1);
            result.coeffs[2 * i] = barrett_reduce::<M>(
                montgomery_mul::<M>(a0, b0) + montgomery_mul::<M>(M::GAMMAS[i], a1b1),
            );
            result.coeffs[2 * i + 1] = barrett_reduce::<M>(
                montgomery_mul::<M>(a0, b1) + montgomery_mul::<M>(a1, b0),
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::params::{MlKemModulus, Modulus};
    use proptest::prelude::*;

    const Q: u32 = MlKemModulus::Q;
    const N: usize = MlKemModulus::N;

    fn poly_from_fn(f: impl Fn(usize) -> u32) -> Polynomial<MlKemModulus> {
        let coeffs: Vec<u32> = (0..N).map(f).collect();
        Polynomial::from_coeffs(&coeffs).unwrap()
    }

    #[test]
    fn roundtrip_on_sparse_polynomial() {
        let mut poly = poly_from_fn(|i| match i {
            0 => 1,
            1 => 2,
            2 => 3,
            _ => 0,
        });
        let original = poly.clone();

        poly.ntt_inplace();
        assert_ne!(poly, original);
        poly.from_ntt_inplace();
        assert_eq!(poly, original);
    }

    #[test]
    fn base_mul_by_one_is_identity() {
        // The constant polynomial 1 has NTT representation (1, 0) in every
        // quadratic factor, so base_mul against its Montgomery form must
        // return the other operand unchanged.
        let mut one = poly_from_fn(|i| (i == 0) as u32);
        one.ntt_inplace();
        let one_mont = one.to_montgomery();

        let mut a = poly_from_fn(|i| (i as u32 * 731 + 17) % Q);
        a.ntt_inplace();

        assert_eq!(one_mont.base_mul(&a), a);
    }

    #[test]
    fn ntt_multiplication_matches_schoolbook() {
        // x * x^(N-1) = x^N = -1 in the negacyclic ring
        let mut a = poly_from_fn(|i| (i == 1) as u32);
        let mut b = poly_from_fn(|i| (i == N - 1) as u32);
        a.ntt_inplace();
        b.ntt_inplace();

        let mut prod = a.to_montgomery().base_mul(&b);
        prod.from_ntt_inplace();

        let expected = poly_from_fn(|i| if i == 0 { Q - 1 } else { 0 });
        assert_eq!(prod, expected);
    }

    #[test]
    fn montgomery_domain_roundtrip() {
        let a = poly_from_fn(|i| (i as u32 * 2731 + 5) % Q);
        assert_eq!(a.to_montgomery().from_montgomery(), a);
    }

    proptest! {
        #[test]
        fn roundtrip_on_random_polynomials(seed in any::<u64>()) {
            let mut state = seed;
            let mut next = || {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) as u32) % Q
            };
            let coeffs: Vec<u32> = (0..N).map(|_| next()).collect();
            let original = Polynomial::<MlKemModulus>::from_coeffs(&coeffs).unwrap();

            let mut poly = original.clone();
            poly.ntt_inplace();
            poly.from_ntt_inplace();
            prop_assert_eq!(poly, original);
        }
    }
}
