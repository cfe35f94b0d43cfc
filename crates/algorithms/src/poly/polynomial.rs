//! Polynomial container and coefficient-wise arithmetic

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

use core::marker::PhantomData;
use core::ops::{Add, Sub};

use super::params::Modulus;
use super::reduce::{add_mod, barrett_reduce, sub_mod};
use crate::error::{Error, Result};
use zeroize::Zeroize;

/// A polynomial in the ring R_Q = Z_Q\[X\]/(X^N + 1)
///
/// The arithmetic provided here keeps coefficients canonical (in \[0, Q))
/// when its inputs are; `reduce` restores the invariant for values built
/// from unreduced data. Whether a value is in the normal or NTT domain is a
/// property of the call sequence; the KEM layer wraps this type in
/// domain-tagged newtypes so that the two cannot be confused.
#[derive(Debug, PartialEq, Eq)]
pub struct Polynomial<M: Modulus> {
    /// Coefficients of the polynomial
    pub coeffs: Vec<u32>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Clone for Polynomial<M> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M: Modulus> Zeroize for Polynomial<M> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0; M::N],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of coefficients
    pub fn from_coeffs(coeffs_slice: &[u32]) -> Result<Self> {
        if coeffs_slice.len() != M::N {
            return Err(Error::Parameter {
                name: "coeffs_slice",
                reason: "incorrect number of coefficients for polynomial degree N",
            });
        }

        Ok(Self {
            coeffs: coeffs_slice.to_vec(),
            _marker: PhantomData,
        })
    }

    /// Returns the degree N of the polynomial
    pub fn degree() -> usize {
        M::N
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs[..M::N]
    }

    /// Returns a mutable slice view of the coefficients
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs[..M::N]
    }

    /// Polynomial addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..M::N {
            result.coeffs[i] = add_mod::<M>(self.coeffs[i], other.coeffs[i]);
        }
        result
    }

    /// Polynomial subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..M::N {
            result.coeffs[i] = sub_mod::<M>(self.coeffs[i], other.coeffs[i]);
        }
        result
    }

    /// In-place Barrett reduction of every coefficient to canonical range
    ///
    /// Required after any sequence of operations that may leave coefficients
    /// above Q (for example accumulating unreduced sums), and after
    /// deserializing untrusted coefficient data.
    pub fn reduce(&mut self) {
        for c in self.as_mut_coeffs_slice() {
            *c = barrett_reduce::<M>(*c);
        }
    }
}

// Operator impls for ergonomic usage
impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, other: Self) -> Self::Output {
        self.add(other)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, other: Self) -> Self::Output {
        self.sub(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small ring for arithmetic unit tests
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct TestModulus;
    impl Modulus for TestModulus {
        const Q: u32 = 3329;
        const N: usize = 4;
    }

    #[test]
    fn creation_and_access() {
        let poly = Polynomial::<TestModulus>::zero();
        assert_eq!(poly.as_coeffs_slice(), &[0, 0, 0, 0]);

        let poly = Polynomial::<TestModulus>::from_coeffs(&[1, 2, 3, 4]).unwrap();
        assert_eq!(poly.as_coeffs_slice(), &[1, 2, 3, 4]);

        assert!(Polynomial::<TestModulus>::from_coeffs(&[1, 2, 3]).is_err());
    }

    #[test]
    fn addition_wraps_modulo_q() {
        let a = Polynomial::<TestModulus>::from_coeffs(&[1, 3328, 3000, 4]).unwrap();
        let b = Polynomial::<TestModulus>::from_coeffs(&[5, 1, 1000, 8]).unwrap();
        let c = a.add(&b);
        assert_eq!(c.as_coeffs_slice(), &[6, 0, 671, 12]);
    }

    #[test]
    fn subtraction_wraps_modulo_q() {
        let a = Polynomial::<TestModulus>::from_coeffs(&[10, 0, 30, 40]).unwrap();
        let b = Polynomial::<TestModulus>::from_coeffs(&[5, 6, 7, 8]).unwrap();
        let c = a.sub(&b);
        assert_eq!(c.as_coeffs_slice(), &[5, 3323, 23, 32]);
    }

    #[test]
    fn reduce_normalizes_coefficients() {
        let mut a = Polynomial::<TestModulus>::from_coeffs(&[3330, 6657, 3328, 0]).unwrap();
        a.reduce();
        assert_eq!(a.as_coeffs_slice(), &[1, 3328, 3328, 0]);
    }
}
