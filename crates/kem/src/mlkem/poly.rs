//! Domain-tagged polynomial and polynomial-vector types.
//!
//! A ring element is either in the normal domain (`Poly`, `PolyVec`) or the
//! NTT domain (`NttPoly`, `NttPolyVec`); the two are distinct types, so
//! handing the wrong domain to an operation is a compile error rather than a
//! silent miscomputation. Transforms move between the domains by value.
//! Montgomery form never escapes this module: it exists only inside
//! `pointwise_acc_montgomery`, which preconditions one operand per product.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use qcrypt_algorithms::poly::compress::compress_coeff;
use qcrypt_algorithms::poly::polynomial::Polynomial;
use zeroize::Zeroize;

use super::params::{MlKemParams, PolyModParams, MLKEM_N, MLKEM_Q, MLKEM_SYM_BYTES};

/// The raw ring element both domains wrap.
pub(crate) type RingPoly = Polynomial<PolyModParams>;

/// A polynomial in the normal (coefficient) domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Poly(pub(crate) RingPoly);

/// A polynomial in the NTT domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NttPoly(pub(crate) RingPoly);

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Zeroize for NttPoly {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Poly {
    pub(crate) fn zero() -> Self {
        Self(RingPoly::zero())
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        Self(self.0.add(&other.0))
    }

    pub(crate) fn sub(&self, other: &Self) -> Self {
        Self(self.0.sub(&other.0))
    }

    /// Forward transform, consuming the normal-domain value.
    pub(crate) fn ntt(mut self) -> NttPoly {
        self.0.ntt_inplace();
        NttPoly(self.0)
    }

    /// Map each bit of a 32-byte message to a coefficient of 0 or round(q/2).
    pub(crate) fn encode_message(msg: &[u8; MLKEM_SYM_BYTES]) -> Self {
        let mut poly = RingPoly::zero();
        for i in 0..MLKEM_N {
            let bit = (msg[i / 8] >> (i % 8)) & 1;
            poly.coeffs[i] = (bit as u32) * ((MLKEM_Q + 1) / 2);
        }
        Self(poly)
    }

    /// Recover the message by thresholding each coefficient against q/4 and
    /// 3q/4, i.e. 1-bit compression. Tolerant of the noise added by
    /// encryption; that tolerance is what gives the scheme its small nonzero
    /// decryption-failure probability.
    pub(crate) fn decode_message(&self) -> [u8; MLKEM_SYM_BYTES] {
        let mut msg = [0u8; MLKEM_SYM_BYTES];
        for i in 0..MLKEM_N {
            let bit = compress_coeff::<PolyModParams>(self.0.coeffs[i], 1);
            msg[i / 8] |= (bit as u8) << (i % 8);
        }
        msg
    }
}

impl NttPoly {
    pub(crate) fn zero() -> Self {
        Self(RingPoly::zero())
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        Self(self.0.add(&other.0))
    }

    /// Inverse transform, consuming the NTT-domain value.
    pub(crate) fn inv_ntt(mut self) -> Poly {
        self.0.from_ntt_inplace();
        Poly(self.0)
    }
}

/// A vector of K normal-domain polynomials.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PolyVec<P: MlKemParams> {
    pub(crate) polys: Vec<Poly>,
    _params: PhantomData<P>,
}

impl<P: MlKemParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

/// A vector of K NTT-domain polynomials.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NttPolyVec<P: MlKemParams> {
    pub(crate) polys: Vec<NttPoly>,
    _params: PhantomData<P>,
}

impl<P: MlKemParams> Clone for NttPolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> PolyVec<P> {
    pub(crate) fn zero() -> Self {
        Self {
            polys: (0..P::K).map(|_| Poly::zero()).collect(),
            _params: PhantomData,
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        Self {
            polys: self
                .polys
                .iter()
                .zip(other.polys.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
            _params: PhantomData,
        }
    }

    /// Apply the forward transform to every entry.
    pub(crate) fn ntt(self) -> NttPolyVec<P> {
        NttPolyVec {
            polys: self.polys.into_iter().map(Poly::ntt).collect(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> NttPolyVec<P> {
    pub(crate) fn zero() -> Self {
        Self {
            polys: (0..P::K).map(|_| NttPoly::zero()).collect(),
            _params: PhantomData,
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        Self {
            polys: self
                .polys
                .iter()
                .zip(other.polys.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
            _params: PhantomData,
        }
    }

    /// Apply the inverse transform to every entry.
    pub(crate) fn inv_ntt(self) -> PolyVec<P> {
        PolyVec {
            polys: self.polys.into_iter().map(NttPoly::inv_ntt).collect(),
            _params: PhantomData,
        }
    }

    /// Barrett-reduce every coefficient of every entry to canonical range.
    pub(crate) fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.0.reduce();
        }
    }

    /// Inner product in the NTT domain: Σ self\[i\] * other\[i\].
    ///
    /// Each entry of `self` is shifted into the Montgomery domain just for
    /// its base multiplication, so the accumulated result stays in the
    /// standard coefficient representation. This is the core of every
    /// matrix-vector product in the scheme.
    pub(crate) fn pointwise_acc_montgomery(&self, other: &Self) -> NttPoly {
        let mut acc = NttPoly::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            let prod = a.0.to_montgomery().base_mul(&b.0);
            acc = acc.add(&NttPoly(prod));
        }
        acc
    }
}

impl<P: MlKemParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<P: MlKemParams> Zeroize for NttPolyVec<P> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}
