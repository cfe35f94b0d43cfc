//! ML-KEM parameter definitions.

use qcrypt_params::pqc::mlkem as global_params;

/// Common ML-KEM polynomial degree.
pub const MLKEM_N: usize = global_params::MLKEM_N;
/// Common ML-KEM coefficient modulus.
pub const MLKEM_Q: u32 = global_params::MLKEM_Q as u32;
/// Shared secret size for all ML-KEM variants.
pub const MLKEM_SS_BYTES: usize = global_params::MLKEM_SS_BYTES;
/// Size of the seeds, message, and hash values used by the scheme.
pub const MLKEM_SYM_BYTES: usize = global_params::MLKEM_SYM_BYTES;
/// Bits per coefficient in the uncompressed encoding.
pub const MLKEM_POLY_BITS: usize = global_params::MLKEM_POLY_BITS;

/// The coefficient ring, shared with the arithmetic crate.
///
/// Compile-time transform tables live on this type's `NttModulus` impl.
pub type PolyModParams = qcrypt_algorithms::poly::params::MlKemModulus;

/// Bytes per polynomial in the uncompressed 12-bit encoding.
pub const POLY_PACKED_BYTES: usize = MLKEM_N * MLKEM_POLY_BITS / 8;

/// Trait defining parameters for a specific ML-KEM variant.
pub trait MlKemParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors and the public matrix).
    const K: usize;
    /// Noise parameter eta1 for the secret s and keygen error e.
    const ETA1: u8;
    /// Noise parameter eta2 for the ciphertext errors e1, e2.
    const ETA2: u8;
    /// Compression bits for the ciphertext vector u.
    const DU: usize;
    /// Compression bits for the ciphertext polynomial v.
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;
}

// Concrete parameter implementations for the ML-KEM variants.

/// Parameter bindings for ML-KEM-512.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlKem512ParamsImpl;
impl MlKemParams for MlKem512ParamsImpl {
    const K: usize = global_params::MLKEM512.k;
    const ETA1: u8 = global_params::MLKEM512.eta1;
    const ETA2: u8 = global_params::MLKEM512.eta2;
    const DU: usize = global_params::MLKEM512.du;
    const DV: usize = global_params::MLKEM512.dv;
    const NAME: &'static str = "ML-KEM-512";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM512.ciphertext_size;
}

/// Parameter bindings for ML-KEM-768.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlKem768ParamsImpl;
impl MlKemParams for MlKem768ParamsImpl {
    const K: usize = global_params::MLKEM768.k;
    const ETA1: u8 = global_params::MLKEM768.eta1;
    const ETA2: u8 = global_params::MLKEM768.eta2;
    const DU: usize = global_params::MLKEM768.du;
    const DV: usize = global_params::MLKEM768.dv;
    const NAME: &'static str = "ML-KEM-768";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM768.ciphertext_size;
}

/// Parameter bindings for ML-KEM-1024.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlKem1024ParamsImpl;
impl MlKemParams for MlKem1024ParamsImpl {
    const K: usize = global_params::MLKEM1024.k;
    const ETA1: u8 = global_params::MLKEM1024.eta1;
    const ETA2: u8 = global_params::MLKEM1024.eta2;
    const DU: usize = global_params::MLKEM1024.du;
    const DV: usize = global_params::MLKEM1024.dv;
    const NAME: &'static str = "ML-KEM-1024";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM1024.ciphertext_size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcrypt_algorithms::poly::params::Modulus;

    #[test]
    fn ring_constants_agree_with_arithmetic_crate() {
        assert_eq!(PolyModParams::Q, MLKEM_Q);
        assert_eq!(PolyModParams::N, MLKEM_N);
        assert_eq!(POLY_PACKED_BYTES, 384);
    }

    #[test]
    fn declared_sizes_follow_from_dimensions() {
        fn check<P: MlKemParams>() {
            assert_eq!(P::PUBLIC_KEY_BYTES, P::K * POLY_PACKED_BYTES + MLKEM_SYM_BYTES);
            assert_eq!(
                P::SECRET_KEY_BYTES,
                P::K * POLY_PACKED_BYTES + P::PUBLIC_KEY_BYTES + 2 * MLKEM_SYM_BYTES
            );
            assert_eq!(
                P::CIPHERTEXT_BYTES,
                MLKEM_N * (P::DU * P::K + P::DV) / 8
            );
        }
        check::<MlKem512ParamsImpl>();
        check::<MlKem768ParamsImpl>();
        check::<MlKem1024ParamsImpl>();
    }
}
