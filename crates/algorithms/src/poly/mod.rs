//! Generic polynomial engine
//!
//! Foundational elements for polynomial arithmetic over the negacyclic ring
//! Z_q\[X\]/(X^N + 1), designed around the module-lattice KEM but reusable by
//! other lattice-based schemes with a compatible modulus.

pub mod compress;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::compress::{compress_coeff, compress_poly, decompress_coeff, decompress_poly};
    pub use super::params::{MlKemModulus, Modulus, NttModulus};
    pub use super::polynomial::Polynomial;
    pub use super::reduce::{
        barrett_reduce, conditional_sub_q, montgomery_mul, montgomery_reduce, reduce_mod_q,
    };
    pub use super::sampling::{sample_cbd, sample_uniform};
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
