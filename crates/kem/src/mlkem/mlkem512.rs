//! ML-KEM-512 (NIST security category 1).

use super::kem::MlKemKem;
use super::params::MlKem512ParamsImpl;

/// ML-KEM-512 KEM, implementing `api::Kem`.
pub type MlKem512 = MlKemKem<MlKem512ParamsImpl>;
