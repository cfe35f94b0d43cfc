//! ML-KEM-768 (NIST security category 3).

use super::kem::MlKemKem;
use super::params::MlKem768ParamsImpl;

/// ML-KEM-768 KEM, implementing `api::Kem`.
pub type MlKem768 = MlKemKem<MlKem768ParamsImpl>;
