//! Constants for the ML-KEM (Kyber) key encapsulation mechanism

/// ML-KEM polynomial degree
pub const MLKEM_N: usize = 256;

/// ML-KEM coefficient modulus
pub const MLKEM_Q: u16 = 3329;

/// Size in bytes of the seeds and hashes used by the scheme (rho, sigma,
/// message, public-key hash, implicit-rejection value)
pub const MLKEM_SYM_BYTES: usize = 32;

/// Size in bytes of the shared secret for all variants
pub const MLKEM_SS_BYTES: usize = 32;

/// Bits per coefficient in the uncompressed polynomial encoding
pub const MLKEM_POLY_BITS: usize = 12;

/// Parameters for one ML-KEM security level
pub struct MlKemParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials per vector (module dimension)
    pub k: usize,

    /// Noise distribution parameter for the secret and keygen error
    pub eta1: u8,

    /// Noise distribution parameter for the ciphertext errors
    pub eta2: u8,

    /// Compression bits for the ciphertext vector u
    pub du: usize,

    /// Compression bits for the ciphertext polynomial v
    pub dv: usize,

    /// Size of the public key in bytes
    pub public_key_size: usize,

    /// Size of the secret key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

/// ML-KEM-512 parameters (NIST security category 1)
pub const MLKEM512: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-768 parameters (NIST security category 3)
pub const MLKEM768: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-1024 parameters (NIST security category 5)
pub const MLKEM1024: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: MLKEM_SS_BYTES,
};
