//! The `api::Kem` implementation for ML-KEM.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use qcrypt_api::error::{Error as CoreError, Result as ApiResult};
use qcrypt_api::{Kem as KemTrait, SecretBytes, Serialize, SerializeSecret};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps_derand, kem_keygen_derand};
use super::params::{MlKemParams, MLKEM_SS_BYTES, MLKEM_SYM_BYTES};

/// ML-KEM public key bytes.
#[derive(Clone, Zeroize)]
pub struct MlKemPublicKey(pub(crate) Vec<u8>);

/// ML-KEM secret key bytes (sk_cpa || pk || H(pk) || z).
#[derive(Clone, Zeroize)]
pub struct MlKemSecretKey(pub(crate) Vec<u8>);

/// ML-KEM ciphertext bytes.
#[derive(Clone)]
pub struct MlKemCiphertext(pub(crate) Vec<u8>);

/// The 32-byte shared secret produced by encapsulation and decapsulation.
#[derive(Clone, Zeroize)]
pub struct MlKemSharedSecret(pub(crate) SecretBytes<MLKEM_SS_BYTES>);

impl MlKemPublicKey {
    /// Wrap raw public key bytes; the length is validated on use.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemSecretKey {
    /// Wrap raw secret key bytes; the length is validated on use.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemCiphertext {
    /// Wrap raw ciphertext bytes; the length is validated on use.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for MlKemPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for MlKemCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for MlKemSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// Generic ML-KEM instance over a parameter set.
pub struct MlKemKem<P: MlKemParams> {
    _params: PhantomData<P>,
}

impl<P: MlKemParams> KemTrait for MlKemKem<P> {
    type PublicKey = MlKemPublicKey;
    type SecretKey = MlKemSecretKey;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut d = [0u8; MLKEM_SYM_BYTES];
        let mut z = [0u8; MLKEM_SYM_BYTES];
        rng.fill_bytes(&mut d);
        rng.fill_bytes(&mut z);

        let result = kem_keygen_derand::<P>(&d, &z);
        d.zeroize();
        z.zeroize();

        let (pk_bytes, sk_bytes) = result.map_err(CoreError::from)?;
        Ok((MlKemPublicKey(pk_bytes), MlKemSecretKey(sk_bytes)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut randomness = [0u8; MLKEM_SYM_BYTES];
        rng.fill_bytes(&mut randomness);

        let result = kem_encaps_derand::<P>(&public_key.0, &randomness);
        randomness.zeroize();

        let (ct_bytes, ss) = result.map_err(CoreError::from)?;
        Ok((
            MlKemCiphertext(ct_bytes),
            MlKemSharedSecret(SecretBytes::new(*ss)),
        ))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(&secret_key.0, &ciphertext.0).map_err(CoreError::from)?;
        Ok(MlKemSharedSecret(SecretBytes::new(*ss)))
    }
}
