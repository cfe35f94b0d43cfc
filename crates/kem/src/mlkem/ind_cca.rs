//! ML-KEM IND-CCA2 construction via the Fujisaki-Okamoto transform.
//!
//! Hash suite per the published specification: H = SHA3-256, G = SHA3-512,
//! KDF = SHAKE256. Decapsulation re-encrypts the recovered message and
//! selects between the derived secret and the stored rejection value z in
//! constant time; both outcomes flow through the same code path so that a
//! failed check is not observable from the outside.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use sha3::digest::{ExtendableOutput, FixedOutput, Update};
use sha3::{Sha3_256, Sha3_512, Shake256};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{MlKemParams, MLKEM_SS_BYTES, MLKEM_SYM_BYTES, POLY_PACKED_BYTES};
use super::serialize::{pack_ciphertext, pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use crate::error::{Error, Result};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; MLKEM_SS_BYTES]>;

/// H: SHA3-256 over one or two byte strings.
fn h_func(parts: &[&[u8]]) -> [u8; MLKEM_SYM_BYTES] {
    let mut hasher = Sha3_256::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize_fixed().into()
}

/// G: SHA3-512, split into (K_bar, coins).
fn g_func(parts: &[&[u8]]) -> ([u8; MLKEM_SYM_BYTES], [u8; MLKEM_SYM_BYTES]) {
    let mut hasher = Sha3_512::default();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize_fixed();

    let mut k_bar = [0u8; MLKEM_SYM_BYTES];
    let mut coins = [0u8; MLKEM_SYM_BYTES];
    k_bar.copy_from_slice(&digest[..MLKEM_SYM_BYTES]);
    coins.copy_from_slice(&digest[MLKEM_SYM_BYTES..]);
    (k_bar, coins)
}

/// KDF: SHAKE256 over (key material || ciphertext hash), 32 bytes out.
fn kdf(key: &[u8; MLKEM_SYM_BYTES], ct_hash: &[u8; MLKEM_SYM_BYTES]) -> [u8; MLKEM_SS_BYTES] {
    let mut out = [0u8; MLKEM_SS_BYTES];
    Shake256::default()
        .chain(key)
        .chain(ct_hash)
        .finalize_xof_into(&mut out);
    out
}

/// Offset of the embedded public key inside the serialized secret key.
const fn sk_pk_offset<P: MlKemParams>() -> usize {
    P::K * POLY_PACKED_BYTES
}

/// IND-CCA2 key generation from explicit seeds.
///
/// `d` drives the IND-CPA keypair; `z` is the implicit-rejection value.
/// The serialized secret key is sk_cpa || pk || H(pk) || z, so
/// decapsulation can re-encrypt without any other material.
pub(crate) fn kem_keygen_derand<P: MlKemParams>(
    d: &[u8; MLKEM_SYM_BYTES],
    z: &[u8; MLKEM_SYM_BYTES],
) -> Result<(Vec<u8>, Vec<u8>)> {
    let (pk_cpa, sk_cpa) = keypair_cpa::<P>(d)?;

    let pk_bytes = pack_pk::<P>(&pk_cpa)?;
    let sk_cpa_bytes = Zeroizing::new(pack_sk::<P>(&sk_cpa)?);

    let h_pk = h_func(&[&pk_bytes]);

    let mut sk_bytes = Vec::with_capacity(P::SECRET_KEY_BYTES);
    sk_bytes.extend_from_slice(&sk_cpa_bytes);
    sk_bytes.extend_from_slice(&pk_bytes);
    sk_bytes.extend_from_slice(&h_pk);
    sk_bytes.extend_from_slice(z);

    Ok((pk_bytes, sk_bytes))
}

/// IND-CCA2 encapsulation from an explicit 32-byte random input.
///
/// m = H(randomness); (K_bar, coins) = G(m || H(pk)); the shared secret is
/// KDF(K_bar || H(ct)), binding it to both the public key and the exact
/// ciphertext bytes.
pub(crate) fn kem_encaps_derand<P: MlKemParams>(
    pk_bytes: &[u8],
    randomness: &[u8; MLKEM_SYM_BYTES],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    let pk_cpa = unpack_pk::<P>(pk_bytes)?;

    let mut m = h_func(&[randomness]);
    let h_pk = h_func(&[pk_bytes]);
    let (mut k_bar, mut coins) = g_func(&[&m, &h_pk]);

    let ct_cpa = encrypt_cpa::<P>(&pk_cpa, &m, &coins)?;
    let ct_bytes = pack_ciphertext::<P>(&ct_cpa)?;

    let h_ct = h_func(&[&ct_bytes]);
    let shared_secret = Zeroizing::new(kdf(&k_bar, &h_ct));

    m.zeroize();
    k_bar.zeroize();
    coins.zeroize();

    Ok((ct_bytes, shared_secret))
}

/// IND-CCA2 decapsulation.
///
/// Recovers the candidate message, re-derives the encryption coins exactly
/// as encapsulation did, re-encrypts, and compares against the received
/// ciphertext byte-for-byte in constant time. On mismatch the stored
/// rejection value z is substituted for the derived key through a
/// branchless select; the KDF call is shared by both outcomes.
pub(crate) fn kem_decaps<P: MlKemParams>(
    sk_bytes: &[u8],
    ct_bytes: &[u8],
) -> Result<SharedSecretBytes> {
    if sk_bytes.len() != P::SECRET_KEY_BYTES {
        return Err(Error::MalformedInput {
            context: "secret key",
            expected: P::SECRET_KEY_BYTES,
            actual: sk_bytes.len(),
        });
    }

    // sk_cpa || pk || H(pk) || z
    let pk_offset = sk_pk_offset::<P>();
    let h_pk_offset = pk_offset + P::PUBLIC_KEY_BYTES;
    let z_offset = h_pk_offset + MLKEM_SYM_BYTES;

    let sk_cpa_bytes = &sk_bytes[..pk_offset];
    let pk_bytes = &sk_bytes[pk_offset..h_pk_offset];
    let h_pk = &sk_bytes[h_pk_offset..z_offset];
    let z = &sk_bytes[z_offset..];

    let ct_cpa = unpack_ciphertext::<P>(ct_bytes)?;
    let sk_cpa = unpack_sk::<P>(sk_cpa_bytes)?;

    let m_prime = decrypt_cpa::<P>(&sk_cpa, &ct_cpa);

    let (mut k_bar_prime, mut coins_prime) = g_func(&[m_prime.as_ref(), h_pk]);

    // Re-encrypt m' with the re-derived coins
    let pk_cpa = unpack_pk::<P>(pk_bytes)?;
    let ct_prime_cpa = encrypt_cpa::<P>(&pk_cpa, &m_prime, &coins_prime)?;
    let ct_prime_bytes = pack_ciphertext::<P>(&ct_prime_cpa)?;

    let accept = ct_prime_bytes.ct_eq(ct_bytes);

    // Branchless select between K_bar' (accept) and z (implicit rejection)
    let mut selected = [0u8; MLKEM_SYM_BYTES];
    for (i, byte) in selected.iter_mut().enumerate() {
        *byte = u8::conditional_select(&z[i], &k_bar_prime[i], accept);
    }

    let h_ct = h_func(&[ct_bytes]);
    let shared_secret = Zeroizing::new(kdf(&selected, &h_ct));

    selected.zeroize();
    k_bar_prime.zeroize();
    coins_prime.zeroize();

    Ok(shared_secret)
}
