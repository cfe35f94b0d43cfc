//! ML-KEM IND-CPA-secure public key encryption.
//!
//! The three operations here are deterministic functions of their explicit
//! inputs; all randomness arrives as 32-byte seeds. This layer is purely
//! arithmetic: dimensionality and length checks happen one layer up, in the
//! codec and the KEM wrapper.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

use qcrypt_algorithms::error::Result as AlgoResult;
use qcrypt_algorithms::poly::sampling::{sample_cbd, sample_uniform};
use sha3::digest::{ExtendableOutput, FixedOutput, Update};
use sha3::{Sha3_512, Shake128, Shake256};
use zeroize::{Zeroize, Zeroizing};

use super::params::{MlKemParams, PolyModParams, MLKEM_N, MLKEM_SYM_BYTES};
use super::poly::{NttPolyVec, Poly, PolyVec};

// Type aliases for clarity within the CPA PKE context
pub(crate) type CpaPublicKeyInner<P> = (NttPolyVec<P>, [u8; MLKEM_SYM_BYTES]); // (t_hat, rho)
pub(crate) type CpaSecretKeyInner<P> = NttPolyVec<P>; // s_hat
pub(crate) type CpaCiphertextInner<P> = (PolyVec<P>, Poly); // (u, v), normal domain

/// Expand the public matrix from rho using SHAKE128.
///
/// Entry (i, j) is rejection-sampled from XOF(rho || j || i), or with the
/// indices swapped when the transpose is requested (encryption walks A^T).
/// Both call sites go through this one code path, which is what makes the
/// two expansions byte-identical for the same seed.
pub(crate) fn gen_matrix<P: MlKemParams>(
    rho: &[u8; MLKEM_SYM_BYTES],
    transposed: bool,
) -> Vec<NttPolyVec<P>> {
    let mut a = Vec::with_capacity(P::K);

    for i in 0..P::K {
        let mut row = NttPolyVec::<P>::zero();

        for j in 0..P::K {
            let indices = if transposed {
                [i as u8, j as u8]
            } else {
                [j as u8, i as u8]
            };
            let mut xof = Shake128::default().chain(rho).chain(indices).finalize_xof();

            // Uniform NTT-domain coefficients straight off the stream
            row.polys[j].0 = sample_uniform::<PolyModParams, _>(&mut xof);
        }

        a.push(row);
    }

    a
}

/// PRF for noise sampling: SHAKE256(seed || nonce), 64 * eta bytes.
fn prf_stream(seed: &[u8; MLKEM_SYM_BYTES], nonce: u8, eta: u8) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; MLKEM_N * eta as usize / 4]);
    Shake256::default()
        .chain(seed)
        .chain([nonce])
        .finalize_xof_into(&mut out);
    out
}

/// Sample one noise polynomial from CBD(eta) at the given nonce.
fn sample_noise_poly(seed: &[u8; MLKEM_SYM_BYTES], nonce: u8, eta: u8) -> AlgoResult<Poly> {
    let buf = prf_stream(seed, nonce, eta);
    Ok(Poly(sample_cbd::<PolyModParams>(&buf, eta)?))
}

/// Sample a K-vector of noise polynomials, consuming K consecutive nonces.
fn sample_noise_polyvec<P: MlKemParams>(
    seed: &[u8; MLKEM_SYM_BYTES],
    first_nonce: u8,
    eta: u8,
) -> AlgoResult<PolyVec<P>> {
    let mut pv = PolyVec::<P>::zero();
    for (i, poly) in pv.polys.iter_mut().enumerate() {
        *poly = sample_noise_poly(seed, first_nonce + i as u8, eta)?;
    }
    Ok(pv)
}

/// ML-KEM CPA PKE key generation.
///
/// Derives the public seed rho and noise seed sigma from `d` via SHA3-512,
/// expands A, samples s and e from CBD(eta1), and computes
/// t_hat = A_hat * s_hat + e_hat entirely in the NTT domain. The secret key
/// is s_hat, kept in the NTT domain for reuse.
pub(crate) fn keypair_cpa<P: MlKemParams>(
    d: &[u8; MLKEM_SYM_BYTES],
) -> AlgoResult<(CpaPublicKeyInner<P>, CpaSecretKeyInner<P>)> {
    // (rho, sigma) := G(d)
    let mut g = [0u8; 2 * MLKEM_SYM_BYTES];
    g.copy_from_slice(&Sha3_512::default().chain(d).finalize_fixed());
    let mut rho = [0u8; MLKEM_SYM_BYTES];
    let mut sigma = [0u8; MLKEM_SYM_BYTES];
    rho.copy_from_slice(&g[..MLKEM_SYM_BYTES]);
    sigma.copy_from_slice(&g[MLKEM_SYM_BYTES..]);
    g.zeroize();

    let a = gen_matrix::<P>(&rho, false);

    let s = sample_noise_polyvec::<P>(&sigma, 0, P::ETA1)?;
    let e = sample_noise_polyvec::<P>(&sigma, P::K as u8, P::ETA1)?;

    let s_hat = s.ntt();
    let e_hat = e.ntt();

    // t_hat[i] = e_hat[i] + sum_j A[i][j] * s_hat[j]
    let mut t_hat = NttPolyVec::<P>::zero();
    for (i, row) in a.iter().enumerate() {
        t_hat.polys[i] = e_hat.polys[i].add(&row.pointwise_acc_montgomery(&s_hat));
    }

    sigma.zeroize();

    Ok(((t_hat, rho), s_hat))
}

/// ML-KEM CPA PKE encryption.
///
/// Re-expands A^T from the public seed (reproducing keygen's matrix
/// exactly), samples fresh noise from `coins`, and computes
/// u = A^T * r + e1 and v = t^T * r + e2 + encode(msg), both returned in
/// the normal domain; compression happens in the codec.
pub(crate) fn encrypt_cpa<P: MlKemParams>(
    pk: &CpaPublicKeyInner<P>,
    msg: &[u8; MLKEM_SYM_BYTES],
    coins: &[u8; MLKEM_SYM_BYTES],
) -> AlgoResult<CpaCiphertextInner<P>> {
    let (t_hat, rho) = pk;

    let a_t = gen_matrix::<P>(rho, true);

    let r = sample_noise_polyvec::<P>(coins, 0, P::ETA1)?;
    let e1 = sample_noise_polyvec::<P>(coins, P::K as u8, P::ETA2)?;
    let e2 = sample_noise_poly(coins, 2 * P::K as u8, P::ETA2)?;

    let r_hat = r.ntt();

    // u[i] = invNTT(sum_j A^T[i][j] * r_hat[j]) + e1[i]
    let mut u = PolyVec::<P>::zero();
    for (i, row) in a_t.iter().enumerate() {
        let sum = row.pointwise_acc_montgomery(&r_hat);
        u.polys[i] = sum.inv_ntt().add(&e1.polys[i]);
    }

    // v = invNTT(t_hat . r_hat) + e2 + encode(msg)
    let v_ntt = t_hat.pointwise_acc_montgomery(&r_hat);
    let v = v_ntt
        .inv_ntt()
        .add(&e2)
        .add(&Poly::encode_message(msg));

    Ok((u, v))
}

/// ML-KEM CPA PKE decryption.
///
/// Computes m' = v - invNTT(s_hat . NTT(u)) and thresholds it back to the
/// 32-byte message.
pub(crate) fn decrypt_cpa<P: MlKemParams>(
    s_hat: &CpaSecretKeyInner<P>,
    ct: &CpaCiphertextInner<P>,
) -> Zeroizing<[u8; MLKEM_SYM_BYTES]> {
    let (u, v) = ct;

    let u_hat = u.clone().ntt();
    let s_u = s_hat.pointwise_acc_montgomery(&u_hat).inv_ntt();

    let m_prime = v.sub(&s_u);

    Zeroizing::new(m_prime.decode_message())
}
