use crate::fp2::Fp2;
use crate::helpers::{ensure, shake256};
use crate::key::{KeyVariant, PrivateKey, PublicKey};
use crate::params::{params, ParamId, Params};
use crate::sidh::{derive_secret_a, public_key_gen_a};
use alloc::vec;
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

/// Multi-recipient SIKE: one ephemeral A-side keypair is sampled per batch,
/// its public key `c0` is shared by every ciphertext, and only the cheap
/// B-side derivation and XOR are done per recipient. All recipients learn
/// the same batch secret, so this fits group-broadcast settings only.
pub struct MultiKem {
    params: &'static Params,
    cts: Vec<Vec<u8>>,
}

impl MultiKem {
    /// Reserves room for `n` recipient ciphertexts of one parameter set.
    #[must_use]
    pub fn allocate(id: ParamId, n: usize) -> MultiKem {
        let prm = params(id);
        MultiKem { params: prm, cts: vec![vec![0u8; prm.ciphertext_size]; n] }
    }

    /// The per-recipient ciphertexts produced by the last
    /// [`MultiKem::encapsulate`].
    #[must_use]
    pub fn ciphertexts(&self) -> &[Vec<u8>] {
        &self.cts
    }

    /// Batch shared secret length.
    #[must_use]
    pub fn kem_size(&self) -> usize {
        self.params.kem_size
    }

    /// A SIKE-variant public key shaped for this batch's parameter set.
    #[must_use]
    pub fn new_public_key(&self) -> PublicKey {
        PublicKey::new(self.params.id, KeyVariant::Sike)
    }

    /// A SIKE-variant private key shaped for this batch's parameter set.
    #[must_use]
    pub fn new_private_key(&self) -> PrivateKey {
        PrivateKey::new(self.params.id, KeyVariant::Sike)
    }

    /// Encapsulates one batch secret to every key in `pks`: writes
    /// `H(m, KemSize)` into `ss_out` and fills one ciphertext
    /// `c0 ‖ (m ⊕ H(j_i, MsgLen))` per recipient.
    ///
    /// # Errors
    /// `pks` must match the allocated recipient count; RNG failure
    /// propagates.
    ///
    /// # Panics
    /// Every recipient key must be a SIKE-variant key of this batch's
    /// parameter set; `ss_out` must hold [`MultiKem::kem_size`] bytes.
    #[allow(clippy::needless_range_loop)] // alternative is harder to understand
    pub fn encapsulate(
        &mut self, ss_out: &mut [u8], pks: &[PublicKey], rng: &mut impl CryptoRngCore,
    ) -> Result<(), &'static str> {
        let prm = self.params;
        ensure!(pks.len() == self.cts.len(), "mkem: recipient count mismatch");
        for pk in pks {
            assert!(
                pk.variant == KeyVariant::Sike && pk.params.id == prm.id,
                "mkem: recipient key is incompatible"
            );
        }

        // One ephemeral A-side scalar for the whole batch.
        let na = prm.a.secret_byte_len;
        let mut eph = [0u8; crate::MAX_SECRET_BYTE_LEN];
        rng.try_fill_bytes(&mut eph[..na]).map_err(|_| "mkem: rng failure")?;
        eph[na - 1] &= 0xFF >> (8 * na - prm.a.secret_bit_len);
        eph[na - 1] |= 1 << ((prm.a.secret_bit_len - 1) % 8);

        let fc = prm.field;
        let n = prm.shared_secret_size;
        let mut c0 = [Fp2::ZERO; 3];
        public_key_gen_a(prm, &mut c0, &eph[..na]);
        let mut c0_bytes = [0u8; crate::MAX_PUBLIC_KEY_SIZE];
        fc.fp2_to_bytes(&c0[0], &mut c0_bytes[..n]);
        fc.fp2_to_bytes(&c0[1], &mut c0_bytes[n..2 * n]);
        fc.fp2_to_bytes(&c0[2], &mut c0_bytes[2 * n..3 * n]);

        let ml = prm.msg_len;
        let mut m = [0u8; crate::MAX_MSG_LEN];
        rng.try_fill_bytes(&mut m[..ml]).map_err(|_| "mkem: rng failure")?;
        shake256(&[&m[..ml]], &mut ss_out[..prm.kem_size]);

        let mut j = [0u8; crate::MAX_SHARED_SECRET_SIZE];
        let mut k = [0u8; crate::MAX_MSG_LEN];
        for (pk, ct) in pks.iter().zip(self.cts.iter_mut()) {
            derive_secret_a(prm, &mut j[..n], &eph[..na], &pk.affine_3pt);
            shake256(&[&j[..n]], &mut k[..ml]);
            ct[..prm.public_key_size].copy_from_slice(&c0_bytes[..prm.public_key_size]);
            for i in 0..ml {
                ct[prm.public_key_size + i] = m[i] ^ k[i];
            }
        }
        eph.zeroize();
        m.zeroize();
        j.zeroize();
        k.zeroize();
        Ok(())
    }

    /// Recipient-side decapsulation: decrypts `ct` with the standard SIKE
    /// machinery and writes `H(m', KemSize)` into `ss_in`, which equals the
    /// sender's batch secret exactly when `ct` came from this batch. There
    /// is no re-encryption check: the batch's `c0` is not derivable from
    /// `m'`, so a tampered ciphertext simply yields an unrelated secret.
    ///
    /// # Errors
    /// `ct` must have ciphertext length.
    ///
    /// # Panics
    /// `sk`/`pk` must be SIKE-variant keys of this batch's parameter set.
    pub fn decapsulate(
        &self, ss_in: &mut [u8], sk: &PrivateKey, pk: &PublicKey, ct: &[u8],
    ) -> Result<(), &'static str> {
        let prm = self.params;
        assert!(
            sk.variant == KeyVariant::Sike && sk.params.id == prm.id,
            "mkem: private key is incompatible"
        );
        assert!(
            pk.variant == KeyVariant::Sike && pk.params.id == prm.id,
            "mkem: public key is incompatible"
        );
        let mut kem = crate::sike::Sike::new(prm.id);
        let mut m = [0u8; crate::MAX_MSG_LEN];
        let ml = prm.msg_len;
        kem.decrypt(&mut m[..ml], sk, ct)?;
        shake256(&[&m[..ml]], &mut ss_in[..prm.kem_size]);
        m.zeroize();
        Ok(())
    }
}
