use crate::fp2::Fp2;
use crate::helpers::{ensure, shake256};
use crate::key::{KeyVariant, PrivateKey, PublicKey};
use crate::params::{params, ParamId, Params};
use crate::sidh::{derive_secret_a, derive_secret_b, public_key_gen_a};
use rand_core::CryptoRngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SIKE KEM context for one parameter set. It owns the per-operation secret
/// scratch (the message and the ephemeral A-side scalar), which is wiped on
/// [`Sike::reset`] and on drop, so operations allocate nothing.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sike {
    #[zeroize(skip)]
    params: &'static Params,
    msg: [u8; crate::MAX_MSG_LEN],
    eph: [u8; crate::MAX_SECRET_BYTE_LEN],
}

/// Clear the scalar bits above the A-side keyspace; every byte but the top
/// one is used in full.
fn mask_scalar_a(prm: &Params, scalar: &mut [u8]) {
    let n = prm.a.secret_byte_len;
    scalar[n - 1] &= 0xFF >> (8 * n - prm.a.secret_bit_len);
}

/// PKE encryption with an explicit A-side scalar: `ct = c0 ‖ (msg ⊕ k)`
/// where `c0` is the ephemeral A public key and `k = H(j, MsgLen)` for the
/// SIDH secret `j` shared with the recipient.
fn pke_encrypt(prm: &Params, ct: &mut [u8], scalar: &[u8], pk3: &[Fp2; 3], msg: &[u8]) {
    let fc = prm.field;
    let n = prm.shared_secret_size;

    let mut eph_pub = [Fp2::ZERO; 3];
    public_key_gen_a(prm, &mut eph_pub, scalar);
    fc.fp2_to_bytes(&eph_pub[0], &mut ct[..n]);
    fc.fp2_to_bytes(&eph_pub[1], &mut ct[n..2 * n]);
    fc.fp2_to_bytes(&eph_pub[2], &mut ct[2 * n..3 * n]);

    let mut j = [0u8; crate::MAX_SHARED_SECRET_SIZE];
    derive_secret_a(prm, &mut j[..n], scalar, pk3);
    let mut k = [0u8; crate::MAX_MSG_LEN];
    shake256(&[&j[..n]], &mut k[..prm.msg_len]);
    for (i, (c, m)) in ct[prm.public_key_size..].iter_mut().zip(msg.iter()).enumerate() {
        *c = m ^ k[i];
    }
    j.zeroize();
    k.zeroize();
}

impl Sike {
    /// A KEM context bound to one parameter set.
    #[must_use]
    pub fn new(id: ParamId) -> Sike {
        Sike {
            params: params(id),
            msg: [0u8; crate::MAX_MSG_LEN],
            eph: [0u8; crate::MAX_SECRET_BYTE_LEN],
        }
    }

    /// Ciphertext length: a serialized public key plus the encrypted
    /// message.
    #[must_use]
    pub fn ciphertext_size(&self) -> usize {
        self.params.ciphertext_size
    }

    /// KEM shared secret length.
    #[must_use]
    pub fn shared_secret_size(&self) -> usize {
        self.params.kem_size
    }

    /// Wipes the secret scratch held between operations.
    pub fn reset(&mut self) {
        self.msg.zeroize();
        self.eph.zeroize();
    }

    fn check_kem_key(&self, variant: KeyVariant, id: ParamId) {
        assert!(variant == KeyVariant::Sike, "sike: key is not a SIKE-variant key");
        assert!(id == self.params.id, "sike: key for a different parameter set");
    }

    /// IND-CPA encryption (internal PKE layer): a fresh ephemeral scalar is
    /// drawn from `rng` and clamped into the A keyspace with its top bit
    /// set. The KEM path instead feeds `pke_encrypt` a derived scalar.
    ///
    /// # Errors
    /// `msg` must be exactly `MsgLen` bytes (the ciphertext is untouched
    /// otherwise); RNG failure propagates.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn encrypt(
        &mut self, ct: &mut [u8], rng: &mut impl CryptoRngCore, pk: &PublicKey, msg: &[u8],
    ) -> Result<(), &'static str> {
        self.check_kem_key(pk.variant, pk.params.id);
        ensure!(msg.len() == self.params.msg_len, "sike: plaintext of wrong length");
        let n = self.params.a.secret_byte_len;
        rng.try_fill_bytes(&mut self.eph[..n]).map_err(|_| "sike: rng failure")?;
        mask_scalar_a(self.params, &mut self.eph[..n]);
        self.eph[n - 1] |= 1 << ((self.params.a.secret_bit_len - 1) % 8);
        pke_encrypt(
            self.params,
            &mut ct[..self.params.ciphertext_size],
            &self.eph[..n],
            &pk.affine_3pt,
            msg,
        );
        Ok(())
    }

    /// IND-CPA decryption (internal PKE layer); writes `MsgLen` bytes and
    /// returns that length.
    ///
    /// # Errors
    /// `pt` must hold at least `MsgLen` bytes and `ct` must have ciphertext
    /// length.
    pub(crate) fn decrypt(
        &mut self, pt: &mut [u8], sk: &PrivateKey, ct: &[u8],
    ) -> Result<usize, &'static str> {
        let prm = self.params;
        ensure!(ct.len() == prm.ciphertext_size, "sike: ciphertext of wrong length");
        ensure!(pt.len() >= prm.msg_len, "sike: plaintext buffer too short");
        let fc = prm.field;
        let n = prm.shared_secret_size;
        let c0 = [
            fc.fp2_from_bytes(&ct[..n]),
            fc.fp2_from_bytes(&ct[n..2 * n]),
            fc.fp2_from_bytes(&ct[2 * n..3 * n]),
        ];
        let mut j = [0u8; crate::MAX_SHARED_SECRET_SIZE];
        derive_secret_b(prm, &mut j[..n], sk.scalar_bytes(), &c0);
        let mut k = [0u8; crate::MAX_MSG_LEN];
        shake256(&[&j[..n]], &mut k[..prm.msg_len]);
        for (i, out) in pt[..prm.msg_len].iter_mut().enumerate() {
            *out = ct[prm.public_key_size + i] ^ k[i];
        }
        j.zeroize();
        k.zeroize();
        Ok(prm.msg_len)
    }

    /// KEM encapsulation: fills `ct` with the ciphertext and `ss` with the
    /// shared secret `H(m ‖ ct, KemSize)`. The A-side scalar is derived as
    /// `H(m ‖ pk, SecretByteLenA)` rather than drawn fresh, which is what
    /// makes decapsulation's re-encryption check possible.
    ///
    /// # Errors
    /// RNG failure propagates.
    ///
    /// # Panics
    /// `pk` must be a SIKE-variant key of this context's parameter set;
    /// `ct` and `ss` must hold at least [`Sike::ciphertext_size`] and
    /// [`Sike::shared_secret_size`] bytes.
    pub fn encapsulate(
        &mut self, ct: &mut [u8], ss: &mut [u8], pk: &PublicKey, rng: &mut impl CryptoRngCore,
    ) -> Result<(), &'static str> {
        self.check_kem_key(pk.variant, pk.params.id);
        let prm = self.params;
        let ct = &mut ct[..prm.ciphertext_size];
        let ss = &mut ss[..prm.kem_size];

        let ml = prm.msg_len;
        rng.try_fill_bytes(&mut self.msg[..ml]).map_err(|_| "sike: rng failure")?;

        let mut pkb = [0u8; crate::MAX_PUBLIC_KEY_SIZE];
        pk.export(&mut pkb[..prm.public_key_size]);

        let na = prm.a.secret_byte_len;
        shake256(&[&self.msg[..ml], &pkb[..prm.public_key_size]], &mut self.eph[..na]);
        mask_scalar_a(prm, &mut self.eph[..na]);

        pke_encrypt(prm, ct, &self.eph[..na], &pk.affine_3pt, &self.msg[..ml]);
        shake256(&[&self.msg[..ml], ct], ss);
        Ok(())
    }

    /// KEM decapsulation with implicit rejection: on any mismatch between
    /// the received and re-encrypted ciphertexts the output secret is
    /// derived from the key's rejection value `s` instead of the decrypted
    /// message. The comparison reads every byte and the fallback is chosen
    /// with a bitwise mask; nothing branches on the outcome.
    ///
    /// # Errors
    /// `ct` must be exactly [`Sike::ciphertext_size`] bytes. A well-formed
    /// but tampered ciphertext is not an error: the result is a stable
    /// pseudorandom secret.
    ///
    /// # Panics
    /// `sk` and `pk` must be SIKE-variant keys of this context's parameter
    /// set.
    #[allow(clippy::needless_range_loop)] // alternative is harder to understand
    pub fn decapsulate(
        &mut self, ss: &mut [u8], sk: &PrivateKey, pk: &PublicKey, ct: &[u8],
    ) -> Result<(), &'static str> {
        self.check_kem_key(sk.variant, sk.params.id);
        self.check_kem_key(pk.variant, pk.params.id);
        let prm = self.params;
        ensure!(ct.len() == prm.ciphertext_size, "sike: ciphertext of wrong length");
        let ss = &mut ss[..prm.kem_size];
        let ml = prm.msg_len;

        let mut m_prime = [0u8; crate::MAX_MSG_LEN];
        self.decrypt(&mut m_prime[..ml], sk, ct)?;

        let mut pkb = [0u8; crate::MAX_PUBLIC_KEY_SIZE];
        pk.export(&mut pkb[..prm.public_key_size]);
        let na = prm.a.secret_byte_len;
        shake256(&[&m_prime[..ml], &pkb[..prm.public_key_size]], &mut self.eph[..na]);
        mask_scalar_a(prm, &mut self.eph[..na]);

        let mut ct_prime = [0u8; crate::MAX_CIPHERTEXT_SIZE];
        pke_encrypt(
            prm,
            &mut ct_prime[..prm.ciphertext_size],
            &self.eph[..na],
            &pk.affine_3pt,
            &m_prime[..ml],
        );

        let eq = ct.ct_eq(&ct_prime[..prm.ciphertext_size]);
        let s = sk.s_bytes();
        for i in 0..ml {
            self.msg[i] = u8::conditional_select(&s[i], &m_prime[i], eq);
        }
        shake256(&[&self.msg[..ml], ct], ss);
        m_prime.zeroize();
        ct_prime.zeroize();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyVariant, PrivateKey, PublicKey};
    use rand_core::SeedableRng;

    pub(crate) struct Fixture {
        pub id: ParamId,
        pub pk: &'static str,
        pub sk: &'static str,
    }

    // Fixed B-side SIKE keypairs, one per parameter set.
    pub(crate) fn fixtures() -> alloc::vec::Vec<Fixture> {
        let mut v = alloc::vec::Vec::new();
        #[cfg(feature = "p434")]
        v.push(Fixture { id: ParamId::Fp434, pk: crate::test_vectors::PKB_434, sk: crate::test_vectors::PRB_434 });
        #[cfg(feature = "p503")]
        v.push(Fixture { id: ParamId::Fp503, pk: crate::test_vectors::PKB_503, sk: crate::test_vectors::PRB_503 });
        #[cfg(feature = "p751")]
        v.push(Fixture { id: ParamId::Fp751, pk: crate::test_vectors::PKB_751, sk: crate::test_vectors::PRB_751 });
        v
    }

    fn import_fixture(f: &Fixture) -> (PublicKey, PrivateKey) {
        let mut pk = PublicKey::new(f.id, KeyVariant::Sike);
        let mut sk = PrivateKey::new(f.id, KeyVariant::Sike);
        pk.import(&hex::decode(f.pk).unwrap()).unwrap();
        sk.import(&hex::decode(f.sk).unwrap()).unwrap();
        (pk, sk)
    }

    // PKE round trip over the embedded keypairs with the counting message
    // 00 01 02 ...
    #[test]
    fn pke_round_trip_with_vectors() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(101);
        for f in fixtures() {
            let (pk, sk) = import_fixture(&f);
            let mut kem = Sike::new(f.id);
            let mut ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
            let mut pt = [0u8; crate::MAX_MSG_LEN];
            let mut msg = [0u8; crate::MAX_MSG_LEN];
            let ml = kem.params.msg_len;
            for (i, m) in msg[..ml].iter_mut().enumerate() {
                *m = i as u8;
            }
            kem.encrypt(&mut ct[..kem.ciphertext_size()], &mut rng, &pk, &msg[..ml]).unwrap();
            let n = kem.decrypt(&mut pt, &sk, &ct[..kem.ciphertext_size()]).unwrap();
            assert_eq!(pt[..n], msg[..ml]);
        }
    }

    #[test]
    fn pke_rejects_bad_plaintext_length_and_leaves_ct_alone() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(102);
        for f in fixtures() {
            let (pk, _) = import_fixture(&f);
            let mut kem = Sike::new(f.id);
            let mut ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
            let msg = [0u8; crate::MAX_MSG_LEN];
            let res = kem.encrypt(&mut ct, &mut rng, &pk, &msg[..kem.params.msg_len - 1]);
            assert!(res.is_err());
            assert!(ct.iter().all(|&b| b == 0));
        }
    }

    // KEM round trip over the embedded keypairs: the decapsulated secret
    // equals the encapsulated one, at the advertised length.
    #[test]
    fn kem_round_trip_with_vectors() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(103);
        for f in fixtures() {
            let (pk, sk) = import_fixture(&f);
            let mut kem = Sike::new(f.id);
            let mut ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
            let mut ss_e = [0u8; crate::MAX_MSG_LEN];
            let mut ss_d = [0u8; crate::MAX_MSG_LEN];
            kem.encapsulate(&mut ct, &mut ss_e, &pk, &mut rng).unwrap();
            kem.reset();
            kem.decapsulate(&mut ss_d, &sk, &pk, &ct[..kem.ciphertext_size()]).unwrap();
            let n = kem.shared_secret_size();
            assert_eq!(ss_e[..n], ss_d[..n]);
        }
    }

    // A flipped ciphertext byte decapsulates to a secret that is (a) wrong
    // and (b) byte-for-byte stable across calls, including with a private
    // key round-tripped through export/import.
    #[test]
    fn tampered_ciphertext_rejects_implicitly_and_deterministically() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(104);
        for f in fixtures() {
            let (pk, sk) = import_fixture(&f);
            let mut kem = Sike::new(f.id);
            let mut ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
            let mut ss_e = [0u8; crate::MAX_MSG_LEN];
            kem.encapsulate(&mut ct, &mut ss_e, &pk, &mut rng).unwrap();

            ct[0] ^= 1;
            let n = kem.shared_secret_size();
            let mut ss_1 = [0u8; crate::MAX_MSG_LEN];
            let mut ss_2 = [0u8; crate::MAX_MSG_LEN];
            kem.reset();
            kem.decapsulate(&mut ss_1, &sk, &pk, &ct[..kem.ciphertext_size()]).unwrap();
            assert_ne!(ss_1[..n], ss_e[..n]);

            let mut buf = [0u8; crate::MAX_SIKE_PRIVATE_KEY_SIZE];
            sk.export(&mut buf);
            let mut sk2 = PrivateKey::new(f.id, KeyVariant::Sike);
            sk2.import(&buf[..sk2.size()]).unwrap();
            kem.reset();
            kem.decapsulate(&mut ss_2, &sk2, &pk, &ct[..kem.ciphertext_size()]).unwrap();
            assert_eq!(ss_1[..n], ss_2[..n]);
        }
    }

    // Wrong-length ciphertexts are recoverable errors, both too short and
    // too long.
    #[test]
    fn decapsulate_rejects_wrong_length_ciphertext() {
        let (pk, sk) = import_fixture(&fixtures()[0]);
        let mut kem = Sike::new(pk.param_id());
        let ct = [0u8; crate::MAX_CIPHERTEXT_SIZE + 1];
        let mut ss = [0u8; crate::MAX_MSG_LEN];
        let n = kem.ciphertext_size();
        assert!(kem.decapsulate(&mut ss, &sk, &pk, &ct[..n - 2]).is_err());
        assert!(kem.decapsulate(&mut ss, &sk, &pk, &ct[..n + 1]).is_err());
    }

    #[test]
    #[should_panic(expected = "not a SIKE-variant key")]
    fn encapsulate_rejects_sidh_keys() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(105);
        let f = &fixtures()[0];
        let pk = PublicKey::new(f.id, KeyVariant::SidhB);
        let mut kem = Sike::new(f.id);
        let mut ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
        let mut ss = [0u8; crate::MAX_MSG_LEN];
        let _ = kem.encapsulate(&mut ct, &mut ss, &pk, &mut rng);
    }

    #[test]
    #[should_panic(expected = "not a SIKE-variant key")]
    fn decapsulate_rejects_sidh_keys() {
        let f = &fixtures()[0];
        let (pk, _) = import_fixture(f);
        let sk = PrivateKey::new(f.id, KeyVariant::SidhB);
        let mut kem = Sike::new(f.id);
        let ct = [0u8; crate::MAX_CIPHERTEXT_SIZE];
        let mut ss = [0u8; crate::MAX_MSG_LEN];
        let n = kem.ciphertext_size();
        let _ = kem.decapsulate(&mut ss, &sk, &pk, &ct[..n]);
    }
}
