use crate::fp2::Fp2;
use crate::helpers::ensure;
use crate::params::{params, DomainParams, ParamId, Params};
use crate::sidh::{derive_secret_a, derive_secret_b, public_key_gen_a, public_key_gen_b};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Flags a key as belonging to the 2-torsion (A) or 3-torsion (B) side of
/// the exchange, or to the SIKE KEM (which rides on a B-side SIDH keypair).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum KeyVariant {
    /// SIDH key acting on the 2^eA-torsion.
    SidhA = 0b001,
    /// SIDH key acting on the 3^eB-torsion.
    SidhB = 0b010,
    /// SIKE KEM key; implies the B side underneath.
    Sike = 0b110,
}

impl KeyVariant {
    pub(crate) fn is_a(self) -> bool {
        matches!(self, KeyVariant::SidhA)
    }
}

/// A public key: the x-coordinates of P, Q and P−Q on the image curve, kept
/// in Montgomery form between import and export. No curve or order
/// validation is performed on import; callers must treat SIDH keypairs as
/// single-use.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) params: &'static Params,
    pub(crate) variant: KeyVariant,
    pub(crate) affine_3pt: [Fp2; 3],
}

impl PublicKey {
    /// An empty (all-zero) public key for the given parameter set and
    /// variant, to be filled by [`PublicKey::import`] or
    /// [`PrivateKey::generate_public_key`].
    #[must_use]
    pub fn new(id: ParamId, variant: KeyVariant) -> PublicKey {
        PublicKey { params: params(id), variant, affine_3pt: [Fp2::ZERO; 3] }
    }

    /// Serialized size in bytes: three GF(p²) elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.params.public_key_size
    }

    /// The key's variant tag.
    #[must_use]
    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    /// The key's parameter set.
    #[must_use]
    pub fn param_id(&self) -> ParamId {
        self.params.id
    }

    /// Replaces the key with one parsed from `input`, converting each field
    /// element into the Montgomery domain. Performs no validation beyond the
    /// length check; on error the stored key is untouched.
    ///
    /// # Errors
    /// `input` must be exactly [`PublicKey::size`] bytes.
    pub fn import(&mut self, input: &[u8]) -> Result<(), &'static str> {
        ensure!(input.len() == self.size(), "sidh: public key input of wrong length");
        let fc = self.params.field;
        let n = self.params.shared_secret_size;
        self.affine_3pt[0] = fc.fp2_from_bytes(&input[..n]);
        self.affine_3pt[1] = fc.fp2_from_bytes(&input[n..2 * n]);
        self.affine_3pt[2] = fc.fp2_from_bytes(&input[2 * n..3 * n]);
        Ok(())
    }

    /// Writes the canonical serialization into the first
    /// [`PublicKey::size`] bytes of `out`. A never-filled key exports as
    /// zeros.
    ///
    /// # Panics
    /// If `out` is shorter than [`PublicKey::size`].
    pub fn export(&self, out: &mut [u8]) {
        let fc = self.params.field;
        let n = self.params.shared_secret_size;
        fc.fp2_to_bytes(&self.affine_3pt[0], &mut out[..n]);
        fc.fp2_to_bytes(&self.affine_3pt[1], &mut out[n..2 * n]);
        fc.fp2_to_bytes(&self.affine_3pt[2], &mut out[2 * n..3 * n]);
    }
}

/// A private key: the secret scalar, plus (for the SIKE variant) the
/// implicit-rejection secret `s`. Buffers are sized at construction and the
/// secret material is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) params: &'static Params,
    #[zeroize(skip)]
    pub(crate) variant: KeyVariant,
    scalar: [u8; crate::MAX_SECRET_BYTE_LEN],
    s: [u8; crate::MAX_MSG_LEN],
}

impl PrivateKey {
    /// An empty private key for the given parameter set and variant, to be
    /// filled by [`PrivateKey::generate`] or [`PrivateKey::import`].
    #[must_use]
    pub fn new(id: ParamId, variant: KeyVariant) -> PrivateKey {
        PrivateKey {
            params: params(id),
            variant,
            scalar: [0u8; crate::MAX_SECRET_BYTE_LEN],
            s: [0u8; crate::MAX_MSG_LEN],
        }
    }

    fn dom(&self) -> &'static DomainParams {
        if self.variant.is_a() {
            &self.params.a
        } else {
            &self.params.b
        }
    }

    pub(crate) fn scalar_bytes(&self) -> &[u8] {
        &self.scalar[..self.dom().secret_byte_len]
    }

    pub(crate) fn s_bytes(&self) -> &[u8] {
        &self.s[..self.params.msg_len]
    }

    fn s_len(&self) -> usize {
        if self.variant == KeyVariant::Sike {
            self.params.msg_len
        } else {
            0
        }
    }

    /// Serialized size in bytes; the SIKE variant prepends `s` to the
    /// scalar.
    #[must_use]
    pub fn size(&self) -> usize {
        self.dom().secret_byte_len + self.s_len()
    }

    /// Byte length of the SIDH shared secret this key derives.
    #[must_use]
    pub fn shared_secret_size(&self) -> usize {
        self.params.shared_secret_size
    }

    /// The key's variant tag.
    #[must_use]
    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    /// Replaces the key material with `input`, laid out as `s ‖ scalar`
    /// (`s` only for the SIKE variant). The scalar bytes are taken as-is; no
    /// range normalisation is applied.
    ///
    /// # Errors
    /// `input` must be exactly [`PrivateKey::size`] bytes.
    pub fn import(&mut self, input: &[u8]) -> Result<(), &'static str> {
        ensure!(input.len() == self.size(), "sidh: private key input of wrong length");
        let sl = self.s_len();
        self.s[..sl].copy_from_slice(&input[..sl]);
        let n = self.dom().secret_byte_len;
        self.scalar[..n].copy_from_slice(&input[sl..]);
        Ok(())
    }

    /// Writes `s ‖ scalar` into the first [`PrivateKey::size`] bytes of
    /// `out`.
    ///
    /// # Panics
    /// If `out` is shorter than [`PrivateKey::size`].
    pub fn export(&self, out: &mut [u8]) {
        let sl = self.s_len();
        out[..sl].copy_from_slice(&self.s[..sl]);
        let n = self.dom().secret_byte_len;
        out[sl..sl + n].copy_from_slice(&self.scalar[..n]);
    }

    /// Draws a fresh secret from `rng`: `s` first (SIKE only), then the
    /// scalar, clamped so that as a little-endian integer it satisfies
    /// `2^(SecretBitLen−1) ≤ scalar < 2^SecretBitLen`.
    ///
    /// # Errors
    /// Propagates RNG failure.
    pub fn generate(&mut self, rng: &mut impl CryptoRngCore) -> Result<(), &'static str> {
        let dp = self.dom();
        if self.variant == KeyVariant::Sike {
            let ml = self.params.msg_len;
            rng.try_fill_bytes(&mut self.s[..ml]).map_err(|_| "sidh: rng failure")?;
        }
        let n = dp.secret_byte_len;
        rng.try_fill_bytes(&mut self.scalar[..n]).map_err(|_| "sidh: rng failure")?;
        // Clear the bits above SecretBitLen, then pin the top bit so every
        // generated scalar has exactly SecretBitLen bits.
        self.scalar[n - 1] &= 0xFF >> (8 * n - dp.secret_bit_len);
        self.scalar[n - 1] |= 1 << ((dp.secret_bit_len - 1) % 8);
        Ok(())
    }

    /// Computes the public key matching this private key into `pub_key`.
    ///
    /// # Panics
    /// If `pub_key` differs in parameter set or variant.
    pub fn generate_public_key(&self, pub_key: &mut PublicKey) {
        assert!(
            self.variant == pub_key.variant && self.params.id == pub_key.params.id,
            "sidh: incompatible public key"
        );
        if self.variant.is_a() {
            public_key_gen_a(self.params, &mut pub_key.affine_3pt, self.scalar_bytes());
        } else {
            public_key_gen_b(self.params, &mut pub_key.affine_3pt, self.scalar_bytes());
        }
    }

    /// Computes the SIDH shared secret (the j-invariant of the common image
    /// curve, `2·Bytelen` bytes) into `ss`. Keypairs must not be reused
    /// across exchanges.
    ///
    /// # Panics
    /// This is strictly for SIDH pairs of opposite torsion sides on the same
    /// parameter set; any other combination (including SIKE-variant keys) is
    /// a caller bug and panics. `ss` must be exactly
    /// [`PrivateKey::shared_secret_size`] bytes.
    pub fn derive_secret(&self, ss: &mut [u8], pub_key: &PublicKey) {
        let pair_ok = matches!(
            (self.variant, pub_key.variant),
            (KeyVariant::SidhA, KeyVariant::SidhB) | (KeyVariant::SidhB, KeyVariant::SidhA)
        );
        assert!(
            pair_ok && self.params.id == pub_key.params.id,
            "sidh: public and private key are incompatible"
        );
        assert_eq!(ss.len(), self.params.shared_secret_size, "sidh: bad shared secret length");
        if self.variant.is_a() {
            derive_secret_a(self.params, ss, self.scalar_bytes(), &pub_key.affine_3pt);
        } else {
            derive_secret_b(self.params, ss, self.scalar_bytes(), &pub_key.affine_3pt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn sizes_match_parameter_table() {
        for prm in crate::params::all() {
            let pk = PublicKey::new(prm.id, KeyVariant::Sike);
            assert_eq!(pk.size(), 6 * prm.field.bytelen);
            let sk = PrivateKey::new(prm.id, KeyVariant::Sike);
            assert_eq!(sk.size(), prm.msg_len + prm.b.secret_byte_len);
            let sk = PrivateKey::new(prm.id, KeyVariant::SidhA);
            assert_eq!(sk.size(), prm.a.secret_byte_len);
            let kem = crate::sike::Sike::new(prm.id);
            assert_eq!(kem.ciphertext_size(), pk.size() + prm.msg_len);
            assert_eq!(kem.shared_secret_size(), prm.kem_size);
        }
    }

    // After generate, the scalar must lie in [2^(bits-1), 2^bits) as a
    // little-endian integer, for every side of every parameter set.
    #[test]
    fn generated_scalar_is_clamped() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for prm in crate::params::all() {
            for variant in [KeyVariant::SidhA, KeyVariant::SidhB, KeyVariant::Sike] {
                let mut sk = PrivateKey::new(prm.id, variant);
                for _ in 0..8 {
                    sk.generate(&mut rng).unwrap();
                    let dp = if variant.is_a() { &prm.a } else { &prm.b };
                    let sc = sk.scalar_bytes();
                    let top = dp.secret_bit_len - 1;
                    assert_eq!((sc[top >> 3] >> (top & 7)) & 1, 1);
                    for bit in dp.secret_bit_len..8 * dp.secret_byte_len {
                        assert_eq!((sc[bit >> 3] >> (bit & 7)) & 1, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn private_key_import_export_round_trip() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(8);
        for prm in crate::params::all() {
            let mut sk = PrivateKey::new(prm.id, KeyVariant::Sike);
            sk.generate(&mut rng).unwrap();
            let mut buf = [0u8; crate::MAX_SIKE_PRIVATE_KEY_SIZE];
            sk.export(&mut buf);
            let mut sk2 = PrivateKey::new(prm.id, KeyVariant::Sike);
            sk2.import(&buf[..sk2.size()]).unwrap();
            assert_eq!(sk.scalar_bytes(), sk2.scalar_bytes());
            assert_eq!(sk.s_bytes(), sk2.s_bytes());
        }
    }

    #[test]
    fn import_rejects_bad_lengths() {
        let prm = crate::params::all()[0];
        let mut pk = PublicKey::new(prm.id, KeyVariant::Sike);
        let buf = [0u8; crate::MAX_PUBLIC_KEY_SIZE + 1];
        assert!(pk.import(&buf[..pk.size() - 1]).is_err());
        assert!(pk.import(&buf[..pk.size() + 1]).is_err());
        let mut sk = PrivateKey::new(prm.id, KeyVariant::Sike);
        assert!(sk.import(&buf[..sk.size() + 1]).is_err());
    }
}
