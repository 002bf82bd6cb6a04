use crate::fp::FieldParams;
use crate::fp2::Fp2;

#[cfg(feature = "p434")]
pub(crate) mod p434;
#[cfg(feature = "p503")]
pub(crate) mod p503;
#[cfg(feature = "p751")]
pub(crate) mod p751;

/// Identifies one of the supported parameter sets, named after the bit
/// length of the underlying prime `p = 2^eA·3^eB − 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamId {
    /// p434 = 2^216·3^137 − 1 (SIKEp434)
    #[cfg(feature = "p434")]
    Fp434,
    /// p503 = 2^250·3^159 − 1 (SIKEp503)
    #[cfg(feature = "p503")]
    Fp503,
    /// p751 = 2^372·3^239 − 1 (SIKEp751)
    #[cfg(feature = "p751")]
    Fp751,
}

/// Per-torsion-side domain parameters. The stored basis is the one whose
/// isogeny images this side publishes, i.e. the x-coordinates of
/// `P`, `Q`, `P−Q` generating the *opposite* torsion subgroup of the start
/// curve; this side's kernel basis therefore lives in the other record.
pub(crate) struct DomainParams {
    /// Walk length: the exponent `e` of this side's isogeny degree `ℓ^e`.
    pub(crate) e: u32,
    /// Secret scalar width in bits.
    pub(crate) secret_bit_len: usize,
    /// Secret scalar width in bytes.
    pub(crate) secret_byte_len: usize,
    /// Optimal traversal schedule for this side's isogeny tree.
    pub(crate) strategy: &'static [u32],
    /// x(P), x(Q), x(P−Q) in Montgomery form.
    pub(crate) pub_points: [Fp2; 3],
}

/// Everything the generic engine needs for one parameter set. Keys hold a
/// `&'static Params`, so all public entry points dispatch through this table
/// instead of switching on an id; a new parameter set is a new table entry.
pub(crate) struct Params {
    pub(crate) id: ParamId,
    pub(crate) field: &'static FieldParams,
    /// SIKE message/shared-secret byte length.
    pub(crate) msg_len: usize,
    /// SIKE KEM shared secret byte length.
    pub(crate) kem_size: usize,
    /// Serialized public key: three GF(p²) elements.
    pub(crate) public_key_size: usize,
    /// SIDH shared secret: one GF(p²) element (the j-invariant).
    pub(crate) shared_secret_size: usize,
    /// Serialized public key plus encrypted message.
    pub(crate) ciphertext_size: usize,
    pub(crate) a: DomainParams,
    pub(crate) b: DomainParams,
}

/// Parameter lookup; total on the enum, so an unsupported id cannot reach
/// the engine.
pub(crate) fn params(id: ParamId) -> &'static Params {
    match id {
        #[cfg(feature = "p434")]
        ParamId::Fp434 => &p434::PARAMS,
        #[cfg(feature = "p503")]
        ParamId::Fp503 => &p503::PARAMS,
        #[cfg(feature = "p751")]
        ParamId::Fp751 => &p751::PARAMS,
    }
}

#[cfg(test)]
pub(crate) fn all() -> alloc::vec::Vec<&'static Params> {
    let mut v = alloc::vec::Vec::new();
    #[cfg(feature = "p434")]
    v.push(&p434::PARAMS);
    #[cfg(feature = "p503")]
    v.push(&p503::PARAMS);
    #[cfg(feature = "p751")]
    v.push(&p751::PARAMS);
    v
}
