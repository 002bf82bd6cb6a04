use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Limb count of the widest supported field (p751). Narrower fields use the
/// low `FieldParams::nwords` limbs and keep the rest zero.
pub(crate) const NWORDS: usize = 12;

/// An element of GF(p) as little-endian 64-bit limbs. Values are kept in the
/// half-open interval `[0, 2p)` and in Montgomery form (`x·R mod p` with
/// `R = 2^(64·nwords)`) except where noted.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Fp(pub(crate) [u64; NWORDS]);

/// Per-prime arithmetic context. The SIKE primes `p = 2^eA·3^eB − 1` satisfy
/// `p ≡ −1 (mod 2^64)`, so the Montgomery factor `−p⁻¹ mod 2^64` is 1 and the
/// reduction step needs no magic multiplier.
pub(crate) struct FieldParams {
    /// Active limbs: 7, 8 or 12.
    pub(crate) nwords: usize,
    /// Bytes per GF(p) element on the wire.
    pub(crate) bytelen: usize,
    /// The prime.
    pub(crate) p: Fp,
    /// 2·p, the upper bound of the redundant representation.
    pub(crate) p2: Fp,
    /// R² mod p, the to-Montgomery multiplier.
    pub(crate) r2: Fp,
    /// R mod p, the Montgomery representation of 1.
    pub(crate) mont_one: Fp,
}

#[allow(clippy::cast_possible_truncation)]
#[inline]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = u128::from(a) + u128::from(b) + u128::from(carry);
    (t as u64, (t >> 64) as u64)
}

#[allow(clippy::cast_possible_truncation)]
#[inline]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = u128::from(a).wrapping_sub(u128::from(b)).wrapping_sub(u128::from(borrow));
    (t as u64, ((t >> 64) as u64) & 1)
}

#[allow(clippy::cast_possible_truncation)]
#[inline]
fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = u128::from(a) + u128::from(b) * u128::from(c) + u128::from(carry);
    (t as u64, (t >> 64) as u64)
}

impl Fp {
    pub(crate) const ZERO: Fp = Fp([0u64; NWORDS]);

    /// A small constant in plain (non-Montgomery) form.
    pub(crate) fn from_u64(v: u64) -> Fp {
        let mut r = Fp::ZERO;
        r.0[0] = v;
        r
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = Fp::ZERO;
        for i in 0..NWORDS {
            r.0[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        r
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for i in 0..NWORDS {
            u64::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }
}

impl FieldParams {
    /// Addition in `[0, 2p)`: plain add then a constant-time conditional
    /// subtraction of 2p.
    pub(crate) fn add(&self, a: &Fp, b: &Fp) -> Fp {
        let nw = self.nwords;
        let mut r = Fp::ZERO;
        let mut carry = 0;
        for i in 0..nw {
            let (v, c) = adc(a.0[i], b.0[i], carry);
            r.0[i] = v;
            carry = c;
        }
        let mut borrow = 0;
        for i in 0..nw {
            let (v, bw) = sbb(r.0[i], self.p2.0[i], borrow);
            r.0[i] = v;
            borrow = bw;
        }
        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0;
        for i in 0..nw {
            let (v, c) = adc(r.0[i], self.p2.0[i] & mask, carry);
            r.0[i] = v;
            carry = c;
        }
        r
    }

    /// Subtraction in `[0, 2p)`: subtract, then add 2p back under the borrow
    /// mask.
    pub(crate) fn sub(&self, a: &Fp, b: &Fp) -> Fp {
        let nw = self.nwords;
        let mut r = Fp::ZERO;
        let mut borrow = 0;
        for i in 0..nw {
            let (v, bw) = sbb(a.0[i], b.0[i], borrow);
            r.0[i] = v;
            borrow = bw;
        }
        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0;
        for i in 0..nw {
            let (v, c) = adc(r.0[i], self.p2.0[i] & mask, carry);
            r.0[i] = v;
            carry = c;
        }
        r
    }

    pub(crate) fn neg(&self, a: &Fp) -> Fp {
        self.sub(&Fp::ZERO, a)
    }

    /// Montgomery multiplication: schoolbook product followed by word-by-word
    /// REDC. Since `p ≡ −1 (mod 2^64)` the per-word quotient is the word
    /// itself. Inputs in `[0, 2p)`, output in `[0, 2p)`; this never branches
    /// on limb values.
    pub(crate) fn mul(&self, a: &Fp, b: &Fp) -> Fp {
        let nw = self.nwords;
        let mut t = [0u64; 2 * NWORDS + 1];

        for i in 0..nw {
            let mut carry = 0;
            for j in 0..nw {
                let (lo, hi) = mac(t[i + j], a.0[i], b.0[j], carry);
                t[i + j] = lo;
                carry = hi;
            }
            t[i + nw] = carry;
        }

        for i in 0..nw {
            let m = t[i];
            let mut carry = 0;
            for j in 0..nw {
                let (lo, hi) = mac(t[i + j], m, self.p.0[j], carry);
                t[i + j] = lo;
                carry = hi;
            }
            // Ripple the row carry to the top; the loop bound depends only on
            // the (public) limb count.
            for k in (i + nw)..(2 * nw + 1) {
                let (v, c) = adc(t[k], carry, 0);
                t[k] = v;
                carry = c;
            }
        }

        let mut r = Fp::ZERO;
        r.0[..nw].copy_from_slice(&t[nw..2 * nw]);
        r
    }

    pub(crate) fn sqr(&self, a: &Fp) -> Fp {
        self.mul(a, a)
    }

    /// Halving in the Montgomery domain: add p under the low-bit mask, then
    /// shift right one bit.
    pub(crate) fn div2(&self, a: &Fp) -> Fp {
        let nw = self.nwords;
        let mask = 0u64.wrapping_sub(a.0[0] & 1);
        let mut r = Fp::ZERO;
        let mut carry = 0;
        for i in 0..nw {
            let (v, c) = adc(a.0[i], self.p.0[i] & mask, carry);
            r.0[i] = v;
            carry = c;
        }
        for i in 0..nw {
            let next = if i + 1 < nw { r.0[i + 1] } else { carry };
            r.0[i] = (r.0[i] >> 1) | (next << 63);
        }
        r
    }

    /// Fully reduce into `[0, p)`: one constant-time conditional subtraction
    /// of p.
    pub(crate) fn correction(&self, a: &Fp) -> Fp {
        let nw = self.nwords;
        let mut r = *a;
        let mut borrow = 0;
        for i in 0..nw {
            let (v, bw) = sbb(r.0[i], self.p.0[i], borrow);
            r.0[i] = v;
            borrow = bw;
        }
        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0;
        for i in 0..nw {
            let (v, c) = adc(r.0[i], self.p.0[i] & mask, carry);
            r.0[i] = v;
            carry = c;
        }
        r
    }

    /// Constant-time equality of the canonical values.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn ct_eq(&self, a: &Fp, b: &Fp) -> Choice {
        let ca = self.correction(a);
        let cb = self.correction(b);
        ca.0.ct_eq(&cb.0)
    }

    /// Inversion by exponentiation with `p − 2` (Fermat). The exponent is a
    /// public per-field constant, so the square-and-multiply schedule leaks
    /// nothing about `a`. The low limb of p is all ones, hence `p − 2` is
    /// formed by clearing a single bit.
    pub(crate) fn inv(&self, a: &Fp) -> Fp {
        let nw = self.nwords;
        let mut e = self.p;
        e.0[0] -= 2;
        let mut r = self.mont_one;
        let mut i = nw * 64;
        while i > 0 {
            i -= 1;
            r = self.sqr(&r);
            if (e.0[i / 64] >> (i % 64)) & 1 == 1 {
                r = self.mul(&r, a);
            }
        }
        r
    }

    /// Map a plain integer into the Montgomery domain.
    pub(crate) fn to_mont(&self, a: &Fp) -> Fp {
        self.mul(a, &self.r2)
    }

    /// Montgomery representation of a small constant (curve coefficients 2,
    /// 4, 6, 8 at walk start).
    pub(crate) fn mont_small(&self, v: u64) -> Fp {
        self.to_mont(&Fp::from_u64(v))
    }

    /// Leave the Montgomery domain; the result is canonical (`< p`).
    pub(crate) fn from_mont(&self, a: &Fp) -> Fp {
        let one = Fp::from_u64(1);
        let r = self.mul(a, &one);
        self.correction(&r)
    }

    /// Little-endian decode of `bytelen` bytes, reduced once into the
    /// redundant range and left in plain form.
    pub(crate) fn from_bytes(&self, bytes: &[u8]) -> Fp {
        debug_assert_eq!(bytes.len(), self.bytelen);
        let mut r = Fp::ZERO;
        for (i, byte) in bytes.iter().enumerate() {
            r.0[i / 8] |= u64::from(*byte) << (8 * (i % 8));
        }
        self.correction(&r)
    }

    /// Little-endian encode of a canonical value into `bytelen` bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn to_bytes(&self, a: &Fp, bytes: &mut [u8]) {
        debug_assert_eq!(bytes.len(), self.bytelen);
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (a.0[i / 8] >> (8 * (i % 8))) as u8;
        }
    }
}
