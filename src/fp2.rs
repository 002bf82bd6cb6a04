use crate::fp::{FieldParams, Fp};
use subtle::{Choice, ConditionallySelectable};

/// An element `a + b·i` of GF(p²) with `i² = −1`; the SIKE primes are
/// ≡ 3 (mod 4) so the extension is well defined. Both halves follow the
/// GF(p) representation rules (Montgomery form, `[0, 2p)`).
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Fp2 {
    pub(crate) a: Fp,
    pub(crate) b: Fp,
}

impl Fp2 {
    pub(crate) const ZERO: Fp2 = Fp2 { a: Fp::ZERO, b: Fp::ZERO };
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(x: &Self, y: &Self, choice: Choice) -> Self {
        Fp2 {
            a: Fp::conditional_select(&x.a, &y.a, choice),
            b: Fp::conditional_select(&x.b, &y.b, choice),
        }
    }

    fn conditional_swap(x: &mut Self, y: &mut Self, choice: Choice) {
        Fp::conditional_swap(&mut x.a, &mut y.a, choice);
        Fp::conditional_swap(&mut x.b, &mut y.b, choice);
    }
}

impl FieldParams {
    pub(crate) fn fp2_add(&self, x: &Fp2, y: &Fp2) -> Fp2 {
        Fp2 { a: self.add(&x.a, &y.a), b: self.add(&x.b, &y.b) }
    }

    pub(crate) fn fp2_sub(&self, x: &Fp2, y: &Fp2) -> Fp2 {
        Fp2 { a: self.sub(&x.a, &y.a), b: self.sub(&x.b, &y.b) }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn fp2_neg(&self, x: &Fp2) -> Fp2 {
        Fp2 { a: self.neg(&x.a), b: self.neg(&x.b) }
    }

    pub(crate) fn fp2_div2(&self, x: &Fp2) -> Fp2 {
        Fp2 { a: self.div2(&x.a), b: self.div2(&x.b) }
    }

    /// Karatsuba-style multiplication: three GF(p) products.
    pub(crate) fn fp2_mul(&self, x: &Fp2, y: &Fp2) -> Fp2 {
        let t0 = self.add(&x.a, &x.b);
        let t1 = self.add(&y.a, &y.b);
        let tt = self.mul(&t0, &t1);
        let u0 = self.mul(&x.a, &y.a);
        let u1 = self.mul(&x.b, &y.b);
        let ra = self.sub(&u0, &u1);
        let rb = self.sub(&self.sub(&tt, &u0), &u1);
        Fp2 { a: ra, b: rb }
    }

    /// Squaring via `(a+b)(a−b)` and `2ab`: two GF(p) products.
    pub(crate) fn fp2_sqr(&self, x: &Fp2) -> Fp2 {
        let sum = self.add(&x.a, &x.b);
        let diff = self.sub(&x.a, &x.b);
        let dbl = self.add(&x.a, &x.a);
        Fp2 { a: self.mul(&sum, &diff), b: self.mul(&dbl, &x.b) }
    }

    /// Inversion through the norm: `(a + bi)⁻¹ = (a − bi)/(a² + b²)`, with
    /// the single GF(p) inversion done by Fermat exponentiation.
    pub(crate) fn fp2_inv(&self, x: &Fp2) -> Fp2 {
        let n = self.add(&self.sqr(&x.a), &self.sqr(&x.b));
        let ninv = self.inv(&n);
        Fp2 { a: self.mul(&x.a, &ninv), b: self.mul(&self.neg(&x.b), &ninv) }
    }

    // Release builds compare serialized bytes instead; the redundant-form
    // equality is exercised by the arithmetic tests.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn fp2_ct_eq(&self, x: &Fp2, y: &Fp2) -> Choice {
        self.ct_eq(&x.a, &y.a) & self.ct_eq(&x.b, &y.b)
    }

    pub(crate) fn fp2_to_mont(&self, x: &Fp2) -> Fp2 {
        Fp2 { a: self.to_mont(&x.a), b: self.to_mont(&x.b) }
    }

    pub(crate) fn fp2_from_mont(&self, x: &Fp2) -> Fp2 {
        Fp2 { a: self.from_mont(&x.a), b: self.from_mont(&x.b) }
    }

    /// Wire decode: `bytelen` little-endian bytes of `a`, then of `b`, each
    /// reduced and converted into the Montgomery domain.
    pub(crate) fn fp2_from_bytes(&self, bytes: &[u8]) -> Fp2 {
        debug_assert_eq!(bytes.len(), 2 * self.bytelen);
        let plain = Fp2 {
            a: self.from_bytes(&bytes[..self.bytelen]),
            b: self.from_bytes(&bytes[self.bytelen..]),
        };
        self.fp2_to_mont(&plain)
    }

    /// Wire encode, inverse of [`fp2_from_bytes`]: canonical (`< p`) values,
    /// little-endian halves.
    pub(crate) fn fp2_to_bytes(&self, x: &Fp2, bytes: &mut [u8]) {
        debug_assert_eq!(bytes.len(), 2 * self.bytelen);
        let plain = self.fp2_from_mont(x);
        self.to_bytes(&plain.a, &mut bytes[..self.bytelen]);
        self.to_bytes(&plain.b, &mut bytes[self.bytelen..]);
    }
}

#[cfg(all(test, feature = "p434"))]
mod tests {
    use super::*;

    fn field() -> &'static FieldParams {
        &crate::params::p434::FIELD
    }

    fn small(fc: &FieldParams, a: u64, b: u64) -> Fp2 {
        Fp2 { a: fc.mont_small(a), b: fc.mont_small(b) }
    }

    #[test]
    fn i_squared_is_minus_one() {
        let fc = field();
        let i = small(fc, 0, 1);
        let ii = fc.fp2_sqr(&i);
        let minus_one = fc.fp2_neg(&small(fc, 1, 0));
        assert!(bool::from(fc.fp2_ct_eq(&ii, &minus_one)));
    }

    #[test]
    fn mul_sqr_agree() {
        let fc = field();
        let x = small(fc, 0x1234_5678, 0x9abc_def0);
        assert!(bool::from(fc.fp2_ct_eq(&fc.fp2_mul(&x, &x), &fc.fp2_sqr(&x))));
    }

    #[test]
    fn inv_round_trip() {
        let fc = field();
        let x = small(fc, 7, 11);
        let xi = fc.fp2_inv(&x);
        let one = small(fc, 1, 0);
        assert!(bool::from(fc.fp2_ct_eq(&fc.fp2_mul(&x, &xi), &one)));
    }

    #[test]
    fn bytes_round_trip() {
        let fc = field();
        let x = small(fc, 0xdead_beef, 0x0bad_cafe);
        let mut buf = [0u8; 110];
        fc.fp2_to_bytes(&x, &mut buf);
        let y = fc.fp2_from_bytes(&buf);
        assert!(bool::from(fc.fp2_ct_eq(&x, &y)));
    }
}
