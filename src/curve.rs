use crate::fp::FieldParams;
use crate::fp2::Fp2;
use subtle::{Choice, ConditionallySelectable};

/// x-only projective point `(X : Z)` on a Montgomery curve; the affine
/// x-coordinate is `X/Z` and Y is never materialised.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: Fp2,
    pub(crate) z: Fp2,
}

impl ProjectivePoint {
    /// Lift an affine x-coordinate to `(x : 1)`.
    pub(crate) fn from_affine(fc: &FieldParams, x: &Fp2) -> Self {
        ProjectivePoint { x: *x, z: Fp2 { a: fc.mont_one, b: crate::fp::Fp::ZERO } }
    }

    pub(crate) fn conditional_swap(p: &mut Self, q: &mut Self, choice: Choice) {
        Fp2::conditional_swap(&mut p.x, &mut q.x, choice);
        Fp2::conditional_swap(&mut p.z, &mut q.z, choice);
    }
}

/// x-only doubling (SIKE spec alg. 3, xDBL) on the curve given by
/// `a24plus = A+2C`, `c24 = 4C`.
pub(crate) fn xdbl(fc: &FieldParams, p: &ProjectivePoint, a24plus: &Fp2, c24: &Fp2) -> ProjectivePoint {
    let mut t0 = fc.fp2_sub(&p.x, &p.z);
    let mut t1 = fc.fp2_add(&p.x, &p.z);
    t0 = fc.fp2_sqr(&t0);
    t1 = fc.fp2_sqr(&t1);
    let mut z2 = fc.fp2_mul(c24, &t0);
    let x2 = fc.fp2_mul(&z2, &t1);
    t1 = fc.fp2_sub(&t1, &t0);
    let t2 = fc.fp2_mul(a24plus, &t1);
    z2 = fc.fp2_add(&z2, &t2);
    z2 = fc.fp2_mul(&z2, &t1);
    ProjectivePoint { x: x2, z: z2 }
}

/// Repeated doubling, `[2^k]P`.
pub(crate) fn xdbl_e(
    fc: &FieldParams, p: &ProjectivePoint, a24plus: &Fp2, c24: &Fp2, k: usize,
) -> ProjectivePoint {
    let mut r = *p;
    for _ in 0..k {
        r = xdbl(fc, &r, a24plus, c24);
    }
    r
}

/// x-only tripling (SIKE spec alg. 6, xTPL) on the curve given by
/// `a24minus = A−2C`, `a24plus = A+2C`.
pub(crate) fn xtpl(
    fc: &FieldParams, p: &ProjectivePoint, a24minus: &Fp2, a24plus: &Fp2,
) -> ProjectivePoint {
    let t0 = fc.fp2_sub(&p.x, &p.z);
    let mut t2 = fc.fp2_sqr(&t0);
    let t1 = fc.fp2_add(&p.x, &p.z);
    let mut t3 = fc.fp2_sqr(&t1);
    let t4 = fc.fp2_add(&t1, &t0);
    let t0 = fc.fp2_sub(&t1, &t0);
    let mut t1 = fc.fp2_sqr(&t4);
    t1 = fc.fp2_sub(&t1, &t3);
    t1 = fc.fp2_sub(&t1, &t2);
    let t5 = fc.fp2_mul(&t3, a24plus);
    t3 = fc.fp2_mul(&t5, &t3);
    let t6 = fc.fp2_mul(&t2, a24minus);
    t2 = fc.fp2_mul(&t2, &t6);
    t3 = fc.fp2_sub(&t2, &t3);
    t2 = fc.fp2_sub(&t5, &t6);
    t1 = fc.fp2_mul(&t2, &t1);
    t2 = fc.fp2_add(&t3, &t1);
    t2 = fc.fp2_sqr(&t2);
    let x3 = fc.fp2_mul(&t2, &t4);
    t1 = fc.fp2_sub(&t3, &t1);
    t1 = fc.fp2_sqr(&t1);
    let z3 = fc.fp2_mul(&t1, &t0);
    ProjectivePoint { x: x3, z: z3 }
}

/// Repeated tripling, `[3^k]P`.
pub(crate) fn xtpl_e(
    fc: &FieldParams, p: &ProjectivePoint, a24minus: &Fp2, a24plus: &Fp2, k: usize,
) -> ProjectivePoint {
    let mut r = *p;
    for _ in 0..k {
        r = xtpl(fc, &r, a24minus, a24plus);
    }
    r
}

/// Combined doubling and differential addition (SIKE spec alg. 5, xDBLADD):
/// returns `(2P, P+Q)` given the projective difference `x(P−Q)` and the
/// affine curve constant `a24 = (A+2)/4`.
pub(crate) fn xdbladd(
    fc: &FieldParams, p: &ProjectivePoint, q: &ProjectivePoint, pq: &ProjectivePoint, a24: &Fp2,
) -> (ProjectivePoint, ProjectivePoint) {
    let mut t0 = fc.fp2_add(&p.x, &p.z);
    let mut t1 = fc.fp2_sub(&p.x, &p.z);
    let mut x2 = fc.fp2_sqr(&t0);
    let mut t2 = fc.fp2_sub(&q.x, &q.z);
    let mut x3 = fc.fp2_add(&q.x, &q.z);
    t0 = fc.fp2_mul(&t0, &t2);
    let mut z2 = fc.fp2_sqr(&t1);
    t1 = fc.fp2_mul(&t1, &x3);
    t2 = fc.fp2_sub(&x2, &z2);
    x2 = fc.fp2_mul(&x2, &z2);
    x3 = fc.fp2_mul(a24, &t2);
    let mut z3 = fc.fp2_sub(&t0, &t1);
    z2 = fc.fp2_add(&x3, &z2);
    x3 = fc.fp2_add(&t0, &t1);
    z2 = fc.fp2_mul(&z2, &t2);
    z3 = fc.fp2_sqr(&z3);
    x3 = fc.fp2_sqr(&x3);
    z3 = fc.fp2_mul(&pq.x, &z3);
    x3 = fc.fp2_mul(&pq.z, &x3);
    (ProjectivePoint { x: x2, z: z2 }, ProjectivePoint { x: x3, z: z3 })
}

/// Three-point ladder (SIKE spec alg. 8): computes `x(P + [m]Q)` from
/// `x(P)`, `x(Q)`, `x(P−Q)`. Scans `nbits` bits of the little-endian scalar
/// and swaps working points with constant-time masks; the memory access
/// pattern depends only on `nbits`.
pub(crate) fn ladder_3pt(
    fc: &FieldParams, scalar: &[u8], nbits: usize, xp: &Fp2, xq: &Fp2, xpq: &Fp2, a: &Fp2,
) -> ProjectivePoint {
    let mut r0 = ProjectivePoint::from_affine(fc, xq);
    let mut r1 = ProjectivePoint::from_affine(fc, xp);
    let mut r2 = ProjectivePoint::from_affine(fc, xpq);

    // a24 = (A+2)/4
    let two = Fp2 { a: fc.mont_small(2), b: crate::fp::Fp::ZERO };
    let mut a24 = fc.fp2_add(a, &two);
    a24 = fc.fp2_div2(&a24);
    a24 = fc.fp2_div2(&a24);

    let mut prevbit = 0u8;
    for i in 0..nbits {
        let bit = (scalar[i >> 3] >> (i & 7)) & 1;
        let swap = Choice::from(bit ^ prevbit);
        prevbit = bit;
        ProjectivePoint::conditional_swap(&mut r1, &mut r2, swap);
        let (d, s) = xdbladd(fc, &r0, &r2, &r1, &a24);
        r0 = d;
        r2 = s;
    }
    ProjectivePoint::conditional_swap(&mut r1, &mut r2, Choice::from(prevbit));
    r1
}

/// Recover the affine Montgomery coefficient A from the x-coordinates of
/// P, Q and P−Q (Okeya–Sakurai style; SIKE spec alg. 10, get_A).
pub(crate) fn get_a(fc: &FieldParams, xp: &Fp2, xq: &Fp2, xpq: &Fp2) -> Fp2 {
    let one = Fp2 { a: fc.mont_one, b: crate::fp::Fp::ZERO };
    let mut t1 = fc.fp2_add(xp, xq);
    let mut t0 = fc.fp2_mul(xp, xq);
    let mut a = fc.fp2_mul(xpq, &t1);
    a = fc.fp2_add(&a, &t0);
    t0 = fc.fp2_mul(&t0, xpq);
    a = fc.fp2_sub(&a, &one);
    t0 = fc.fp2_add(&t0, &t0);
    t1 = fc.fp2_add(&t1, xpq);
    t0 = fc.fp2_add(&t0, &t0);
    a = fc.fp2_sqr(&a);
    t0 = fc.fp2_inv(&t0);
    a = fc.fp2_mul(&a, &t0);
    a = fc.fp2_sub(&a, &t1);
    a
}

/// j-invariant of `E_{A,C}` (SIKE spec alg. 9, j_inv):
/// `j = 256·(A²−3C²)³ / (C⁴·(A²−4C²))`.
pub(crate) fn j_inv(fc: &FieldParams, a: &Fp2, c: &Fp2) -> Fp2 {
    let mut j = fc.fp2_sqr(a);
    let mut t1 = fc.fp2_sqr(c);
    let mut t0 = fc.fp2_add(&t1, &t1);
    t0 = fc.fp2_sub(&j, &t0);
    t0 = fc.fp2_sub(&t0, &t1);
    j = fc.fp2_sub(&t0, &t1);
    t1 = fc.fp2_sqr(&t1);
    j = fc.fp2_mul(&j, &t1);
    t0 = fc.fp2_add(&t0, &t0);
    t0 = fc.fp2_add(&t0, &t0);
    t1 = fc.fp2_sqr(&t0);
    t0 = fc.fp2_mul(&t0, &t1);
    t0 = fc.fp2_add(&t0, &t0);
    t0 = fc.fp2_add(&t0, &t0);
    j = fc.fp2_inv(&j);
    j = fc.fp2_mul(&t0, &j);
    j
}

/// Simultaneous inversion of three Z coordinates with one field inversion
/// (Montgomery's trick), used to normalise a public-key triple.
pub(crate) fn inv_3_way(fc: &FieldParams, z0: &mut Fp2, z1: &mut Fp2, z2: &mut Fp2) {
    let t0 = fc.fp2_mul(z0, z1);
    let t1 = fc.fp2_mul(&t0, z2);
    let t1 = fc.fp2_inv(&t1);
    let t2 = fc.fp2_mul(&t1, z2);
    let i0 = fc.fp2_mul(&t2, z1);
    let i1 = fc.fp2_mul(&t2, z0);
    let i2 = fc.fp2_mul(&t1, &t0);
    *z0 = i0;
    *z1 = i1;
    *z2 = i2;
}

#[cfg(all(test, feature = "p434"))]
mod tests {
    use super::*;

    fn fp2_small(fc: &FieldParams, a: u64, b: u64) -> Fp2 {
        Fp2 { a: fc.mont_small(a), b: fc.mont_small(b) }
    }

    // The 2-torsion basis points have exact order 2^eA on the starting
    // curve: eA−1 doublings stay finite, one more lands at infinity (Z = 0).
    #[test]
    fn two_torsion_basis_order() {
        let prm = &crate::params::p434::PARAMS;
        let fc = prm.field;
        let a24plus = fp2_small(fc, 8, 0);
        let c24 = fp2_small(fc, 4, 0);
        for xpt in &prm.b.pub_points {
            let p = ProjectivePoint::from_affine(fc, xpt);
            let near = xdbl_e(fc, &p, &a24plus, &c24, prm.a.e as usize - 1);
            assert!(!bool::from(fc.fp2_ct_eq(&near.z, &Fp2::ZERO)));
            let end = xdbl(fc, &near, &a24plus, &c24);
            assert!(bool::from(fc.fp2_ct_eq(&end.z, &Fp2::ZERO)));
        }
    }

    // Same for the 3-torsion basis under tripling.
    #[test]
    fn three_torsion_basis_order() {
        let prm = &crate::params::p434::PARAMS;
        let fc = prm.field;
        let a24minus = fp2_small(fc, 4, 0);
        let a24plus = fp2_small(fc, 8, 0);
        for xpt in &prm.a.pub_points {
            let p = ProjectivePoint::from_affine(fc, xpt);
            let near = xtpl_e(fc, &p, &a24minus, &a24plus, prm.b.e as usize - 1);
            assert!(!bool::from(fc.fp2_ct_eq(&near.z, &Fp2::ZERO)));
            let end = xtpl(fc, &near, &a24minus, &a24plus);
            assert!(bool::from(fc.fp2_ct_eq(&end.z, &Fp2::ZERO)));
        }
    }

    #[test]
    fn j_invariant_of_start_curve() {
        // E6 has j = 287496, a plain integer, for every parameter set.
        for prm in crate::params::all() {
            let fc = prm.field;
            let a = fp2_small(fc, 6, 0);
            let c = fp2_small(fc, 1, 0);
            let j = j_inv(fc, &a, &c);
            let expect = fp2_small(fc, 287_496, 0);
            assert!(bool::from(fc.fp2_ct_eq(&j, &expect)));
        }
    }
}
