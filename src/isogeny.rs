use crate::curve::{xdbl_e, xtpl_e, ProjectivePoint};
use crate::fp::FieldParams;
use crate::fp2::Fp2;

/// Upper bound on simultaneously-stacked intermediate points during a
/// strategy traversal. The embedded strategies stay well below this; the
/// bound depends only on the strategy shape, never on secrets.
const MAX_INT_POINTS: usize = 24;

/// Degree-4 isogeny from a kernel point of order 4 (SIKE spec alg. 13,
/// get_4_isog): returns the image coefficients `(A'+2C', 4C')` and the three
/// evaluation constants.
pub(crate) fn get_4_isog(fc: &FieldParams, k: &ProjectivePoint) -> (Fp2, Fp2, [Fp2; 3]) {
    let k1 = fc.fp2_sub(&k.x, &k.z);
    let k2 = fc.fp2_add(&k.x, &k.z);
    let mut k0 = fc.fp2_sqr(&k.z);
    k0 = fc.fp2_add(&k0, &k0);
    let c24 = fc.fp2_sqr(&k0);
    k0 = fc.fp2_add(&k0, &k0);
    let mut a24plus = fc.fp2_sqr(&k.x);
    a24plus = fc.fp2_add(&a24plus, &a24plus);
    a24plus = fc.fp2_sqr(&a24plus);
    (a24plus, c24, [k0, k1, k2])
}

/// Push a point through a 4-isogeny (SIKE spec alg. 14, eval_4_isog).
pub(crate) fn eval_4_isog(fc: &FieldParams, coeff: &[Fp2; 3], p: &mut ProjectivePoint) {
    let mut t0 = fc.fp2_add(&p.x, &p.z);
    let mut t1 = fc.fp2_sub(&p.x, &p.z);
    let mut x = fc.fp2_mul(&t0, &coeff[1]);
    let mut z = fc.fp2_mul(&t1, &coeff[2]);
    t0 = fc.fp2_mul(&t0, &t1);
    t0 = fc.fp2_mul(&t0, &coeff[0]);
    t1 = fc.fp2_add(&x, &z);
    z = fc.fp2_sub(&x, &z);
    t1 = fc.fp2_sqr(&t1);
    z = fc.fp2_sqr(&z);
    x = fc.fp2_add(&t0, &t1);
    t0 = fc.fp2_sub(&z, &t0);
    p.x = fc.fp2_mul(&x, &t1);
    p.z = fc.fp2_mul(&z, &t0);
}

/// Degree-3 isogeny from a kernel point of order 3 (SIKE spec alg. 15,
/// get_3_isog): returns the image coefficients `(A'−2C', A'+2C')` and the two
/// evaluation constants.
pub(crate) fn get_3_isog(fc: &FieldParams, k: &ProjectivePoint) -> (Fp2, Fp2, [Fp2; 2]) {
    let k1 = fc.fp2_sub(&k.x, &k.z);
    let t0 = fc.fp2_sqr(&k1);
    let k2 = fc.fp2_add(&k.x, &k.z);
    let t1 = fc.fp2_sqr(&k2);
    let mut t2 = fc.fp2_add(&t0, &t1);
    let mut t3 = fc.fp2_add(&k1, &k2);
    t3 = fc.fp2_sqr(&t3);
    t3 = fc.fp2_sub(&t3, &t2);
    t2 = fc.fp2_add(&t1, &t3);
    t3 = fc.fp2_add(&t3, &t0);
    let mut t4 = fc.fp2_add(&t3, &t0);
    t4 = fc.fp2_add(&t4, &t4);
    t4 = fc.fp2_add(&t1, &t4);
    let a24minus = fc.fp2_mul(&t2, &t4);
    t4 = fc.fp2_add(&t1, &t2);
    t4 = fc.fp2_add(&t4, &t4);
    t4 = fc.fp2_add(&t0, &t4);
    let a24plus = fc.fp2_mul(&t3, &t4);
    (a24minus, a24plus, [k1, k2])
}

/// Push a point through a 3-isogeny (SIKE spec alg. 16, eval_3_isog).
pub(crate) fn eval_3_isog(fc: &FieldParams, coeff: &[Fp2; 2], p: &mut ProjectivePoint) {
    let mut t0 = fc.fp2_add(&p.x, &p.z);
    let mut t1 = fc.fp2_sub(&p.x, &p.z);
    t0 = fc.fp2_mul(&coeff[0], &t0);
    t1 = fc.fp2_mul(&coeff[1], &t1);
    let mut t2 = fc.fp2_add(&t0, &t1);
    t0 = fc.fp2_sub(&t1, &t0);
    t2 = fc.fp2_sqr(&t2);
    t0 = fc.fp2_sqr(&t0);
    p.x = fc.fp2_mul(&p.x, &t2);
    p.z = fc.fp2_mul(&p.z, &t0);
}

/// Walk the 2^eA-isogeny as eA/2 4-isogeny steps following the precomputed
/// strategy (a flat push/pop schedule; see spec discussion of optimal
/// strategies). `r` must have order 2^eA; `carried` points are pushed through
/// every step. Coefficients `(a24plus, c24)` are updated to the image curve.
pub(crate) fn walk_4_isogeny(
    fc: &FieldParams, strategy: &[u32], mut r: ProjectivePoint, a24plus: &mut Fp2, c24: &mut Fp2,
    carried: &mut [ProjectivePoint],
) {
    let steps = strategy.len() + 1;
    let mut pts = [ProjectivePoint::default(); MAX_INT_POINTS];
    let mut idxs = [0usize; MAX_INT_POINTS];
    let mut npts = 0;
    let mut index = 0;
    let mut si = 0;

    for row in 1..steps {
        while index < steps - row {
            pts[npts] = r;
            idxs[npts] = index;
            npts += 1;
            let m = strategy[si] as usize;
            si += 1;
            r = xdbl_e(fc, &r, a24plus, c24, 2 * m);
            index += m;
        }
        let (ap, c, coeff) = get_4_isog(fc, &r);
        *a24plus = ap;
        *c24 = c;
        for pt in pts.iter_mut().take(npts) {
            eval_4_isog(fc, &coeff, pt);
        }
        for pt in carried.iter_mut() {
            eval_4_isog(fc, &coeff, pt);
        }
        npts -= 1;
        r = pts[npts];
        index = idxs[npts];
    }
    let (ap, c, coeff) = get_4_isog(fc, &r);
    *a24plus = ap;
    *c24 = c;
    for pt in carried.iter_mut() {
        eval_4_isog(fc, &coeff, pt);
    }
}

/// Walk the 3^eB-isogeny as eB 3-isogeny steps following the strategy;
/// mirror image of [`walk_4_isogeny`] with `(a24minus, a24plus)` curve state.
pub(crate) fn walk_3_isogeny(
    fc: &FieldParams, strategy: &[u32], mut r: ProjectivePoint, a24minus: &mut Fp2,
    a24plus: &mut Fp2, carried: &mut [ProjectivePoint],
) {
    let steps = strategy.len() + 1;
    let mut pts = [ProjectivePoint::default(); MAX_INT_POINTS];
    let mut idxs = [0usize; MAX_INT_POINTS];
    let mut npts = 0;
    let mut index = 0;
    let mut si = 0;

    for row in 1..steps {
        while index < steps - row {
            pts[npts] = r;
            idxs[npts] = index;
            npts += 1;
            let m = strategy[si] as usize;
            si += 1;
            r = xtpl_e(fc, &r, a24minus, a24plus, m);
            index += m;
        }
        let (am, ap, coeff) = get_3_isog(fc, &r);
        *a24minus = am;
        *a24plus = ap;
        for pt in pts.iter_mut().take(npts) {
            eval_3_isog(fc, &coeff, pt);
        }
        for pt in carried.iter_mut() {
            eval_3_isog(fc, &coeff, pt);
        }
        npts -= 1;
        r = pts[npts];
        index = idxs[npts];
    }
    let (am, ap, coeff) = get_3_isog(fc, &r);
    *a24minus = am;
    *a24plus = ap;
    for pt in carried.iter_mut() {
        eval_3_isog(fc, &coeff, pt);
    }
}

#[cfg(all(test, feature = "p434"))]
mod tests {
    use super::*;
    use crate::curve::j_inv;
    use crate::fp::Fp;

    // A 3-isogeny maps the rest of the 3-torsion to points of order
    // dividing 3; walking one step from a kernel of order 3 must land the
    // cofactor points at infinity when tripled once more.
    #[test]
    fn three_isogeny_kills_kernel() {
        let prm = &crate::params::p434::PARAMS;
        let fc = prm.field;
        let a24minus = Fp2 { a: fc.mont_small(4), b: Fp::ZERO };
        let a24plus = Fp2 { a: fc.mont_small(8), b: Fp::ZERO };
        // [3^(eB-1)]P3 generates a 3-isogeny kernel.
        let p3 = ProjectivePoint::from_affine(fc, &prm.a.pub_points[0]);
        let k = xtpl_e(fc, &p3, &a24minus, &a24plus, prm.b.e as usize - 1);
        let (am, ap, coeff) = get_3_isog(fc, &k);
        // The image of P3 must now have order 3^(eB-1).
        let mut img = p3;
        eval_3_isog(fc, &coeff, &mut img);
        let near = xtpl_e(fc, &img, &am, &ap, prm.b.e as usize - 2);
        assert!(!bool::from(fc.fp2_ct_eq(&near.z, &Fp2::ZERO)));
        let end = xtpl_e(fc, &near, &am, &ap, 1);
        assert!(bool::from(fc.fp2_ct_eq(&end.z, &Fp2::ZERO)));
        // And the image curve is a new one (different j-invariant from E6).
        let two_a = fc.fp2_add(&ap, &am);
        let a4 = fc.fp2_add(&two_a, &two_a);
        let c4 = fc.fp2_sub(&ap, &am);
        let j = j_inv(fc, &a4, &c4);
        let j6 = j_inv(
            fc,
            &Fp2 { a: fc.mont_small(6), b: Fp::ZERO },
            &Fp2 { a: fc.mont_one, b: Fp::ZERO },
        );
        assert!(!bool::from(fc.fp2_ct_eq(&j, &j6)));
    }
}
