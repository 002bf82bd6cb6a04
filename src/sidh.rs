use crate::curve::{get_a, inv_3_way, j_inv, ladder_3pt, ProjectivePoint};
use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::isogeny::{walk_3_isogeny, walk_4_isogeny};
use crate::params::Params;

// The fixed starting curve is E6: y² = x³ + 6x² + x, so the walks begin at
// (A+2C, 4C) = (8, 4) and (A−2C, A+2C) = (4, 8) with C = 1.

fn mont_fp2(fc: &crate::fp::FieldParams, v: u64) -> Fp2 {
    Fp2 { a: fc.mont_small(v), b: Fp::ZERO }
}

/// A-side public key generation: the secret selects a kernel
/// `P + [sk]Q` in the 2^eA-torsion, the walk is eA/2 4-isogeny steps, and
/// the published triple is the image of the opposite (3-torsion) basis.
pub(crate) fn public_key_gen_a(prm: &Params, pk: &mut [Fp2; 3], scalar: &[u8]) {
    debug_assert_eq!(prm.a.strategy.len() + 1, prm.a.e as usize / 2, "strategy/walk mismatch");
    let fc = prm.field;
    let kb = &prm.b.pub_points; // 2-torsion basis
    let a6 = mont_fp2(fc, 6);
    let kernel = ladder_3pt(fc, scalar, prm.a.secret_bit_len, &kb[0], &kb[1], &kb[2], &a6);

    let mut carried = [
        ProjectivePoint::from_affine(fc, &prm.a.pub_points[0]),
        ProjectivePoint::from_affine(fc, &prm.a.pub_points[1]),
        ProjectivePoint::from_affine(fc, &prm.a.pub_points[2]),
    ];
    let mut a24plus = mont_fp2(fc, 8);
    let mut c24 = mont_fp2(fc, 4);
    walk_4_isogeny(fc, prm.a.strategy, kernel, &mut a24plus, &mut c24, &mut carried);

    let mut z0 = carried[0].z;
    let mut z1 = carried[1].z;
    let mut z2 = carried[2].z;
    inv_3_way(fc, &mut z0, &mut z1, &mut z2);
    pk[0] = fc.fp2_mul(&carried[0].x, &z0);
    pk[1] = fc.fp2_mul(&carried[1].x, &z1);
    pk[2] = fc.fp2_mul(&carried[2].x, &z2);
}

/// B-side public key generation: kernel in the 3^eB-torsion, eB 3-isogeny
/// steps, publishing the image of the 2-torsion basis.
pub(crate) fn public_key_gen_b(prm: &Params, pk: &mut [Fp2; 3], scalar: &[u8]) {
    debug_assert_eq!(prm.b.strategy.len() + 1, prm.b.e as usize, "strategy/walk mismatch");
    let fc = prm.field;
    let kb = &prm.a.pub_points; // 3-torsion basis
    let a6 = mont_fp2(fc, 6);
    let kernel = ladder_3pt(fc, scalar, prm.b.secret_bit_len, &kb[0], &kb[1], &kb[2], &a6);

    let mut carried = [
        ProjectivePoint::from_affine(fc, &prm.b.pub_points[0]),
        ProjectivePoint::from_affine(fc, &prm.b.pub_points[1]),
        ProjectivePoint::from_affine(fc, &prm.b.pub_points[2]),
    ];
    let mut a24minus = mont_fp2(fc, 4);
    let mut a24plus = mont_fp2(fc, 8);
    walk_3_isogeny(fc, prm.b.strategy, kernel, &mut a24minus, &mut a24plus, &mut carried);

    let mut z0 = carried[0].z;
    let mut z1 = carried[1].z;
    let mut z2 = carried[2].z;
    inv_3_way(fc, &mut z0, &mut z1, &mut z2);
    pk[0] = fc.fp2_mul(&carried[0].x, &z0);
    pk[1] = fc.fp2_mul(&carried[1].x, &z1);
    pk[2] = fc.fp2_mul(&carried[2].x, &z2);
}

/// A-side shared secret: recover the peer curve from its triple, ladder to
/// the kernel, walk with no carried points, and serialise the j-invariant of
/// the final curve.
pub(crate) fn derive_secret_a(prm: &Params, ss: &mut [u8], scalar: &[u8], peer: &[Fp2; 3]) {
    debug_assert_eq!(prm.a.strategy.len() + 1, prm.a.e as usize / 2, "strategy/walk mismatch");
    let fc = prm.field;
    let a = get_a(fc, &peer[0], &peer[1], &peer[2]);
    let kernel = ladder_3pt(fc, scalar, prm.a.secret_bit_len, &peer[0], &peer[1], &peer[2], &a);

    let mut a24plus = fc.fp2_add(&a, &mont_fp2(fc, 2));
    let mut c24 = mont_fp2(fc, 4);
    walk_4_isogeny(fc, prm.a.strategy, kernel, &mut a24plus, &mut c24, &mut []);

    // (A+2C, 4C) -> (4A, 4C); j is invariant under the common scaling.
    let mut a_final = fc.fp2_add(&a24plus, &a24plus);
    a_final = fc.fp2_sub(&a_final, &c24);
    a_final = fc.fp2_add(&a_final, &a_final);
    let j = j_inv(fc, &a_final, &c24);
    fc.fp2_to_bytes(&j, ss);
}

/// B-side shared secret; mirror of [`derive_secret_a`] over the 3-isogeny
/// walk.
pub(crate) fn derive_secret_b(prm: &Params, ss: &mut [u8], scalar: &[u8], peer: &[Fp2; 3]) {
    debug_assert_eq!(prm.b.strategy.len() + 1, prm.b.e as usize, "strategy/walk mismatch");
    let fc = prm.field;
    let a = get_a(fc, &peer[0], &peer[1], &peer[2]);
    let kernel = ladder_3pt(fc, scalar, prm.b.secret_bit_len, &peer[0], &peer[1], &peer[2], &a);

    let two = mont_fp2(fc, 2);
    let mut a24plus = fc.fp2_add(&a, &two);
    let mut a24minus = fc.fp2_sub(&a, &two);
    walk_3_isogeny(fc, prm.b.strategy, kernel, &mut a24minus, &mut a24plus, &mut []);

    // (A−2C, A+2C) -> (4A, 4C).
    let mut a_final = fc.fp2_add(&a24plus, &a24minus);
    a_final = fc.fp2_add(&a_final, &a_final);
    let c_final = fc.fp2_sub(&a24plus, &a24minus);
    let j = j_inv(fc, &a_final, &c_final);
    fc.fp2_to_bytes(&j, ss);
}

#[cfg(test)]
mod tests {
    use crate::key::{KeyVariant, PrivateKey, PublicKey};
    use rand_core::SeedableRng;

    // SIDH round trip on every enabled parameter set: both sides derive the
    // same j-invariant.
    #[test]
    fn sidh_shared_secret_agreement() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        for prm in crate::params::all() {
            let mut prv_a = PrivateKey::new(prm.id, KeyVariant::SidhA);
            let mut pub_a = PublicKey::new(prm.id, KeyVariant::SidhA);
            let mut prv_b = PrivateKey::new(prm.id, KeyVariant::SidhB);
            let mut pub_b = PublicKey::new(prm.id, KeyVariant::SidhB);
            prv_a.generate(&mut rng).unwrap();
            prv_a.generate_public_key(&mut pub_a);
            prv_b.generate(&mut rng).unwrap();
            prv_b.generate_public_key(&mut pub_b);

            let mut ss_a = [0u8; crate::MAX_SHARED_SECRET_SIZE];
            let mut ss_b = [0u8; crate::MAX_SHARED_SECRET_SIZE];
            let n = prm.shared_secret_size;
            prv_a.derive_secret(&mut ss_a[..n], &pub_b);
            prv_b.derive_secret(&mut ss_b[..n], &pub_a);
            assert_eq!(ss_a[..n], ss_b[..n], "disagreement for {:?}", prm.id);
        }
    }

    #[test]
    #[should_panic(expected = "incompatible")]
    fn derive_rejects_same_side() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(43);
        let prm = crate::params::all()[0];
        let mut prv = PrivateKey::new(prm.id, KeyVariant::SidhA);
        let mut pb = PublicKey::new(prm.id, KeyVariant::SidhA);
        prv.generate(&mut rng).unwrap();
        prv.generate_public_key(&mut pb);
        let mut ss = [0u8; crate::MAX_SHARED_SECRET_SIZE];
        let n = prm.shared_secret_size;
        prv.derive_secret(&mut ss[..n], &pb);
    }
}
