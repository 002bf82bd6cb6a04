use criterion::{criterion_group, criterion_main, Criterion};

use rand_core::SeedableRng;
use sike::{KeyVariant, MultiKem, ParamId, PrivateKey, PublicKey, Sike};

fn bench_param(c: &mut Criterion, id: ParamId, name: &str) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(99);
    let mut sk = PrivateKey::new(id, KeyVariant::Sike);
    let mut pk = PublicKey::new(id, KeyVariant::Sike);
    sk.generate(&mut rng).unwrap();
    sk.generate_public_key(&mut pk);

    let mut kem = Sike::new(id);
    let mut ct = [0u8; sike::MAX_CIPHERTEXT_SIZE];
    let mut ss = [0u8; sike::MAX_MSG_LEN];
    kem.encapsulate(&mut ct, &mut ss, &pk, &mut rng).unwrap();
    let ct_len = kem.ciphertext_size();

    c.bench_function(&format!("{name} KeyGen"), |b| {
        b.iter(|| {
            let mut p = PublicKey::new(id, KeyVariant::Sike);
            sk.generate_public_key(&mut p);
        })
    });
    c.bench_function(&format!("{name} Encaps"), |b| {
        b.iter(|| kem.encapsulate(&mut ct, &mut ss, &pk, &mut rng))
    });
    kem.encapsulate(&mut ct, &mut ss, &pk, &mut rng).unwrap();
    c.bench_function(&format!("{name} Decaps"), |b| {
        b.iter(|| kem.decapsulate(&mut ss, &sk, &pk, &ct[..ct_len]))
    });

    let mut mkem = MultiKem::allocate(id, 100);
    let pks: Vec<PublicKey> = (0..100)
        .map(|_| {
            let mut s = mkem.new_private_key();
            let mut p = mkem.new_public_key();
            s.generate(&mut rng).unwrap();
            s.generate_public_key(&mut p);
            p
        })
        .collect();
    c.bench_function(&format!("{name} MultiEncaps 100 keys"), |b| {
        b.iter(|| mkem.encapsulate(&mut ss, &pks, &mut rng))
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    #[cfg(feature = "p434")]
    bench_param(c, ParamId::Fp434, "SIKEp434");
    #[cfg(feature = "p503")]
    bench_param(c, ParamId::Fp503, "SIKEp503");
    #[cfg(feature = "p751")]
    bench_param(c, ParamId::Fp751, "SIKEp751");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
