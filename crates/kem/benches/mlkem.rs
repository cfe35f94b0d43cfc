// crates/kem/benches/mlkem.rs

//! Benchmarks for the ML-KEM key encapsulation mechanism

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qcrypt_api::Kem;
use qcrypt_kem::mlkem::{MlKem1024, MlKem512, MlKem768};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn bench_variant<K: Kem>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = K::keypair(&mut rng).unwrap();
        });
    });

    let keypair = K::keypair(&mut rng).unwrap();
    let pk = K::public_key(&keypair);
    let sk = K::secret_key(&keypair);

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) = K::encapsulate(&mut rng, black_box(&pk)).unwrap();
        });
    });

    let (ct, _) = K::encapsulate(&mut rng, &pk).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = K::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
        });
    });

    group.finish();
}

fn bench_mlkem512(c: &mut Criterion) {
    bench_variant::<MlKem512>(c, "MlKem512");
}

fn bench_mlkem768(c: &mut Criterion) {
    bench_variant::<MlKem768>(c, "MlKem768");
}

fn bench_mlkem1024(c: &mut Criterion) {
    bench_variant::<MlKem1024>(c, "MlKem1024");
}

criterion_group!(benches, bench_mlkem512, bench_mlkem768, bench_mlkem1024);
criterion_main!(benches);
