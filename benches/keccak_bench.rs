use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use spongewrap::{KeccakF1600, KeccakF200, KeccakF400, KeccakF800, Permutation};

fn keccak_sha3_256<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("SHA3-256 {N}B"));

    let mut rng = rand::thread_rng();
    let mut data = [0u8; N];
    rng.fill(&mut data[..]);

    group.bench_with_input("spongewrap", &data, |b, data| {
        use spongewrap::Sha3_256;

        b.iter(|| black_box(Sha3_256::digest(data)))
    });

    group.bench_with_input("tiny-keccak", &data, |b, data| {
        use tiny_keccak::{Hasher, Sha3};
        let mut hash = [0u8; 32];

        b.iter(|| {
            // for tiny-keccak we need a new instance for each operation
            let mut sha3 = Sha3::v256();
            sha3.update(data);
            sha3.finalize(black_box(&mut hash));
        })
    });

    group.bench_with_input("rust-crypto", &data, |b, data| {
        use sha3::{Digest, Sha3_256};

        b.iter(|| black_box(Sha3_256::digest(data)))
    });
    group.finish();
}

fn keccak_shake128<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("SHAKE128 {N}B"));

    let mut rng = rand::thread_rng();
    let mut data = [0u8; N];
    rng.fill(&mut data[..]);

    group.bench_with_input("spongewrap", &data, |b, data| {
        let mut out = [0u8; 168];

        b.iter(|| {
            let mut shake = spongewrap::Shake128::new();
            shake.update(data);
            shake.finalize_xof().read(black_box(&mut out));
        })
    });

    group.bench_with_input("tiny-keccak", &data, |b, data| {
        use tiny_keccak::{Hasher, Shake};
        let mut out = [0u8; 168];

        b.iter(|| {
            let mut shake = Shake::v128();
            shake.update(data);
            shake.finalize(black_box(&mut out));
        })
    });
    group.finish();
}

fn keccak_f<P: Permutation>(c: &mut Criterion, name: &str, f: P) {
    c.bench_function(name, |b| {
        let mut state = f.new_state();
        b.iter(|| f.apply(black_box(&mut state)))
    });
}

fn keccak_f_widths(c: &mut Criterion) {
    keccak_f(c, "Keccak-f[200]", KeccakF200::new());
    keccak_f(c, "Keccak-f[400]", KeccakF400::new());
    keccak_f(c, "Keccak-f[800]", KeccakF800::new());
    keccak_f(c, "Keccak-f[1600]", KeccakF1600::new());
}

criterion_group!(
    name = keccak_short_benches;
    config = Criterion::default()
        .sample_size(500)
        .measurement_time(core::time::Duration::from_secs(8));
    targets =
        keccak_sha3_256::<32>,
        keccak_shake128::<32>,
        keccak_sha3_256::<1024>,
        keccak_shake128::<1024>,
);

criterion_group!(
    name = keccak_long_benches;
    config = Criterion::default();
    targets =
        keccak_sha3_256::<8192>,
        keccak_f_widths
);

criterion_main!(keccak_short_benches, keccak_long_benches);
