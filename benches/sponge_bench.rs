use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use spongewrap::{sha2_256, KeccakF1600, Pad10Star1, SpongeAead};

fn aead(c: &mut Criterion) {
    let mut group = c.benchmark_group("SpongeAead");
    let aead = SpongeAead::new(KeccakF1600::new(), 136, 32, 32, Pad10Star1);
    let key = b"hunter2";
    let header = b"public header";

    for len in [32usize, 1024, 8192] {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill(&mut data[..]);
        let (ciphertext, tag) = aead.encrypt_and_tag(key, header, &data);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", len), &data, |b, data| {
            b.iter(|| aead.encrypt_and_tag(key, header, black_box(data)))
        });
        group.bench_with_input(
            BenchmarkId::new("decrypt", len),
            &(ciphertext, tag),
            |b, (ciphertext, tag)| {
                b.iter(|| aead.decrypt_and_authenticate(key, header, black_box(ciphertext), tag))
            },
        );
    }
    group.finish();
}

fn sha2(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA2-256 1024B");
    let mut data = [0u8; 1024];
    rand::thread_rng().fill(&mut data[..]);

    group.bench_with_input("spongewrap", &data, |b, data| {
        b.iter(|| black_box(sha2_256(data)))
    });
    group.bench_with_input("rust-crypto", &data, |b, data| {
        use sha2::{Digest, Sha256};
        b.iter(|| black_box(Sha256::digest(data)))
    });
    group.finish();
}

criterion_group!(sponge_benches, aead, sha2);
criterion_main!(sponge_benches);
