use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_ccm::Ccm;
use aes_core::{encrypt_block, expand_key, Aes128Key};

fn bench_block(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let round_keys = expand_key(&key);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&key)));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.finish();
}

fn bench_ccm(c: &mut Criterion) {
    let ccm = Ccm::new(&Aes128Key::from([1u8; 16]));
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut message = vec![0u8; 1024];
    rng.fill_bytes(&mut message);
    let sealed = ccm.seal(&message, 0);

    let mut group = c.benchmark_group("ccm");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("seal_1k", |b| {
        b.iter(|| ccm.seal(black_box(&message), 0));
    });
    group.bench_function("open_1k", |b| {
        b.iter(|| ccm.open(black_box(&sealed), 0));
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_ccm);
criterion_main!(benches);
