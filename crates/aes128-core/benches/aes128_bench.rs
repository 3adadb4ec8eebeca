use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes128_core::{decrypt_block, encrypt_block, expand_key, Aes128Key};

fn bench_key_schedule(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    c.bench_function("expand_key", |b| b.iter(|| expand_key(&key)));
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);
    let round_keys = expand_key(&Aes128Key::from(key));
    let ciphertext = encrypt_block(&block, &round_keys);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys))
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ciphertext, &round_keys))
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
