// Encoding benchmarks: packing, full transaction payloads, and signing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use zksync_tx::core::{pack_amount, pack_fee};
use zksync_tx::{EncodedTx, U256};
use zksync_tx_testkit::fixtures::{multi_party_fixtures, TestFixture};

fn bench_packing(c: &mut Criterion) {
    let amount = U256::from(1_000_000_000_000_000_000u128);
    let fee = U256::from(15_000_000_000_000u64);

    c.bench_function("packing/amount", |b| b.iter(|| pack_amount(black_box(amount))));
    c.bench_function("packing/fee", |b| b.iter(|| pack_fee(black_box(fee))));
}

fn bench_encode_transfer(c: &mut Criterion) {
    let fixture = TestFixture::with_seed([0x01; 32]);
    let transfer = fixture.make_transfer(&fixture.address, "USDC", U256::from(1_500_000u64), 7);

    c.bench_function("encode/transfer", |b| b.iter(|| transfer.encoded_message()));
    c.bench_function("encode/transfer_message", |b| {
        b.iter(|| transfer.human_readable_message())
    });
}

fn bench_sign_transfer(c: &mut Criterion) {
    let fixture = TestFixture::with_seed([0x02; 32]);

    c.bench_function("sign/transfer", |b| {
        b.iter(|| {
            let mut transfer = fixture.make_transfer(&fixture.address, "ETH", U256::from(1u64), 0);
            transfer.sign_with(&fixture.signer)
        });
    });
}

fn bench_encode_swap(c: &mut Criterion) {
    let parties = multi_party_fixtures(2);
    let swap = parties[0].make_swap(
        [
            parties[0].make_order("USDC", "ETH", 0),
            parties[1].make_order("ETH", "USDC", 0),
        ],
        [U256::from(1_000u64), U256::from(2_000u64)],
        0,
    );

    c.bench_function("encode/swap", |b| b.iter(|| swap.encoded_message()));
}

criterion_group!(
    benches,
    bench_packing,
    bench_encode_transfer,
    bench_sign_transfer,
    bench_encode_swap
);
criterion_main!(benches);
