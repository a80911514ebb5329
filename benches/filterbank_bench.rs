//! Criterion benchmarks for the cochlear filterbank.

use cochlea::{BandpassFilter, FilterKind, Filterbank, GammatoneFilter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BUF_SIZE: usize = 1024;
const SAMPLE_PERIOD: f32 = 1.0 / 48000.0;

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect()
}

fn bench_filterbank(c: &mut Criterion) {
    let mut group = c.benchmark_group("filterbank");
    let input = white_noise(BUF_SIZE);

    for (name, kind) in [
        ("gammatone_40", FilterKind::Gammatone),
        ("allpole_40", FilterKind::AllPole),
    ] {
        group.bench_function(name, |b| {
            let mut bank = Filterbank::new(20.0, 20000.0, 40, SAMPLE_PERIOD, kind).unwrap();
            let mut out = vec![0.0f32; bank.num_channels()];
            b.iter(|| {
                for &x in &input {
                    bank.step(black_box(x), black_box(&mut out));
                }
            });
        });
    }

    group.finish();
}

fn bench_single_channel(c: &mut Criterion) {
    let input = white_noise(BUF_SIZE);
    c.bench_function("gammatone_single", |b| {
        let mut filter = GammatoneFilter::new(1000.0, 133.0, SAMPLE_PERIOD).unwrap();
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &input {
                acc += filter.step(black_box(x));
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_filterbank, bench_single_channel);
criterion_main!(benches);
