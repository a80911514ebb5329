//! Signal helpers shared by the unit tests

use std::f64::consts::PI;

use crate::filter::BandpassFilter;

pub fn sine(fs: f32, freq: f32, n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| (2.0 * PI * freq as f64 * i as f64 / fs as f64).sin() as f32)
        .collect()
}

/// Drive `filter` with one second of a unit sine at `freq` and return the
/// output amplitude (RMS * sqrt 2) over the last quarter second.
pub fn steady_amplitude<F: BandpassFilter>(filter: &mut F, fs: f32, freq: f32) -> f32 {
    let n = fs as usize;
    let tail = n / 4;
    filter.reset();
    let y: Vec<f32> = sine(fs, freq, n).into_iter().map(|x| filter.step(x)).collect();
    let mean_sq = y[n - tail..].iter().map(|v| v * v).sum::<f32>() / tail as f32;
    (2.0 * mean_sq).sqrt()
}
