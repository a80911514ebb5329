//! Frequency Scale Conversions
//!
//! ERB bandwidth and ERB-rate (Cam) scales after Glasberg & Moore (1990).
//! Channel centres are laid out at equal ERB-rate steps so the spacing is
//! perceptually, not linearly, uniform.

//=============================================================================
// ERB Bandwidth
//=============================================================================

/// ERB bandwidth in Hz at the given frequency
#[inline]
pub fn hz_to_erb(hz: f32) -> f32 {
    24.7 * (4.37 * hz / 1000.0 + 1.0)
}

/// Frequency in Hz whose ERB bandwidth is `erb`
#[inline]
pub fn erb_to_hz(erb: f32) -> f32 {
    (erb / 24.7 - 1.0) * 1000.0 / 4.37
}

//=============================================================================
// ERB-rate Scale (cumulative ERBs below a frequency)
//=============================================================================

/// Convert frequency in Hz to ERB-rate (Cam units)
#[inline]
pub fn hz_to_erb_rate(hz: f32) -> f32 {
    21.4 * (4.37 * hz / 1000.0 + 1.0).log10()
}

/// Convert ERB-rate (Cam units) back to Hz
#[inline]
pub fn erb_rate_to_hz(rate: f32) -> f32 {
    (10.0_f32.powf(rate / 21.4) - 1.0) * 1000.0 / 4.37
}

//=============================================================================
// Channel Layout
//=============================================================================

/// Centre frequencies for `n` channels equally spaced in ERB-rate between
/// `min_hz` and `max_hz` inclusive.
///
/// The end points are pinned to `min_hz` and `max_hz` exactly; a single
/// channel sits at `min_hz`.
pub fn erb_space(min_hz: f32, max_hz: f32, n: usize) -> Vec<f32> {
    let rate_min = hz_to_erb_rate(min_hz);
    let rate_max = hz_to_erb_rate(max_hz);
    let step = if n > 1 {
        (rate_max - rate_min) / (n - 1) as f32
    } else {
        0.0
    };

    (0..n)
        .map(|i| match i {
            0 => min_hz,
            i if i == n - 1 => max_hz,
            i => erb_rate_to_hz(rate_min + i as f32 * step),
        })
        .collect()
}
