//! Bandpass Filter Interface
//!
//! Common interface for a single cochlear channel plus the bandwidth
//! correction shared by both filter variants.

use crate::error::Result;

/// One channel of a cochlear filterbank.
///
/// Implementations are causal recursive filters. The pole radius must stay
/// below 1 for the output to decay; this is a precondition on the arguments
/// to [`set`](BandpassFilter::set), not something checked at run time, since
/// clamping would change the requested response.
pub trait BandpassFilter {
    /// Configure the filter for a centre frequency and full -3 dB bandwidth
    /// (both in Hz) at the given sample period (seconds). Clears the state.
    fn set(&mut self, center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<()>;

    /// Advance the recursion by one input sample and return the output.
    fn step(&mut self, sample: f32) -> f32;

    /// Zero the recursive state without touching the coefficients.
    fn reset(&mut self);

    /// Centre frequency in Hz
    fn center_hz(&self) -> f32;

    /// Requested -3 dB bandwidth in Hz
    fn bandwidth_hz(&self) -> f32;
}

/// Factor converting a requested full -3 dB bandwidth into the decay rate
/// (in Hz) of each stage of a cascade of `order` identical one-pole stages.
///
/// Each stage has magnitude `b / sqrt(b^2 + df^2)` at an offset `df` from
/// centre, so the cascade is at half power where `df = b * sqrt(2^(1/order) - 1)`.
/// `order` must be at least 1.
#[inline]
pub fn bw_scale(order: usize) -> f32 {
    let half_width = (2.0_f32.powf(1.0 / order as f32) - 1.0).sqrt();
    1.0 / (2.0 * half_width)
}

/// Filter variant used for every channel of a filterbank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// 4th-order complex gammatone recursion (Holdsworth et al.)
    #[default]
    Gammatone,
    /// Single pole-pair resonator (Lyon), cheaper with a less realistic envelope
    AllPole,
}

impl FilterKind {
    /// Number of cascaded pole stages
    pub fn order(self) -> usize {
        match self {
            FilterKind::Gammatone => crate::gammatone::ORDER,
            FilterKind::AllPole => crate::allpole::ORDER,
        }
    }

    /// Bandwidth correction for this variant's order
    pub fn bw_scale(self) -> f32 {
        bw_scale(self.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bw_scale_single_pole() {
        // One pole: half power at df = b, so the full width is 2b
        assert_relative_eq!(bw_scale(1), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_bw_scale_fourth_order() {
        assert_relative_eq!(bw_scale(4), 1.1495, max_relative = 1e-3);
        assert_eq!(FilterKind::Gammatone.bw_scale(), bw_scale(4));
        assert_eq!(FilterKind::AllPole.bw_scale(), bw_scale(1));
    }

    #[test]
    fn test_bw_scale_grows_with_order() {
        for order in 1..8 {
            assert!(bw_scale(order + 1) > bw_scale(order));
        }
    }
}
