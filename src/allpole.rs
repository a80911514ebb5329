//! All-pole Resonator
//!
//! The cheap channel variant after Lyon (1997): a single conjugate pole
//! pair realised as a real two-tap recursion
//!   y[n] = gain*x[n] + a1*y[n-1] + a2*y[n-2]
//! with `gain` chosen so the response at the centre frequency is exactly 1.

use std::f32::consts::PI;

use num_complex::Complex32;
use tracing::debug;

use crate::error::{require_non_negative, require_positive, Result};
use crate::filter::{bw_scale, BandpassFilter};

/// Number of pole stages (one conjugate pair)
pub const ORDER: usize = 1;

/// A single pole-pair resonator channel
#[derive(Debug, Clone, Default)]
pub struct AllPoleFilter {
    center_hz: f32,
    bandwidth_hz: f32,
    gain: f32,
    a1: f32,
    a2: f32,
    state: [f32; ORDER + 1], // y[n-1], y[n-2]
}

impl AllPoleFilter {
    /// Create a configured resonator
    pub fn new(center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<Self> {
        let mut filter = Self::default();
        filter.set(center_hz, bandwidth_hz, sample_period)?;
        Ok(filter)
    }

    /// Recursion coefficients `(gain, a1, a2)`
    pub fn coefficients(&self) -> (f32, f32, f32) {
        (self.gain, self.a1, self.a2)
    }
}

impl BandpassFilter for AllPoleFilter {
    fn set(&mut self, center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<()> {
        require_positive("center_hz", center_hz)?;
        require_non_negative("bandwidth_hz", bandwidth_hz)?;
        require_positive("sample_period", sample_period)?;

        self.center_hz = center_hz;
        self.bandwidth_hz = bandwidth_hz;

        let r = (-2.0 * PI * bandwidth_hz * bw_scale(ORDER) * sample_period).exp();
        let theta = 2.0 * PI * center_hz * sample_period;
        self.a1 = 2.0 * r * theta.cos();
        self.a2 = -r * r;

        // |1 - a1 z^-1 - a2 z^-2| at z = e^(j*theta); zero when r == 1
        self.gain = if r < 1.0 {
            let z1 = Complex32::from_polar(1.0, -theta);
            let z2 = z1 * z1;
            (Complex32::new(1.0, 0.0) - z1 * self.a1 - z2 * self.a2).norm()
        } else {
            debug!(center_hz, bandwidth_hz, "all-pole pole radius is 1, filter will not decay");
            1.0
        };

        self.reset();
        Ok(())
    }

    #[inline]
    fn step(&mut self, sample: f32) -> f32 {
        let y = self.gain * sample + self.a1 * self.state[0] + self.a2 * self.state[1];
        self.state[1] = self.state[0];
        self.state[0] = y;
        y
    }

    fn reset(&mut self) {
        self.state = [0.0; ORDER + 1];
    }

    fn center_hz(&self) -> f32 {
        self.center_hz
    }

    fn bandwidth_hz(&self) -> f32 {
        self.bandwidth_hz
    }
}
