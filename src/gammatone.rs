//! Gammatone Filter
//!
//! Recursive gammatone channel after Holdsworth et al. (1988). A single
//! complex one-pole coefficient is applied through a cascade of four stages
//! so the impulse response is
//!   g(n) ~ n^3 * r^n * cos(2*pi*f*n*T)
//! i.e. a gamma envelope on a carrier at the centre frequency. The real
//! output is twice the real part of the last stage.

use std::f32::consts::PI;

use num_complex::Complex32;
use tracing::debug;

use crate::error::{require_non_negative, require_positive, Result};
use crate::filter::{bw_scale, BandpassFilter};

/// Number of cascaded complex stages
pub const ORDER: usize = 4;

//=============================================================================
// Gammatone Filter (Single Channel)
//=============================================================================

/// A single 4th-order gammatone channel
#[derive(Debug, Clone)]
pub struct GammatoneFilter {
    center_hz: f32,
    bandwidth_hz: f32,
    coeff: Complex32, // r * e^(j*theta)
    gain: f32,        // Unity gain at centre

    state: [Complex32; ORDER],
}

impl Default for GammatoneFilter {
    fn default() -> Self {
        Self {
            center_hz: 0.0,
            bandwidth_hz: 0.0,
            coeff: Complex32::new(0.0, 0.0),
            gain: 0.0,
            state: [Complex32::new(0.0, 0.0); ORDER],
        }
    }
}

impl GammatoneFilter {
    /// Create a configured gammatone filter
    pub fn new(center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<Self> {
        let mut filter = Self::default();
        filter.set(center_hz, bandwidth_hz, sample_period)?;
        Ok(filter)
    }

    /// The complex pole shared by every stage
    pub fn coeff(&self) -> Complex32 {
        self.coeff
    }

    /// Input gain applied before the cascade
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Instantaneous complex output of the final stage (before the factor of 2).
    /// Its magnitude is the envelope of the real output.
    pub fn analytic(&self) -> Complex32 {
        self.state[ORDER - 1]
    }
}

/// Unnormalised complex cascade response `(c z^-1)^(ORDER-1) / (1 - c z^-1)^ORDER`
/// at `z = e^(j*omega)`.
fn cascade_response(coeff: Complex32, omega: f32) -> Complex32 {
    let p = coeff * Complex32::from_polar(1.0, -omega);
    p.powi(ORDER as i32 - 1) / (Complex32::new(1.0, 0.0) - p).powi(ORDER as i32)
}

impl BandpassFilter for GammatoneFilter {
    fn set(&mut self, center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<()> {
        require_positive("center_hz", center_hz)?;
        require_non_negative("bandwidth_hz", bandwidth_hz)?;
        require_positive("sample_period", sample_period)?;

        self.center_hz = center_hz;
        self.bandwidth_hz = bandwidth_hz;

        let r = (-2.0 * PI * bandwidth_hz * bw_scale(ORDER) * sample_period).exp();
        let theta = 2.0 * PI * center_hz * sample_period;
        self.coeff = Complex32::from_polar(r, theta);

        // The real output 2*Re(y) sees the cascade at +theta plus the
        // conjugate of its image at -theta; the image matters for low centres.
        self.gain = if r < 1.0 {
            let response =
                cascade_response(self.coeff, theta) + cascade_response(self.coeff, -theta).conj();
            1.0 / response.norm()
        } else {
            debug!(center_hz, bandwidth_hz, "gammatone pole radius is 1, filter will not decay");
            1.0
        };

        self.reset();
        Ok(())
    }

    #[inline]
    fn step(&mut self, sample: f32) -> f32 {
        // Walk backwards so each stage reads its predecessor's previous value
        for k in (1..ORDER).rev() {
            self.state[k] = self.coeff * (self.state[k] + self.state[k - 1]);
        }
        self.state[0] = self.coeff * self.state[0] + Complex32::new(self.gain * sample, 0.0);

        2.0 * self.state[ORDER - 1].re
    }

    fn reset(&mut self) {
        self.state = [Complex32::new(0.0, 0.0); ORDER];
    }

    fn center_hz(&self) -> f32 {
        self.center_hz
    }

    fn bandwidth_hz(&self) -> f32 {
        self.bandwidth_hz
    }
}
