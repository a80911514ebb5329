//! Cochlear Filterbank
//!
//! N bandpass channels with centres equally spaced on the ERB-rate scale and
//! bandwidths of one ERB each. The bank is built once and then stepped one
//! input sample at a time; every call writes one output per channel into a
//! caller-owned buffer.

use tracing::{debug, trace, warn};

use crate::allpole::AllPoleFilter;
use crate::error::{require_positive, CochleaError, Result};
use crate::filter::{BandpassFilter, FilterKind};
use crate::gammatone::GammatoneFilter;
use crate::scales::{erb_space, hz_to_erb};

//=============================================================================
// Configuration
//=============================================================================

/// Configuration for the cochlear filterbank
#[derive(Debug, Clone, PartialEq)]
pub struct FilterbankConfig {
    /// Centre of the lowest channel in Hz
    pub min_hz: f32,
    /// Centre of the highest channel in Hz
    pub max_hz: f32,
    /// Number of channels
    pub num_channels: usize,
    /// Sample period in seconds (1 / sample rate)
    pub sample_period: f32,
    /// Filter variant used for every channel
    pub kind: FilterKind,
}

impl Default for FilterbankConfig {
    fn default() -> Self {
        Self {
            min_hz: 20.0,
            max_hz: 20000.0,
            num_channels: 40,
            sample_period: 1.0 / 48000.0,
            kind: FilterKind::Gammatone,
        }
    }
}

impl FilterbankConfig {
    /// Default layout at the given sample rate, with the top channel kept
    /// below Nyquist
    pub fn with_sample_rate(sample_rate: f32) -> Self {
        let defaults = Self::default();
        Self {
            max_hz: defaults.max_hz.min(0.45 * sample_rate),
            sample_period: 1.0 / sample_rate,
            ..defaults
        }
    }

    fn validate(&self) -> Result<()> {
        if self.num_channels < 1 {
            return Err(CochleaError::invalid(
                "num_channels",
                self.num_channels as f64,
                "at least one channel is required",
            ));
        }
        require_positive("min_hz", self.min_hz)?;
        require_positive("sample_period", self.sample_period)?;
        if !(self.max_hz.is_finite() && self.max_hz > self.min_hz) {
            return Err(CochleaError::invalid(
                "max_hz",
                self.max_hz,
                "must be finite and greater than min_hz",
            ));
        }
        Ok(())
    }
}

//=============================================================================
// Channels
//=============================================================================

/// Fixed attributes of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelInfo {
    /// Position in the bank, lowest frequency first
    pub index: usize,
    /// Centre frequency in Hz
    pub center_hz: f32,
    /// -3 dB bandwidth in Hz (one ERB)
    pub bandwidth_hz: f32,
}

/// Concrete filter behind one channel
#[derive(Debug, Clone)]
enum ChannelFilter {
    Gammatone(GammatoneFilter),
    AllPole(AllPoleFilter),
}

impl ChannelFilter {
    fn new(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Gammatone => ChannelFilter::Gammatone(GammatoneFilter::default()),
            FilterKind::AllPole => ChannelFilter::AllPole(AllPoleFilter::default()),
        }
    }
}

impl BandpassFilter for ChannelFilter {
    fn set(&mut self, center_hz: f32, bandwidth_hz: f32, sample_period: f32) -> Result<()> {
        match self {
            ChannelFilter::Gammatone(f) => f.set(center_hz, bandwidth_hz, sample_period),
            ChannelFilter::AllPole(f) => f.set(center_hz, bandwidth_hz, sample_period),
        }
    }

    #[inline]
    fn step(&mut self, sample: f32) -> f32 {
        match self {
            ChannelFilter::Gammatone(f) => f.step(sample),
            ChannelFilter::AllPole(f) => f.step(sample),
        }
    }

    fn reset(&mut self) {
        match self {
            ChannelFilter::Gammatone(f) => f.reset(),
            ChannelFilter::AllPole(f) => f.reset(),
        }
    }

    fn center_hz(&self) -> f32 {
        match self {
            ChannelFilter::Gammatone(f) => f.center_hz(),
            ChannelFilter::AllPole(f) => f.center_hz(),
        }
    }

    fn bandwidth_hz(&self) -> f32 {
        match self {
            ChannelFilter::Gammatone(f) => f.bandwidth_hz(),
            ChannelFilter::AllPole(f) => f.bandwidth_hz(),
        }
    }
}

//=============================================================================
// Filterbank
//=============================================================================

/// A bank of ERB-spaced cochlear channels
#[derive(Debug, Clone)]
pub struct Filterbank {
    config: FilterbankConfig,
    channels: Vec<ChannelInfo>,
    filters: Vec<ChannelFilter>,
}

impl Filterbank {
    /// Build a bank of `num_channels` filters of the given kind.
    ///
    /// Fails with [`CochleaError::InvalidParameter`] unless
    /// `0 < min_hz < max_hz`, `num_channels >= 1` and `sample_period > 0`.
    pub fn new(
        min_hz: f32,
        max_hz: f32,
        num_channels: usize,
        sample_period: f32,
        kind: FilterKind,
    ) -> Result<Self> {
        Self::with_config(FilterbankConfig {
            min_hz,
            max_hz,
            num_channels,
            sample_period,
            kind,
        })
    }

    /// Build a bank from a configuration
    pub fn with_config(config: FilterbankConfig) -> Result<Self> {
        config.validate()?;

        let nyquist = 0.5 / config.sample_period;
        if config.max_hz >= nyquist {
            warn!(
                max_hz = config.max_hz,
                nyquist, "top channel is at or above Nyquist and will alias"
            );
        }

        debug!(
            num_channels = config.num_channels,
            min_hz = config.min_hz,
            max_hz = config.max_hz,
            kind = ?config.kind,
            "building filterbank"
        );

        let centers = erb_space(config.min_hz, config.max_hz, config.num_channels);
        let mut channels = Vec::with_capacity(config.num_channels);
        let mut filters = Vec::with_capacity(config.num_channels);

        for (index, &center_hz) in centers.iter().enumerate() {
            let bandwidth_hz = hz_to_erb(center_hz);
            let mut filter = ChannelFilter::new(config.kind);
            filter.set(center_hz, bandwidth_hz, config.sample_period)?;
            trace!(index, center_hz, bandwidth_hz, "channel configured");

            channels.push(ChannelInfo {
                index,
                center_hz,
                bandwidth_hz,
            });
            filters.push(filter);
        }

        Ok(Self {
            config,
            channels,
            filters,
        })
    }

    /// Feed one input sample through every channel.
    ///
    /// Channel `k` writes `out[k]`; entries past the last channel are left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`num_channels`](Self::num_channels).
    #[inline]
    pub fn step(&mut self, sample: f32, out: &mut [f32]) {
        assert!(
            out.len() >= self.filters.len(),
            "output buffer holds {} values, filterbank has {} channels",
            out.len(),
            self.filters.len()
        );
        for (filter, y) in self.filters.iter_mut().zip(out.iter_mut()) {
            *y = filter.step(sample);
        }
    }

    /// Reset all filter states
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }

    /// Get the number of channels
    pub fn num_channels(&self) -> usize {
        self.filters.len()
    }

    /// Get channel information, lowest frequency first
    pub fn channels(&self) -> &[ChannelInfo] {
        &self.channels
    }

    /// Get center frequency for a channel in Hz
    pub fn center_hz(&self, channel: usize) -> f32 {
        self.channels[channel].center_hz
    }

    /// Get bandwidth for a channel in Hz
    pub fn bandwidth_hz(&self, channel: usize) -> f32 {
        self.channels[channel].bandwidth_hz
    }

    /// Filter variant used by every channel
    pub fn kind(&self) -> FilterKind {
        self.config.kind
    }

    /// Sample period in seconds
    pub fn sample_period(&self) -> f32 {
        self.config.sample_period
    }

    /// The configuration the bank was built from
    pub fn config(&self) -> &FilterbankConfig {
        &self.config
    }
}
