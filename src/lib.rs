//! # Cochlea - ERB-spaced Cochlear Filterbank
//!
//! A bank of bandpass filters spaced along the ERB-rate scale, each one a
//! causal recursive filter approximating the response of one point on the
//! basilar membrane. The bank is driven one audio sample at a time and
//! produces the output of every channel for that instant; it is the front
//! end for auditory models in speech and signal analysis.
//!
//! ## Quick Start
//!
//! ```rust
//! use cochlea::{FilterKind, Filterbank};
//!
//! // 32 gammatone channels from 50 Hz to 7 kHz at 16 kHz
//! let mut bank = Filterbank::new(50.0, 7000.0, 32, 1.0 / 16000.0, FilterKind::Gammatone)?;
//!
//! let mut out = vec![0.0; bank.num_channels()];
//! for sample in [1.0, 0.0, 0.0, 0.0] {
//!     bank.step(sample, &mut out);
//! }
//! # Ok::<(), cochlea::CochleaError>(())
//! ```
//!
//! ## Filter Variants
//!
//! | Variant | Structure | Cost per sample |
//! |---------|-----------|-----------------|
//! | Gammatone | 4-stage complex one-pole cascade | 4 complex multiply-adds |
//! | AllPole | 2-tap real resonator | 3 real multiply-adds |
//!
//! Both variants are normalised to unity gain at the channel centre, and the
//! channel bandwidth is one ERB at that centre.
//!
//! ## Stability
//!
//! Every pole radius is `exp(-2*pi*b*T)`, which is below 1 for any positive
//! bandwidth. A zero bandwidth is accepted and gives a filter that never
//! decays; it is not clamped.

pub mod allpole;
pub mod error;
pub mod filter;
pub mod filterbank;
pub mod gammatone;
pub mod scales;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use allpole::AllPoleFilter;
pub use error::{CochleaError, Result};
pub use filter::{bw_scale, BandpassFilter, FilterKind};
pub use filterbank::{ChannelInfo, Filterbank, FilterbankConfig};
pub use gammatone::GammatoneFilter;
pub use scales::{erb_rate_to_hz, erb_space, erb_to_hz, hz_to_erb, hz_to_erb_rate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
