//! Thumbcache Processing Library
//!
//! Image resampling: decode, resize to the requested dimensions, re-encode in
//! the source format. The `Resampler` trait is the seam the orchestrator
//! depends on, so tests can substitute a deterministic fake.

pub mod resampler;

pub use resampler::{ImageResampler, ResampleError, Resampler};
