// acoustics-core/src/lib.rs

//! Deterministic analog-signal math for frequency-response analysis.
//! This crate converts between decibel and linear levels, cleans up phase
//! vectors for stable charting, and maps fractional-octave band numbers and
//! octave ranges to center frequencies. It is completely stateless apart
//! from in-place passes over caller-owned slices, and contains no GUI code.

pub mod band;
pub mod bandwidth;
pub mod error;
pub mod level;
pub mod metric;
pub mod nominal;
pub mod octave_range;
pub mod phase;
pub mod range_index;
pub mod response;
pub mod settings;

pub use band::{band_number_at_1khz, center_frequency};
pub use bandwidth::{RelativeBandwidth, Smoothing};
pub use error::{Result, SignalError};
pub use metric::{NumberLocale, expand_metric_abbreviated_frequency, format_frequency};
pub use octave_range::OctaveRange;
pub use range_index::{DisplayRange, clamped_frequency_range_indices};
pub use response::FrequencyResponse;
pub use settings::{DisplaySettings, FrequencyRange};
