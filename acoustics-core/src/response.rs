//! # Frequency Response Module
//!
//! Display-ready frequency response data built from a complex spectrum.
//!
//! The spectrum comes from the caller (typically a forward FFT of an impulse
//! response). This module only converts bins to levels and phase angles and
//! wires up the phase cleanup and range clamping passes.

use crate::level::complex_to_db;
use crate::phase::prepare_phase_for_display;
use crate::range_index::{DisplayRange, clamped_frequency_range_indices};
use rustfft::num_complex::Complex;

/// Parallel per-bin frequency, level and phase vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyResponse {
    /// Bin center frequencies in Hz, ascending.
    pub frequencies: Vec<f64>,
    /// Bin levels in dB; silent bins are negative infinity.
    pub magnitudes_db: Vec<f64>,
    /// Bin phases in degrees.
    pub phases_deg: Vec<f64>,
}

impl FrequencyResponse {
    /// Builds a response from the bins of a full complex spectrum.
    ///
    /// Due to the Nyquist theorem only bins `0..=N/2` are kept. Bin `k` sits at
    /// `k · sample_rate / N` Hz.
    ///
    /// # Arguments
    /// * `spectrum` - Complex spectrum of length N
    /// * `sample_rate` - Sample rate in Hz
    pub fn from_spectrum(spectrum: &[Complex<f64>], sample_rate: f64) -> Self {
        let n = spectrum.len();
        if n == 0 {
            return Self::default();
        }
        let bin_width = sample_rate / n as f64;
        let kept = &spectrum[..=n / 2];

        Self {
            frequencies: (0..kept.len()).map(|k| k as f64 * bin_width).collect(),
            magnitudes_db: kept.iter().map(|&c| complex_to_db(c)).collect(),
            phases_deg: kept.iter().map(|c| c.arg().to_degrees()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Runs the phase display pipeline over `phases_deg`.
    pub fn prepare_phase_for_display(&mut self) {
        prepare_phase_for_display(&mut self.phases_deg);
    }

    /// Bins to render for the given display limits.
    pub fn display_range(&self, limited: bool, lowest_frequency: f64, highest_frequency: f64) -> DisplayRange {
        clamped_frequency_range_indices(&self.frequencies, limited, lowest_frequency, highest_frequency)
    }
}
