//! # Octave Range Module
//!
//! Classifies center frequencies into the eleven standard octave ranges that
//! span 10 Hz to 20 kHz, and maps each range back to a nominal center
//! frequency.
//!
//! ## Features
//! - Half-open, lower-inclusive classification against a fixed boundary table
//! - Reverse lookup of nominal center frequencies (narrow or wide band)
//! - Offset of each range from the 10 Hz range, for parallel lookup tables
//! - Canonical labels, plus label-keyed lookups that fall back to fixed
//!   defaults when the label is unknown
//!
//! The boundaries sit slightly below the nominal range edges (19 rather than
//! 20, 9986 rather than 10000) so that measured band centers land in the
//! range their nominal value names.

use crate::error::SignalError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lower edges of the second through eleventh ranges, in Hz.
pub const OCTAVE_RANGE_BOUNDARIES_HZ: [f64; 10] =
    [19.0, 39.0, 78.0, 156.0, 312.0, 624.0, 1248.0, 2496.0, 4992.0, 9986.0];

/// Label of the wide range, the "all ranges" selection.
pub const OCTAVE_RANGE_WIDE_LABEL: &str = "20 Hz To 20 kHz";

/// Center frequency used for the wide range and for unknown labels.
pub const CENTER_FREQUENCY_DEFAULT_HZ: f64 = 4000.0;

/// An octave range selection.
///
/// The eleven bucket variants partition the frequency axis; [`OctaveRange::Wide`]
/// is a sentinel that contains every frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OctaveRange {
    Hz10To20,
    Hz20To40,
    Hz40To80,
    Hz80To160,
    Hz160To315,
    Hz315To630,
    Hz630To1250,
    Hz1250To2500,
    Hz2500To5000,
    Hz5000To10000,
    Hz10000To20000,
    #[default]
    Wide,
}

impl OctaveRange {
    /// The eleven buckets, ordered from 10 Hz upwards.
    pub const BUCKETS: [OctaveRange; 11] = [
        OctaveRange::Hz10To20,
        OctaveRange::Hz20To40,
        OctaveRange::Hz40To80,
        OctaveRange::Hz80To160,
        OctaveRange::Hz160To315,
        OctaveRange::Hz315To630,
        OctaveRange::Hz630To1250,
        OctaveRange::Hz1250To2500,
        OctaveRange::Hz2500To5000,
        OctaveRange::Hz5000To10000,
        OctaveRange::Hz10000To20000,
    ];

    /// The default range when a single bucket is wanted.
    pub const NARROW_DEFAULT: OctaveRange = OctaveRange::Hz80To160;

    /// Canonical label of the range.
    pub fn label(self) -> &'static str {
        match self {
            OctaveRange::Hz10To20 => "10 Hz to 20 Hz",
            OctaveRange::Hz20To40 => "20 Hz to 40 Hz",
            OctaveRange::Hz40To80 => "40 Hz to 80 Hz",
            OctaveRange::Hz80To160 => "80 Hz to 160 Hz",
            OctaveRange::Hz160To315 => "160 Hz to 315 Hz",
            OctaveRange::Hz315To630 => "315 Hz to 630 Hz",
            OctaveRange::Hz630To1250 => "630 Hz to 1.25 kHz",
            OctaveRange::Hz1250To2500 => "1.25 kHz to 2.5 kHz",
            OctaveRange::Hz2500To5000 => "2.5 kHz to 5 kHz",
            OctaveRange::Hz5000To10000 => "5 kHz to 10 kHz",
            OctaveRange::Hz10000To20000 => "10 kHz to 20 kHz",
            OctaveRange::Wide => OCTAVE_RANGE_WIDE_LABEL,
        }
    }

    /// Looks up a range by its exact canonical label.
    pub fn from_label(label: &str) -> Option<OctaveRange> {
        LABEL_MAP.get(label).copied()
    }

    /// Finds the bucket whose half-open interval contains `frequency`.
    ///
    /// Everything below 19 Hz (including sub-10 Hz input) falls in the first
    /// bucket and everything from 9986 Hz up in the last, as does NaN. Never returns
    /// [`OctaveRange::Wide`].
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn for_frequency(frequency: f64) -> OctaveRange {
        // Written as "not below" so NaN, which is below nothing, ends in the last bucket.
        let offset = OCTAVE_RANGE_BOUNDARIES_HZ
            .iter()
            .take_while(|&&boundary| !(frequency < boundary))
            .count();
        Self::BUCKETS[offset]
    }

    /// Whether `frequency` lies in this range. The wide range contains
    /// every frequency.
    pub fn contains(self, frequency: f64) -> bool {
        match self.bounds() {
            None => true,
            Some((low, high)) => {
                low.is_none_or(|low| frequency >= low) && high.is_none_or(|high| frequency < high)
            }
        }
    }

    /// Classification bounds `(inclusive low, exclusive high)`, open-ended
    /// at the two extremes. `None` for the wide range.
    pub fn bounds(self) -> Option<(Option<f64>, Option<f64>)> {
        let offset = self.bucket_offset()?;
        let low = offset.checked_sub(1).map(|i| OCTAVE_RANGE_BOUNDARIES_HZ[i]);
        let high = OCTAVE_RANGE_BOUNDARIES_HZ.get(offset).copied();
        Some((low, high))
    }

    /// Nominal default center frequency for the range.
    ///
    /// The three lowest ranges have two conventions: the measured narrow band
    /// center (15.6, 31.2, 62.5 Hz) and the nominal standard one (16, 31.5,
    /// 63 Hz).
    pub fn default_center_frequency(self, narrow_band: bool) -> f64 {
        match self {
            OctaveRange::Wide => CENTER_FREQUENCY_DEFAULT_HZ,
            OctaveRange::Hz10To20 => {
                if narrow_band { 15.6 } else { 16.0 }
            }
            OctaveRange::Hz20To40 => {
                if narrow_band { 31.2 } else { 31.5 }
            }
            OctaveRange::Hz40To80 => {
                if narrow_band { 62.5 } else { 63.0 }
            }
            OctaveRange::Hz80To160 => 125.0,
            OctaveRange::Hz160To315 => 250.0,
            OctaveRange::Hz315To630 => 500.0,
            OctaveRange::Hz630To1250 => 1000.0,
            OctaveRange::Hz1250To2500 => 2000.0,
            OctaveRange::Hz2500To5000 => 4000.0,
            OctaveRange::Hz5000To10000 => 8000.0,
            OctaveRange::Hz10000To20000 => 16000.0,
        }
    }

    /// Position among the eleven buckets, or `None` for the wide range.
    pub fn bucket_offset(self) -> Option<usize> {
        Self::BUCKETS.iter().position(|&bucket| bucket == self)
    }

    /// Offset (0..=10) of the range from the 10 Hz range.
    ///
    /// The wide range has no position and reports 0.
    pub fn offset_from_10hz(self) -> usize {
        match self.bucket_offset() {
            Some(offset) => offset,
            None => {
                log::debug!("[OCTAVE] Wide range has no octave offset, using 0");
                0
            }
        }
    }
}

static LABEL_MAP: Lazy<HashMap<&'static str, OctaveRange>> = Lazy::new(|| {
    OctaveRange::BUCKETS
        .iter()
        .chain(std::iter::once(&OctaveRange::Wide))
        .map(|&range| (range.label(), range))
        .collect()
});

impl fmt::Display for OctaveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OctaveRange {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OctaveRange::from_label(s).ok_or_else(|| SignalError::UnknownOctaveRange(s.to_string()))
    }
}

/// Label of the bucket containing `frequency`.
pub fn nominal_octave_range_label_for_frequency(frequency: f64) -> &'static str {
    OctaveRange::for_frequency(frequency).label()
}

/// Offset from the 10 Hz range for a range label; unknown labels give 0.
pub fn octave_offset_for_label(label: &str) -> usize {
    match OctaveRange::from_label(label) {
        Some(range) => range.offset_from_10hz(),
        None => {
            log::warn!("[OCTAVE] Unknown octave range {label:?}, using offset 0");
            0
        }
    }
}

/// Whether `frequency` is in the range named by `label`; unknown labels
/// contain nothing.
pub fn is_frequency_in_octave_range(label: &str, frequency: f64) -> bool {
    match OctaveRange::from_label(label) {
        Some(range) => range.contains(frequency),
        None => {
            log::warn!("[OCTAVE] Unknown octave range {label:?}, frequency not in range");
            false
        }
    }
}

/// Nominal center frequency for a range label; unknown labels give 4 kHz.
pub fn nominal_center_frequency_for_label(label: &str, narrow_band: bool) -> f64 {
    match OctaveRange::from_label(label) {
        Some(range) => range.default_center_frequency(narrow_band),
        None => {
            log::warn!(
                "[OCTAVE] Unknown octave range {label:?}, using {CENTER_FREQUENCY_DEFAULT_HZ} Hz"
            );
            CENTER_FREQUENCY_DEFAULT_HZ
        }
    }
}
