//! # Display Settings Module
//!
//! Persistent settings for frequency-response charts: which relative
//! bandwidth and octave range are selected, the center frequency, smoothing,
//! and the frequency limits of the displayed bins.
//!
//! Settings are stored as pretty-printed JSON. Bandwidth and smoothing are
//! written as octave dividers and the octave range as its canonical label.

use crate::bandwidth::{RelativeBandwidth, Smoothing};
use crate::octave_range::OctaveRange;
use crate::range_index::{DisplayRange, clamped_frequency_range_indices};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Octave range selection together with its bandwidth and center frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyRange {
    pub relative_bandwidth: RelativeBandwidth,
    #[serde(with = "octave_range_label")]
    pub octave_range: OctaveRange,
    /// Center frequency in Hz.
    pub center_frequency: f64,
}

impl Default for FrequencyRange {
    fn default() -> Self {
        let octave_range = OctaveRange::Wide;
        Self {
            relative_bandwidth: RelativeBandwidth::default(),
            octave_range,
            center_frequency: octave_range.default_center_frequency(false),
        }
    }
}

impl FrequencyRange {
    pub fn new(relative_bandwidth: RelativeBandwidth, octave_range: OctaveRange, center_frequency: f64) -> Self {
        Self {
            relative_bandwidth,
            octave_range,
            center_frequency,
        }
    }

    /// Restores the default bandwidth, the wide range and its nominal center.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selects a new octave range and moves the center frequency to the
    /// range's nominal default.
    pub fn select_octave_range(&mut self, octave_range: OctaveRange, narrow_band: bool) {
        self.octave_range = octave_range;
        self.center_frequency = octave_range.default_center_frequency(narrow_band);
    }

    /// Whether the current center frequency lies in the selected range.
    pub fn is_center_frequency_in_range(&self) -> bool {
        self.octave_range.contains(self.center_frequency)
    }
}

// Labels go through `OctaveRange::from_str` so unknown labels are rejected
// instead of silently falling back to a default range.
mod octave_range_label {
    use crate::octave_range::OctaveRange;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(range: &OctaveRange, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(range.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OctaveRange, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(D::Error::custom)
    }
}

/// Everything a frequency-response chart needs to decide what to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub frequency_range: FrequencyRange,
    pub smoothing: Smoothing,
    pub use_limited_frequency_range: bool,
    pub lowest_frequency_to_display: f64,
    pub highest_frequency_to_display: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            frequency_range: FrequencyRange::default(),
            smoothing: Smoothing::default(),
            use_limited_frequency_range: false,
            lowest_frequency_to_display: 20.0,
            highest_frequency_to_display: 20_000.0,
        }
    }
}

impl DisplaySettings {
    /// Loads settings from a JSON file.
    ///
    /// A missing file is not an error and yields the defaults. A file that
    /// exists but cannot be read or parsed is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("[SETTINGS] {path:?} doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read settings file {path:?}"))?;
        let settings: Self =
            serde_json::from_str(&contents).with_context(|| format!("Failed to parse settings file {path:?}"))?;
        log::info!("[SETTINGS] Loaded settings from {path:?}");
        Ok(settings)
    }

    /// Saves settings as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {parent:?}"))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings file {path:?}"))?;
        log::info!("[SETTINGS] Saved settings to {path:?}");
        Ok(())
    }

    /// Bins of `frequencies` to render under these settings.
    pub fn display_range(&self, frequencies: &[f64]) -> DisplayRange {
        clamped_frequency_range_indices(
            frequencies,
            self.use_limited_frequency_range,
            self.lowest_frequency_to_display,
            self.highest_frequency_to_display,
        )
    }
}
