//! Relative bandwidth and smoothing selections, reduced to the octave
//! divider each one stands for.
//!
//! Both serialize as their octave divider, so settings files store the same
//! integer the band math consumes.

use crate::error::SignalError;
use crate::level::bandwidth_to_q;
use serde::{Deserialize, Serialize};

/// Fractional-octave resolution of a band analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RelativeBandwidth {
    OneOctave,
    #[default]
    ThirdOctave,
    SixthOctave,
    TwelfthOctave,
    TwentyFourthOctave,
    FortyEighthOctave,
}

impl RelativeBandwidth {
    pub const ALL: [RelativeBandwidth; 6] = [
        RelativeBandwidth::OneOctave,
        RelativeBandwidth::ThirdOctave,
        RelativeBandwidth::SixthOctave,
        RelativeBandwidth::TwelfthOctave,
        RelativeBandwidth::TwentyFourthOctave,
        RelativeBandwidth::FortyEighthOctave,
    ];

    /// Denominator relative to a full octave (3 for third octave).
    pub fn octave_divider(self) -> u32 {
        match self {
            RelativeBandwidth::OneOctave => 1,
            RelativeBandwidth::ThirdOctave => 3,
            RelativeBandwidth::SixthOctave => 6,
            RelativeBandwidth::TwelfthOctave => 12,
            RelativeBandwidth::TwentyFourthOctave => 24,
            RelativeBandwidth::FortyEighthOctave => 48,
        }
    }

    /// Bandwidth in octaves.
    pub fn fraction_of_octave(self) -> f64 {
        1.0 / f64::from(self.octave_divider())
    }

    /// Quality factor of a band filter at this bandwidth.
    pub fn quality_factor(self) -> f64 {
        bandwidth_to_q(self.fraction_of_octave())
    }
}

impl TryFrom<u32> for RelativeBandwidth {
    type Error = SignalError;

    fn try_from(octave_divider: u32) -> Result<Self, Self::Error> {
        RelativeBandwidth::ALL
            .into_iter()
            .find(|bandwidth| bandwidth.octave_divider() == octave_divider)
            .ok_or(SignalError::UnsupportedOctaveDivider(octave_divider))
    }
}

impl From<RelativeBandwidth> for u32 {
    fn from(bandwidth: RelativeBandwidth) -> Self {
        bandwidth.octave_divider()
    }
}

/// Smoothing applied to a measured response before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Smoothing {
    #[default]
    NarrowBand,
    SixthOctaveBand,
    ThirdOctaveBand,
}

impl Smoothing {
    /// Octave divider of the smoothing; 0 means no smoothing.
    pub fn octave_divider(self) -> u32 {
        match self {
            Smoothing::NarrowBand => 0,
            Smoothing::SixthOctaveBand => 6,
            Smoothing::ThirdOctaveBand => 3,
        }
    }

    /// Lenient lookup: dividers without a smoothing fall back to narrow band.
    pub fn from_octave_divider(octave_divider: u32) -> Smoothing {
        Smoothing::try_from(octave_divider).unwrap_or_else(|_| {
            log::warn!("[SMOOTHING] No smoothing for octave divider {octave_divider}, using narrow band");
            Smoothing::NarrowBand
        })
    }

    pub fn is_narrow_band(self) -> bool {
        self == Smoothing::NarrowBand
    }
}

impl TryFrom<u32> for Smoothing {
    type Error = SignalError;

    fn try_from(octave_divider: u32) -> Result<Self, Self::Error> {
        match octave_divider {
            0 => Ok(Smoothing::NarrowBand),
            6 => Ok(Smoothing::SixthOctaveBand),
            3 => Ok(Smoothing::ThirdOctaveBand),
            other => Err(SignalError::UnsupportedOctaveDivider(other)),
        }
    }
}

impl From<Smoothing> for u32 {
    fn from(smoothing: Smoothing) -> Self {
        smoothing.octave_divider()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bandwidth_dividers() {
        let dividers: Vec<u32> = RelativeBandwidth::ALL.iter().map(|b| b.octave_divider()).collect();
        assert_eq!(dividers, vec![1, 3, 6, 12, 24, 48]);
        assert_eq!(RelativeBandwidth::default(), RelativeBandwidth::ThirdOctave);
    }

    #[test]
    fn bandwidth_from_divider_is_strict() {
        assert_eq!(RelativeBandwidth::try_from(24), Ok(RelativeBandwidth::TwentyFourthOctave));
        assert_eq!(RelativeBandwidth::try_from(0), Err(SignalError::UnsupportedOctaveDivider(0)));
        assert_eq!(RelativeBandwidth::try_from(5), Err(SignalError::UnsupportedOctaveDivider(5)));
    }

    #[test]
    fn quality_factor_scales_with_divider() {
        assert_relative_eq!(RelativeBandwidth::OneOctave.quality_factor(), 1.43);
        assert_relative_eq!(RelativeBandwidth::ThirdOctave.quality_factor(), 4.29, max_relative = 1e-12);
        assert_relative_eq!(RelativeBandwidth::FortyEighthOctave.quality_factor(), 68.64, max_relative = 1e-12);
    }

    #[test]
    fn smoothing_falls_back_to_narrow_band() {
        assert_eq!(Smoothing::from_octave_divider(6), Smoothing::SixthOctaveBand);
        assert_eq!(Smoothing::from_octave_divider(3), Smoothing::ThirdOctaveBand);
        assert_eq!(Smoothing::from_octave_divider(12), Smoothing::NarrowBand);
        assert_eq!(Smoothing::try_from(12), Err(SignalError::UnsupportedOctaveDivider(12)));
        assert!(Smoothing::default().is_narrow_band());
        assert_eq!(Smoothing::NarrowBand.octave_divider(), 0);
    }

    #[test]
    fn serializes_as_octave_divider() {
        assert_eq!(serde_json::to_string(&RelativeBandwidth::SixthOctave).unwrap(), "6");
        assert_eq!(serde_json::from_str::<Smoothing>("3").unwrap(), Smoothing::ThirdOctaveBand);
        assert!(serde_json::from_str::<RelativeBandwidth>("7").is_err());
    }
}
