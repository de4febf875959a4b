//! # Level Conversion Module
//!
//! Scalar conversions between linear and logarithmic (decibel) levels for
//! analog-domain frequency signals.
//!
//! ## Features
//! - Magnitude, power ratio and voltage ratio to/from decibels
//! - Peaking/shelving gain scaling for filter design callers
//! - Complex sample magnitude in decibels
//! - Octave bandwidth to quality factor conversion
//!
//! None of these functions check their domain. `magnitude_to_db(0.0)` is
//! negative infinity and a negative magnitude gives NaN; charting callers
//! treat both as silence markers.

use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Ratio used to derive Q from a bandwidth expressed in octaves.
///
/// This is the one octave reference; other bandwidths scale from it.
pub const OCTAVE_BANDWIDTH_TO_QUALITY_FACTOR_RATIO: f64 = 1.43;

/// Converts a linear magnitude to decibels: `20·log10(m)`.
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.log10()
}

/// Converts a power ratio to decibels: `10·log10(p)`.
pub fn power_ratio_to_db(power_ratio: f64) -> f64 {
    10.0 * power_ratio.log10()
}

/// Converts decibels back to a linear magnitude: `10^(db/20)`.
pub fn db_to_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Converts decibels back to a power ratio: `10^(db/10)`.
pub fn db_to_power_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Gets the level in decibels of a (linear) voltage ratio.
pub fn voltage_ratio_to_db(voltage_ratio: f64) -> f64 {
    20.0 * voltage_ratio.log10()
}

/// Gets the linear voltage ratio for a level in decibels.
///
/// For every filter type except peaking and shelving; those use
/// [`peaking_voltage_ratio`].
pub fn db_to_voltage_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Gets the peaking voltage ratio for a gain in decibels: `10^(db/40)`.
///
/// Peaking and shelving filters split their gain across the numerator and
/// denominator, hence the doubled exponent denominator.
pub fn peaking_voltage_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 40.0)
}

/// Level in decibels of a complex sample's modulus.
pub fn complex_to_db(value: Complex<f64>) -> f64 {
    magnitude_to_db(value.norm())
}

/// Converts a slice of linear magnitudes to decibels.
pub fn magnitudes_to_db(magnitudes: &[f64]) -> Vec<f64> {
    magnitudes.iter().map(|&m| magnitude_to_db(m)).collect()
}

/// Converts a complex spectrum to per-bin levels in decibels.
pub fn complex_spectrum_to_db(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|&c| complex_to_db(c)).collect()
}

/// Converts a bandwidth in octaves (1.0 = one full octave) to a quality
/// factor.
///
/// # Arguments
/// * `bandwidth` - Bandwidth in octaves
///
/// # Returns
/// * `Q = 1.43 / bandwidth`; a zero bandwidth gives infinity
pub fn bandwidth_to_q(bandwidth: f64) -> f64 {
    let reference_q = 1.0 / bandwidth;
    reference_q * OCTAVE_BANDWIDTH_TO_QUALITY_FACTOR_RATIO
}

/// Angular frequency in radians per second for a frequency in Hertz.
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

/// Maps a frequency in Hertz onto the imaginary axis of the s-plane.
///
/// The sigma term is left at zero, so this is `s = j·2πf`, the pure
/// sinusoidal slope used when evaluating analog transfer functions.
pub fn frequency_to_s_domain(frequency_hz: f64) -> Complex<f64> {
    Complex::new(0.0, angular_frequency(frequency_hz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn magnitude_and_power_reference_points() {
        assert_abs_diff_eq!(magnitude_to_db(1.0), 0.0);
        assert_abs_diff_eq!(magnitude_to_db(10.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitude_to_db(0.1), -20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(power_ratio_to_db(100.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(power_ratio_to_db(2.0), 3.010_299_956_639_812, epsilon = 1e-12);
    }

    #[test]
    fn db_round_trips_through_magnitude() {
        for &m in &[1e-6, 0.001, 0.5, 1.0, 2.0, 31.6, 1234.5, 1e6] {
            assert_relative_eq!(db_to_magnitude(magnitude_to_db(m)), m, max_relative = 1e-12);
            assert_relative_eq!(db_to_power_ratio(power_ratio_to_db(m)), m, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_and_negative_magnitudes_are_not_trapped() {
        assert_eq!(magnitude_to_db(0.0), f64::NEG_INFINITY);
        assert_eq!(power_ratio_to_db(0.0), f64::NEG_INFINITY);
        assert!(magnitude_to_db(-1.0).is_nan());
        assert_eq!(db_to_magnitude(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn peaking_ratio_is_square_root_of_voltage_ratio() {
        for &db in &[-12.0, -3.0, 0.0, 6.0, 15.0] {
            let v = db_to_voltage_ratio(db);
            assert_relative_eq!(peaking_voltage_ratio(db), v.sqrt(), max_relative = 1e-12);
        }
        assert_abs_diff_eq!(peaking_voltage_ratio(40.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(voltage_ratio_to_db(db_to_voltage_ratio(-7.5)), -7.5, epsilon = 1e-12);
    }

    #[test]
    fn complex_samples_use_their_modulus() {
        assert_abs_diff_eq!(complex_to_db(Complex::new(3.0, 4.0)), magnitude_to_db(5.0));
        assert_eq!(complex_to_db(Complex::new(0.0, 0.0)), f64::NEG_INFINITY);

        let levels = complex_spectrum_to_db(&[Complex::new(1.0, 0.0), Complex::new(0.0, -10.0)]);
        assert_abs_diff_eq!(levels[0], 0.0);
        assert_abs_diff_eq!(levels[1], 20.0, epsilon = 1e-12);
        assert_eq!(magnitudes_to_db(&[]), Vec::<f64>::new());
    }

    #[test]
    fn bandwidth_to_q_scales_from_one_octave() {
        assert_abs_diff_eq!(bandwidth_to_q(1.0), OCTAVE_BANDWIDTH_TO_QUALITY_FACTOR_RATIO);
        assert_abs_diff_eq!(bandwidth_to_q(1.0 / 3.0), 4.29, epsilon = 1e-12);
        assert_eq!(bandwidth_to_q(0.0), f64::INFINITY);
    }

    #[test]
    fn s_domain_is_purely_imaginary() {
        let s = frequency_to_s_domain(1000.0);
        assert_eq!(s.re, 0.0);
        assert_relative_eq!(s.im, 2000.0 * PI);
    }
}
