//! # Band Frequency Module
//!
//! Maps fractional-octave band numbers to exact center frequencies.
//!
//! The grid is anchored on the third-octave convention, where band 30 is
//! 1000 Hz. Other octave dividers scale that anchor, so band 10 is 1000 Hz
//! at full-octave resolution and band 60 is 1000 Hz at sixth-octave.

/// Reference frequency of the band grid anchor.
pub const REFERENCE_FREQUENCY_HZ: f64 = 1000.0;

/// Band number of 1000 Hz on the third-octave grid.
pub const THIRD_OCTAVE_BAND_NUMBER_AT_1KHZ: f64 = 30.0;

/// Returns the band number that lands on exactly 1000 Hz for a divider.
///
/// Rounds half up, so fractional dividers still land on an integer band.
pub fn band_number_at_1khz(octave_divider: f64) -> i32 {
    let octave_divider_ratio = octave_divider / 3.0;
    (octave_divider_ratio * THIRD_OCTAVE_BAND_NUMBER_AT_1KHZ + 0.5).floor() as i32
}

/// Gets the exact center frequency of a band: `fc = 1000 · 2^((N − M) / O)`.
///
/// `N` is the band number, `M` the band number at 1 kHz for this divider and
/// `O` the octave divider. The divider is taken as a real number and is not
/// validated; a divider of zero yields an infinite or NaN frequency, so
/// callers must check positivity first.
///
/// # Arguments
/// * `band_number` - Index on the logarithmic band grid
/// * `octave_divider` - 1 for full octaves, 3 for third octaves, etc.
///
/// # Returns
/// * Center frequency in Hz
pub fn center_frequency(band_number: i32, octave_divider: f64) -> f64 {
    // Subtract in f64: both operands are exact there and the full i32 range
    // can't overflow.
    let bands_from_1khz = f64::from(band_number) - f64::from(band_number_at_1khz(octave_divider));
    REFERENCE_FREQUENCY_HZ * 2.0_f64.powf(bands_from_1khz / octave_divider)
}
