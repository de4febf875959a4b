//! # Nominal Center Frequencies
//!
//! Standard "musical" center frequencies for the full-octave and third-octave
//! band grids. These are the rounded values people recognise (31.5 Hz, not
//! 31.25 Hz) and are concise enough for axis tick labels.
//!
//! Both tables are indexed by band number on the grid of [`crate::band`].
//! Low entries without a standard value hold NaN.

use crate::band::center_frequency;

/// Full-octave nominal centers, indexed by band number (band 10 = 1 kHz).
pub const NOMINAL_FULL_OCTAVE_CENTER_FREQUENCIES: [f64; 16] = [
    f64::NAN, // 0
    f64::NAN, // 1
    f64::NAN, // 2
    8.5,      // 3
    16.0,     // 4
    31.5,     // 5
    63.0,     // 6
    125.0,    // 7
    250.0,    // 8
    500.0,    // 9
    1000.0,   // 10
    2000.0,   // 11
    4000.0,   // 12
    8000.0,   // 13
    16000.0,  // 14
    31500.0,  // 15
];

/// Third-octave nominal centers, indexed by band number (band 30 = 1 kHz).
pub const NOMINAL_THIRD_OCTAVE_CENTER_FREQUENCIES: [f64; 46] = [
    f64::NAN, // 0
    f64::NAN, // 1
    f64::NAN, // 2
    f64::NAN, // 3
    f64::NAN, // 4
    f64::NAN, // 5
    f64::NAN, // 6
    f64::NAN, // 7
    f64::NAN, // 8
    f64::NAN, // 9
    10.0,     // 10
    12.5,     // 11
    16.0,     // 12
    20.0,     // 13
    25.0,     // 14
    31.5,     // 15
    40.0,     // 16
    50.0,     // 17
    63.0,     // 18
    80.0,     // 19
    100.0,    // 20
    125.0,    // 21
    160.0,    // 22
    200.0,    // 23
    250.0,    // 24
    315.0,    // 25
    400.0,    // 26
    500.0,    // 27
    630.0,    // 28
    800.0,    // 29
    1000.0,   // 30
    1250.0,   // 31
    1600.0,   // 32
    2000.0,   // 33
    2500.0,   // 34
    3150.0,   // 35
    4000.0,   // 36
    5000.0,   // 37
    6300.0,   // 38
    8000.0,   // 39
    10000.0,  // 40
    12500.0,  // 41
    16000.0,  // 42
    20000.0,  // 43
    25000.0,  // 44
    31500.0,  // 45
];

/// Looks up the nominal center frequency of a band.
///
/// Only full-octave (divider 1) and third-octave (divider 3) grids have
/// nominal tables. Returns `None` for other dividers, band numbers outside
/// the table, and NaN sentinel entries.
pub fn nominal_center_frequency(band_number: i32, octave_divider: u32) -> Option<f64> {
    let table: &[f64] = match octave_divider {
        1 => &NOMINAL_FULL_OCTAVE_CENTER_FREQUENCIES,
        3 => &NOMINAL_THIRD_OCTAVE_CENTER_FREQUENCIES,
        _ => return None,
    };
    let index = usize::try_from(band_number).ok()?;
    table.get(index).copied().filter(|f| !f.is_nan())
}

/// Center frequency to label a band with: the nominal value where one exists,
/// otherwise the exact grid frequency.
pub fn labeled_center_frequency(band_number: i32, octave_divider: u32) -> f64 {
    nominal_center_frequency(band_number, octave_divider)
        .unwrap_or_else(|| center_frequency(band_number, f64::from(octave_divider)))
}
