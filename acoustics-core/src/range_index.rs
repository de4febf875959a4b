//! Clamps a frequency-response bin array to the sub-range of bins a chart
//! should display.

/// Inclusive bin indices `[start, stop]` to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayRange {
    pub start: usize,
    pub stop: usize,
}

impl DisplayRange {
    pub fn as_array(self) -> [usize; 2] {
        [self.start, self.stop]
    }
}

/// Finds the start and stop indices of the displayable sub-range of `bins`.
///
/// Without limiting, this is the full `[0, len - 1]` range (saturating to
/// `[0, 0]` for an empty array, which callers must guard themselves).
///
/// With limiting, a linear scan finds the first bin at or above
/// `lowest_frequency`, then continues from there to the first bin at or above
/// `highest_frequency`. A bound that is never reached stays at index 0; in
/// particular `stop` keeps the initial start value of 0 rather than the found
/// start, so an unreachable `highest_frequency` yields `stop < start`. Callers
/// avoid this by keeping both bounds within the span of `bins`.
///
/// # Arguments
/// * `bins` - Ascending bin center frequencies in Hz
/// * `use_limited_frequency_range` - Whether to clamp at all
/// * `lowest_frequency` - Lowest frequency to display, in Hz
/// * `highest_frequency` - Highest frequency to display, in Hz
pub fn clamped_frequency_range_indices(
    bins: &[f64],
    use_limited_frequency_range: bool,
    lowest_frequency: f64,
    highest_frequency: f64,
) -> DisplayRange {
    if !use_limited_frequency_range {
        return DisplayRange {
            start: 0,
            stop: bins.len().saturating_sub(1),
        };
    }

    let mut range = DisplayRange::default();
    let Some(start) = bins.iter().position(|&f| f >= lowest_frequency) else {
        return range;
    };
    range.start = start;

    if let Some(offset) = bins[start..].iter().position(|&f| f >= highest_frequency) {
        range.stop = start + offset;
    }
    range
}
