//! # Phase Processing Module
//!
//! Cleanup passes over a phase vector (in degrees) so that neighbouring bins
//! render without spurious wraps.
//!
//! ## Passes
//! - [`unwrap_phase_sequence`]: folds every bin independently into [-180, 180)
//! - [`normalize_phase`]: removes large jumps between adjacent bins
//! - [`cleanup_phase`]: stops adjacent bins flipping between -180 and +180
//! - [`cleanup_polarity`]: writes every +180 as -180
//!
//! The intended display pipeline is normalize, then cleanup, then cleanup
//! polarity ([`prepare_phase_for_display`]). Each pass is also usable on its
//! own. All passes work in place on caller-owned slices.

/// Half-width of the window around ±180° treated as "exactly" ±180°.
pub const PHASE_TOLERANCE_DEGREES: f64 = 0.0001;

// Past this magnitude, folding by repeated ±360° would take too many steps
// (or never finish once 360 is below the float's ulp).
const PRE_REDUCE_THRESHOLD: f64 = 360.0 * 64.0;

fn is_near(value: f64, target: f64) -> bool {
    value > target - PHASE_TOLERANCE_DEGREES && value < target + PHASE_TOLERANCE_DEGREES
}

/// Folds a single phase angle into the [-180, +180) range.
///
/// The fold is done by repeated ±360° steps rather than a single modulo, which
/// keeps the rounding at the boundary identical to the legacy charts.
/// Non-finite angles are returned unchanged.
///
/// # Arguments
/// * `phase` - Phase angle in degrees
///
/// # Returns
/// * The equivalent angle in [-180, +180)
pub fn unwrap_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        return phase;
    }

    let mut unwrapped = if phase.abs() > PRE_REDUCE_THRESHOLD {
        phase % 360.0
    } else {
        phase
    };

    while unwrapped >= 180.0 {
        unwrapped -= 360.0;
    }
    while unwrapped < -180.0 {
        unwrapped += 360.0;
    }
    unwrapped
}

/// Applies [`unwrap_phase`] to every bin.
///
/// This is not a running unwrap: each bin is folded against the same fixed
/// reference, never against its predecessor.
pub fn unwrap_phase_sequence(phases: &mut [f64]) {
    for phase in phases.iter_mut() {
        *phase = unwrap_phase(*phase);
    }
}

/// Removes jumps of more than 180° between adjacent bins.
///
/// Walks left to right and shifts each next bin by whole turns until it is
/// within 180° of the (already adjusted) current bin. Pairs involving a
/// non-finite value are left alone.
///
/// # Arguments
/// * `phases` - Phase vector in degrees (modified in-place)
pub fn normalize_phase(phases: &mut [f64]) {
    for i in 1..phases.len() {
        let phase = phases[i - 1];
        let mut next_phase = phases[i];
        if !phase.is_finite() || !next_phase.is_finite() {
            continue;
        }

        if phase - next_phase > PRE_REDUCE_THRESHOLD {
            next_phase += 360.0 * ((phase - next_phase - 180.0) / 360.0).ceil();
        }
        while phase - next_phase > 180.0 {
            next_phase += 360.0;
        }

        if next_phase - phase > PRE_REDUCE_THRESHOLD {
            next_phase -= 360.0 * ((next_phase - phase - 180.0) / 360.0).ceil();
        }
        while next_phase - phase > 180.0 {
            next_phase -= 360.0;
        }

        phases[i] = next_phase;
    }
}

/// Avoids constant flipping between -180 and +180 across adjacent bins.
///
/// Charting clients connect neighbouring points with lines, so a -180/+180
/// alternation reads as a wrap. When the next bin sits on ±180 it takes the
/// sign of the current bin (`<= 0` means -180).
pub fn cleanup_phase(phases: &mut [f64]) {
    for i in 1..phases.len() {
        let phase = phases[i - 1];
        let next_phase = phases[i];

        if is_near(next_phase, 180.0) || is_near(next_phase, -180.0) {
            phases[i] = if phase <= 0.0 { -180.0 } else { 180.0 };
        }
    }
}

/// Sets every +180 to -180, the polarity reversal convention.
///
/// Unlike the pairwise passes this also visits the last bin.
pub fn cleanup_polarity(phases: &mut [f64]) {
    for phase in phases.iter_mut().filter(|p| is_near(**p, 180.0)) {
        *phase = -180.0;
    }
}

/// Runs the full display pipeline: normalize, cleanup, cleanup polarity.
pub fn prepare_phase_for_display(phases: &mut [f64]) {
    normalize_phase(phases);
    cleanup_phase(phases);
    cleanup_polarity(phases);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unwrap_folds_each_bin_independently() {
        let mut phases = vec![190.0, -190.0, 170.0];
        unwrap_phase_sequence(&mut phases);
        assert_eq!(phases, vec![-170.0, 170.0, 170.0]);
    }

    #[test]
    fn unwrap_is_half_open_at_180() {
        assert_eq!(unwrap_phase(180.0), -180.0);
        assert_eq!(unwrap_phase(-180.0), -180.0);
        assert_eq!(unwrap_phase(540.0), -180.0);
        assert_eq!(unwrap_phase(179.5), 179.5);
        assert_eq!(unwrap_phase(720.0), 0.0);
        assert_eq!(unwrap_phase(-900.0), -180.0);
    }

    #[test]
    fn unwrap_terminates_on_extreme_input() {
        assert!(unwrap_phase(f64::NAN).is_nan());
        assert_eq!(unwrap_phase(f64::INFINITY), f64::INFINITY);
        let folded = unwrap_phase(1.0e12 + 45.0);
        assert!((-180.0..180.0).contains(&folded));
        assert_abs_diff_eq!(unwrap_phase(360.0 * 1000.0 + 45.0), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_pulls_neighbours_within_half_a_turn() {
        let mut phases = vec![10.0, 370.0];
        normalize_phase(&mut phases);
        assert_eq!(phases, vec![10.0, 10.0]);

        let mut phases = vec![170.0, -170.0, -150.0];
        normalize_phase(&mut phases);
        assert_eq!(phases, vec![170.0, 190.0, 210.0]);

        let mut phases = vec![0.0, -1080.0 - 30.0];
        normalize_phase(&mut phases);
        assert_eq!(phases, vec![0.0, -30.0]);
    }

    #[test]
    fn normalize_allows_exactly_half_a_turn() {
        let mut phases = vec![0.0, 180.0, 0.0, -180.0];
        normalize_phase(&mut phases);
        assert_eq!(phases, vec![0.0, 180.0, 0.0, -180.0]);
    }

    #[test]
    fn normalize_skips_non_finite_pairs() {
        let mut phases = vec![0.0, f64::NEG_INFINITY, 400.0];
        normalize_phase(&mut phases);
        assert_eq!(phases[1], f64::NEG_INFINITY);
        assert_eq!(phases[2], 400.0);
    }

    #[test]
    fn cleanup_matches_sign_of_current_bin() {
        let mut phases = vec![-10.0, 180.0, 179.99995, 20.0, -179.99995];
        cleanup_phase(&mut phases);
        assert_eq!(phases, vec![-10.0, -180.0, -180.0, 20.0, 180.0]);
    }

    #[test]
    fn cleanup_leaves_first_bin_and_values_outside_tolerance() {
        let mut phases = vec![180.0, 179.9, 5.0];
        cleanup_phase(&mut phases);
        assert_eq!(phases, vec![180.0, 179.9, 5.0]);
    }

    #[test]
    fn polarity_cleanup_includes_last_bin_and_is_idempotent() {
        let mut phases = vec![180.0, -180.0, 45.0, 180.00005];
        cleanup_polarity(&mut phases);
        assert_eq!(phases, vec![-180.0, -180.0, 45.0, -180.0]);

        let once = phases.clone();
        cleanup_polarity(&mut phases);
        assert_eq!(phases, once);
    }

    #[test]
    fn passes_accept_empty_and_single_bin_input() {
        let mut empty: Vec<f64> = Vec::new();
        prepare_phase_for_display(&mut empty);
        unwrap_phase_sequence(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![180.0];
        normalize_phase(&mut single);
        cleanup_phase(&mut single);
        assert_eq!(single, vec![180.0]);
        cleanup_polarity(&mut single);
        assert_eq!(single, vec![-180.0]);
    }

    #[test]
    fn display_pipeline_is_idempotent() {
        let mut phases = vec![10.0, 370.0, -170.0, 180.0, 540.0, -180.0, 90.0];
        prepare_phase_for_display(&mut phases);
        let once = phases.clone();
        prepare_phase_for_display(&mut phases);
        assert_eq!(phases, once);
    }
}
