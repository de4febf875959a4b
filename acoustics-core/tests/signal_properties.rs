use acoustics_core::band::{band_number_at_1khz, center_frequency};
use acoustics_core::level::{db_to_magnitude, magnitude_to_db};
use acoustics_core::octave_range::OctaveRange;
use acoustics_core::phase::{cleanup_polarity, normalize_phase, unwrap_phase_sequence};
use acoustics_core::range_index::clamped_frequency_range_indices;
use approx::assert_relative_eq;

const DIVIDERS: [u32; 6] = [1, 3, 6, 12, 24, 48];

#[test]
fn every_divider_lands_on_1khz_at_its_anchor() {
    for d in DIVIDERS {
        let d = f64::from(d);
        assert_eq!(center_frequency(band_number_at_1khz(d), d), 1000.0);
    }
}

#[test]
fn center_frequency_is_monotonic() {
    for d in DIVIDERS {
        let d = f64::from(d);
        let anchor = band_number_at_1khz(d);
        for n in (anchor - 200)..(anchor + 200) {
            assert!(center_frequency(n + 1, d) > center_frequency(n, d), "d={d}, n={n}");
        }
    }
}

#[test]
fn third_octave_band_33_is_2khz() {
    assert_eq!(center_frequency(33, 3.0), 2000.0);
}

#[test]
fn magnitude_round_trips_through_db() {
    let mut m = 1.0e-9;
    while m < 1.0e9 {
        assert_relative_eq!(db_to_magnitude(magnitude_to_db(m)), m, max_relative = 1e-12);
        m *= 1.7;
    }
}

#[test]
fn polarity_cleanup_is_idempotent() {
    let mut phases = vec![180.0, 179.99995, -180.0, 0.0, 90.0, 180.00009, 180.0002];
    cleanup_polarity(&mut phases);
    let once = phases.clone();
    cleanup_polarity(&mut phases);
    assert_eq!(phases, once);
    assert_eq!(phases[6], 180.0002);
}

#[test]
fn classification_boundary_at_19hz() {
    assert_eq!(OctaveRange::for_frequency(19.0), OctaveRange::Hz20To40);
}

#[test]
fn unwrap_and_normalize_scenarios() {
    let mut phases = vec![190.0, -190.0, 170.0];
    unwrap_phase_sequence(&mut phases);
    assert_eq!(phases, vec![-170.0, 170.0, 170.0]);

    let mut phases = vec![10.0, 370.0];
    normalize_phase(&mut phases);
    assert_eq!(phases, vec![10.0, 10.0]);
}

#[test]
fn clamped_indices_inside_and_outside_bin_span() {
    let bins = [10.0, 20.0, 40.0, 80.0, 160.0];
    // First bin at or above 100 Hz is 160 Hz at index 4.
    assert_eq!(clamped_frequency_range_indices(&bins, true, 30.0, 100.0).as_array(), [2, 4]);
    assert_eq!(clamped_frequency_range_indices(&bins, true, 30.0, 160.0).as_array(), [2, 4]);
    // Beyond the span the stop index falls through to 0.
    assert_eq!(clamped_frequency_range_indices(&bins, true, 30.0, 500.0).as_array(), [2, 0]);
}
