use frag_hist::{Histogram, NormalizeOutcome};

#[test]
fn spectrum_divides_by_events_times_width() {
    let mut hist = Histogram::new("dndy", 100, 0.0, 1.0).unwrap();
    for _ in 0..100 {
        hist.fill(0.505);
    }
    hist.normalize_spectrum(50).unwrap();
    // 100 counts / (50 events * 0.01 width) = 200.
    assert!((hist.bins()[50] - 200.0).abs() < 1e-9);
    assert!(hist.is_normalized());
}

#[test]
fn spectrum_leaves_flow_counters_untouched() {
    let mut hist = Histogram::new("dndy", 10, 0.0, 1.0).unwrap();
    hist.fill(-1.0);
    hist.fill(2.0);
    hist.fill(0.5);
    hist.normalize_spectrum(3).unwrap();
    assert_eq!(hist.underflow(), 1.0);
    assert_eq!(hist.overflow(), 1.0);
}

#[test]
fn spectrum_rejects_zero_events() {
    let mut hist = Histogram::new("dndy", 10, 0.0, 1.0).unwrap();
    hist.fill(0.5);
    let err = hist.normalize_spectrum(0).unwrap_err();
    assert_eq!(err.info().code, "normalize-zero-events");
    assert!(!hist.is_normalized());
}

#[test]
fn second_normalization_is_rejected() {
    let mut hist = Histogram::new("dndy", 10, 0.0, 1.0).unwrap();
    hist.fill(0.5);
    hist.normalize_spectrum(1).unwrap();

    let err = hist.normalize_spectrum(1).unwrap_err();
    assert_eq!(err.info().code, "hist-normalized");
    let err = hist.normalize_integral().unwrap_err();
    assert_eq!(err.info().code, "hist-normalized");
}

#[test]
fn integral_scales_bins_to_unit_sum() {
    let mut hist = Histogram::new("dy_reg", 4, 0.0, 4.0).unwrap();
    hist.fill(0.5);
    hist.fill(1.5);
    hist.fill_weighted(2.5, 2.0);
    let outcome = hist.normalize_integral().unwrap();
    assert_eq!(outcome, NormalizeOutcome::Normalized);
    assert!((hist.in_range_sum() - 1.0).abs() < 1e-12);
    assert!((hist.bins()[0] - 0.25).abs() < 1e-12);
    assert!((hist.bins()[2] - 0.5).abs() < 1e-12);
    assert!(hist.is_normalized());
}

#[test]
fn degenerate_integral_leaves_histogram_unchanged() {
    let mut hist = Histogram::new("dy_join", 4, 0.0, 4.0).unwrap();
    hist.fill(9.0);
    let outcome = hist.normalize_integral().unwrap();
    assert_eq!(outcome, NormalizeOutcome::DegenerateUnchanged);
    assert!(!hist.is_normalized());
    assert_eq!(hist.in_range_sum(), 0.0);
    assert_eq!(hist.overflow(), 1.0);
}
