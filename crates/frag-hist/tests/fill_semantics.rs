use frag_hist::Histogram;

fn base_hist() -> Histogram {
    Histogram::new("dndy", 100, -10.0, 10.0).unwrap()
}

#[test]
fn low_edge_lands_in_first_bin() {
    let mut hist = base_hist();
    hist.fill(-10.0);
    assert_eq!(hist.bins()[0], 1.0);
    assert_eq!(hist.underflow(), 0.0);
    assert_eq!(hist.entries(), 1);
}

#[test]
fn high_edge_routes_to_overflow() {
    let mut hist = base_hist();
    hist.fill(10.0);
    assert_eq!(hist.overflow(), 1.0);
    assert_eq!(hist.in_range_sum(), 0.0);
    assert_eq!(hist.entries(), 1);
}

#[test]
fn below_range_routes_to_underflow() {
    let mut hist = base_hist();
    hist.fill(-10.0001);
    assert_eq!(hist.underflow(), 1.0);
    assert_eq!(hist.in_range_sum(), 0.0);
}

#[test]
fn nan_value_counts_as_underflow() {
    let mut hist = base_hist();
    hist.fill(f64::NAN);
    assert_eq!(hist.underflow(), 1.0);
    assert_eq!(hist.entries(), 1);
}

#[test]
fn bin_index_follows_the_floor_rule() {
    let mut hist = base_hist();
    // width 0.2: value 0.0 sits at (0 - (-10)) / 0.2 = bin 50.
    hist.fill(0.0);
    assert_eq!(hist.bins()[50], 1.0);
    let center = hist.bin_center(50);
    assert!((center - 0.1).abs() < 1e-12);
}

#[test]
fn value_just_under_the_upper_edge_fills_the_last_bin() {
    let mut hist = base_hist();
    hist.fill(10.0 - 1e-12);
    assert_eq!(hist.bins()[99], 1.0);
    assert_eq!(hist.overflow(), 0.0);
}

#[test]
fn weighted_fill_adds_weight_but_one_entry() {
    let mut hist = Histogram::weighted("dptdy", 100, -10.0, 10.0).unwrap();
    hist.fill_weighted(0.0, 2.5);
    hist.fill_weighted(0.0, 0.5);
    assert!((hist.bins()[50] - 3.0).abs() < 1e-12);
    assert_eq!(hist.entries(), 2);
    assert!(hist.is_weighted());
}

#[test]
fn out_of_range_fills_still_count_entries() {
    let mut hist = base_hist();
    hist.fill(-100.0);
    hist.fill(100.0);
    hist.fill(0.0);
    assert_eq!(hist.entries(), 3);
    assert_eq!(hist.underflow(), 1.0);
    assert_eq!(hist.overflow(), 1.0);
}

#[test]
fn construction_rejects_bad_shapes() {
    assert!(Histogram::new("empty", 0, 0.0, 1.0).is_err());
    assert!(Histogram::new("inverted", 10, 1.0, 0.0).is_err());
    assert!(Histogram::new("collapsed", 10, 1.0, 1.0).is_err());
    assert!(Histogram::new("nan-edge", 10, f64::NAN, 1.0).is_err());
    assert!(Histogram::new("inf-edge", 10, 0.0, f64::INFINITY).is_err());
}
