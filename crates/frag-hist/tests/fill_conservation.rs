use frag_hist::Histogram;
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_unit_fills_conserve_counts(values in prop::collection::vec(-9.99f64..9.99, 1..400)) {
        let mut hist = Histogram::new("dndy", 100, -10.0, 10.0).unwrap();
        for value in &values {
            hist.fill(*value);
        }
        let total = values.len() as f64;
        prop_assert!((hist.in_range_sum() - total).abs() < 1e-9 * total.max(1.0));
        prop_assert_eq!(hist.entries(), values.len() as u64);
        prop_assert_eq!(hist.underflow(), 0.0);
        prop_assert_eq!(hist.overflow(), 0.0);
    }

    #[test]
    fn weight_is_conserved_across_bins_and_flows(
        samples in prop::collection::vec((-30.0f64..30.0, 0.0f64..10.0), 1..300)
    ) {
        let mut hist = Histogram::weighted("dptdy", 100, -10.0, 10.0).unwrap();
        let mut expected = 0.0;
        for (value, weight) in &samples {
            hist.fill_weighted(*value, *weight);
            expected += weight;
        }
        let booked = hist.in_range_sum() + hist.underflow() + hist.overflow();
        prop_assert!((booked - expected).abs() < 1e-9 * expected.max(1.0));
        prop_assert_eq!(hist.entries(), samples.len() as u64);
    }

    #[test]
    fn filled_bin_brackets_the_value(value in -9.999f64..9.999) {
        let mut hist = Histogram::new("dndy", 100, -10.0, 10.0).unwrap();
        hist.fill(value);
        let index = hist
            .bins()
            .iter()
            .position(|bin| *bin > 0.0)
            .expect("in-range fill must land in a bin");
        let half_width = hist.bin_width() / 2.0;
        let center = hist.bin_center(index);
        prop_assert!(value >= center - half_width - 1e-12);
        prop_assert!(value < center + half_width + 1e-12);
    }
}
