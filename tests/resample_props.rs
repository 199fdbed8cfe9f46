use glidetype::{distance, resample, Point};
use proptest::prelude::*;

fn finite_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 1..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn output_length_is_exact(path in finite_points(40), n in 1usize..120) {
        prop_assert_eq!(resample(&path, n).len(), n);
    }

    #[test]
    fn first_sample_is_the_first_input_point(path in finite_points(40), n in 2usize..80) {
        let out = resample(&path, n);
        prop_assert_eq!(out[0], path[0]);
    }

    #[test]
    fn last_sample_lands_on_the_last_input_point(path in finite_points(40), n in 2usize..80) {
        let out = resample(&path, n);
        let last = path[path.len() - 1];
        // Either the tail padding appends the exact final vertex, or the
        // final interpolation lands within rounding error of it.
        prop_assert!(distance(out[n - 1], last) < 1e-6);
    }

    #[test]
    fn single_point_repeats(x in -1000.0..1000.0f64, y in -1000.0..1000.0f64, n in 1usize..120) {
        let p = Point::new(x, y);
        prop_assert_eq!(resample(&[p], n), vec![p; n]);
    }
}
