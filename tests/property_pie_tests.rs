use proptest::prelude::*;
use svgchart::core::{ColorScheme, SegmentOrdering, normalize_segments, segment_arcs};

fn scheme(len: usize) -> ColorScheme {
    ColorScheme::new((0..len).map(|i| format!("#{i:06x}")).collect()).expect("scheme")
}

proptest! {
    #[test]
    fn proportions_sum_to_one(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..32)
    ) {
        let segments = normalize_segments(&values, None, &scheme(4)).expect("normalize");
        let sum: f64 = segments.iter().map(|s| s.proportion).sum();
        prop_assert!((sum - 1.0).abs() <= 1e-9, "sum was {sum}");
    }

    #[test]
    fn spans_match_proportions(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..32)
    ) {
        let segments = normalize_segments(&values, None, &scheme(4)).expect("normalize");
        let arcs = segment_arcs(&segments, SegmentOrdering::NaturalOrder);

        for (segment, arc) in segments.iter().zip(&arcs) {
            let span = arc.span_deg();
            prop_assert!((span - 360.0 * segment.proportion).abs() <= 1e-9);
        }
    }

    #[test]
    fn both_policies_partition_the_circle(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..32)
    ) {
        let segments = normalize_segments(&values, None, &scheme(4)).expect("normalize");

        for ordering in [SegmentOrdering::NaturalOrder, SegmentOrdering::SortedReverseAccumulate] {
            let mut arcs = segment_arcs(&segments, ordering);
            arcs.sort_by(|a, b| a.start_deg.total_cmp(&b.start_deg));

            prop_assert!(arcs[0].start_deg.abs() <= 1e-6);
            for pair in arcs.windows(2) {
                prop_assert!((pair[0].end_deg - pair[1].start_deg).abs() <= 1e-6);
            }
            let last_end = arcs.last().expect("arcs").end_deg;
            prop_assert!((last_end - 360.0).abs() <= 1e-6);
        }
    }

    #[test]
    fn colors_always_come_from_the_scheme(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..32),
        scheme_len in 1usize..4
    ) {
        let scheme = scheme(scheme_len);
        let segments = normalize_segments(&values, None, &scheme).expect("normalize");

        for (index, segment) in segments.iter().enumerate() {
            prop_assert_eq!(segment.color.as_str(), scheme.pick(index));
            if index >= scheme.len() {
                prop_assert_eq!(segment.color.as_str(), scheme.pick(scheme.len() - 1));
            }
        }
    }

    #[test]
    fn explicit_total_scales_proportions(
        values in proptest::collection::vec(1.0f64..100.0, 1..8),
        total in 1_000.0f64..100_000.0
    ) {
        let segments = normalize_segments(&values, Some(total), &scheme(4)).expect("normalize");
        for (value, segment) in values.iter().zip(&segments) {
            prop_assert!((segment.proportion - value / total).abs() <= 1e-12);
        }
    }
}
