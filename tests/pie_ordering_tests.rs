use approx::assert_relative_eq;
use svgchart::core::{
    ColorScheme, NormalizedSegment, Point, SegmentOrdering, normalize_segments, point_on_circle,
    segment_arcs,
};
use svgchart::scene::{MemorySurface, NodeKind};
use svgchart::{PieChart, PieChartConfig};

fn segments(values: &[f64]) -> Vec<NormalizedSegment> {
    normalize_segments(values, None, &ColorScheme::light()).expect("normalize")
}

#[test]
fn natural_order_accumulates_from_zero() {
    let arcs = segment_arcs(&segments(&[10.0, 20.0, 30.0, 40.0]), SegmentOrdering::NaturalOrder);

    assert_eq!(arcs.len(), 4);
    assert_eq!(arcs[0].start_deg, 0.0);
    assert_relative_eq!(arcs[0].end_deg, 36.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[1].start_deg, 36.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[1].end_deg, 108.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[2].end_deg, 216.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[3].end_deg, 360.0, epsilon = 1e-9);

    let total: f64 = arcs.iter().map(|arc| arc.span_deg()).sum();
    assert_relative_eq!(total, 360.0, epsilon = 1e-9);
}

#[test]
fn sorted_reverse_accumulates_down_from_360() {
    let arcs = segment_arcs(
        &segments(&[40.0, 10.0, 20.0, 30.0]),
        SegmentOrdering::SortedReverseAccumulate,
    );

    // Smallest proportion first, pinned to the 360° end of the circle.
    assert_relative_eq!(arcs[0].start_deg, 324.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[0].end_deg, 360.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[1].start_deg, 252.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[2].start_deg, 144.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[3].start_deg, 0.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[3].end_deg, 144.0, epsilon = 1e-9);
}

#[test]
fn both_policies_partition_the_full_circle() {
    for ordering in [
        SegmentOrdering::NaturalOrder,
        SegmentOrdering::SortedReverseAccumulate,
    ] {
        let mut arcs = segment_arcs(&segments(&[5.0, 45.0, 30.0, 20.0]), ordering);
        arcs.sort_by(|a, b| a.start_deg.total_cmp(&b.start_deg));

        assert_relative_eq!(arcs[0].start_deg, 0.0, epsilon = 1e-9);
        for pair in arcs.windows(2) {
            assert_relative_eq!(pair[0].end_deg, pair[1].start_deg, epsilon = 1e-9);
        }
        assert_relative_eq!(arcs.last().expect("arcs").end_deg, 360.0, epsilon = 1e-9);
    }
}

#[test]
fn seam_offset_applies_only_to_sorted_policy() {
    assert_eq!(SegmentOrdering::NaturalOrder.seam_offset_deg(), 0.0);
    assert_eq!(
        SegmentOrdering::SortedReverseAccumulate.seam_offset_deg(),
        0.01
    );
}

#[test]
fn sorted_policy_never_draws_a_degenerate_full_circle_arc() {
    let config = PieChartConfig::new(svgchart::core::PieDataset::Flat(vec![100.0]))
        .with_ordering(SegmentOrdering::SortedReverseAccumulate);
    let mut chart = PieChart::new(config, MemorySurface::new(200.0, 200.0)).expect("chart init");
    chart.init().expect("init should succeed");

    let root = chart.surface().root().expect("committed root");
    let path = &root.find_all(NodeKind::Path)[0];
    let d = path.get_attr("d").expect("path data");

    // The single segment spans the full circle; the 0.01° seam nudge keeps
    // the drawn start and end points apart so the arc does not collapse.
    let center = Point::new(100.0, 100.0);
    let start = point_on_circle(center, 100.0, 0.01, 0.0);
    let end = point_on_circle(center, 100.0, 360.0, 0.0);
    let expected = format!(
        "M100 100 L{} {} A100 100 0 1 1 {} {} Z",
        start.x, start.y, end.x, end.y
    );
    assert_eq!(d, expected);
}

#[test]
fn sorted_policy_chart_draws_smallest_segment_first() {
    let config = PieChartConfig::new(svgchart::core::PieDataset::Flat(vec![40.0, 10.0, 50.0]))
        .with_ordering(SegmentOrdering::SortedReverseAccumulate);
    let chart = PieChart::new(config, MemorySurface::new(200.0, 200.0)).expect("chart init");

    // Normalization keeps input order; only the draw pass reorders.
    let proportions: Vec<f64> = chart.segments().iter().map(|s| s.proportion).collect();
    assert_relative_eq!(proportions[0], 0.4, epsilon = 1e-9);
    assert_relative_eq!(proportions[1], 0.1, epsilon = 1e-9);
    assert_relative_eq!(proportions[2], 0.5, epsilon = 1e-9);
}
