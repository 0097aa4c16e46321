use svgchart::core::{ColorScheme, PieDataset, SegmentOrdering};
use svgchart::{LineChartConfig, PieChartConfig};

#[test]
fn pie_config_round_trips_through_json() {
    let config = PieChartConfig::new(PieDataset::Flat(vec![10.0, 20.0, 30.0]))
        .with_rotate(-90.0)
        .with_inner_radius(70.0)
        .with_ordering(SegmentOrdering::SortedReverseAccumulate);

    let raw = config.to_json_string().expect("serialize");
    let restored = PieChartConfig::from_json_str(&raw).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn segment_ordering_serializes_as_kebab_case() {
    let config = PieChartConfig::new(PieDataset::Flat(vec![1.0]))
        .with_ordering(SegmentOrdering::SortedReverseAccumulate);
    let raw = config.to_json_string().expect("serialize");
    assert!(raw.contains("\"sorted-reverse-accumulate\""), "{raw}");
}

#[test]
fn pie_config_defaults_apply_when_fields_are_absent() {
    let config = PieChartConfig::from_json_str(r#"{"data": [5, 10, 15]}"#).expect("deserialize");
    assert_eq!(config.rotate, 0.0);
    assert_eq!(config.inner_radius, 0.0);
    assert_eq!(config.ordering, SegmentOrdering::NaturalOrder);
    assert!(config.color_scheme.is_none());
    assert_eq!(config.style.padding, 40.0);
}

#[test]
fn composite_pie_dataset_parses_from_records() {
    let raw = r#"{
        "data": [
            {"label": "strategy", "values": [{"title": "hours", "value": 120.0}]},
            {"label": "racing", "values": [{"title": "hours", "value": 80.0}]}
        ],
        "source": "hours"
    }"#;
    let config = PieChartConfig::from_json_str(raw).expect("deserialize");
    assert_eq!(config.data.len(), 2);
    assert_eq!(config.source.as_deref(), Some("hours"));
}

#[test]
fn line_config_round_trips_and_keeps_series_order() {
    let mut data = svgchart::core::SeriesMap::new();
    data.insert("zulu".to_owned(), vec![1.0, 2.0]);
    data.insert("alpha".to_owned(), vec![3.0, 4.0]);
    let config = LineChartConfig::new(data)
        .with_labels(vec!["a".to_owned(), "b".to_owned()])
        .with_color_scheme(ColorScheme::dark());

    let raw = config.to_json_string().expect("serialize");
    let restored = LineChartConfig::from_json_str(&raw).expect("deserialize");

    assert_eq!(restored, config);
    let keys: Vec<&str> = restored.data.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zulu", "alpha"]);
}

#[test]
fn empty_color_scheme_is_rejected_on_deserialize() {
    let raw = r#"{"data": [1, 2], "color_scheme": []}"#;
    assert!(PieChartConfig::from_json_str(raw).is_err());
}
