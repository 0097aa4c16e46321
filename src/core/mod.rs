pub mod color;
pub mod format;
pub mod geometry;
pub mod line;
pub mod pie;
pub mod types;

pub use color::{ColorScheme, DEFAULT_COLOR_SCHEME_DARK, DEFAULT_COLOR_SCHEME_LIGHT};
pub use format::{format_with_suffix, magnitude_suffix, nice_axis_max};
pub use geometry::{degrees_to_radians, point_on_circle, radians_to_degrees};
pub use line::{
    PlotArea, SeriesMap, filter_series, groups_count, max_value, project_polyline, step_value,
    validate_samples,
};
pub use pie::{
    NormalizedSegment, PieDataset, PieMetric, PieRecord, SegmentArc, SegmentOrdering,
    normalize_segments, segment_arcs,
};
pub use types::{Measurement, Point};
