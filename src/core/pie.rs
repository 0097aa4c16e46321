use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::color::ColorScheme;
use crate::error::{ChartError, ChartResult};

/// One named metric inside a composite pie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieMetric {
    pub title: String,
    pub value: f64,
}

impl PieMetric {
    #[must_use]
    pub fn new(title: impl Into<String>, value: f64) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// One record of a composite pie dataset: a label plus several named metrics.
///
/// The chart plots exactly one metric per record, selected by the config's
/// `source` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieRecord {
    pub label: String,
    pub values: Vec<PieMetric>,
}

impl PieRecord {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<PieMetric>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Raw pie input: either a flat numeric sequence or composite records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PieDataset {
    Flat(Vec<f64>),
    Records(Vec<PieRecord>),
}

impl PieDataset {
    /// Extracts one numeric value per element.
    ///
    /// Flat datasets are used directly. Composite datasets require a `source`
    /// selector; a record without that metric fails with
    /// `MissingSeriesValue` naming the record.
    pub fn extract(&self, source: Option<&str>) -> ChartResult<Vec<f64>> {
        match self {
            Self::Flat(values) => Ok(values.clone()),
            Self::Records(records) => {
                let selector = source.ok_or_else(|| {
                    ChartError::InvalidData(
                        "composite pie dataset requires a `source` selector".to_owned(),
                    )
                })?;
                records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| {
                        record
                            .values
                            .iter()
                            .find(|metric| metric.title == selector)
                            .map(|metric| metric.value)
                            .ok_or_else(|| ChartError::MissingSeriesValue {
                                selector: selector.to_owned(),
                                index,
                            })
                    })
                    .collect()
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Records(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Segment drawing order.
///
/// The policy is part of the chart contract and selected per configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentOrdering {
    /// Input order, start angles accumulating from 0°.
    #[default]
    NaturalOrder,
    /// Proportions sorted ascending, accumulating down from 360°. The drawn
    /// arc start is nudged forward by 0.01° so the seam never produces a
    /// zero-length arc.
    SortedReverseAccumulate,
}

impl SegmentOrdering {
    /// Degrees added to the drawn start angle of every arc under this policy.
    #[must_use]
    pub fn seam_offset_deg(self) -> f64 {
        match self {
            Self::NaturalOrder => 0.0,
            Self::SortedReverseAccumulate => 0.01,
        }
    }
}

/// One normalized pie segment: a proportion of the total plus its color.
///
/// Computed once at chart construction and immutable thereafter. Proportions
/// over a chart sum to 1 (barring float error), or to 0 when the total is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSegment {
    pub proportion: f64,
    pub color: String,
}

/// One segment resolved to angles. Spans partition [0°, 360°) exactly under
/// both ordering policies; seam offsets are applied at draw time only.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentArc {
    pub start_deg: f64,
    pub end_deg: f64,
    pub color: String,
}

impl SegmentArc {
    #[must_use]
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// Normalizes raw values into proportional segments with assigned colors.
///
/// `total` overrides the sum when given (for charts showing a share of a
/// larger whole). A zero total produces zero-span segments rather than NaN.
/// Colors are assigned by index, clamped to the scheme's last token.
pub fn normalize_segments(
    values: &[f64],
    total: Option<f64>,
    scheme: &ColorScheme,
) -> ChartResult<Vec<NormalizedSegment>> {
    if values.is_empty() {
        return Err(ChartError::InvalidData(
            "pie dataset must contain at least one value".to_owned(),
        ));
    }
    for value in values {
        if !value.is_finite() || *value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pie values must be finite and non-negative, got {value}"
            )));
        }
    }

    let total = match total {
        Some(total) if total.is_finite() && total >= 0.0 => total,
        Some(total) => {
            return Err(ChartError::InvalidData(format!(
                "pie total must be finite and non-negative, got {total}"
            )));
        }
        None => values.iter().sum(),
    };

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, value)| NormalizedSegment {
            proportion: if total == 0.0 { 0.0 } else { value / total },
            color: scheme.pick(index).to_owned(),
        })
        .collect())
}

/// Resolves normalized segments into angular spans under `ordering`.
#[must_use]
pub fn segment_arcs(segments: &[NormalizedSegment], ordering: SegmentOrdering) -> Vec<SegmentArc> {
    match ordering {
        SegmentOrdering::NaturalOrder => {
            let mut start = 0.0;
            segments
                .iter()
                .map(|segment| {
                    let end = start + 360.0 * segment.proportion;
                    let arc = SegmentArc {
                        start_deg: start,
                        end_deg: end,
                        color: segment.color.clone(),
                    };
                    start = end;
                    arc
                })
                .collect()
        }
        SegmentOrdering::SortedReverseAccumulate => {
            let mut sorted: Vec<&NormalizedSegment> = segments.iter().collect();
            sorted.sort_by_key(|segment| OrderedFloat(segment.proportion));

            let mut end = 360.0;
            sorted
                .iter()
                .map(|segment| {
                    let start = end - 360.0 * segment.proportion;
                    let arc = SegmentArc {
                        start_deg: start,
                        end_deg: end,
                        color: segment.color.clone(),
                    };
                    end = start;
                    arc
                })
                .collect()
        }
    }
}
