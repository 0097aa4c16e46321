use tracing::debug;

use crate::api::config::PieChartConfig;
use crate::api::fmt_num;
use crate::api::style::ChartStyle;
use crate::core::color::ColorScheme;
use crate::core::geometry::point_on_circle;
use crate::core::pie::{NormalizedSegment, SegmentOrdering, normalize_segments, segment_arcs};
use crate::core::types::Measurement;
use crate::error::{ChartError, ChartResult};
use crate::scene::{NodeKind, SceneNode, Surface};

const MASK_ID: &str = "hole";

/// Pie/donut chart builder.
///
/// Normalization happens eagerly in [`PieChart::new`]; all drawing happens in
/// one explicit [`PieChart::init`] call which measures the container, builds
/// the mask and background, draws one arc segment per data point and commits
/// the finished root to the surface.
pub struct PieChart<S: Surface> {
    surface: S,
    style: ChartStyle,
    rotate: f64,
    inner_radius: f64,
    ordering: SegmentOrdering,
    segments: Vec<NormalizedSegment>,
    mounted: Option<Mounted>,
}

#[derive(Debug, Clone, Copy)]
struct Mounted {
    measuring: Measurement,
    radius: f64,
}

impl<S: Surface> PieChart<S> {
    /// Normalizes the configured dataset and binds the chart to `surface`.
    ///
    /// This is where dataset errors surface: an empty dataset, a composite
    /// record missing the `source` metric, or non-finite values all fail
    /// here, before anything is drawn.
    pub fn new(config: PieChartConfig, surface: S) -> ChartResult<Self> {
        if !config.rotate.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "rotation must be finite, got {}",
                config.rotate
            )));
        }
        if !config.inner_radius.is_finite() || config.inner_radius < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "inner radius must be finite and non-negative, got {}",
                config.inner_radius
            )));
        }

        let scheme = config.color_scheme.unwrap_or_else(ColorScheme::light);
        let values = config.data.extract(config.source.as_deref())?;
        let segments = normalize_segments(&values, config.total, &scheme)?;
        debug!(
            segment_count = segments.len(),
            ordering = ?config.ordering,
            "normalized pie dataset"
        );

        Ok(Self {
            surface,
            style: config.style,
            rotate: config.rotate,
            inner_radius: config.inner_radius,
            ordering: config.ordering,
            segments,
            mounted: None,
        })
    }

    /// Normalized segments, in input order.
    #[must_use]
    pub fn segments(&self) -> &[NormalizedSegment] {
        &self.segments
    }

    /// Container snapshot taken by the last `init` call.
    pub fn measurement(&self) -> ChartResult<Measurement> {
        self.mounted
            .map(|mounted| mounted.measuring)
            .ok_or(ChartError::MissingSurface)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Measures the container, draws the full chart and commits it.
    ///
    /// Re-running replaces the previously committed root; output never
    /// accumulates.
    pub fn init(&mut self) -> ChartResult<()> {
        let measuring = self.surface.container_size()?;
        if !measuring.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: measuring.width,
                height: measuring.height,
            });
        }
        self.mounted = Some(Mounted {
            measuring,
            radius: measuring.width / 2.0,
        });

        let mut root = self.create_root()?;
        self.build_mask(&mut root)?;
        self.build_background(&mut root)?;
        self.render_segments(&mut root)?;

        debug!(
            width = measuring.width,
            height = measuring.height,
            "committing pie chart scene"
        );
        self.surface.commit(root)
    }

    fn mounted(&self) -> ChartResult<Mounted> {
        self.mounted.ok_or(ChartError::MissingSurface)
    }

    fn create_root(&self) -> ChartResult<SceneNode> {
        let mounted = self.mounted()?;
        Ok(SceneNode::new(NodeKind::Svg)
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", fmt_num(mounted.measuring.width))
            .attr("height", fmt_num(mounted.measuring.height))
            .with_child(SceneNode::new(NodeKind::Defs)))
    }

    /// Mask carving the donut hole: a white disc at full radius with a black
    /// disc of `inner_radius` on top. An inner radius of 0 leaves a full pie.
    fn build_mask(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let center = mounted.measuring.center();

        let outer = SceneNode::new(NodeKind::Circle)
            .attr("cx", fmt_num(center.x))
            .attr("cy", fmt_num(center.y))
            .attr("r", fmt_num(mounted.radius))
            .attr("fill", "white");
        let inner = SceneNode::new(NodeKind::Circle)
            .attr("cx", fmt_num(center.x))
            .attr("cy", fmt_num(center.y))
            .attr("r", fmt_num(self.inner_radius))
            .attr("fill", "black");
        let mask = SceneNode::new(NodeKind::Mask)
            .attr("id", MASK_ID)
            .with_child(outer)
            .with_child(inner);

        let defs = root
            .find_child_mut(NodeKind::Defs)
            .ok_or(ChartError::MissingSurface)?;
        defs.append_child(mask);
        Ok(())
    }

    fn build_background(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let center = mounted.measuring.center();

        root.append_child(
            SceneNode::new(NodeKind::Circle)
                .attr("cx", fmt_num(center.x))
                .attr("cy", fmt_num(center.y))
                .attr("r", fmt_num(mounted.radius))
                .attr("fill", self.style.furniture_color.clone())
                .attr("mask", format!("url(#{MASK_ID})")),
        );
        Ok(())
    }

    fn render_segments(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let center = mounted.measuring.center();
        let seam_offset = self.ordering.seam_offset_deg();

        for arc in segment_arcs(&self.segments, self.ordering) {
            let start_deg = arc.start_deg + seam_offset;
            let start = point_on_circle(center, mounted.radius, start_deg, self.rotate);
            let end = point_on_circle(center, mounted.radius, arc.end_deg, self.rotate);
            let large_arc = if arc.end_deg - start_deg > 180.0 { 1 } else { 0 };

            let d = format!(
                "M{} {} L{} {} A{} {} 0 {} 1 {} {} Z",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(start.x),
                fmt_num(start.y),
                fmt_num(mounted.radius),
                fmt_num(mounted.radius),
                large_arc,
                fmt_num(end.x),
                fmt_num(end.y),
            );

            root.append_child(
                SceneNode::new(NodeKind::Path)
                    .attr("d", d)
                    .attr("fill", arc.color)
                    .attr("mask", format!("url(#{MASK_ID})")),
            );
        }
        Ok(())
    }
}
