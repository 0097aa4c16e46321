use tracing::debug;

use crate::api::config::LineChartConfig;
use crate::api::fmt_num;
use crate::api::style::ChartStyle;
use crate::core::color::ColorScheme;
use crate::core::format::format_with_suffix;
use crate::core::line::{
    PlotArea, SeriesMap, filter_series, groups_count, max_value, project_polyline, step_value,
    validate_samples,
};
use crate::core::types::Measurement;
use crate::error::{ChartError, ChartResult};
use crate::scene::{NodeKind, SceneNode, Surface};

/// Multi-series line chart builder.
///
/// Construction filters the dataset and derives the shared scale
/// (`max_value`, `groups_count`) eagerly; [`LineChart::init`] measures the
/// container, draws the axis furniture and one polyline per series, and
/// commits the finished root to the surface.
pub struct LineChart<S: Surface> {
    surface: S,
    style: ChartStyle,
    scheme: ColorScheme,
    labels: Vec<String>,
    data: SeriesMap,
    groups_count: usize,
    max_value: f64,
    mounted: Option<Mounted>,
}

#[derive(Debug, Clone, Copy)]
struct Mounted {
    measuring: Measurement,
    area: PlotArea,
}

impl<S: Surface> LineChart<S> {
    /// Filters the dataset by the configured allow-list and derives the
    /// shared value scale. Fails on an empty result set or non-finite
    /// samples.
    pub fn new(config: LineChartConfig, surface: S) -> ChartResult<Self> {
        let data = filter_series(&config.data, config.keys.as_deref());
        if data.is_empty() {
            return Err(ChartError::InvalidData(
                "line chart requires at least one series".to_owned(),
            ));
        }
        validate_samples(&data)?;

        let groups_count = groups_count(&data);
        let max_value = max_value(&data);
        debug!(
            series_count = data.len(),
            groups_count, max_value, "normalized line dataset"
        );

        Ok(Self {
            surface,
            style: config.style,
            scheme: config.color_scheme.unwrap_or_else(ColorScheme::light),
            labels: config.labels.unwrap_or_default(),
            data,
            groups_count,
            max_value,
            mounted: None,
        })
    }

    /// Series that will be drawn, in draw order.
    #[must_use]
    pub fn series(&self) -> &SeriesMap {
        &self.data
    }

    /// Category-axis length: the longest included series.
    #[must_use]
    pub fn groups_count(&self) -> usize {
        self.groups_count
    }

    /// Largest sample over all included series.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
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
            area: PlotArea::new(measuring, self.style.padding),
        });

        let mut root = self.create_root()?;
        self.build_axes(&mut root)?;
        self.build_steps(&mut root)?;
        self.render_series(&mut root)?;

        debug!(
            width = measuring.width,
            height = measuring.height,
            "committing line chart scene"
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

    /// L-shaped origin axis: baseline plus left value axis, meeting at the
    /// drawable rectangle's bottom-left corner.
    fn build_axes(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let area = mounted.area;
        let origin = area.origin();
        let end_x = area.width - area.padding;
        let end_y = area.padding;

        root.append_child(self.furniture_path(format!(
            "M{} {} L{} {}",
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(end_x),
            fmt_num(origin.y),
        )));
        root.append_child(self.furniture_path(format!(
            "M{} {} L{} {}",
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(origin.x),
            fmt_num(end_y),
        )));
        Ok(())
    }

    fn build_steps(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let area = mounted.area;

        for index in (0..self.style.steps_count).rev() {
            root.append_child(self.value_tick(area, index));
            root.append_child(self.value_label(area, index));
        }
        for index in (0..self.groups_count).rev() {
            root.append_child(self.category_tick(area, index));
            if let Some(label) = self.category_label(area, index) {
                root.append_child(label);
            }
        }
        Ok(())
    }

    /// Short horizontal dash across the value axis at gridline step `index`.
    fn value_tick(&self, area: PlotArea, index: usize) -> SceneNode {
        let x = area.padding - self.style.tick_length / 2.0;
        let y = area.step_px(self.style.steps_count) * index as f64 + area.padding;
        self.furniture_path(format!(
            "M{} {} L{} {}",
            fmt_num(x),
            fmt_num(y),
            fmt_num(x + self.style.tick_length),
            fmt_num(y),
        ))
    }

    fn value_label(&self, area: PlotArea, index: usize) -> SceneNode {
        let value = step_value(self.max_value, self.style.steps_count, index);
        let y = area.step_px(self.style.steps_count) * index as f64
            + area.padding
            + self.style.font_size * 0.4;

        SceneNode::new(NodeKind::Text)
            .attr("font-size", format!("{}px", fmt_num(self.style.font_size)))
            .attr("fill", self.style.label_color.clone())
            .attr("x", "0")
            .attr("y", fmt_num(y))
            .text_content(format_with_suffix(value))
    }

    /// Short vertical dash across the baseline at category `index`.
    fn category_tick(&self, area: PlotArea, index: usize) -> SceneNode {
        let x = area.category_x(index, self.groups_count);
        let y = area.height - area.padding - self.style.tick_length / 2.0;
        self.furniture_path(format!(
            "M{} {} L{} {}",
            fmt_num(x),
            fmt_num(y),
            fmt_num(x),
            fmt_num(y + self.style.tick_length),
        ))
    }

    /// Category label under the baseline; `None` when no label is configured
    /// for this position.
    fn category_label(&self, area: PlotArea, index: usize) -> Option<SceneNode> {
        let text = self.labels.get(index)?;
        if text.is_empty() {
            return None;
        }

        Some(
            SceneNode::new(NodeKind::Text)
                .attr("font-size", format!("{}px", fmt_num(self.style.font_size)))
                .attr("text-anchor", "middle")
                .attr("fill", self.style.label_color.clone())
                .attr("x", fmt_num(area.category_x(index, self.groups_count)))
                .attr("y", fmt_num(area.height - area.padding / 2.0))
                .text_content(text.clone()),
        )
    }

    fn render_series(&self, root: &mut SceneNode) -> ChartResult<()> {
        let mounted = self.mounted()?;
        let area = mounted.area;

        for (index, samples) in self.data.values().enumerate() {
            let points = project_polyline(samples, self.max_value, self.groups_count, area);
            if points.is_empty() {
                continue;
            }

            let mut d = String::new();
            for (point_index, point) in points.iter().enumerate() {
                let command = if point_index == 0 { 'M' } else { 'L' };
                if point_index > 0 {
                    d.push(' ');
                }
                d.push(command);
                d.push_str(&fmt_num(point.x));
                d.push(' ');
                d.push_str(&fmt_num(point.y));
            }

            root.append_child(
                SceneNode::new(NodeKind::Path)
                    .attr("d", d)
                    .attr("stroke", self.scheme.pick(index).to_owned())
                    .attr("fill", "transparent")
                    .attr("stroke-width", fmt_num(self.style.series_stroke_width)),
            );
        }
        Ok(())
    }

    fn furniture_path(&self, d: String) -> SceneNode {
        SceneNode::new(NodeKind::Path)
            .attr("d", d)
            .attr("stroke", self.style.furniture_color.clone())
            .attr("stroke-width", fmt_num(self.style.axis_stroke_width))
    }
}
