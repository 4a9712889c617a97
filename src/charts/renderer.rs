//! Static Chart Renderer
//! Renders each dashboard chart to a PNG image with plotters.
//!
//! Kinds:
//! - Pie: slice per data point, slice labels, optional bottom legend row
//! - Line: one series per dataset over a category axis
//! - Bar: category bars; series beyond the first are overlaid translucently
//!
//! Payload styling (`backgroundColor` / `borderColor` hex strings) wins when
//! present; everything else falls back to the fixed palette.

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::{RangedCoordf64, RangedCoordusize};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::backend::{ChartBackend, RenderError};
use super::config::{ChartBinding, ChartKind, LegendPosition};
use crate::data::{ChartData, Dataset};

// Colors (RGB)
const GRAY_TEXT: RGBColor = RGBColor(150, 150, 150);
const LEGEND_BORDER: RGBColor = RGBColor(200, 200, 200);

/// Default series palette, used when the payload carries no styling.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(91, 155, 213),  // blue
    RGBColor(237, 125, 49),  // orange
    RGBColor(112, 173, 71),  // green
    RGBColor(255, 192, 0),   // amber
    RGBColor(68, 84, 106),   // slate
    RGBColor(165, 165, 165), // gray
];

/// A chart rendered to pixels, bound to the container it targets.
pub struct RenderedChart {
    pub container_id: String,
    pub kind: ChartKind,
    pub image: image::RgbImage,
}

impl RenderedChart {
    /// Write the chart as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| RenderError::Encode {
                container: self.container_id.clone(),
                source,
            })
    }
}

/// Renders dashboard charts as static images.
pub struct StaticChartRenderer {
    width: u32,
    height: u32,
}

impl Default for StaticChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticChartRenderer {
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 420,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(
        &self,
        binding: &ChartBinding,
        data: &ChartData,
        buffer: &mut [u8],
    ) -> Result<(), String> {
        let root =
            BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;
        match binding.kind {
            ChartKind::Pie => self.draw_pie(&root, binding, data)?,
            ChartKind::Line => self.draw_line(&root, binding, data)?,
            ChartKind::Bar => self.draw_bar(&root, binding, data)?,
        }
        root.present().map_err(|e| e.to_string())
    }

    fn draw_pie(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        binding: &ChartBinding,
        data: &ChartData,
    ) -> Result<(), String> {
        let series = data.datasets.first();
        let raw: Vec<f64> = series.map(|d| d.data.clone()).unwrap_or_default();

        let mut sizes = Vec::new();
        let mut labels = Vec::new();
        let mut colors = Vec::new();
        for (i, &value) in raw.iter().enumerate() {
            if value.is_finite() && value > 0.0 {
                sizes.push(value);
                labels.push(data.labels.get(i).cloned().unwrap_or_default());
                colors.push(point_color(series, i));
            }
        }
        if sizes.is_empty() {
            return self.draw_empty_state(root);
        }

        let legend_height: i32 = match binding.options.legend {
            LegendPosition::Bottom => 36,
            LegendPosition::Hidden => 0,
        };
        let (width, height) = root.dim_in_pixel();
        let plot_height = height as i32 - legend_height;
        let center = (width as i32 / 2, plot_height / 2);
        let radius = ((width as i32).min(plot_height) as f64 / 2.0 - 30.0).max(10.0);

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        root.draw(&pie).map_err(|e| e.to_string())?;

        if binding.options.legend == LegendPosition::Bottom {
            let entries: Vec<(String, RGBColor)> = labels
                .iter()
                .cloned()
                .zip(colors.iter().copied())
                .collect();
            self.draw_legend_row(root, &entries)?;
        }
        Ok(())
    }

    fn draw_line(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        binding: &ChartBinding,
        data: &ChartData,
    ) -> Result<(), String> {
        let point_count = category_count(data);
        if point_count == 0 {
            return self.draw_empty_state(root);
        }
        let (y_min, y_max) = self.value_range(binding, data);

        let mut chart = ChartBuilder::on(root)
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(46)
            .build_cartesian_2d((0..point_count).into_segmented(), y_min..y_max)
            .map_err(|e| e.to_string())?;
        self.draw_mesh(&mut chart, binding, data, point_count)?;

        let show_legend = binding.options.legend == LegendPosition::Bottom;
        for (series_index, dataset) in data.datasets.iter().enumerate() {
            let color = series_color(dataset, series_index);
            let points: Vec<(SegmentValue<usize>, f64)> = dataset
                .data
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| (SegmentValue::CenterOf(i), v))
                .collect();
            let anno = chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(|e| e.to_string())?;
            if show_legend {
                anno.label(series_name(dataset, series_index)).legend(
                    move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2)),
                );
            }
        }
        if show_legend {
            self.draw_series_legend(&mut chart)?;
        }
        Ok(())
    }

    fn draw_bar(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        binding: &ChartBinding,
        data: &ChartData,
    ) -> Result<(), String> {
        let category_total = category_count(data);
        if category_total == 0 {
            return self.draw_empty_state(root);
        }
        let (y_min, y_max) = self.value_range(binding, data);

        let mut chart = ChartBuilder::on(root)
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(46)
            .build_cartesian_2d((0..category_total).into_segmented(), y_min..y_max)
            .map_err(|e| e.to_string())?;
        self.draw_mesh(&mut chart, binding, data, category_total)?;

        let show_legend = binding.options.legend == LegendPosition::Bottom;
        for (series_index, dataset) in data.datasets.iter().enumerate() {
            let bars = dataset
                .data
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &value)| {
                    let style: ShapeStyle = if series_index == 0 {
                        point_color(Some(dataset), i).filled()
                    } else {
                        series_color(dataset, series_index).mix(0.6).filled()
                    };
                    Rectangle::new(
                        [
                            (SegmentValue::Exact(i), 0.0),
                            (SegmentValue::Exact(i + 1), value),
                        ],
                        style,
                    )
                });
            let anno = chart.draw_series(bars).map_err(|e| e.to_string())?;
            if show_legend {
                let color = series_color(dataset, series_index);
                anno.label(series_name(dataset, series_index)).legend(
                    move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()),
                );
            }
        }
        if show_legend {
            self.draw_series_legend(&mut chart)?;
        }
        Ok(())
    }

    fn draw_mesh<'a, 'b: 'a>(
        &self,
        chart: &mut ChartContext<
            'a,
            BitMapBackend<'b>,
            Cartesian2d<SegmentedCoord<RangedCoordusize>, RangedCoordf64>,
        >,
        binding: &ChartBinding,
        data: &ChartData,
        categories: usize,
    ) -> Result<(), String> {
        let labels = data.labels.clone();
        let x_fmt = move |segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(categories)
            .x_label_formatter(&x_fmt);
        if let Some(axis) = &binding.options.y_axis {
            if let Some(title) = axis.title {
                mesh.y_desc(title);
            }
        }
        mesh.draw().map_err(|e| e.to_string())
    }

    fn draw_series_legend<'a, 'b: 'a>(
        &self,
        chart: &mut ChartContext<
            'a,
            BitMapBackend<'b>,
            Cartesian2d<SegmentedCoord<RangedCoordusize>, RangedCoordf64>,
        >,
    ) -> Result<(), String> {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerMiddle)
            .background_style(&WHITE.mix(0.85))
            .border_style(&LEGEND_BORDER)
            .draw()
            .map_err(|e| e.to_string())
    }

    /// Value-axis range across every series, widened by the binding's axis
    /// options and a 10% headroom.
    fn value_range(&self, binding: &ChartBinding, data: &ChartData) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for dataset in &data.datasets {
            for &value in &dataset.data {
                if value.is_finite() {
                    min = min.min(value);
                    max = max.max(value);
                }
            }
        }
        if !min.is_finite() {
            return (0.0, 1.0);
        }
        if let Some(axis) = &binding.options.y_axis {
            if axis.begin_at_zero {
                min = min.min(0.0);
            }
            if let Some(suggested) = axis.suggested_min {
                min = min.min(suggested);
            }
        }
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        (min, max + (max - min) * 0.1)
    }

    fn draw_empty_state(&self, root: &DrawingArea<BitMapBackend, Shift>) -> Result<(), String> {
        let (width, height) = root.dim_in_pixel();
        let style = ("sans-serif", 16).into_font().color(&GRAY_TEXT);
        root.draw(&Text::new(
            "No data",
            (width as i32 / 2 - 26, height as i32 / 2),
            style,
        ))
        .map_err(|e| e.to_string())
    }

    fn draw_legend_row(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        entries: &[(String, RGBColor)],
    ) -> Result<(), String> {
        let (_, height) = root.dim_in_pixel();
        let mut x = 14i32;
        let y = height as i32 - 24;
        for (label, color) in entries {
            root.draw(&Rectangle::new([(x, y), (x + 12, y + 12)], color.filled()))
                .map_err(|e| e.to_string())?;
            root.draw(&Text::new(
                label.clone(),
                (x + 17, y),
                ("sans-serif", 14).into_font(),
            ))
            .map_err(|e| e.to_string())?;
            x += 17 + 7 * label.chars().count() as i32 + 14;
        }
        Ok(())
    }
}

impl ChartBackend for StaticChartRenderer {
    type Instance = RenderedChart;

    fn create(
        &mut self,
        binding: &ChartBinding,
        data: Option<&ChartData>,
    ) -> Result<RenderedChart, RenderError> {
        let empty = ChartData::default();
        let data = data.unwrap_or(&empty);
        let mut buffer = vec![0u8; (self.width * self.height * 3) as usize];
        self.draw(binding, data, &mut buffer)
            .map_err(|message| RenderError::Draw {
                container: binding.container_id.to_string(),
                message,
            })?;
        let image = image::RgbImage::from_raw(self.width, self.height, buffer).ok_or_else(|| {
            RenderError::Draw {
                container: binding.container_id.to_string(),
                message: "pixel buffer does not match chart dimensions".to_string(),
            }
        })?;
        Ok(RenderedChart {
            container_id: binding.container_id.to_string(),
            kind: binding.kind,
            image,
        })
    }
}

/// Longest extent of the category axis across labels and every series.
fn category_count(data: &ChartData) -> usize {
    let longest_series = data.datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);
    data.labels.len().max(longest_series)
}

fn series_name(dataset: &Dataset, series_index: usize) -> String {
    dataset
        .label
        .clone()
        .unwrap_or_else(|| format!("Series {}", series_index + 1))
}

/// Stroke color for a whole series.
fn series_color(dataset: &Dataset, series_index: usize) -> RGBColor {
    dataset
        .border_color
        .as_ref()
        .and_then(|c| c.color_at(0))
        .or_else(|| {
            dataset
                .background_color
                .as_ref()
                .and_then(|c| c.color_at(0))
        })
        .and_then(parse_hex_color)
        .unwrap_or(PALETTE[series_index % PALETTE.len()])
}

/// Fill color for one data point (pie slice, bar).
fn point_color(dataset: Option<&Dataset>, index: usize) -> RGBColor {
    dataset
        .and_then(|d| d.background_color.as_ref())
        .and_then(|c| c.color_at(index))
        .and_then(parse_hex_color)
        .unwrap_or(PALETTE[index % PALETTE.len()])
}

/// Parse `#rgb` / `#rrggbb` styling strings. Other CSS color forms fall
/// back to the palette.
fn parse_hex_color(text: &str) -> Option<RGBColor> {
    let hex = text.trim().strip_prefix('#')?;
    // Byte-offset slicing below is only safe on ASCII hex digits.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(RGBColor(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(RGBColor(r, g, b))
        }
        _ => None,
    }
}
