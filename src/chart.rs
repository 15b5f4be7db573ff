// Source vs target comparison chart
// Two panels side by side (layer 3 left, layer 7 right), each a grouped bar
// chart of one AlignedSeries. Saved as PNG.

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::align::AlignedSeries;
use crate::config::ImageSize;
use crate::error::RenderError;
use crate::radar::Metric;

/// Width of one bar in category units
pub const BAR_WIDTH: f64 = 0.35;

const SOURCE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const TARGET_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);

/// Horizontal extents of the source and target bars for category `index`
pub fn bar_spans(index: usize) -> ((f64, f64), (f64, f64)) {
    let x = index as f64;
    ((x - BAR_WIDTH, x), (x, x + BAR_WIDTH))
}

/// Axis label for a tick position; only whole category positions get a name
pub fn category_label(countries: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    countries.get(rounded as usize).cloned().unwrap_or_default()
}

/// Top of the y axis: a little headroom above the tallest bar
fn y_upper(max_value: f64) -> f64 {
    if max_value > 0.0 {
        max_value * 1.1
    } else {
        1.0
    }
}

/// Render the two-panel comparison chart
///
/// An empty series leaves its panel blank. Returns Ok(false) without
/// writing anything when both series are empty.
pub fn render_comparison(
    layer3: &AlignedSeries,
    layer7: &AlignedSeries,
    path: &Path,
    size: ImageSize,
) -> Result<bool, RenderError> {
    if layer3.is_empty() && layer7.is_empty() {
        log::warn!("No data available for either attack layer; skipping chart");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let root = BitMapBackend::new(path, size.as_tuple()).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::drawing)?;

    let panels = root.split_evenly((1, 2));
    for (area, (metric, series)) in panels.iter().zip([(Metric::Layer3, layer3), (Metric::Layer7, layer7)]) {
        if series.is_empty() {
            log::warn!("No {} data to plot", metric.title());
            continue;
        }
        draw_panel(area, metric, series)?;
    }

    root.present().map_err(RenderError::drawing)?;
    log::info!("Chart saved to {}", path.display());
    Ok(true)
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    metric: Metric,
    series: &AlignedSeries,
) -> Result<(), RenderError> {
    let n = series.len();
    let countries = &series.countries;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} Attacks (Source vs Target)", metric.title()),
            ("sans-serif", 24).into_font().color(&BLACK),
        )
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_upper(series.max_value()))
        .map_err(RenderError::drawing)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| category_label(countries, *x))
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Countries")
        .y_desc("Attack Value")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(RenderError::drawing)?;

    chart
        .draw_series(series.source_values.iter().enumerate().map(|(i, v)| {
            let ((x0, x1), _) = bar_spans(i);
            Rectangle::new([(x0, 0.0), (x1, *v)], SOURCE_COLOR.filled())
        }))
        .map_err(RenderError::drawing)?
        .label("Source")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SOURCE_COLOR.filled()));

    chart
        .draw_series(series.target_values.iter().enumerate().map(|(i, v)| {
            let (_, (x0, x1)) = bar_spans(i);
            Rectangle::new([(x0, 0.0), (x1, *v)], TARGET_COLOR.filled())
        }))
        .map_err(RenderError::drawing)?
        .label("Target")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], TARGET_COLOR.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(RenderError::drawing)?;

    Ok(())
}
