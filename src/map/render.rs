// World map renderer
// Paints every boundary polygon (flagged or not), largest first so enclaves
// stay on top, draws borders, overlays the planned labels and adds a side
// panel with the legend and the list of flagged countries. Output is a PNG.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::boundary::{BoundaryDataset, BoundaryFeature};
use super::labels::{PlacedLabel, Reconciler};
use crate::config::ImageSize;
use crate::error::RenderError;

pub const MAP_TITLE: &str = "Blacklisted Sign-in Countries";
pub const LIST_HEADING: &str = "Blacklisted Countries:";

const FLAGGED_FILL: RGBColor = RGBColor(0xc9, 0x4c, 0x4c);
const BASE_FILL: RGBColor = RGBColor(0xc9, 0xd3, 0xdb);
const LEGEND_FILL: RGBColor = RGBColor(0xb2, 0x22, 0x22);
const STAMP_COLOR: RGBColor = RGBColor(0x66, 0x66, 0x66);

/// Fraction of the image width used by the legend and country list
const SIDE_PANEL_RATIO: f64 = 0.18;

/// Pixel offsets of the white halo drawn behind each label
const HALO_OFFSETS: [(i32, i32); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

/// Points-to-pixels factor: the map is laid out as a 10 inch tall figure
fn point_scale(size: ImageSize) -> f64 {
    size.height as f64 / 720.0
}

/// Dataset names of flagged features, sorted and deduplicated
pub fn flagged_display_names(dataset: &BoundaryDataset, flagged_alpha3: &BTreeSet<String>) -> Vec<String> {
    let names: BTreeSet<&str> = dataset
        .features
        .iter()
        .filter(|f| flagged_alpha3.contains(&f.alpha3))
        .map(|f| f.name.as_str())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Features in paint order: largest first, so enclaves and islands drawn
/// inside a neighbour's outline are painted over it rather than under it
pub fn paint_order(features: &[BoundaryFeature]) -> Vec<&BoundaryFeature> {
    let mut sized: Vec<(f64, &BoundaryFeature)> = features.iter().map(|f| (f.area_m2(), f)).collect();
    sized.sort_by(|a, b| b.0.total_cmp(&a.0));
    sized.into_iter().map(|(_, f)| f).collect()
}

/// Render the flagged-country map to `path`
pub fn render_map(
    dataset: &BoundaryDataset,
    flagged_alpha3: &BTreeSet<String>,
    reconciler: &Reconciler,
    path: &Path,
    size: ImageSize,
) -> Result<(), RenderError> {
    if flagged_alpha3.is_empty() {
        log::warn!("No flagged countries; rendering the base map only");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let root = BitMapBackend::new(path, size.as_tuple()).into_drawing_area();
    draw_map(&root, dataset, flagged_alpha3, reconciler, size)?;
    root.present().map_err(RenderError::drawing)?;
    log::info!("Map saved to {}", path.display());
    Ok(())
}

fn draw_map(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    dataset: &BoundaryDataset,
    flagged_alpha3: &BTreeSet<String>,
    reconciler: &Reconciler,
    size: ImageSize,
) -> Result<(), RenderError> {
    let scale = point_scale(size);
    let px = |points: f64| (points * scale).round().max(1.0);

    root.fill(&WHITE).map_err(RenderError::drawing)?;

    let side_width = (size.width as f64 * SIDE_PANEL_RATIO) as u32;
    let (side, map_area) = root.split_horizontally(side_width);

    // Title
    let title_style = TextStyle::from(("sans-serif", px(26.0)).into_font().style(FontStyle::Bold)).color(&BLACK);
    let title_height = (px(26.0) * 2.0) as u32;
    map_area
        .draw_text(MAP_TITLE, &title_style, (0, (px(26.0) * 0.5) as i32))
        .map_err(RenderError::drawing)?;

    let mut chart = ChartBuilder::on(&map_area)
        .margin(10)
        .margin_top(title_height)
        .build_cartesian_2d(-180f64..180f64, -90f64..90f64)
        .map_err(RenderError::drawing)?;

    let ordered = paint_order(&dataset.features);

    // Fills, then borders
    for feature in &ordered {
        let fill = if flagged_alpha3.contains(&feature.alpha3) {
            FLAGGED_FILL
        } else {
            BASE_FILL
        };
        for ring in exterior_rings(feature) {
            chart
                .draw_series(std::iter::once(Polygon::new(ring, fill.filled())))
                .map_err(RenderError::drawing)?;
        }
    }
    for feature in &ordered {
        for ring in exterior_rings(feature) {
            chart
                .draw_series(std::iter::once(PathElement::new(ring, BLACK.stroke_width(1))))
                .map_err(RenderError::drawing)?;
        }
    }

    let plan = reconciler.plan_labels(&dataset.features, flagged_alpha3);
    for label in &plan {
        draw_label(&mut chart, label, px(label.placement.font_size))?;
    }
    log::debug!("Placed {} map labels", plan.len());

    draw_side_panel(&side, dataset, flagged_alpha3, &px)
}

fn exterior_rings(feature: &BoundaryFeature) -> impl Iterator<Item = Vec<(f64, f64)>> + '_ {
    feature
        .shape
        .0
        .iter()
        .map(|poly| poly.exterior().coords().map(|c| (c.x, c.y)).collect::<Vec<_>>())
        .filter(|ring| ring.len() >= 3)
}

type MapChart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<plotters::coord::types::RangedCoordf64, plotters::coord::types::RangedCoordf64>>;

fn draw_label(chart: &mut MapChart<'_, '_>, label: &PlacedLabel, font_px: f64) -> Result<(), RenderError> {
    let anchor = (label.placement.x, label.placement.y);
    let text = &label.placement.text;
    let font = ("sans-serif", font_px).into_font().style(FontStyle::Bold);
    let centered = Pos::new(HPos::Center, VPos::Center);

    let halo = TextStyle::from(font.clone()).color(&WHITE).pos(centered);
    let halo_width = (font_px / 6.0).ceil().max(1.0) as i32;
    for (dx, dy) in HALO_OFFSETS {
        chart
            .draw_series(std::iter::once(
                EmptyElement::at(anchor) + Text::new(text.clone(), (dx * halo_width, dy * halo_width), halo.clone()),
            ))
            .map_err(RenderError::drawing)?;
    }

    let style = TextStyle::from(font).color(&BLACK).pos(centered);
    chart
        .draw_series(std::iter::once(EmptyElement::at(anchor) + Text::new(text.clone(), (0, 0), style)))
        .map_err(RenderError::drawing)?;
    Ok(())
}

fn draw_side_panel(
    side: &DrawingArea<BitMapBackend<'_>, Shift>,
    dataset: &BoundaryDataset,
    flagged_alpha3: &BTreeSet<String>,
    px: &dyn Fn(f64) -> f64,
) -> Result<(), RenderError> {
    let left = px(10.0) as i32;
    let (_, height) = side.dim_in_pixel();

    // Legend swatch
    let swatch = px(14.0) as i32;
    let legend_y = (height as f64 * 0.08) as i32;
    side.draw(&Rectangle::new(
        [(left, legend_y), (left + swatch, legend_y + swatch)],
        LEGEND_FILL.filled(),
    ))
    .map_err(RenderError::drawing)?;
    let legend_style = TextStyle::from(("sans-serif", px(14.0)).into_font()).color(&BLACK);
    side.draw_text(MAP_TITLE, &legend_style, (left + swatch + px(6.0) as i32, legend_y))
        .map_err(RenderError::drawing)?;

    // Country list
    let list_style = TextStyle::from(("sans-serif", px(13.0)).into_font().style(FontStyle::Bold)).color(&BLACK);
    let line_height = px(13.0 * 1.5) as i32;
    let mut y = (height as f64 * 0.3) as i32;
    side.draw_text(LIST_HEADING, &list_style, (left, y))
        .map_err(RenderError::drawing)?;
    for name in flagged_display_names(dataset, flagged_alpha3) {
        y += line_height;
        side.draw_text(&format!("• {}", name), &list_style, (left, y))
            .map_err(RenderError::drawing)?;
    }

    let stamp = format!("Generated {}", chrono::Utc::now().format("%Y-%m-%d"));
    let stamp_style = TextStyle::from(("sans-serif", px(9.0)).into_font()).color(&STAMP_COLOR);
    side.draw_text(&stamp, &stamp_style, (left, height as i32 - line_height))
        .map_err(RenderError::drawing)?;
    Ok(())
}
