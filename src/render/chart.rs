//! The two chart painters.
//!
//! Both chart families share one canvas layout: 1600x1200 JPEG, memory
//! size on the x axis, counter values on the y axis, legend boxed in the
//! upper right. Series are told apart by color, marker shape and
//! transparency; the exact styling carries no contract.

use crate::experiment::{Dataset, MEMORY_SIZES, Metric};
use crate::report::table::MeasurementTable;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::{RangedCoordf64, RangedCoordu32};
use plotters::prelude::*;
use plotters::style::RGBAColor;
use plotters::style::full_palette::ORANGE;
use std::path::Path;

const CANVAS: (u32, u32) = (1600, 1200);
const LINE_WIDTH: u32 = 5;
const MARKER_SIZE: i32 = 8;

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordu32, RangedCoordf64>>;

/// Per-algorithm chart: the three counters of one dataset block.
pub fn algorithm_chart(
    table: &MeasurementTable,
    dataset: Dataset,
    path: &Path,
) -> anyhow::Result<()> {
    let series: Vec<(&str, Vec<(u32, f64)>)> = Metric::ALL
        .into_iter()
        .map(|metric| (metric.label(), to_points(table.series(dataset, metric))))
        .collect();

    let title = format!("{} : {}", table.algorithm.name(), dataset.label());
    draw(path, &title, "Values", &series)
}

/// Per-dataset chart: one counter compared across all given tables.
pub fn dataset_chart(
    tables: &[MeasurementTable],
    dataset: Dataset,
    metric: Metric,
    path: &Path,
) -> anyhow::Result<()> {
    let series: Vec<(&str, Vec<(u32, f64)>)> = tables
        .iter()
        .map(|table| (table.algorithm.name(), to_points(table.series(dataset, metric))))
        .collect();

    let y_desc = format!("The number of {}", metric.label().to_lowercase());
    draw(path, dataset.label(), &y_desc, &series)
}

fn to_points(series: Vec<(u32, u64)>) -> Vec<(u32, f64)> {
    series.into_iter().map(|(x, y)| (x, y as f64)).collect()
}

fn draw(
    path: &Path,
    title: &str,
    y_desc: &str,
    series: &[(&str, Vec<(u32, f64)>)],
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let y_top = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);
    // Headroom above the tallest point; floor keeps an all-zero chart sane.
    let y_top = if y_top > 0.0 { y_top * 1.05 } else { 1.0 };

    let (lo, hi) = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|&(x, _)| x))
        .fold((u32::MAX, u32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    // A flat or empty x set cannot span an axis; fall back to the standard
    // sizes.
    let (x_first, x_last) = if lo < hi {
        (lo, hi)
    } else {
        (MEMORY_SIZES[0], MEMORY_SIZES[MEMORY_SIZES.len() - 1])
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 48))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d(x_first..x_last, 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("The number of frames")
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 32))
        .x_label_style(("sans-serif", 24))
        .y_label_style(("sans-serif", 24))
        .draw()?;

    for (shape, (label, pts)) in series.iter().enumerate() {
        draw_marked_series(&mut chart, pts, label, shape)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 28))
        .draw()?;

    root.present()?;
    Ok(())
}

/// One line series plus its point markers and legend entry. The marker
/// shape and color cycle with the series position within the chart.
fn draw_marked_series(
    chart: &mut Chart2d<'_, '_>,
    pts: &[(u32, f64)],
    label: &str,
    shape: usize,
) -> anyhow::Result<()> {
    let color = series_color(shape);
    chart
        .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(LINE_WIDTH)))?
        .label(label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(LINE_WIDTH))
        });

    match shape % 4 {
        0 => {
            chart.draw_series(
                pts.iter().map(|&p| Circle::new(p, MARKER_SIZE, color.filled())),
            )?;
        }
        1 => {
            chart.draw_series(
                pts.iter().map(|&p| TriangleMarker::new(p, MARKER_SIZE, color.filled())),
            )?;
        }
        2 => {
            chart.draw_series(
                pts.iter().map(|&p| Cross::new(p, MARKER_SIZE, color.stroke_width(3))),
            )?;
        }
        _ => {
            chart.draw_series(pts.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new(
                        [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                        color.filled(),
                    )
            }))?;
        }
    }

    Ok(())
}

fn series_color(shape: usize) -> RGBAColor {
    match shape % 4 {
        0 => BLUE.mix(1.0),
        1 => ORANGE.mix(1.0),
        2 => GREEN.mix(0.7),
        _ => RED.mix(0.6),
    }
}
