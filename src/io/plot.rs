//! SVG charts: net change vs. year, and storage vs. year for every scenario
//! with the depleted region shaded.

use std::path::Path;

use anyhow::{Result, bail};
use plotters::prelude::*;
use tracing::info;

use crate::ctx::Ctx;
use crate::projection::{Depletion, ScenarioLabel};

const CHART_SIZE: (u32, u32) = (1000, 600);
const LOW_COLOR: RGBColor = RGBColor(214, 96, 77);
const MEAN_COLOR: RGBColor = RGBColor(33, 102, 172);
const HIGH_COLOR: RGBColor = RGBColor(27, 120, 55);

pub fn render_net_change(path: &Path, ctx: &Ctx) -> Result<()> {
    let table = ctx.table()?;
    if table.is_empty() {
        bail!("mass balance table is empty");
    }
    let points: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.year as f64, r.change))
        .collect();
    let (x0, x1) = x_range(&points);
    let (y0, y1) = y_range(points.iter().map(|p| p.1));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Net groundwater change", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("year")
        .y_desc("net change (10^9 m^3/yr)")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x0, 0.0), (x1, 0.0)],
        BLACK.mix(0.4),
    )))?;

    chart
        .draw_series(LineSeries::new(points, MEAN_COLOR.stroke_width(2)))?
        .label("inflow - outflow")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MEAN_COLOR));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(path = %path.display(), "net_change_plot_written");
    Ok(())
}

pub fn render_storage_scenarios(path: &Path, ctx: &Ctx) -> Result<()> {
    let series = ctx.series()?;
    if ctx.scenarios.is_empty() {
        bail!("no scenario projections to plot");
    }
    let years: Vec<f64> = series.years().iter().map(|&y| y as f64).collect();
    let x_points: Vec<(f64, f64)> = years.iter().map(|&x| (x, 0.0)).collect();
    let (x0, x1) = x_range(&x_points);
    let (y0, y1) = y_range(ctx.scenarios.iter().flat_map(|s| s.storage.iter().copied()));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Projected groundwater storage", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("year")
        .y_desc("storage (10^9 m^3)")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .draw()?;

    // y0 is always below zero, see y_range.
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x0, y0), (x1, 0.0)],
            LOW_COLOR.mix(0.15).filled(),
        )))?
        .label("depleted (storage <= 0)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], LOW_COLOR.mix(0.15).filled()));

    for scenario in &ctx.scenarios {
        let color = scenario_color(scenario.bound.label);
        let points = years.iter().copied().zip(scenario.storage.iter().copied());
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(format!(
                "{} ({:.0})",
                scenario.bound.label.describe(),
                scenario.bound.initial_storage
            ))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        if let Depletion::Reached(year) = scenario.depletion {
            let x = year as f64;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, y0), (x, y1)],
                color.mix(0.35),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(path = %path.display(), "storage_plot_written");
    Ok(())
}

fn scenario_color(label: ScenarioLabel) -> RGBColor {
    match label {
        ScenarioLabel::Low => LOW_COLOR,
        ScenarioLabel::Mean => MEAN_COLOR,
        ScenarioLabel::High => HIGH_COLOR,
    }
}

fn x_range(points: &[(f64, f64)]) -> (f64, f64) {
    let lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) }
}

/// Value range padded by 5%, always spanning zero.
fn y_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}
