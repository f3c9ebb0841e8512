use std::path::Path;

use color_eyre::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use vanet_report_core::{
    formats::results::ResultSeries,
    protocol::Protocol,
    summary::{Metric, SummaryStatistic},
};

const SINGLE_SIZE: (u32, u32) = (800, 500);
const COMPARISON_SIZE: (u32, u32) = (1000, 1200);
const AVG_SIZE: (u32, u32) = (1500, 500);
const PERFORMANCE_SIZE: (u32, u32) = (960, 1000);

/// One curve per protocol over time, for a single metric.
pub fn render_time_series(
    series_by_label: &[(Protocol, ResultSeries)],
    metric: Metric,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, SINGLE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_line_chart(&root, series_by_label, metric)?;
    root.present()?;
    Ok(())
}

/// One bar per protocol, showing the metric's mean value.
pub fn render_bar_comparison(
    stats_by_label: &[(Protocol, SummaryStatistic)],
    metric: Metric,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, SINGLE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_bar_chart(&root, stats_by_label, metric)?;
    root.present()?;
    Ok(())
}

/// All three metric line charts stacked into one figure.
pub fn render_comparison(
    series_by_label: &[(Protocol, ResultSeries)],
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, COMPARISON_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    for (panel, metric) in root.split_evenly((3, 1)).iter().zip(Metric::ALL) {
        draw_line_chart(panel, series_by_label, metric)?;
    }
    root.present()?;
    Ok(())
}

/// All three mean bar charts side by side in one figure.
pub fn render_avg_comparison(
    stats_by_label: &[(Protocol, SummaryStatistic)],
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, AVG_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    for (panel, metric) in root.split_evenly((1, 3)).iter().zip(Metric::ALL) {
        draw_bar_chart(panel, stats_by_label, metric)?;
    }
    root.present()?;
    Ok(())
}

/// Per-protocol figure: each metric as bars over time, stacked vertically.
pub fn render_protocol_performance(
    protocol: Protocol,
    series: &ResultSeries,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, PERFORMANCE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    for (i, (panel, metric)) in root.split_evenly((3, 1)).iter().zip(Metric::ALL).enumerate() {
        draw_time_bar_chart(panel, protocol, series, metric, Palette99::pick(i).to_rgba())?;
    }
    root.present()?;
    Ok(())
}

fn draw_line_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    series_by_label: &[(Protocol, ResultSeries)],
    metric: Metric,
) -> Result<()> {
    let x_max = series_by_label
        .iter()
        .flat_map(|(_, series)| series.rows().iter().map(|row| row.time))
        .fold(0f32, f32::max)
        .max(1.0);
    let y_max = padded_max(
        series_by_label
            .iter()
            .flat_map(|(_, series)| series.points(metric).map(|(_, value)| value))
            .fold(0f32, f32::max),
    );

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} Comparison", metric.label()), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f32..x_max, 0f32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(format!("{} ({})", metric.label(), metric.unit()))
        .draw()?;

    for (i, (protocol, series)) in series_by_label.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();

        chart
            .draw_series(LineSeries::new(series.points(metric), color.stroke_width(2)))?
            .label(protocol.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        // Point markers on top of the line, one per sample
        chart.draw_series(
            series
                .points(metric)
                .map(|point| Circle::new(point, 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_bar_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    stats_by_label: &[(Protocol, SummaryStatistic)],
    metric: Metric,
) -> Result<()> {
    let y_max = padded_max(
        stats_by_label
            .iter()
            .map(|(_, stats)| stats.get(metric))
            .fold(0f32, f32::max),
    );

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Average {}", metric.label()), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d((0..stats_by_label.len()).into_segmented(), 0f32..y_max)?;

    let labels: Vec<&str> = stats_by_label.iter().map(|(p, _)| p.label()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(i) => labels.get(*i).copied().unwrap_or("").to_string(),
            _ => String::new(),
        })
        .y_desc(format!("{} ({})", metric.label(), metric.unit()))
        .draw()?;

    chart.draw_series(stats_by_label.iter().enumerate().map(|(i, (_, stats))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0f32),
                (SegmentValue::Exact(i + 1), stats.get(metric)),
            ],
            Palette99::pick(i).filled(),
        );
        bar.set_margin(0, 0, 18, 18);
        bar
    }))?;

    Ok(())
}

fn draw_time_bar_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    protocol: Protocol,
    series: &ResultSeries,
    metric: Metric,
    color: RGBAColor,
) -> Result<()> {
    const BAR_HALF_WIDTH: f32 = 0.25;

    let x_max = series
        .rows()
        .iter()
        .map(|row| row.time)
        .fold(0f32, f32::max)
        .max(1.0);
    let y_max = padded_max(series.points(metric).map(|(_, value)| value).fold(0f32, f32::max));

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} - {} over Time", protocol.label(), metric.label()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(
            -BAR_HALF_WIDTH..x_max + BAR_HALF_WIDTH,
            0f32..y_max,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Time (s)")
        .y_desc(format!("{} ({})", metric.label(), metric.unit()))
        .draw()?;

    chart.draw_series(series.points(metric).map(|(time, value)| {
        Rectangle::new(
            [(time - BAR_HALF_WIDTH, 0f32), (time + BAR_HALF_WIDTH, value)],
            color.filled(),
        )
    }))?;

    Ok(())
}

// Keeps a degenerate all-zero series from producing an empty axis range
fn padded_max(max: f32) -> f32 {
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}
