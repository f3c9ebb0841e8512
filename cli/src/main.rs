use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use tracing::info;

use vanet_report_cli::{plot, table};
use vanet_report_core::{
    formats::results::ResultSeries,
    protocol::Protocol,
    summary::{Metric, SummaryStatistic},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the simulation result CSV files
    #[arg(short, long, value_name = "DIR", default_value = "Result")]
    result_dir: PathBuf,

    /// Directory the rendered charts are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    let mut series_by_label = Vec::new();
    for protocol in Protocol::ALL {
        let path = args.result_dir.join(protocol.result_file_name());
        let series = ResultSeries::from_path(&path)?;
        info!(protocol = protocol.label(), rows = series.len(), "loaded results");
        series_by_label.push((protocol, series));
    }

    let mut stats_by_label = Vec::new();
    for (protocol, series) in &series_by_label {
        stats_by_label.push((*protocol, SummaryStatistic::from_series(series)?));
    }

    plot::render_comparison(
        &series_by_label,
        &args.out_dir.join("routing_protocols_comparison.png"),
    )?;
    plot::render_avg_comparison(
        &stats_by_label,
        &args.out_dir.join("routing_protocols_avg_comparison.png"),
    )?;

    for (protocol, series) in &series_by_label {
        plot::render_protocol_performance(
            *protocol,
            series,
            &args
                .out_dir
                .join(format!("{}_performance_graph.png", protocol.file_stem())),
        )?;
    }

    for metric in Metric::ALL {
        plot::render_time_series(
            &series_by_label,
            metric,
            &args.out_dir.join(format!("{}_comparison.png", metric.file_stem())),
        )?;
        plot::render_bar_comparison(
            &stats_by_label,
            metric,
            &args.out_dir.join(format!("{}_avg.png", metric.file_stem())),
        )?;
    }
    info!(out_dir = %args.out_dir.display(), "charts written");

    table::write_summary_table(&mut std::io::stdout().lock(), &stats_by_label)?;

    Ok(())
}
