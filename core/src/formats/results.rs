use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::summary::Metric;

/// Columns every result file must carry, in header order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Time", "Throughput", "Avg Delay", "PDR"];

/// One sampled time point of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Time")]
    pub time: f32,
    #[serde(rename = "Throughput")]
    pub throughput: f32,
    #[serde(rename = "Avg Delay")]
    pub avg_delay: f32,
    #[serde(rename = "PDR")]
    pub pdr: f32,
}

/// All samples of one simulation run, ascending by time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSeries {
    rows: Vec<ResultRow>,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Result file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Missing required column '{0}' in header")]
    MissingColumn(&'static str),
    #[error("CSV parsing error (line {0}: {1})")]
    Csv(usize, csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResultSeries {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let series = Self::from_reader(File::open(path)?)?;
        debug!(rows = series.len(), path = %path.display(), "loaded result series");
        Ok(series)
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            // To allow blank (or whitespace-only) lines anywhere in the file,
            // typically left by the simulator at the end of a run
            .flexible(true)
            .from_reader(rdr);

        let headers = rdr.headers().map_err(|e| Error::Csv(1, e))?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            // +2: one for the header line, one for 1-based line numbers
            let record = record.map_err(|e| Error::Csv(i + 2, e))?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            let row: ResultRow = record
                .deserialize(Some(&headers))
                .map_err(|e| Error::Csv(i + 2, e))?;
            rows.push(row);
        }

        // Stable, so rows sharing a timestamp keep their file order
        rows.sort_by(|a, b| a.time.total_cmp(&b.time));

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(time, value)` pairs of one metric, in time order.
    pub fn points(&self, metric: Metric) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.rows.iter().map(move |row| (row.time, metric.get(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_parsing() {
        let series = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay,PDR
            1.0, 120.5, 0.012, 98.2
            2.0, 118.0, 0.015, 97.6
            "#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.rows()[0].time, 1.0);
        assert_eq!(series.rows()[0].throughput, 120.5);
        assert_eq!(series.rows()[0].avg_delay, 0.012);
        assert_eq!(series.rows()[0].pdr, 98.2);
        assert_eq!(series.rows()[1].time, 2.0);
    }

    #[test]
    fn rows_are_sorted_by_time() {
        let series = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay,PDR
            3.0, 30.0, 0.3, 93.0
            1.0, 10.0, 0.1, 91.0
            2.0, 20.0, 0.2, 92.0
            "#
            .as_bytes(),
        )
        .unwrap();

        let times: Vec<_> = series.rows().iter().map(|r| r.time).collect();
        assert_eq!(times, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let series = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay,PDR
            2.0, 99.0, 0.9, 99.0
            1.0, 10.0, 0.1, 91.0
            1.0, 20.0, 0.2, 92.0
            "#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(series.rows()[0].throughput, 10.0);
        assert_eq!(series.rows()[1].throughput, 20.0);
        assert_eq!(series.rows()[2].throughput, 99.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let series = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay,PDR,Jitter
            1.0, 10.0, 0.1, 90.0, 0.004
            "#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.rows()[0].pdr, 90.0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        // Whitespace-only lines (mid-file or trailing) are not records
        let series = ResultSeries::from_reader(
            "Time,Throughput,Avg Delay,PDR\n1.0, 10.0, 0.1, 90.0\n   \n2.0, 20.0, 0.2, 91.0\n    \n"
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.rows()[1].time, 2.0);
    }

    #[test]
    fn header_only_file_is_an_empty_series() {
        let series =
            ResultSeries::from_reader("Time,Throughput,Avg Delay,PDR\n".as_bytes()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_pdr_column() {
        let err = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay
            1.0, 10.0, 0.1
            "#
            .as_bytes(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::MissingColumn("PDR")));
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let err = ResultSeries::from_reader(
            r#"Time,Throughput,Avg Delay,PDR
            1.0, 10.0, 0.1, 90.0
            2.0, not a number, 0.2, 91.0
            "#
            .as_bytes(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Csv(3, _)));
    }

    #[test]
    fn missing_file() {
        let err = ResultSeries::from_path("does/not/exist/simulation_results_aodv.csv")
            .unwrap_err();
        assert!(matches!(err, Error::MissingFile(_)));
    }
}
