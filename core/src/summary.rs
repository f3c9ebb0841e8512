use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formats::results::{ResultRow, ResultSeries};

/// One of the three plottable result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Throughput,
    AvgDelay,
    Pdr,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Throughput, Self::AvgDelay, Self::Pdr];

    pub fn label(self) -> &'static str {
        match self {
            Self::Throughput => "Throughput",
            Self::AvgDelay => "Avg Delay",
            Self::Pdr => "PDR",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Throughput => "Kbps",
            Self::AvgDelay => "s",
            Self::Pdr => "%",
        }
    }

    /// Stem used for per-metric chart file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Throughput => "throughput",
            Self::AvgDelay => "avg_delay",
            Self::Pdr => "pdr",
        }
    }

    pub fn get(self, row: &ResultRow) -> f32 {
        match self {
            Self::Throughput => row.throughput,
            Self::AvgDelay => row.avg_delay,
            Self::Pdr => row.pdr,
        }
    }
}

#[derive(Error, Debug)]
#[error("Cannot summarize an empty result series (mean is undefined)")]
pub struct EmptySeriesError;

/// Arithmetic mean of each result column over one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    pub throughput: f32,
    pub avg_delay: f32,
    pub pdr: f32,
}

impl SummaryStatistic {
    pub fn from_series(series: &ResultSeries) -> Result<Self, EmptySeriesError> {
        if series.is_empty() {
            return Err(EmptySeriesError);
        }

        // Accumulate in f64 so long runs don't drift
        let mut throughput = 0f64;
        let mut avg_delay = 0f64;
        let mut pdr = 0f64;
        for row in series.rows() {
            throughput += f64::from(row.throughput);
            avg_delay += f64::from(row.avg_delay);
            pdr += f64::from(row.pdr);
        }

        let n = series.len() as f64;
        Ok(Self {
            throughput: (throughput / n) as f32,
            avg_delay: (avg_delay / n) as f32,
            pdr: (pdr / n) as f32,
        })
    }

    pub fn get(&self, metric: Metric) -> f32 {
        match metric {
            Metric::Throughput => self.throughput,
            Metric::AvgDelay => self.avg_delay,
            Metric::Pdr => self.pdr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(csv: &str) -> ResultSeries {
        ResultSeries::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn mean_of_two_rows() {
        let series = series(
            r#"Time,Throughput,Avg Delay,PDR
            1.0, 10.0, 0.1, 90.0
            2.0, 20.0, 0.3, 95.0
            "#,
        );

        let stats = SummaryStatistic::from_series(&series).unwrap();
        assert_eq!(stats.throughput, 15.0);
        assert!((stats.avg_delay - 0.2).abs() < 1e-6);
        assert_eq!(stats.pdr, 92.5);
    }

    #[test]
    fn empty_series() {
        let series = series("Time,Throughput,Avg Delay,PDR\n");
        assert!(SummaryStatistic::from_series(&series).is_err());
    }

    #[test]
    fn metric_accessors_agree() {
        let series = series(
            r#"Time,Throughput,Avg Delay,PDR
            1.0, 42.0, 0.5, 88.0
            "#,
        );

        let row = &series.rows()[0];
        let stats = SummaryStatistic::from_series(&series).unwrap();
        for metric in Metric::ALL {
            assert_eq!(metric.get(row), stats.get(metric));
        }
    }
}
