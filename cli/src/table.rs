use std::io::Write;

use vanet_report_core::{protocol::Protocol, summary::SummaryStatistic};

/// Writes the fixed-width mean-metrics table the simulator report ends with.
pub fn write_summary_table(
    out: &mut impl Write,
    stats_by_label: &[(Protocol, SummaryStatistic)],
) -> std::io::Result<()> {
    writeln!(out, "=== AVERAGE PERFORMANCE METRICS ===")?;
    writeln!(
        out,
        "{:<10}| {:<18}| {:<14}| {:<8}",
        "Protocol", "Throughput (Kbps)", "Delay (s)", "PDR (%)"
    )?;
    for (protocol, stats) in stats_by_label {
        writeln!(
            out,
            "{:<10}| {:<18}| {:<14}| {:<8}",
            protocol.label(),
            format!("{:.2}", stats.throughput),
            format!("{:.4}", stats.avg_delay),
            format!("{:.2}", stats.pdr),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let stats = SummaryStatistic {
            throughput: 15.0,
            avg_delay: 0.2,
            pdr: 92.5,
        };

        let mut buf = Vec::new();
        write_summary_table(&mut buf, &[(Protocol::Sdn, stats)]).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "=== AVERAGE PERFORMANCE METRICS ===");
        assert!(lines[1].starts_with("Protocol"));
        assert!(lines[1].contains("Delay (s)"));
        assert!(!lines[1].contains("Avg Delay (s)"));
        assert!(lines[2].starts_with("SDN"));
        assert!(lines[2].contains("15.00"));
        assert!(lines[2].contains("0.2000"));
        assert!(lines[2].contains("92.50"));

        // Fixed width: separators line up across header and rows
        let bars = |s: &str| s.match_indices('|').map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(bars(lines[1]), bars(lines[2]));
    }
}
