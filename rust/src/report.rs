//! Result tables for the console and the text report file.
//!
//! Console and file share one table layout:
//!
//! ```text
//!     Size |   Time (sec) |    Ratio |   Operations
//! --------------------------------------------------
//!      100 |     0.000002 |        ─ |          100
//!      200 |     0.000004 |     2.00 |          200
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::analysis::{average_ratio, check_scaling, verdict_message};
use crate::error::{LabResult, LabResultExt};
use crate::runner::Snapshot;
use crate::types::{Algorithm, ExperimentResult};

/// First line of every report file.
pub const REPORT_HEADER: &str = "ALGORITHM ANALYSIS RESULTS - Activity 06";
/// Second line of every report file.
pub const COURSE_TAG: &str = "CS101 Fall 2025 - Build a Better Algorithm";
/// Report file written by comparison runs.
pub const COMPARISON_REPORT_FILE: &str = "algorithm_comparison_results.txt";

const TABLE_WIDTH: usize = 50;
const BANNER_WIDTH: usize = 60;
const NO_RATIO: &str = "─";

/// `linear_search_results.txt` for a single-algorithm study.
pub fn report_file_name(algorithm: Algorithm) -> String {
    format!("{}_results.txt", algorithm.file_stem())
}

/// Write the size/time/ratio/operations table.
pub fn write_table<W: Write>(out: &mut W, result: &ExperimentResult) -> io::Result<()> {
    writeln!(
        out,
        "{:>8} | {:>12} | {:>8} | {:>12}",
        "Size", "Time (sec)", "Ratio", "Operations"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for (size, time, ratio, operations) in result.rows() {
        let time = format!("{:.6}", time.as_secs_f64());
        let ratio = match ratio {
            Some(ratio) => format!("{:.2}", ratio),
            None => NO_RATIO.to_string(),
        };
        writeln!(out, "{:>8} | {:>12} | {:>8} | {:>12}", size, time, ratio, operations)?;
    }
    Ok(())
}

/// Write the console view of one experiment: description, table, analysis.
pub fn write_results<W: Write>(out: &mut W, result: &ExperimentResult) -> io::Result<()> {
    let desc = result.description();
    let class = result.algorithm().complexity_class();

    writeln!(out)?;
    writeln!(out, "=== {} RESULTS ===", result.algorithm().name().to_uppercase())?;
    writeln!(out, "Expected Complexity: {}", desc.complexity)?;
    writeln!(out, "Why: {}", desc.explanation)?;
    writeln!(out, "Pattern to Watch: {}", desc.pattern)?;
    writeln!(out)?;

    write_table(out, result)?;

    writeln!(out)?;
    writeln!(out, "--- ANALYSIS ---")?;
    if let Some(avg) = average_ratio(result) {
        writeln!(out, "Average ratio between consecutive sizes: {:.2}", avg)?;
        writeln!(
            out,
            "Expected ratio when size doubles: about {:.1}",
            class.expected_doubling_ratio()
        )?;
        writeln!(out, "{}", verdict_message(class, check_scaling(result)))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the full report: header, course tag, one block per algorithm.
pub fn write_report_to<W: Write>(out: &mut W, results: &[ExperimentResult]) -> io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    writeln!(out, "{}", COURSE_TAG)?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out)?;

    for result in results {
        let desc = result.description();
        writeln!(out, "ALGORITHM: {}", result.algorithm().name())?;
        writeln!(out, "Complexity: {}", desc.complexity)?;
        writeln!(out, "Explanation: {}", desc.explanation)?;
        writeln!(out)?;
        write_table(out, result)?;
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Render the report into a string.
pub fn render_report(results: &[ExperimentResult]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report_to(&mut buffer, results);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the report to `path`, replacing any previous file.
pub fn write_report(path: &Path, results: &[ExperimentResult]) -> LabResult<()> {
    let context = format!("writing report {}", path.display());
    let write = || -> LabResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_report_to(&mut out, results)?;
        out.flush()?;
        Ok(())
    };
    write().with_context(&context)?;
    info!(path = %path.display(), algorithms = results.len(), "report written");
    Ok(())
}

/// Export results as pretty-printed JSON.
pub fn write_json(path: &Path, results: &[ExperimentResult]) -> LabResult<()> {
    let context = format!("writing json {}", path.display());
    let write = || -> LabResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, results)?;
        out.flush()?;
        Ok(())
    };
    write().with_context(&context)?;
    info!(path = %path.display(), "json results written");
    Ok(())
}

/// Write one size's worth of the quick demonstration.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "Input size: {}", snapshot.size)?;
    for (label, time) in [
        ("Array access", snapshot.array_access),
        ("Linear search", snapshot.linear_search),
        ("Binary search", snapshot.binary_search),
        ("Find pairs", snapshot.find_all_pairs),
    ] {
        writeln!(out, "  {}: {:.6} seconds", label, time.as_secs_f64())?;
    }
    writeln!(out)
}
