//! Comparison chart: a PNG when built with the `charts` feature, a text bar
//! chart otherwise.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::LabResult;
use crate::types::ExperimentResult;

/// File name of the rendered PNG chart.
pub const CHART_FILE: &str = "algorithm_comparison.png";

/// Longest bar in the text chart, in characters.
const MAX_BAR_WIDTH: usize = 50;

/// A max/min time spread above this switches the PNG chart to log scale.
const LOG_SCALE_SPREAD: f64 = 100.0;

/// What [`render_comparison_chart`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Image(PathBuf),
    Text(String),
}

/// Draw all results on one chart inside `output_dir`.
///
/// Falls back to the text chart when PNG support is not compiled in.
pub fn render_comparison_chart(
    results: &[ExperimentResult],
    output_dir: &Path,
) -> LabResult<ChartOutput> {
    #[cfg(feature = "charts")]
    {
        let path = output_dir.join(CHART_FILE);
        png::render(results, &path)?;
        tracing::info!(path = %path.display(), "chart written");
        Ok(ChartOutput::Image(path))
    }

    #[cfg(not(feature = "charts"))]
    {
        tracing::warn!(
            dir = %output_dir.display(),
            "PNG charts not compiled in (enable the `charts` feature); drawing text chart"
        );
        Ok(ChartOutput::Text(render_text_chart(results)))
    }
}

/// Bars scaled so each algorithm's slowest size spans `MAX_BAR_WIDTH`.
pub fn render_text_chart(results: &[ExperimentResult]) -> String {
    let mut out = String::new();
    let banner = "=".repeat(60);

    out.push('\n');
    out.push_str(&banner);
    out.push_str("\nTEXT-BASED PERFORMANCE VISUALIZATION\n");
    out.push_str(&banner);
    out.push('\n');

    for result in results {
        out.push_str(&format!(
            "\n{} - {}\n{}\n",
            result.algorithm().name(),
            result.description().complexity,
            "-".repeat(40)
        ));

        let max_time = result.times().iter().max().copied().unwrap_or(Duration::ZERO);
        for (size, time, _, _) in result.rows() {
            let bar = "█".repeat(bar_length(time, max_time));
            out.push_str(&format!("{:>6}: {} ({:.6}s)\n", size, bar, time.as_secs_f64()));
        }
    }
    out
}

fn bar_length(time: Duration, max_time: Duration) -> usize {
    if max_time.is_zero() {
        return 0;
    }
    let fraction = time.as_secs_f64() / max_time.as_secs_f64();
    (fraction * MAX_BAR_WIDTH as f64) as usize
}

/// True when the slowest time is more than `LOG_SCALE_SPREAD` times the
/// fastest non-zero time.
pub fn needs_log_scale(results: &[ExperimentResult]) -> bool {
    let times = results.iter().flat_map(|r| r.times().iter().copied());
    let max = times.clone().max().unwrap_or(Duration::ZERO);
    let min_positive = times.filter(|t| !t.is_zero()).min();

    match min_positive {
        Some(min) => max.as_secs_f64() / min.as_secs_f64() > LOG_SCALE_SPREAD,
        None => false,
    }
}

#[cfg(feature = "charts")]
mod png {
    use std::path::Path;

    use plotters::prelude::*;

    use super::needs_log_scale;
    use crate::error::{LabError, LabResult};
    use crate::types::ExperimentResult;

    fn chart_error<E: std::fmt::Display>(e: E) -> LabError {
        LabError::Chart(e.to_string())
    }

    /// Time vs size, one line per algorithm. With a wide spread of times the
    /// y axis shows log10 of the seconds.
    pub(super) fn render(results: &[ExperimentResult], path: &Path) -> LabResult<()> {
        let log_scale = needs_log_scale(results);
        let floor = results
            .iter()
            .flat_map(|r| r.times().iter())
            .filter(|t| !t.is_zero())
            .min()
            .map(|t| t.as_secs_f64())
            .unwrap_or(f64::MIN_POSITIVE);
        let value = |secs: f64| {
            if log_scale {
                secs.max(floor).log10()
            } else {
                secs
            }
        };

        let series: Vec<(String, Vec<(f64, f64)>)> = results
            .iter()
            .map(|result| {
                let label = format!(
                    "{} - {}",
                    result.algorithm().name(),
                    result.description().complexity
                );
                let points = result
                    .rows()
                    .map(|(size, time, _, _)| (size as f64, value(time.as_secs_f64())))
                    .collect();
                (label, points)
            })
            .collect();

        let all_points = series.iter().flat_map(|(_, points)| points.iter());
        let x_max = all_points.clone().map(|p| p.0).fold(1.0_f64, f64::max);
        let mut y_min = all_points.clone().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let mut y_max = all_points.map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        if y_max - y_min <= f64::EPSILON {
            y_max = y_min + 1.0;
        }
        if !log_scale {
            y_min = 0.0;
        }

        let y_desc = if log_scale {
            "Execution Time (log10 seconds)"
        } else {
            "Execution Time (seconds)"
        };

        let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Algorithm Performance Comparison", ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(0.0..x_max * 1.05, y_min..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc("Input Size")
            .y_desc(y_desc)
            .draw()
            .map_err(chart_error)?;

        let colors = [RED, BLUE, GREEN, MAGENTA];
        for (idx, (label, points)) in series.iter().enumerate() {
            let color = colors[idx % colors.len()];

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(chart_error)?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            chart
                .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, color.filled())))
                .map_err(chart_error)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Algorithm;

    fn result(algorithm: Algorithm, micros: &[u64]) -> ExperimentResult {
        let mut result = ExperimentResult::new(algorithm);
        for (i, &m) in micros.iter().enumerate() {
            result.record(100 * (i + 1), Duration::from_micros(m), 0);
        }
        result
    }

    #[test]
    fn test_text_chart_scales_to_max() {
        let chart = render_text_chart(&[result(Algorithm::LinearSearch, &[10, 20])]);
        assert!(chart.contains("TEXT-BASED PERFORMANCE VISUALIZATION"));
        assert!(chart.contains("Linear Search - O(n) - Linear Time"));
        assert!(chart.contains(&format!("   200: {} (0.000020s)", "█".repeat(50))));
        assert!(chart.contains(&format!("   100: {} (0.000010s)", "█".repeat(25))));
    }

    #[test]
    fn test_text_chart_all_zero_times() {
        let chart = render_text_chart(&[result(Algorithm::ArrayAccess, &[0, 0])]);
        assert!(chart.contains("   100:  (0.000000s)"));
    }

    #[test]
    fn test_log_scale_threshold() {
        let narrow = [result(Algorithm::LinearSearch, &[10, 20, 40])];
        assert!(!needs_log_scale(&narrow));

        let wide = [
            result(Algorithm::ArrayAccess, &[1, 1, 1]),
            result(Algorithm::FindAllPairs, &[100, 400, 1600]),
        ];
        assert!(needs_log_scale(&wide));
        assert!(!needs_log_scale(&[]));
    }

    #[cfg(not(feature = "charts"))]
    #[test]
    fn test_without_png_support_falls_back_to_text() {
        let output =
            render_comparison_chart(&[result(Algorithm::BinarySearch, &[1, 2])], Path::new("."))
                .unwrap();
        assert!(matches!(output, ChartOutput::Text(text) if text.contains("Binary Search")));
    }
}
