//! Study and comparison workflows, plus the interactive prompts that feed them.
//!
//! Prompts re-ask on invalid menu input and invalid size lists. Any other
//! error, including input ending early, ends the session.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chart::{render_comparison_chart, ChartOutput};
use crate::config::{parse_custom_sizes, SizePreset, MAX_SIZE, MIN_SIZE};
use crate::error::{LabError, LabResult};
use crate::report::{report_file_name, write_report, write_results, COMPARISON_REPORT_FILE};
use crate::runner::ExperimentRunner;
use crate::types::{Algorithm, ExperimentResult};

/// Study one algorithm in detail, or compare several side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Study,
    Compare,
}

/// Results and files produced by a workflow.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub results: Vec<ExperimentResult>,
    pub report: Option<PathBuf>,
    pub chart: Option<ChartOutput>,
}

impl Outcome {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            report: None,
            chart: None,
        }
    }
}

/// Run one algorithm over `sizes`, print its results and write its report.
pub fn run_study<W: Write>(
    runner: &mut ExperimentRunner,
    algorithm: Algorithm,
    sizes: &[usize],
    output_dir: &Path,
    out: &mut W,
) -> LabResult<Outcome> {
    writeln!(out, "\nRunning {} experiments with sizes: {:?}", algorithm, sizes)?;
    let result = runner.run_experiment(algorithm, sizes);
    write_results(out, &result)?;

    let report = output_dir.join(report_file_name(algorithm));
    let results = vec![result];
    write_report(&report, &results)?;
    writeln!(out, "Results saved to '{}'", report.display())?;

    Ok(Outcome {
        results,
        report: Some(report),
        chart: None,
    })
}

/// Run several algorithms over the same sizes, chart them and write one report.
pub fn run_comparison<W: Write>(
    runner: &mut ExperimentRunner,
    algorithms: &[Algorithm],
    sizes: &[usize],
    output_dir: &Path,
    out: &mut W,
) -> LabResult<Outcome> {
    let names: Vec<&str> = algorithms.iter().map(|a| a.name()).collect();
    writeln!(out, "\nComparing: {}", names.join(", "))?;
    writeln!(out, "Running comparison with sizes: {:?}", sizes)?;

    let mut results = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let result = runner.run_experiment(algorithm, sizes);
        write_results(out, &result)?;
        results.push(result);
    }

    let chart = render_comparison_chart(&results, output_dir)?;
    match &chart {
        ChartOutput::Image(path) => {
            writeln!(out, "Performance comparison plot saved as '{}'", path.display())?
        }
        ChartOutput::Text(text) => write!(out, "{}", text)?,
    }

    let report = output_dir.join(COMPARISON_REPORT_FILE);
    write_report(&report, &results)?;
    writeln!(out, "Results saved to '{}'", report.display())?;

    Ok(Outcome {
        results,
        report: Some(report),
        chart: Some(chart),
    })
}

/// Menu-driven front end reading answers from `input`.
pub struct Session<R, W> {
    input: R,
    output: W,
    runner: ExperimentRunner,
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, runner: ExperimentRunner, output_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            runner,
            output_dir,
        }
    }

    /// Ask for a mode and run it to completion.
    pub fn run(&mut self) -> LabResult<Outcome> {
        self.show_menu()?;
        let outcome = match self.choose_mode()? {
            Mode::Study => {
                let algorithm = self.choose_algorithm()?;
                self.describe(algorithm)?;
                let sizes = self.choose_sizes()?;
                run_study(
                    &mut self.runner,
                    algorithm,
                    &sizes,
                    &self.output_dir,
                    &mut self.output,
                )?
            }
            Mode::Compare => match self.choose_comparison()? {
                Some(algorithms) => {
                    let sizes = self.choose_sizes()?;
                    run_comparison(
                        &mut self.runner,
                        &algorithms,
                        &sizes,
                        &self.output_dir,
                        &mut self.output,
                    )?
                }
                None => Outcome::empty(),
            },
        };

        writeln!(self.output, "\n{}", "=".repeat(60))?;
        writeln!(self.output, "ACTIVITY COMPLETE!")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        Ok(outcome)
    }

    fn show_menu(&mut self) -> LabResult<()> {
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "WELCOME TO 'BUILD A BETTER ALGORITHM'")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "Available algorithms to study:")?;
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} - {}",
                i + 1,
                algorithm.name().to_uppercase(),
                algorithm.description().complexity
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line.
    fn prompt(&mut self, message: &str) -> LabResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LabError::InputClosed);
        }
        let answer = line.trim().to_string();
        debug!(prompt = message.trim(), answer = %answer, "input");
        Ok(answer)
    }

    pub fn choose_mode(&mut self) -> LabResult<Mode> {
        writeln!(self.output, "Choose your approach:")?;
        writeln!(self.output, "1. Study one algorithm in detail (recommended first)")?;
        writeln!(self.output, "2. Compare multiple algorithms side by side")?;
        loop {
            match self.prompt("\nEnter choice (1-2): ")?.as_str() {
                "1" => return Ok(Mode::Study),
                "2" => return Ok(Mode::Compare),
                _ => writeln!(self.output, "Please enter 1 or 2")?,
            }
        }
    }

    pub fn choose_algorithm(&mut self) -> LabResult<Algorithm> {
        loop {
            let answer = self.prompt("Which algorithm would you like to study? (1-4): ")?;
            let choice = answer.parse::<usize>().ok().and_then(Algorithm::from_menu_index);
            match choice {
                Some(algorithm) => {
                    writeln!(self.output, "\nYou've selected: {}", algorithm)?;
                    return Ok(algorithm);
                }
                None => writeln!(self.output, "Please enter 1, 2, 3, or 4")?,
            }
        }
    }

    fn describe(&mut self, algorithm: Algorithm) -> LabResult<()> {
        let desc = algorithm.description();
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(self.output, "ALGORITHM DEEP DIVE: {}", algorithm.name().to_uppercase())?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "TIME COMPLEXITY: {}", desc.complexity)?;
        writeln!(self.output, "WHY: {}", desc.explanation)?;
        writeln!(self.output, "WATCH FOR: {}", desc.pattern)?;
        Ok(())
    }

    /// Offer the presets and a custom list.
    pub fn choose_sizes(&mut self) -> LabResult<Vec<usize>> {
        writeln!(self.output, "\nChoose experiment sizes for testing your algorithm:")?;
        for (i, preset) in SizePreset::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, preset)?;
        }
        writeln!(self.output, "4. Custom sizes")?;

        loop {
            let answer = self.prompt("\nEnter choice (1-4): ")?;
            match answer.as_str() {
                "1" => return Ok(SizePreset::Small.sizes()),
                "2" => return Ok(SizePreset::Medium.sizes()),
                "3" => return Ok(SizePreset::Large.sizes()),
                "4" => return self.read_custom_sizes(),
                _ => writeln!(self.output, "Please enter 1, 2, 3, or 4")?,
            }
        }
    }

    /// Re-prompt until the list passes validation; returns it sorted.
    pub fn read_custom_sizes(&mut self) -> LabResult<Vec<usize>> {
        writeln!(
            self.output,
            "\nEnter custom sizes separated by commas (e.g., 100,200,400,800)"
        )?;
        writeln!(
            self.output,
            "Use at least 3 sizes, each between {} and {}",
            MIN_SIZE, MAX_SIZE
        )?;

        loop {
            let answer = self.prompt("Enter sizes: ")?;
            match parse_custom_sizes(&answer) {
                Ok(sizes) => {
                    writeln!(self.output, "Using sizes: {:?}", sizes)?;
                    return Ok(sizes);
                }
                Err(err) if err.is_recoverable_input() => writeln!(self.output, "{}", err)?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask about each algorithm in turn. `None` when fewer than two are picked.
    pub fn choose_comparison(&mut self) -> LabResult<Option<Vec<Algorithm>>> {
        writeln!(self.output, "\nChoose 2-4 algorithms to compare:")?;
        let mut chosen = Vec::new();
        for algorithm in Algorithm::ALL {
            let answer = self.prompt(&format!("Include {}? (y/n): ", algorithm))?;
            if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
                chosen.push(algorithm);
            }
        }

        if chosen.len() < 2 {
            writeln!(self.output, "Need at least 2 algorithms for comparison!")?;
            return Ok(None);
        }
        Ok(Some(chosen))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExperimentConfig;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let config = ExperimentConfig {
            seed: Some(3),
            ..ExperimentConfig::default()
        };
        Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            ExperimentRunner::new(config).unwrap(),
            PathBuf::from("."),
        )
    }

    fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_mode_reprompts_on_invalid_input() {
        let mut s = session("3\nx\n2\n");
        assert_eq!(s.choose_mode().unwrap(), Mode::Compare);
        assert_eq!(output_of(s).matches("Please enter 1 or 2").count(), 2);
    }

    #[test]
    fn test_algorithm_choice() {
        let mut s = session("0\nfive\n3\n");
        assert_eq!(s.choose_algorithm().unwrap(), Algorithm::LinearSearch);
        assert_eq!(output_of(s).matches("Please enter 1, 2, 3, or 4").count(), 2);
    }

    #[test]
    fn test_preset_sizes() {
        let mut s = session("2\n");
        assert_eq!(s.choose_sizes().unwrap(), vec![500, 1000, 2000, 4000]);
    }

    #[test]
    fn test_custom_sizes_reprompt_until_valid() {
        let mut s = session("4\n100,200\n5,100,200\nabc\n800, 100, 400\n");
        assert_eq!(s.choose_sizes().unwrap(), vec![100, 400, 800]);
        let output = output_of(s);
        assert!(output.contains("minimum required: 3"));
        assert!(output.contains("out of range"));
        assert!(output.contains("not a number"));
        assert!(output.contains("Using sizes: [100, 400, 800]"));
    }

    #[test]
    fn test_comparison_needs_two() {
        let mut s = session("y\nn\nn\nn\n");
        assert_eq!(s.choose_comparison().unwrap(), None);
        assert!(output_of(s).contains("Need at least 2 algorithms"));
    }

    #[test]
    fn test_comparison_selection() {
        let mut s = session("yes\nn\nY\nn\n");
        assert_eq!(
            s.choose_comparison().unwrap(),
            Some(vec![Algorithm::ArrayAccess, Algorithm::LinearSearch])
        );
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut s = session("");
        assert!(matches!(s.choose_mode(), Err(LabError::InputClosed)));
    }

    #[test]
    fn test_cancelled_comparison_produces_nothing() {
        let mut s = session("2\nn\nn\nn\nn\n");
        let outcome = s.run().unwrap();
        assert!(outcome.results.is_empty());
        assert!(outcome.report.is_none());
    }
}
