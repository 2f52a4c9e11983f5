use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};

use complexity_lab::config::validate_sizes;
use complexity_lab::logging::init_tracing;
use complexity_lab::report::{write_json, write_snapshot};
use complexity_lab::runner::{snapshot, DEMO_SIZES};
use complexity_lab::session::{run_comparison, run_study};
use complexity_lab::{
    Algorithm, DataGenerator, ExperimentConfig, ExperimentRunner, LabError, Outcome, Session,
    SizePreset, Statistic,
};

/// Time four textbook algorithms and watch how they scale.
#[derive(Parser, Debug)]
#[command(name = "complexity-lab", version, about, long_about = None)]
struct Cli {
    /// TOML file with experiment settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random input data
    #[arg(long)]
    seed: Option<u64>,

    /// Timed trials per input size
    #[arg(long)]
    trials: Option<usize>,

    /// How trials are combined: mean or median
    #[arg(long)]
    statistic: Option<Statistic>,

    /// Directory for reports and charts
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven session (default)
    Interactive,
    /// Study one algorithm
    Run {
        /// array-access, binary-search, linear-search or find-all-pairs
        #[arg(short, long)]
        algorithm: Algorithm,
        #[command(flatten)]
        sizes: SizeArgs,
        /// Also export the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Compare several algorithms over the same sizes
    Compare {
        /// Comma separated algorithm names (at least two)
        #[arg(short, long, value_delimiter = ',', required = true)]
        algorithms: Vec<Algorithm>,
        #[command(flatten)]
        sizes: SizeArgs,
        /// Also export the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// One quick timing of every algorithm at a few sizes
    Demo,
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Comma separated sizes, at least 3, each between 10 and 50000
    #[arg(long, value_delimiter = ',', conflicts_with = "preset")]
    sizes: Vec<usize>,

    /// small, medium or large
    #[arg(long)]
    preset: Option<SizePreset>,
}

impl SizeArgs {
    fn resolve(&self) -> Result<Vec<usize>, LabError> {
        if !self.sizes.is_empty() {
            return validate_sizes(self.sizes.clone());
        }
        Ok(self.preset.unwrap_or(SizePreset::Small).sizes())
    }
}

/// Defaults, then the config file, then command-line flags.
fn load_config(cli: &Cli) -> anyhow::Result<ExperimentConfig> {
    let mut config = match &cli.config {
        Some(path) => ExperimentConfig::from_toml_file(path)?,
        None => ExperimentConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if let Some(statistic) = cli.statistic {
        config.statistic = statistic;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}

fn export_json(path: Option<&Path>, outcome: &Outcome) -> anyhow::Result<()> {
    if let Some(path) = path {
        write_json(path, &outcome.results)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!("JSON results saved to '{}'", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let output_dir = config.output_dir.clone();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let seed = config.seed;
    let value_range = config.value_range();
    let mut runner = ExperimentRunner::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let mut session = Session::new(io::stdin().lock(), out, runner, output_dir);
            match session.run() {
                Ok(_) => {}
                Err(LabError::InputClosed) => {
                    println!("\n\nActivity interrupted. Run again anytime!");
                }
                Err(err) => {
                    eprintln!("\nError: {}", err);
                    eprintln!("Check the output directory is writable and try again.");
                    std::process::exit(1);
                }
            }
        }
        Command::Run {
            algorithm,
            sizes,
            json,
        } => {
            let sizes = sizes.resolve()?;
            let outcome = run_study(&mut runner, algorithm, &sizes, &output_dir, &mut out)?;
            export_json(json.as_deref(), &outcome)?;
        }
        Command::Compare {
            algorithms,
            sizes,
            json,
        } => {
            if algorithms.len() < 2 {
                anyhow::bail!("need at least 2 algorithms for comparison");
            }
            let sizes = sizes.resolve()?;
            let outcome =
                run_comparison(&mut runner, &algorithms, &sizes, &output_dir, &mut out)?;
            export_json(json.as_deref(), &outcome)?;
        }
        Command::Demo => {
            let mut generator = DataGenerator::from_seed(seed, value_range);
            println!("=== COMPLEXITY DEMONSTRATION ===");
            println!("Watch how execution time changes as input size grows...\n");
            for size in DEMO_SIZES {
                write_snapshot(&mut out, &snapshot(&mut generator, size))?;
            }
        }
    }

    Ok(())
}
