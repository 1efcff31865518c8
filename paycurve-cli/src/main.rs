//! Paycurve CLI: salary distribution reports from summary statistics.
//!
//! Commands:
//! - `compute`: fit the curve and print the full report (or JSON)
//! - `deciles`: print only the decile table
//! - `export`: write the sampled curve as CSV
//! - `config show`: print a preset as TOML
//! - `config check`: validate a TOML engine config

mod export;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use paycurve_core::format::Locale;
use paycurve_core::{
    compute_distribution, DistributionParameters, DistributionResult, EngineConfig, Preset,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "paycurve",
    version,
    about = "Paycurve CLI: log-normal salary distribution from median and mean"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the distribution and print the full report.
    Compute {
        #[command(flatten)]
        input: InputArgs,

        /// Print the full result as JSON instead of the text report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the decile table (D1..D9).
    Deciles {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write the sampled curve as CSV (value,density,cumulative_percent).
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Destination CSV file.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Engine configuration commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a preset as TOML.
    Show {
        /// Preset name: default, smooth, skew-spread.
        #[arg(long, default_value = "default")]
        preset: Preset,
    },
    /// Validate a TOML engine config file.
    Check {
        /// Path to the TOML file.
        file: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Median salary of the population.
    #[arg(long)]
    median: f64,

    /// Mean salary of the population.
    #[arg(long)]
    mean: f64,

    /// Personal salary to locate in the distribution.
    #[arg(long)]
    salary: f64,

    /// Skewness input (skew-spread policy).
    #[arg(long, requires = "spread")]
    skewness: Option<f64>,

    /// Spread input (skew-spread policy).
    #[arg(long, requires = "skewness")]
    spread: Option<f64>,

    /// Named preset: default, smooth, skew-spread.
    #[arg(long, conflicts_with = "config")]
    preset: Option<Preset>,

    /// Path to a TOML engine config.
    #[arg(long, env = "PAYCURVE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the number of sampling steps.
    #[arg(long)]
    steps: Option<usize>,

    /// Number formatting: fr or en.
    #[arg(long, default_value = "fr")]
    locale: Locale,
}

impl InputArgs {
    fn params(&self) -> DistributionParameters {
        let params = DistributionParameters::new(self.median, self.mean, self.salary);
        match (self.skewness, self.spread) {
            (Some(skewness), Some(spread)) => params.with_shape_inputs(skewness, spread),
            _ => params,
        }
    }

    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => EngineConfig::load(path)?,
            (None, Some(preset)) => preset.config(),
            (None, None) => EngineConfig::default(),
        };
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config and compute. Domain issues are logged, not fatal.
    fn compute(&self) -> Result<(DistributionParameters, EngineConfig, DistributionResult)> {
        let params = self.params();
        let config = self.engine_config()?;
        let result = compute_distribution(&params, &config);
        if let Some(issue) = &result.issue {
            warn!(%issue, "inputs do not define a distribution");
        }
        Ok((params, config, result))
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("PAYCURVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { input, json } => run_compute(&input, json),
        Commands::Deciles { input } => run_deciles(&input),
        Commands::Export { input, output } => run_export(&input, &output),
        Commands::Config { action } => match action {
            ConfigAction::Show { preset } => run_config_show(preset),
            ConfigAction::Check { file } => run_config_check(&file),
        },
    }
}

fn run_compute(input: &InputArgs, json: bool) -> Result<()> {
    let (params, config, result) = input.compute()?;
    if json {
        println!("{}", export::export_json(&result)?);
    } else {
        print!("{}", report::render_report(&params, &config, &result, input.locale));
    }
    Ok(())
}

fn run_deciles(input: &InputArgs) -> Result<()> {
    let (_, _, result) = input.compute()?;
    if let Some(issue) = &result.issue {
        println!("WARNING: no deciles for these inputs: {issue}");
        return Ok(());
    }
    print!("{}", report::render_deciles(&result, input.locale));
    Ok(())
}

fn run_export(input: &InputArgs, output: &Path) -> Result<()> {
    let (_, _, result) = input.compute()?;
    if let Some(issue) = &result.issue {
        println!("WARNING: nothing to export: {issue}");
        return Ok(());
    }
    let rows = export::write_samples_csv(&result.samples, output)?;
    info!(rows, path = %output.display(), "exported samples");
    println!("Wrote {rows} samples to {}", output.display());
    Ok(())
}

fn run_config_show(preset: Preset) -> Result<()> {
    let toml = preset
        .config()
        .to_toml_string()
        .with_context(|| format!("failed to render preset '{}'", preset.name()))?;
    println!("# preset: {}", preset.name());
    print!("{toml}");
    Ok(())
}

fn run_config_check(file: &Path) -> Result<()> {
    let config = EngineConfig::load(file).with_context(|| file.display().to_string())?;
    println!(
        "{}: ok ({} policy, {} steps)",
        file.display(),
        config.shape_policy.label(),
        config.steps
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn compute_args_build_parameters() {
        let cli = parse(&[
            "paycurve", "compute", "--median", "25000", "--mean", "30000", "--salary", "28000",
        ]);
        let Commands::Compute { input, json } = cli.command else {
            panic!("expected compute");
        };
        assert!(!json);
        let params = input.params();
        assert_eq!(params.median, 25_000.0);
        assert_eq!(params.skewness_input, None);
        assert_eq!(input.locale, Locale::Fr);
    }

    #[test]
    fn shape_inputs_must_come_together() {
        let res = Cli::try_parse_from([
            "paycurve", "compute", "--median", "1", "--mean", "2", "--salary", "1",
            "--skewness", "0.5",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn preset_and_steps_override() {
        let cli = parse(&[
            "paycurve", "deciles", "--median", "25000", "--mean", "30000", "--salary", "0",
            "--preset", "smooth", "--steps", "500",
        ]);
        let Commands::Deciles { input } = cli.command else {
            panic!("expected deciles");
        };
        let config = input.engine_config().unwrap();
        assert_eq!(config.steps, 500);
        assert_eq!(config.range_floor, EngineConfig::smooth().range_floor);
    }

    #[test]
    fn zero_steps_override_is_rejected() {
        let cli = parse(&[
            "paycurve", "compute", "--median", "25000", "--mean", "30000", "--salary", "0",
            "--steps", "0",
        ]);
        let Commands::Compute { input, .. } = cli.command else {
            panic!("expected compute");
        };
        assert!(input.engine_config().is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "steps = 42\n").unwrap();
        let cli = parse(&[
            "paycurve",
            "compute",
            "--median",
            "25000",
            "--mean",
            "30000",
            "--salary",
            "0",
            "--config",
            path.to_str().unwrap(),
        ]);
        let Commands::Compute { input, .. } = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(input.engine_config().unwrap().steps, 42);
    }

    #[test]
    fn unknown_preset_is_parse_error() {
        let res = Cli::try_parse_from(["paycurve", "config", "show", "--preset", "bogus"]);
        assert!(res.is_err());
    }

    #[test]
    fn config_check_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "ceiling_factor = -1.0\n").unwrap();
        let err = run_config_check(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.toml"), "{message}");
        assert!(message.contains("ceiling_factor"), "{message}");

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "steps = 10\n").unwrap();
        assert!(run_config_check(&good).is_ok());
    }
}
