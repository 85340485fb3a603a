//! # warmup
//!
//! Command-line front end for the warmup problems.
//!
//! ## Usage
//! ```bash
//! warmup sum 1 2                           # 3
//! warmup hex-to-rgb '#FFF'                 # (255, 255, 255)
//! warmup transpose '[[1,2],[3,4]]'         # [[1,3],[2,4]]
//! warmup --output json to-base 5 37        # {"error":{"kind":"range",...}}
//! warmup --list
//! ```
//!
//! Each argument is parsed as JSON; anything that is not valid JSON is passed
//! as a string. Flags go before the problem name.
//!
//! ## Startup Sequence
//! 1. Parse command-line arguments
//! 2. Load `WARMUP_*` configuration from the environment
//! 3. Initialize tracing (stderr)
//! 4. Evaluate and print

mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use warmup_core::{evaluate, Problem};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Evaluate a warmup problem.
#[derive(Parser, Debug)]
#[command(name = "warmup", author, version, about, long_about = None)]
struct Args {
    /// Problem to evaluate (see --list)
    #[arg(required_unless_present = "list")]
    problem: Option<Problem>,

    /// Problem arguments as JSON; non-JSON text is taken as a string
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Output format: plain or json [env: WARMUP_OUTPUT]
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error) [env: WARMUP_LOG_LEVEL]
    #[arg(short, long)]
    log_level: Option<String>,

    /// List every problem with its number of arguments
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = CliError::from(err);
            output::report(&err, args.output.unwrap_or_default());
            return ExitCode::from(err.exit_code());
        }
    };

    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level);

    let format = args.output.unwrap_or(config.output);
    debug!(log_level = %log_level, output = %format, "Configuration loaded");

    match run(&args, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report(&err, format);
            ExitCode::from(err.exit_code())
        }
    }
}

/// `RUST_LOG` wins over the flag and the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, format: OutputFormat) -> Result<(), CliError> {
    if args.list {
        for problem in Problem::ALL {
            println!("{:<12} {}", problem.name(), problem.arity());
        }
        return Ok(());
    }

    let problem = args.problem.ok_or(CliError::MissingProblem)?;
    let values: Vec<_> = args.args.iter().map(|raw| output::parse_argument(raw)).collect();

    info!(problem = %problem, argc = values.len(), "Evaluating");
    let value = evaluate(problem, &values)?;

    println!("{}", output::render_value(&value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_problem_and_arguments() {
        let args = Args::try_parse_from(["warmup", "to-base", "255", "16"]).unwrap();
        assert_eq!(args.problem, Some(Problem::ToBase));
        assert_eq!(args.args, vec!["255", "16"]);
        assert!(!args.list);
    }

    #[test]
    fn test_accepts_negative_numbers() {
        let args = Args::try_parse_from(["warmup", "century", "-1"]).unwrap();
        assert_eq!(args.problem, Some(Problem::Century));
        assert_eq!(args.args, vec!["-1"]);
    }

    #[test]
    fn test_parses_flags() {
        let args =
            Args::try_parse_from(["warmup", "--output", "json", "-l", "debug", "phone", "x"]).unwrap();
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_unknown_problem() {
        assert!(Args::try_parse_from(["warmup", "abProblem", "1", "2"]).is_err());
    }

    #[test]
    fn test_problem_required_without_list() {
        assert!(Args::try_parse_from(["warmup"]).is_err());
        assert!(Args::try_parse_from(["warmup", "--list"]).is_ok());
    }

    #[test]
    fn test_run_reports_problem_errors() {
        let args = Args::try_parse_from(["warmup", "fibonacci", "0"]).unwrap();
        let err = run(&args, OutputFormat::Plain).unwrap_err();
        assert!(matches!(err, CliError::Problem(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
