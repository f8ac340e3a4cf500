//! pmf CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use pmf_core::{DistributionKind, ParameterSet, RenderEvent, RenderObserver};
use pmf_prob::Session;
use std::path::PathBuf;
use std::process::ExitCode;

mod batch;
mod output;

use output::{OutputFormat, Report};

/// Exit code when any evaluation was rejected (violations or invalid input).
const EXIT_REJECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "pmf")]
#[command(about = "pmf - exact binomial, Poisson and hypergeometric probabilities")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// P(X = k) for X ~ Binomial(n, p)
    Binomial {
        /// Number of trials (integer >= 0)
        #[arg(short = 'n', long = "n", default_value = "")]
        n: String,

        /// Success probability in [0, 1]
        #[arg(short = 'p', long = "p", default_value = "")]
        p: String,

        /// Number of successes (integer in [0, n])
        #[arg(short = 'k', long = "k", default_value = "")]
        k: String,

        /// Decimal places shown (empty, non-numeric or 0 means 10)
        #[arg(long, default_value = "")]
        decimals: String,
    },

    /// P(X = k) for X ~ Poisson(lambda)
    Poisson {
        /// Rate (>= 0)
        #[arg(short = 'l', long, default_value = "")]
        lambda: String,

        /// Number of events (integer >= 0)
        #[arg(short = 'k', long = "k", default_value = "")]
        k: String,

        /// Decimal places shown (empty, non-numeric or 0 means 10)
        #[arg(long, default_value = "")]
        decimals: String,
    },

    /// P(X = k) for X ~ Hypergeometric(N, K, n)
    Hypergeometric {
        /// Population size N (integer > 0)
        #[arg(short = 'N', long, default_value = "")]
        population: String,

        /// Successes in the population K (integer in [0, N])
        #[arg(short = 'K', long, default_value = "")]
        successes: String,

        /// Draws n (integer in [0, N])
        #[arg(short = 'n', long, default_value = "")]
        draws: String,

        /// Successes drawn k (integer in [0, min(K, n)])
        #[arg(short = 'k', long = "k", default_value = "")]
        k: String,

        /// Decimal places shown (empty, non-numeric or 0 means 10)
        #[arg(long, default_value = "")]
        decimals: String,
    },

    /// Print the symbolic PMF of a distribution
    Formula {
        /// binomial, hypergeometric or poisson
        kind: DistributionKind,
    },

    /// Evaluate a list of requests from a YAML or JSON file
    Batch {
        /// Batch file (`.json` is read as JSON, anything else as YAML)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Logs each completed panel render.
struct LogObserver;

impl RenderObserver for LogObserver {
    fn render_complete(&self, event: RenderEvent) {
        tracing::debug!(?event, "render complete");
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(LogObserver);
    let format = cli.format;

    match cli.command {
        Commands::Binomial { n, p, k, decimals } => {
            let params = ParameterSet::new().with("n", n).with("k", k).with("p", p);
            cmd_evaluate(&mut session, DistributionKind::Binomial, &params, &decimals, format)
        }
        Commands::Poisson { lambda, k, decimals } => {
            let params = ParameterSet::new().with("lambda", lambda).with("k", k);
            cmd_evaluate(&mut session, DistributionKind::Poisson, &params, &decimals, format)
        }
        Commands::Hypergeometric { population, successes, draws, k, decimals } => {
            let params = ParameterSet::new()
                .with("N", population)
                .with("K", successes)
                .with("n", draws)
                .with("k", k);
            cmd_evaluate(&mut session, DistributionKind::Hypergeometric, &params, &decimals, format)
        }
        Commands::Formula { kind } => {
            session.select(kind);
            output::emit_formula(kind, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch { input } => cmd_batch(&mut session, &input, format),
    }
}

fn cmd_evaluate(
    session: &mut Session<LogObserver>,
    kind: DistributionKind,
    params: &ParameterSet,
    decimals: &str,
    format: OutputFormat,
) -> Result<ExitCode> {
    session.select(kind);
    let outcome = session.submit(params, decimals);
    let report = Report::new(session, &outcome);
    output::emit(std::slice::from_ref(&report), format, false)?;
    Ok(exit_code(report.ok))
}

fn cmd_batch(
    session: &mut Session<LogObserver>,
    input: &std::path::Path,
    format: OutputFormat,
) -> Result<ExitCode> {
    tracing::info!(path = %input.display(), "loading batch");
    let cfg = batch::read_batch_config(input)?;
    tracing::info!(requests = cfg.requests.len(), "batch loaded");

    let reports = batch::run_batch(session, cfg);
    output::emit(&reports, format, true)?;
    Ok(exit_code(reports.iter().all(|r| r.ok)))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::from(EXIT_REJECTED) }
}
