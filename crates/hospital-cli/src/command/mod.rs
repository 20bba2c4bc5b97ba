use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use self::{evaluate::EvaluateArg, goals::GoalsArg};

mod evaluate;
mod goals;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evaluate the initial state of a level with one or more heuristics
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Dump the goal description and goal index of a level
    Goals(#[clap(flatten)] GoalsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose)?;
    match &args.mode {
        Mode::Evaluate(arg) => evaluate::run(arg)?,
        Mode::Goals(arg) => goals::run(arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose {
        "hospital=debug,hospital_heuristics=debug,hospital_engine=debug,info"
    } else {
        "hospital=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}
