//! `recsolve`: solve recurrence relations from the command line.

mod commands;
mod completer;
mod config;
mod input;
mod json_types;
mod repl;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::classify::ClassifyArgs;
use commands::solve::SolveArgs;
use config::RecConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recsolve",
    version,
    about = "Classify and solve recurrence relations step by step",
    after_help = "Examples:\n  recsolve solve \"T(n) = 2T(n/2) + n\"\n  recsolve solve \"T(n-1) + 1\" --method iteration --steps\n  recsolve classify \"n^2 log n\"\n  recsolve                     # interactive REPL"
)]
struct Cli {
    /// Log solver decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a single recurrence
    Solve(SolveArgs),
    /// Show the growth class of a work term
    Classify(ClassifyArgs),
    /// Start the interactive REPL (default)
    Repl,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = RecConfig::load();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Solve(args) => commands::solve::run(args, &config),
        Command::Classify(args) => {
            commands::classify::run(args);
            ExitCode::SUCCESS
        }
        Command::Repl => match repl::Repl::new(&config).run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
