//! solve subcommand handler.
//!
//! Parses and solves a single recurrence, printing text or JSON.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use rec_ast::MethodHint;
use rec_session::SolverSession;

use super::OutputFormat;
use crate::config::RecConfig;
use crate::input::load_recurrence;
use crate::json_types::{print_pretty_json, BaseCaseJson, ErrorJsonOutput, SolveJsonOutput};

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Recurrence to solve, e.g. "T(n) = 2T(n/2) + n" (the "T(n) =" prefix is optional)
    pub recurrence: String,

    /// Method: auto, master, substitution, iteration
    #[arg(long, short)]
    pub method: Option<String>,

    /// Record a base case (repeatable)
    #[arg(long = "base", value_name = "N=VALUE", value_parser = parse_base_case)]
    pub base: Vec<(u64, f64)>,

    /// Print the derivation steps
    #[arg(long, default_value_t = false)]
    pub steps: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn parse_base_case(s: &str) -> std::result::Result<(u64, f64), String> {
    let (n, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected N=VALUE, got '{}'", s))?;
    let n = n
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid N '{}': {}", n.trim(), e))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid VALUE '{}': {}", value.trim(), e))?;
    Ok((n, value))
}

enum Outcome {
    Solved(SolveJsonOutput),
    Failed { error: String, steps: Vec<String> },
}

pub fn run(args: SolveArgs, config: &RecConfig) -> ExitCode {
    let show_steps = args.steps || config.show_steps;
    let outcome = match run_inner(&args, config) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::Failed {
            error: format!("{:#}", e),
            steps: Vec::new(),
        },
    };

    match (outcome, args.format) {
        (Outcome::Solved(output), OutputFormat::Json) => {
            print_pretty_json(&output);
            ExitCode::SUCCESS
        }
        (Outcome::Solved(output), OutputFormat::Text) => {
            if show_steps {
                print_steps(&output.steps);
            }
            println!("Recurrence: {}", output.recurrence);
            println!("Solution: {}", output.solution);
            println!("Method: {}", output.method);
            ExitCode::SUCCESS
        }
        (Outcome::Failed { error, steps }, OutputFormat::Json) => {
            let output = ErrorJsonOutput::with_input(error, &args.recurrence).with_steps(&steps);
            print_pretty_json(&output);
            ExitCode::FAILURE
        }
        (Outcome::Failed { error, steps }, OutputFormat::Text) => {
            if show_steps {
                print_steps(&steps);
            }
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_inner(args: &SolveArgs, config: &RecConfig) -> Result<Outcome> {
    let method = args
        .method
        .as_deref()
        .or(config.default_method.as_deref())
        .unwrap_or("auto");
    let hint = MethodHint::parse_optional(method).context("invalid --method")?;

    let mut session = SolverSession::new();
    if !load_recurrence(&mut session, &args.recurrence) {
        return Ok(Outcome::Failed {
            error: format!("Unrecognized recurrence: {}", args.recurrence),
            steps: session.steps().to_vec(),
        });
    }
    for &(n, value) in &args.base {
        session.add_base_case(n, value);
    }

    let Some(solution) = session.solve(hint) else {
        return Ok(Outcome::Failed {
            error: "No applicable method could solve the recurrence".to_string(),
            steps: session.steps().to_vec(),
        });
    };

    Ok(Outcome::Solved(to_json(&args.recurrence, &session, solution)))
}

fn to_json(input: &str, session: &SolverSession, solution: String) -> SolveJsonOutput {
    let (recurrence, kind) = session
        .recurrence()
        .map(|r| (r.to_string(), r.kind().as_str().to_string()))
        .unwrap_or_default();
    SolveJsonOutput {
        ok: true,
        input: input.to_string(),
        recurrence,
        kind,
        asymptotic_notation: session
            .asymptotic_notation()
            .unwrap_or(solution.as_str())
            .to_string(),
        solution,
        method: session.method().map(|m| m.name().to_string()).unwrap_or_default(),
        steps: session.steps().to_vec(),
        base_cases: session
            .base_cases()
            .iter()
            .map(|(n, value)| BaseCaseJson { n, value })
            .collect(),
        elapsed_us: session.elapsed().as_micros().try_into().unwrap_or(u64::MAX),
    }
}

pub fn print_steps(steps: &[String]) {
    println!("Solution Steps:");
    for (i, step) in steps.iter().enumerate() {
        println!("Step {}: {}", i + 1, step);
    }
    println!();
}
