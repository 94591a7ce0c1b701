//! pair-color - 25-pair telecom color code converter

use clap::{Parser, Subcommand};
use pair_color::check::{self, Outcome};
use pair_color::config::Config;
use pair_color::{logger, manual, style};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pair-color")]
#[command(about = "25-pair telecom color code converter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Disable colored output (also honors `NO_COLOR`)
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the self-check, then print the reference manual (default)
    Run,
    /// Print the reference manual
    Manual,
    /// Print the major and minor colors for a pair number
    Colors {
        /// Pair number, 1-25
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the pair number for a major and minor color
    Number {
        /// Major color, e.g. "White"
        major: String,
        /// Minor color, e.g. "Blue"
        minor: String,
    },
    /// Run the known-good fixtures and report each one
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::new(cli.no_color, cli.verbose);
    logger::init(config.verbose);
    tracing::debug!(?config, "starting");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(),
        Command::Manual => print_manual(),
        Command::Colors { number } => match pair_color::colors_from_pair_number(number) {
            Ok(pair) => {
                tracing::debug!(number, %pair, "converted pair number");
                println!("{pair}");
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
        Command::Number { major, minor } => {
            match pair_color::pair_number_from_colors(&major, &minor) {
                Ok(number) => {
                    tracing::debug!(%major, %minor, number, "converted colors");
                    println!("{number}");
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e),
            }
        }
        Command::Check => run_check(&config),
    }
}

/// Self-check, manual, sign-off. Any fixture failure aborts before the manual.
fn run() -> ExitCode {
    let outcomes = check::run_all();
    let failures: Vec<&Outcome> = outcomes.iter().filter(|o| !o.passed()).collect();
    if !failures.is_empty() {
        for outcome in failures {
            eprintln!(
                "self-check failed: {}: {}",
                outcome.fixture,
                outcome.failure.as_deref().unwrap_or_default()
            );
        }
        return ExitCode::FAILURE;
    }
    println!("All tests passed!");

    match manual::format_reference_manual() {
        Ok(text) => {
            println!("\n{text}");
            println!("Done :)");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn print_manual() -> ExitCode {
    match manual::format_reference_manual() {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_check(config: &Config) -> ExitCode {
    let outcomes = check::run_all();
    let mut failed = 0;

    for outcome in &outcomes {
        let detail = style::paint(&outcome.fixture.to_string(), style::BRIGHT_BLACK, config.color);
        match &outcome.failure {
            None => println!("{} {detail}", style::paint("ok", style::GREEN, config.color)),
            Some(reason) => {
                failed += 1;
                println!(
                    "{} {detail}: {reason}",
                    style::paint("FAILED", style::RED, config.color)
                );
            }
        }
    }

    println!("{} passed, {failed} failed", outcomes.len() - failed);
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(err: &pair_color::Error) -> ExitCode {
    tracing::debug!(axis = %err.axis(), "conversion failed");
    eprintln!("error: {err}");
    ExitCode::FAILURE
}
