//! Command-line interface for digitsplit.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;

use crate::checker::check_decimal;
use crate::config::{parse_decimal, parse_number};
use crate::decimal::best_split_decimal;
use crate::error::{Result, SplitterError};
use crate::search::{verify_range, VerifyReport};

/// digitsplit - Maximum digit sum over all splits a + b = n.
///
/// Without a subcommand, reads n from stdin and prints the answer.
#[derive(Parser)]
#[command(name = "digitsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the maximum digit sum of n.
    Solve {
        /// Non-negative integer of any length (default: read from stdin)
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,

        /// Also print the maximizing split as "a b"
        #[arg(short, long)]
        split: bool,
    },

    /// Check a claimed answer; exits 0 when accepted, 1 otherwise.
    Check {
        /// Non-negative integer n (default: first token on stdin)
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,

        /// Claimed maximum digit sum (default: next token on stdin)
        #[arg(allow_hyphen_values = true)]
        answer: Option<String>,
    },

    /// Cross-check the closed form against exhaustive search.
    Verify {
        /// First value to check
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Last value to check (inclusive)
        #[arg(long, default_value_t = 1_000)]
        to: u64,
    },
}

/// Run the CLI against the process's stdin and stdout.
///
/// Returns the exit status to report.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a parsed command line with explicit input and output streams.
pub fn execute<R: BufRead, W: Write>(cli: Cli, input: &mut R, output: &mut W) -> Result<i32> {
    match cli.command {
        None => solve_command(None, false, input, output),
        Some(Commands::Solve { number, split }) => {
            solve_command(number.as_deref(), split, input, output)
        }
        Some(Commands::Check { number, answer }) => {
            check_command(number.as_deref(), answer.as_deref(), input, output)
        }
        Some(Commands::Verify { from, to }) => verify_command(from, to, output),
    }
}

/// Execute the solve command.
fn solve_command<R: BufRead, W: Write>(
    number: Option<&str>,
    split: bool,
    input: &mut R,
    output: &mut W,
) -> Result<i32> {
    let text = match number {
        Some(text) => text.to_string(),
        None => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    let n = parse_decimal(&text)?;
    let best = best_split_decimal(&n);
    debug!(n = %n, "solved");

    writeln!(output, "{}", best.digit_sum())?;
    if split {
        writeln!(output, "{} {}", best.a, best.b)?;
    }
    Ok(0)
}

/// Execute the check command.
///
/// Operands missing from the command line are taken from stdin in order.
fn check_command<R: BufRead, W: Write>(
    number: Option<&str>,
    answer: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<i32> {
    let mut operands: Vec<String> = number
        .into_iter()
        .chain(answer)
        .map(String::from)
        .collect();

    if operands.len() < 2 {
        let mut rest = String::new();
        input.read_to_string(&mut rest)?;
        operands.extend(rest.split_whitespace().map(String::from));
    }

    let mut operands = operands.into_iter();
    let n = operands.next().ok_or(SplitterError::MissingOperand("n"))?;
    let claimed = operands
        .next()
        .ok_or(SplitterError::MissingOperand("answer"))?;

    let n = parse_decimal(&n)?;
    let claimed = parse_number(&claimed)?;
    let verdict = check_decimal(&n, claimed);

    let label = if verdict.is_accepted() {
        style(verdict).green().bold()
    } else {
        style(verdict).red().bold()
    };
    writeln!(output, "{label}")?;

    Ok(verdict.exit_code())
}

/// Execute the verify command.
fn verify_command<W: Write>(from: u64, to: u64, output: &mut W) -> Result<i32> {
    let report = verify_range(from..=to)?;
    write_report(&report, from, to, output)
}

/// Print a verification summary and return the exit status for it.
fn write_report<W: Write>(
    report: &VerifyReport,
    from: u64,
    to: u64,
    output: &mut W,
) -> Result<i32> {
    match report.first_mismatch {
        None => {
            writeln!(
                output,
                "{} {} values in {}..={}",
                style("Verified").green().bold(),
                report.checked,
                from,
                to
            )?;
            Ok(0)
        }
        Some(mismatch) => {
            writeln!(
                output,
                "{} at n = {}: closed form {}, exhaustive {}",
                style("Mismatch").red().bold(),
                mismatch.n,
                mismatch.closed_form,
                mismatch.exhaustive
            )?;
            Ok(1)
        }
    }
}
