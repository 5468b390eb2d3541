//! # bigsum
//!
//! Reads `<operand> <operator> <operand>` from the command line or standard input and prints the
//! exact sum or difference.
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bigsum::io::expression;

/// Add or subtract two integers of any length.
#[derive(Parser, Debug)]
#[command(name = "bigsum", version, about)]
struct Cli {
    /// Expression to evaluate, for example `12 - -340`. Read from standard input when absent.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<OsString>,

    /// Log the evaluation steps to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bigsum=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bigsum=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Collect the expression text from the arguments, or from standard input if there are none.
///
/// Bytes that are not valid UTF-8 become replacement characters, which operands skip like any
/// other character that isn't a digit.
fn read_input(cli: &Cli) -> Result<String> {
    if !cli.expression.is_empty() {
        let words = cli.expression.iter()
            .map(|word| word.to_string_lossy())
            .collect::<Vec<_>>();
        return Ok(words.join(" "));
    }

    let stdin = io::stdin();
    let mut bytes = Vec::new();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        writeln!(stdout, "Enter an expression (A + B | A - B):")?;
        stdout.flush()?;
        // Like a token stream: keep reading lines until an expression could be complete.
        let mut stdin = stdin.lock();
        while String::from_utf8_lossy(&bytes).split_whitespace().count() < 3 {
            let read = stdin.read_until(b'\n', &mut bytes).context("Failed to read standard input")?;
            if read == 0 {
                break;
            }
        }
    } else {
        stdin.lock().read_to_end(&mut bytes).context("Failed to read standard input")?;
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let input = read_input(&cli)?;

    match expression::evaluate(&input) {
        Ok(evaluation) => {
            println!("{}", evaluation);
            Ok(())
        },
        Err(error) if error.is_abstention() => {
            tracing::debug!(%error, "nothing to evaluate");
            Ok(())
        },
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        },
    }
}
