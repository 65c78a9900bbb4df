//! Bantam expression parser CLI
//!
//! Parses expressions and prints them back fully parenthesized.

use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use bantam::{format_error, lexer::lexer::tokenize, parser::parser::parse_source};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bantam")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse expressions and print their canonical parenthesized form", long_about = None)]
struct Cli {
    /// Expressions to parse. Reads one expression per line from stdin when
    /// neither expressions nor --file are given.
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// Parse each non-empty line of a file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();

    let (inputs, file_name) = match read_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;

    for input in inputs {
        if cli.tokens {
            for token in tokenize(input, file_name.clone()) {
                println!("{}", token.debug());
            }
            continue;
        }

        match parse_source(&input, file_name.clone()) {
            Ok(expr) => println!("{}", expr),
            Err(error) => {
                tracing::debug!(?error, "parse failed");
                eprintln!("{}", format_error(&error, &input));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Collects the expressions to parse, and the file name to report them under.
fn read_inputs(cli: &Cli) -> io::Result<(Vec<String>, Option<String>)> {
    if let Some(path) = &cli.file {
        let contents = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        return Ok((non_empty_lines(contents.lines()), name));
    }

    if !cli.expressions.is_empty() {
        return Ok((cli.expressions.clone(), None));
    }

    let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
    Ok((non_empty_lines(lines.iter().map(String::as_str)), None))
}

fn non_empty_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
