use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use log::info;
use rpncalc::{
    calculate,
    error::CalcError,
    interpreter::{converter::to_postfix, evaluator::evaluate},
};

/// rpncalc evaluates arithmetic expressions by converting them to Reverse
/// Polish Notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression before its value.
    #[arg(short, long)]
    postfix: bool,

    /// The expression, or a path when `--file` is given. Expressions are read
    /// from standard input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let lines: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        },
        (Some(expression), false) => vec![expression.clone()],
        (None, _) => io::stdin().lock().lines().map_while(Result::ok).collect(),
    };

    let mut failed = false;
    let mut count = 0;
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        count += 1;
        let outcome = if args.postfix { run_verbose(line) } else { calculate(line) };
        match outcome {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    info!("processed {count} expression(s)");
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Evaluates `line` while printing its postfix form.
fn run_verbose(line: &str) -> Result<f64, CalcError> {
    let postfix = to_postfix(line)?;
    println!("{postfix}");
    Ok(evaluate(&postfix)?)
}
