use std::io::{self, BufRead, Write};

use clap::Parser;
use numeval::evaluate;

/// numeval is an easy to use command-line calculator for arithmetic
/// expressions with `+ - * /`, parentheses, and unary signs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. When omitted, numeval starts an interactive
    /// session that reads one expression per line until `exit` or `quit`.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => match evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        },
        None => run_console(),
    }
}

/// Reads expressions line by line, printing each value or error.
///
/// The session ends on `exit`, `quit`, or end of input. Errors are printed
/// to stderr and never terminate the session.
fn run_console() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
