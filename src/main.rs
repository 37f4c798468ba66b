//! rpncalc - a postfix (RPN) calculator
//!
//! Usage:
//!   rpncalc              Start interactive REPL
//!   rpncalc -e "expr"    Evaluate a single expression

use rpncalc::evaluate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"rpncalc-{} A postfix (RPN) calculator

USAGE:
    rpncalc                 Start interactive REPL
    rpncalc -e <expr>       Evaluate a single expression
    rpncalc --help          Show this help message
    rpncalc --version       Show version

EXPRESSIONS:
    Whitespace-separated decimal integers and the operators + - * /,
    in postfix order: "1 2 - 3 4 + *" means (1 - 2) * (3 + 4).
"#,
        VERSION
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => repl(),
        Some("--help") | Some("-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("--version") => {
            println!("rpncalc {}", VERSION);
            ExitCode::SUCCESS
        }
        Some("-e") => match args.get(1) {
            Some(expr) => eval_once(expr),
            None => {
                eprintln!("rpncalc: -e requires an expression");
                ExitCode::FAILURE
            }
        },
        Some(other) => {
            eprintln!("rpncalc: unknown argument `{}`", other);
            ExitCode::FAILURE
        }
    }
}

fn eval_once(expr: &str) -> ExitCode {
    match evaluate(expr) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("rpncalc: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn repl() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("rpncalc: {}", err);
            return ExitCode::FAILURE;
        }
    };
    loop {
        match editor.readline("rpn> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match evaluate(&line) {
                    Ok(result) => println!("{}", result),
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("rpncalc: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
