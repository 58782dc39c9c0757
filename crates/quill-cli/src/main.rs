//! The Quill REPL: read a line, evaluate it, print the result, repeat.
//!
//! Also supports `quill -e <expr>` for one-shot evaluation in scripts.

use quill_eval::{eval, read, Value};
use quill_lexer::Lexer;
use quill_parser::Parser;
use quill_types::{ParseErrors, SourceFile};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => repl(),
        [flag, expr] if flag == "-e" => evaluate_once(expr),
        _ => {
            eprintln!("usage: quill [-e <expr>]");
            ExitCode::FAILURE
        }
    }
}

/// Run one line of input through the whole pipeline.
///
/// Syntax errors stop before evaluation; runtime failures come back as an
/// ordinary error value and print like any other result.
fn evaluate_line(name: &str, source: &str) -> Result<Value, ParseErrors> {
    let file = SourceFile::new(name, source);
    let lexed = Lexer::new(&file).lex();
    if lexed.errors.has_errors() {
        return Err(lexed.errors);
    }
    let parsed = Parser::new(lexed.tokens, &file).parse();
    match parsed.root {
        Some(root) if !parsed.errors.has_errors() => Ok(eval(read(&root))),
        _ => Err(parsed.errors),
    }
}

fn report(errors: &ParseErrors) {
    for error in &errors.errors {
        eprintln!("{error}");
        eprintln!("  {}", error.source_line);
    }
}

fn evaluate_once(expr: &str) -> ExitCode {
    match evaluate_line("<expr>", expr) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(errors) => {
            report(&errors);
            ExitCode::FAILURE
        }
    }
}

fn repl() -> ExitCode {
    println!("Quill {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit\n");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("cannot start line editor: {err}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline("quill> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match evaluate_line("<stdin>", &line) {
                    Ok(value) => println!("{value}"),
                    Err(errors) => report(&errors),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("read error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
