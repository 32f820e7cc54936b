// File: src/main.rs
//
// Command-line entry point for the SharpScript interpreter.
// Without arguments it starts the interactive REPL; with a script path it
// runs the file and then synthesizes a zero-argument call to `main`,
// discarding its result. `--help`/`-h` print the banner and exit 0; any
// surplus argument is a usage error with exit code 1.

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sharpscript::ast::{Expr, Stmt};
use sharpscript::interpreter::Interpreter;
use sharpscript::lexer::Lexer;
use sharpscript::parser::Parser;
use sharpscript::repl::Repl;

const SYNTAX_OVERVIEW: &str = "Language syntax overview:
  - Declaration:  &insert x = 10;
  - Functions:    function name(void) { ... }
  - Control:      if (cond) { ... } else { ... }
  - Output:       system.output(expr);
  - Error/Warn:   system.error(msg); system.warning(msg);
  - Comments:     # This is a comment";

#[derive(ClapParser)]
#[command(
    name = "sharpscript",
    version,
    about = "SharpScript language environment",
    after_help = SYNTAX_OVERVIEW
)]
struct Cli {
    /// Path to a .sharp script; starts the interactive REPL when omitted
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    match cli.script {
        Some(path) => run_file(&path),
        None => {
            match Repl::new() {
                Ok(mut repl) => {
                    if let Err(err) = repl.run() {
                        eprintln!("Error: {}", err);
                    }
                }
                Err(err) => eprintln!("Error: {}", err),
            }
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Error: Could not open file {}", path.display());
            return ExitCode::SUCCESS;
        }
    };

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse();

    let mut interpreter = Interpreter::new();
    interpreter.run(&program);

    // Scripts may define main(void); call it and ignore the result.
    let main_call = Stmt::Expr(Expr::Call { name: "main".to_string(), args: Vec::new() });
    interpreter.run(&main_call);

    ExitCode::SUCCESS
}
