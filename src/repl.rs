// File: src/repl.rs
//
// Interactive prompt for the SharpScript interpreter.
// Each line gets a fresh lexer and parser (and with them a fresh include
// guard) feeding one persistent interpreter, so bindings survive across
// lines. Non-null expression results echo as `=> value`.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::interpreter::{Interpreter, Value};
use crate::lexer::Lexer;
use crate::parser::Parser;

pub struct Repl {
    interpreter: Interpreter,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let editor = DefaultEditor::new()?;
        Ok(Repl { interpreter: Interpreter::new(), editor })
    }

    fn show_banner(&self) {
        println!("{}", "SharpScript REPL v1.0".bright_cyan());
        println!("{}", "Type 'exit' to quit".dimmed());
        println!();
    }

    /// Runs the prompt loop until `exit`, Ctrl-D, or a terminal error.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.show_banner();

        loop {
            match self.editor.readline(">> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == "exit" {
                        break;
                    }
                    let _ = self.editor.add_history_entry(trimmed);
                    self.eval_line(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".bright_yellow());
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{} {}", "Error:".bright_red(), err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn eval_line(&mut self, line: &str) {
        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse();
        let result = self.interpreter.run(&program);
        if !matches!(result, Value::Null) {
            println!("{} {}", "=>".bright_blue(), result);
        }
    }
}
