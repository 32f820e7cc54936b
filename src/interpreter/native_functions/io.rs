// File: src/interpreter/native_functions/io.rs
//
// Console builtins: print/output/warning to stdout, error to stderr,
// input from stdin.

use std::io::BufRead;

use crate::interpreter::{Interpreter, Value};

pub(crate) fn handle(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Value> {
    let result = match name {
        "system.print" | "system.output" => {
            interp.write_output(&joined(args));
            Value::Null
        }
        "system.warning" => {
            interp.write_output(&format!("Warning: {}", joined(args)));
            Value::Null
        }
        "system.error" => {
            eprintln!("Error: {}", joined(args));
            Value::Null
        }
        "system.input" => {
            if let Some(prompt) = args.first() {
                interp.write_raw(&prompt.to_string());
            }
            read_line()
        }
        _ => return None,
    };
    Some(result)
}

fn joined(args: &[Value]) -> String {
    args.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ")
}

/// One line from stdin with the trailing newline stripped; the empty
/// string on end of input.
fn read_line() -> Value {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(n) if n > 0 => {
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            Value::Str(line)
        }
        _ => Value::Str(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn captured(run: impl FnOnce(&mut Interpreter)) -> String {
        let mut interp = Interpreter::new();
        let sink = Arc::new(Mutex::new(Vec::new()));
        interp.set_output(sink.clone());
        run(&mut interp);
        let bytes = sink.lock().unwrap();
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[test]
    fn print_joins_arguments_with_spaces() {
        let out = captured(|interp| {
            handle(interp, "system.print", &[Value::Number(1.0), Value::Str("two".into())]);
        });
        assert_eq!(out, "1 two\n");
    }

    #[test]
    fn warning_is_prefixed() {
        let out = captured(|interp| {
            handle(interp, "system.warning", &[Value::Str("careful".into())]);
        });
        assert_eq!(out, "Warning: careful\n");
    }

    #[test]
    fn output_formats_integral_numbers_without_decimal() {
        let out = captured(|interp| {
            handle(interp, "system.output", &[Value::Number(5.0), Value::Number(2.5)]);
        });
        assert_eq!(out, "5 2.5\n");
    }
}
