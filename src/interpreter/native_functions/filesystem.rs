// File: src/interpreter/native_functions/filesystem.rs
//
// File builtins. Failures never raise: file.read yields null when the
// file cannot be read, file.write always yields null and silently ignores
// data it cannot serialize.

use std::fs;

use crate::interpreter::{format_general, Value};

pub(crate) fn handle(name: &str, args: &[Value]) -> Option<Value> {
    let result = match name {
        "file.read" => match args.first() {
            Some(Value::Str(path)) => match fs::read_to_string(path) {
                Ok(content) => Value::Str(content),
                Err(_) => Value::Null,
            },
            _ => Value::Null,
        },
        "file.write" => {
            if let Some(Value::Str(path)) = args.first() {
                // Strings are written as-is, numbers in general format;
                // any other payload still creates/truncates the file.
                let content = match args.get(1) {
                    Some(Value::Str(s)) => s.clone(),
                    Some(Value::Number(n)) => format_general(*n),
                    _ => String::new(),
                };
                let _ = fs::write(path, content);
            }
            Value::Null
        }
        _ => return None,
    };
    Some(result)
}
