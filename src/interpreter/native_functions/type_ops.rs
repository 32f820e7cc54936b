// File: src/interpreter/native_functions/type_ops.rs
//
// Introspection builtins: length, type name, and type re-annotation.

use crate::errors::SharpError;
use crate::interpreter::{Interpreter, Value};

pub(crate) fn handle(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Value> {
    let result = match name {
        "system.len" => {
            let Some(arg) = args.first() else {
                return Some(Value::Null);
            };
            // Strings measure in bytes, arrays in elements, anything else is 0.
            let len = match arg {
                Value::Str(s) => s.len(),
                Value::Array(elements) => elements.len(),
                _ => 0,
            };
            Value::Number(len as f64)
        }
        "system.type" => {
            let Some(arg) = args.first() else {
                return Some(Value::Null);
            };
            Value::Str(arg.type_name().to_string())
        }
        "system.annotate" => {
            if let (Some(Value::Str(binding)), Some(Value::Str(type_name))) =
                (args.first(), args.get(1))
            {
                if !interp.current.borrow_mut().annotate(binding, type_name) {
                    SharpError::runtime(format!("Undefined variable: {}", binding)).report();
                }
            }
            Value::Null
        }
        _ => return None,
    };
    Some(result)
}
