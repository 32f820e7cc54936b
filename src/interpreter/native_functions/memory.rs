// File: src/interpreter/native_functions/memory.rs
//
// Calculator memory (store/recall/memclear) and the command history.
// Both live inside the interpreter context for its whole lifetime; the
// memory is a dedicated frame keyed by string names, the history is an
// append-only sequence.

use crate::interpreter::{environment, Environment, Interpreter, Value};

pub(crate) fn handle(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Value> {
    let result = match name {
        "system.store" => {
            if let (Some(Value::Str(key)), Some(value)) = (args.first(), args.get(1)) {
                interp.memory.borrow_mut().put(key, value.clone());
            }
            Value::Null
        }
        "system.recall" => match args.first() {
            Some(Value::Str(key)) => environment::get(&interp.memory, key).unwrap_or(Value::Null),
            _ => Value::Null,
        },
        "system.memclear" => {
            interp.memory = Environment::new();
            Value::Null
        }
        "system.history.add" => {
            if let Some(value) = args.first() {
                interp.history.push(value.clone());
            }
            Value::Null
        }
        "system.history.get" => Value::Array(interp.history.clone()),
        "system.history.clear" => {
            interp.history.clear();
            Value::Null
        }
        _ => return None,
    };
    Some(result)
}
