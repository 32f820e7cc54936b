// File: src/interpreter/native_functions/errors.rs
//
// Construction of structured error values for system.throw. Raising and
// catching happen in the evaluator; this module only shapes the value.

use crate::interpreter::Value;

/// `system.throw(name [, message [, code]])`. A non-string name falls
/// back to "Error", a non-string message to the empty string, a
/// non-number code to 0.
pub(crate) fn build(args: &[Value]) -> Value {
    let name = match args.first() {
        Some(Value::Str(name)) => name.clone(),
        _ => "Error".to_string(),
    };
    let message = match args.get(1) {
        Some(Value::Str(message)) => message.clone(),
        _ => String::new(),
    };
    let code = match args.get(2) {
        Some(Value::Number(code)) => *code as i32,
        _ => 0,
    };
    Value::Error { name, message, code }
}
