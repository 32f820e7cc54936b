// File: src/interpreter/native_functions/docs.rs
//
// system.help: loads and prints a documentation topic. `user` and `help`
// map to the user guide, `dev` and `developer` to the developer guide;
// anything else falls back to the user guide.

use std::fs;

use crate::interpreter::{Interpreter, Value};

const USER_GUIDE: &str = "docs/USER_GUIDE.md";
const DEVELOPER_GUIDE: &str = "docs/DEVELOPER_GUIDE.md";

pub(crate) fn handle(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Value> {
    if name != "system.help" {
        return None;
    }
    let topic = match args.first() {
        Some(Value::Str(topic)) => topic.as_str(),
        _ => "help",
    };
    interp.write_output(&topic_text(topic));
    Some(Value::Null)
}

fn topic_text(topic: &str) -> String {
    let path = match topic {
        "dev" | "developer" => DEVELOPER_GUIDE,
        _ => USER_GUIDE,
    };
    fs::read_to_string(path).unwrap_or_else(|_| "Documentation not found".to_string())
}
