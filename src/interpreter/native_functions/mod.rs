// File: src/interpreter/native_functions/mod.rs
//
// Builtin function dispatch. Builtins are recognized by exact qualified
// name before any environment lookup; arguments reach the handlers already
// evaluated, in source order. Each category module exposes a `handle` that
// returns `Some(value)` when it owns the name and `None` otherwise.

pub mod convert;
pub mod docs;
pub mod errors;
pub mod filesystem;
pub mod io;
pub mod math;
pub mod memory;
pub mod type_ops;

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::control_flow::Flow;
use super::{Interpreter, Value};

/// The complete builtin name table.
pub static NATIVE_NAMES: &[&str] = &[
    "system.print",
    "system.output",
    "system.warning",
    "system.error",
    "system.input",
    "system.len",
    "system.type",
    "system.sin",
    "system.cos",
    "system.tan",
    "system.asin",
    "system.acos",
    "system.atan",
    "system.log",
    "system.ln",
    "system.exp",
    "system.sqrt",
    "system.pow",
    "system.store",
    "system.recall",
    "system.memclear",
    "system.convert",
    "system.history.add",
    "system.history.get",
    "system.history.clear",
    "system.annotate",
    "system.throw",
    "system.help",
    "file.read",
    "file.write",
];

static NATIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NATIVE_NAMES.iter().copied().collect());

pub fn is_native(name: &str) -> bool {
    NATIVE_SET.contains(name)
}

/// Dispatches a builtin call. `system.throw` is the only builtin that
/// unwinds; everything else completes with a value.
pub(crate) fn call(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Flow> {
    if name == "system.throw" {
        return Some(Flow::Thrown(errors::build(args)));
    }
    if let Some(value) = io::handle(interp, name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = math::handle(name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = memory::handle(interp, name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = convert::handle(name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = type_ops::handle(interp, name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = filesystem::handle(name, args) {
        return Some(Flow::Normal(value));
    }
    if let Some(value) = docs::handle(interp, name, args) {
        return Some(Flow::Normal(value));
    }
    None
}
