// File: src/interpreter/environment.rs
//
// Lexical scope frames for the SharpScript interpreter.
// A frame stores its bindings in declaration order (namespace bodies are
// re-published in that order) together with a const flag and the recorded
// type name. Frames are shared through `Rc<RefCell<...>>` so a function
// value can keep its captured frame alive after the scope exits.

use std::cell::RefCell;
use std::rc::Rc;

use super::value::Value;

pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug)]
struct Slot {
    name: String,
    value: Value,
    is_const: bool,
    type_name: String,
}

#[derive(Debug)]
pub struct Environment {
    slots: Vec<Slot>,
    parent: Option<EnvRef>,
}

/// Result of a chain-walking assignment.
#[derive(Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    Undeclared,
    ConstViolation,
    TypeMismatch { expected: String, found: &'static str },
}

impl Environment {
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment { slots: Vec::new(), parent: None }))
    }

    pub fn with_parent(parent: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment { slots: Vec::new(), parent: Some(parent) }))
    }

    /// Introduces a new binding in this frame. Fails when the name is
    /// already declared here; parent frames are not consulted.
    pub fn declare(&mut self, name: &str, value: Value, is_const: bool, type_name: String) -> bool {
        if self.slots.iter().any(|slot| slot.name == name) {
            return false;
        }
        self.slots.push(Slot { name: name.to_string(), value, is_const, type_name });
        true
    }

    /// Frame-local set-or-create without declaration checks: loop
    /// variables, function names, catch bindings, calculator memory. The
    /// recorded type follows the stored value. Fails only on a const slot.
    pub fn put(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.name == name) {
            if slot.is_const {
                return false;
            }
            slot.type_name = value.type_name().to_string();
            slot.value = value;
            return true;
        }
        let type_name = value.type_name().to_string();
        self.slots.push(Slot { name: name.to_string(), value, is_const: false, type_name });
        true
    }

    /// Overwrites the recorded type name of a binding in this frame.
    pub fn annotate(&mut self, name: &str, type_name: &str) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.name == name) {
            slot.type_name = type_name.to_string();
            return true;
        }
        false
    }

    /// Bindings of this frame in declaration order, cloned:
    /// (name, value, const flag, type name).
    pub fn snapshot(&self) -> Vec<(String, Value, bool, String)> {
        self.slots
            .iter()
            .map(|slot| {
                (slot.name.clone(), slot.value.clone(), slot.is_const, slot.type_name.clone())
            })
            .collect()
    }
}

/// Parent-walking lookup; the result is a fully owned clone.
pub fn get(env: &EnvRef, name: &str) -> Option<Value> {
    let mut current = Some(env.clone());
    while let Some(frame) = current {
        let frame = frame.borrow();
        if let Some(slot) = frame.slots.iter().find(|slot| slot.name == name) {
            return Some(slot.value.clone());
        }
        current = frame.parent.clone();
    }
    None
}

pub fn has(env: &EnvRef, name: &str) -> bool {
    let mut current = Some(env.clone());
    while let Some(frame) = current {
        let frame = frame.borrow();
        if frame.slots.iter().any(|slot| slot.name == name) {
            return true;
        }
        current = frame.parent.clone();
    }
    false
}

/// Parent-walking assignment, updating the slot in place where it was
/// declared. Checks the const flag and the recorded type name.
pub fn assign(env: &EnvRef, name: &str, value: Value) -> AssignOutcome {
    let mut current = Some(env.clone());
    while let Some(frame) = current {
        let mut frame = frame.borrow_mut();
        if let Some(slot) = frame.slots.iter_mut().find(|slot| slot.name == name) {
            if slot.is_const {
                return AssignOutcome::ConstViolation;
            }
            let found = value.type_name();
            if slot.type_name != found {
                return AssignOutcome::TypeMismatch { expected: slot.type_name.clone(), found };
            }
            slot.value = value;
            return AssignOutcome::Assigned;
        }
        let parent = frame.parent.clone();
        drop(frame);
        current = parent;
    }
    AssignOutcome::Undeclared
}
