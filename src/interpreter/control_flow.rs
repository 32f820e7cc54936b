// File: src/interpreter/control_flow.rs
//
// Evaluation-flow discriminator returned by every evaluator call.
//
// Break and Continue are consumed by the innermost loop, Return by the
// enclosing call frame, Thrown by the nearest try. None of them can leak
// past the interpreter's entry point, and none of them can be mistaken
// for an ordinary value.

use super::value::Value;

#[derive(Debug, Clone)]
pub(crate) enum Flow {
    Normal(Value),
    Break,
    Continue,
    Return(Value),
    Thrown(Value),
}

impl Flow {
    pub(crate) fn unit() -> Flow {
        Flow::Normal(Value::Null)
    }
}
