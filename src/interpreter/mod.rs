// File: src/interpreter/mod.rs
//
// Tree-walking evaluator for the SharpScript language.
//
// The interpreter owns the global frame and a pointer to the active frame;
// the pointer is swapped only on function entry/exit and around namespace
// bodies. Plain blocks share the enclosing frame, so declarations inside
// an `if` arm are visible after it.
//
// Every evaluation step returns a `Flow`: either a normal value or one of
// the control signals (break, continue, return, thrown error). Loops eat
// Break/Continue, call frames eat Return, `try` eats Thrown; whatever
// reaches the entry point is either a value or an uncaught error.
//
// Runtime diagnostics (undefined names, const violations, type
// mismatches) print to stderr and degrade the offending expression to
// null. They are unrelated to structured errors, which only system.throw
// creates and only `try` can observe.

mod control_flow;
pub mod environment;
pub mod native_functions;
mod value;

pub use environment::{EnvRef, Environment};
pub use value::{format_general, format_number, FunctionValue, Value};

use control_flow::Flow;
use environment::AssignOutcome;

use crate::ast::{AssignOp, BinaryOp, DeclKind, Expr, Stmt, UnaryOp};
use crate::errors::SharpError;
use std::io::Write;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Unwraps a normal value out of an expression evaluation, propagating
/// any control signal to the caller.
macro_rules! value_of {
    ($self:ident, $expr:expr) => {
        match $self.eval_expr($expr) {
            Flow::Normal(value) => value,
            other => return other,
        }
    };
}

pub struct Interpreter {
    global: EnvRef,
    current: EnvRef,
    /// Calculator memory for system.store/recall; lives as long as the
    /// interpreter, cleared only by system.memclear.
    memory: EnvRef,
    /// Command history for system.history.*.
    history: Vec<Value>,
    /// Optional capture sink; when set, print-family builtins write here
    /// instead of stdout.
    output: Option<Arc<Mutex<Vec<u8>>>>,
}

impl Interpreter {
    pub fn new() -> Self {
        let global = Environment::new();
        Interpreter {
            current: global.clone(),
            global,
            memory: Environment::new(),
            history: Vec::new(),
            output: None,
        }
    }

    /// Redirects print-family output into a shared buffer (used by the
    /// test harness).
    pub fn set_output(&mut self, sink: Arc<Mutex<Vec<u8>>>) {
        self.output = Some(sink);
    }

    /// Looks a name up in the global frame; embedding and test hook.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        environment::get(&self.global, name)
    }

    /// Evaluates a program (or any statement) to a value. Control signals
    /// never escape: stray break/continue collapse to null, a stray
    /// return yields its value, and an error that no `try` caught is
    /// reported as fatal for this evaluation.
    pub fn run(&mut self, program: &Stmt) -> Value {
        match self.eval_stmt(program) {
            Flow::Normal(value) | Flow::Return(value) => value,
            Flow::Break | Flow::Continue => Value::Null,
            Flow::Thrown(error) => {
                SharpError::runtime(format!("Uncaught error: {}", error)).report();
                Value::Null
            }
        }
    }

    fn write_output(&self, text: &str) {
        if let Some(sink) = &self.output {
            let mut sink = sink.lock().unwrap();
            let _ = writeln!(sink, "{}", text);
        } else {
            println!("{}", text);
        }
    }

    /// Like `write_output` but without the newline; used for prompts.
    fn write_raw(&self, text: &str) {
        if let Some(sink) = &self.output {
            let mut sink = sink.lock().unwrap();
            let _ = write!(sink, "{}", text);
        } else {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> Flow {
        match stmt {
            Stmt::Empty => Flow::unit(),
            Stmt::Expr(expr) => self.eval_expr(expr),
            Stmt::Assign { name, op, decl, type_name, value } => {
                let value = value_of!(self, value);
                if let Some(kind) = decl {
                    return self.declare(name, *kind, type_name.as_deref(), value);
                }
                let new_value = match compound_op(*op) {
                    None => value,
                    Some(op) => {
                        let Some(old) = environment::get(&self.current, name) else {
                            SharpError::runtime(format!(
                                "Assignment to undeclared variable: {}",
                                name
                            ))
                            .report();
                            return Flow::unit();
                        };
                        Self::binary_value(op, old, value)
                    }
                };
                match environment::assign(&self.current, name, new_value) {
                    AssignOutcome::Assigned => {}
                    AssignOutcome::Undeclared => {
                        SharpError::runtime(format!("Assignment to undeclared variable: {}", name))
                            .report();
                    }
                    AssignOutcome::ConstViolation => {
                        SharpError::runtime(format!("Cannot assign to const variable: {}", name))
                            .report();
                    }
                    AssignOutcome::TypeMismatch { expected, found } => {
                        SharpError::runtime(format!(
                            "Type mismatch for {}: expected {}, got {}",
                            name, expected, found
                        ))
                        .report();
                    }
                }
                Flow::unit()
            }
            Stmt::If { condition, then_block, else_block } => {
                let condition = value_of!(self, condition);
                if condition.is_truthy() {
                    self.eval_stmt(then_block)
                } else if let Some(else_block) = else_block {
                    self.eval_stmt(else_block)
                } else {
                    Flow::unit()
                }
            }
            Stmt::While { condition, body } => {
                loop {
                    let condition = value_of!(self, condition);
                    if !condition.is_truthy() {
                        break;
                    }
                    match self.eval_stmt(body) {
                        Flow::Break => break,
                        Flow::Normal(_) | Flow::Continue => {}
                        other => return other,
                    }
                }
                Flow::unit()
            }
            Stmt::For { init, condition, increment, body } => {
                match self.eval_stmt(init) {
                    Flow::Normal(_) => {}
                    other => return other,
                }
                loop {
                    let condition = value_of!(self, condition);
                    if !condition.is_truthy() {
                        break;
                    }
                    match self.eval_stmt(body) {
                        Flow::Break => break,
                        Flow::Normal(_) | Flow::Continue => {}
                        other => return other,
                    }
                    match self.eval_stmt(increment) {
                        Flow::Normal(_) => {}
                        other => return other,
                    }
                }
                Flow::unit()
            }
            Stmt::ForIn { var, iterable, body } => {
                let iterable = value_of!(self, iterable);
                match iterable {
                    Value::Array(items) => {
                        for item in items {
                            self.bind_local(var, item);
                            match self.eval_stmt(body) {
                                Flow::Break => break,
                                Flow::Normal(_) | Flow::Continue => {}
                                other => return other,
                            }
                        }
                    }
                    Value::Map { keys, values } => {
                        for (key, value) in keys.into_iter().zip(values) {
                            let pair = Value::Map {
                                keys: vec!["key".to_string(), "value".to_string()],
                                values: vec![Value::Str(key), value],
                            };
                            self.bind_local(var, pair);
                            match self.eval_stmt(body) {
                                Flow::Break => break,
                                Flow::Normal(_) | Flow::Continue => {}
                                other => return other,
                            }
                        }
                    }
                    other => {
                        SharpError::runtime(format!(
                            "For-in requires an array or map, got {}",
                            other.type_name()
                        ))
                        .report();
                    }
                }
                Flow::unit()
            }
            Stmt::Function { name, params, body } => {
                let function = Value::Function(Rc::new(FunctionValue {
                    params: params.clone(),
                    body: (**body).clone(),
                    closure: self.current.clone(),
                }));
                self.bind_local(name, function);
                Flow::unit()
            }
            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => value_of!(self, expr),
                    None => Value::Null,
                };
                Flow::Return(value)
            }
            Stmt::Break => Flow::Break,
            Stmt::Continue => Flow::Continue,
            Stmt::Block(statements) => {
                let mut result = Value::Null;
                for statement in statements {
                    match self.eval_stmt(statement) {
                        Flow::Normal(value) => result = value,
                        other => return other,
                    }
                }
                Flow::Normal(result)
            }
            Stmt::Namespace { name, body } => {
                let frame = Environment::with_parent(self.current.clone());
                let saved = std::mem::replace(&mut self.current, frame.clone());
                let flow = self.eval_stmt(body);
                self.current = saved;
                if matches!(flow, Flow::Thrown(_)) {
                    return flow;
                }
                // Re-publish every binding of the namespace frame under
                // its qualified name, const flag included. Closures made
                // inside the body keep the frame itself alive.
                let bindings = frame.borrow().snapshot();
                for (member, value, is_const, type_name) in bindings {
                    let qualified = format!("{}.{}", name, member);
                    let declared =
                        self.current.borrow_mut().declare(&qualified, value, is_const, type_name);
                    if !declared {
                        SharpError::runtime(format!("Variable already declared: {}", qualified))
                            .report();
                    }
                }
                Flow::unit()
            }
            Stmt::Enum { name, members } => {
                for (member, value) in members {
                    let qualified = format!("{}.{}", name, member);
                    let declared = self.current.borrow_mut().declare(
                        &qualified,
                        Value::Number(*value),
                        true,
                        "number".to_string(),
                    );
                    if !declared {
                        SharpError::runtime(format!("Variable already declared: {}", qualified))
                            .report();
                    }
                }
                Flow::unit()
            }
            // Classes are parsed but not instantiated; the body runs as an
            // ordinary block in the current frame.
            Stmt::Class { body, .. } => self.eval_stmt(body),
            Stmt::Match { scrutinee, cases, default } => {
                let subject = value_of!(self, scrutinee);
                for (pattern, body) in cases {
                    let candidate = value_of!(self, pattern);
                    if subject.equals(&candidate) {
                        return self.eval_stmt(body);
                    }
                }
                if let Some(default) = default {
                    return self.eval_stmt(default);
                }
                Flow::unit()
            }
            Stmt::Try { body, catch_name, catch_body, finally_body } => {
                let mut flow = self.eval_stmt(body);
                if let Flow::Thrown(error) = flow {
                    match catch_body {
                        Some(catch_body) => {
                            if let Some(name) = catch_name {
                                self.bind_local(name, error);
                            }
                            flow = self.eval_stmt(catch_body);
                        }
                        None => flow = Flow::Thrown(error),
                    }
                }
                if let Some(finally_body) = finally_body {
                    match self.eval_stmt(finally_body) {
                        // The finally value is discarded; its control
                        // signals still win.
                        Flow::Normal(_) => {}
                        other => flow = other,
                    }
                }
                flow
            }
        }
    }

    fn eval_expr(&mut self, expr: &Expr) -> Flow {
        match expr {
            Expr::Number(n) => Flow::Normal(Value::Number(*n)),
            Expr::Str(s) => Flow::Normal(Value::Str(s.clone())),
            Expr::Bool(b) => Flow::Normal(Value::Bool(*b)),
            Expr::Null => Flow::Normal(Value::Null),
            Expr::Identifier(name) => match environment::get(&self.current, name) {
                Some(value) => Flow::Normal(value),
                None => {
                    SharpError::runtime(format!("Undefined variable: {}", name)).report();
                    Flow::unit()
                }
            },
            Expr::Binary { op, left, right } => {
                let left = value_of!(self, left);
                let right = value_of!(self, right);
                Flow::Normal(Self::binary_value(*op, left, right))
            }
            Expr::Unary { op, operand } => {
                let operand = value_of!(self, operand);
                let value = match op {
                    UnaryOp::Not => Value::Bool(!operand.is_truthy()),
                    UnaryOp::Neg => Value::Number(-operand.as_number()),
                };
                Flow::Normal(value)
            }
            Expr::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(value_of!(self, element));
                }
                Flow::Normal(Value::Array(values))
            }
            Expr::Map { keys, values } => {
                let mut map_keys = Vec::with_capacity(keys.len());
                let mut map_values = Vec::with_capacity(values.len());
                for (key, value) in keys.iter().zip(values.iter()) {
                    let key = value_of!(self, key);
                    map_keys.push(key.to_string());
                    map_values.push(value_of!(self, value));
                }
                Flow::Normal(Value::Map { keys: map_keys, values: map_values })
            }
            Expr::Index { target, index } => {
                let target = value_of!(self, target);
                let index = value_of!(self, index);
                Flow::Normal(Self::index_value(target, index))
            }
            Expr::Call { name, args } => self.eval_call(name, args),
            Expr::Lambda { params, body } => {
                Flow::Normal(Value::Function(Rc::new(FunctionValue {
                    params: params.clone(),
                    body: (**body).clone(),
                    closure: self.current.clone(),
                })))
            }
        }
    }

    fn eval_call(&mut self, name: &str, args: &[Expr]) -> Flow {
        if native_functions::is_native(name) {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(value_of!(self, arg));
            }
            return native_functions::call(self, name, &values).unwrap_or_else(Flow::unit);
        }

        let callee = match environment::get(&self.current, name) {
            Some(Value::Function(function)) => function,
            _ => {
                SharpError::runtime(format!("Undefined function: {}", name)).report();
                return Flow::unit();
            }
        };

        // Arguments evaluate in the caller's frame, left to right.
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(value_of!(self, arg));
        }

        // The new frame chains to the closure captured at definition, not
        // to the caller.
        let frame = Environment::with_parent(callee.closure.clone());
        let saved = std::mem::replace(&mut self.current, frame.clone());
        let mut supplied = values.into_iter();
        for param in &callee.params {
            let value = match supplied.next() {
                Some(value) => value,
                None => match &param.default {
                    Some(default) => match self.eval_expr(default) {
                        Flow::Normal(value) => value,
                        other => {
                            self.current = saved;
                            return other;
                        }
                    },
                    None => Value::Null,
                },
            };
            frame.borrow_mut().put(&param.name, value);
        }

        let flow = self.eval_stmt(&callee.body);
        self.current = saved;
        match flow {
            Flow::Return(value) => Flow::Normal(value),
            Flow::Thrown(error) => Flow::Thrown(error),
            Flow::Normal(_) | Flow::Break | Flow::Continue => Flow::unit(),
        }
    }

    fn declare(
        &mut self,
        name: &str,
        kind: DeclKind,
        annotation: Option<&str>,
        value: Value,
    ) -> Flow {
        let inferred = value.type_name();
        if let Some(annotation) = annotation {
            if annotation != inferred {
                SharpError::runtime(format!(
                    "Type mismatch for {}: declared {}, got {}",
                    name, annotation, inferred
                ))
                .report();
                return Flow::unit();
            }
        }
        let is_const = kind == DeclKind::Const;
        let declared =
            self.current.borrow_mut().declare(name, value, is_const, inferred.to_string());
        if !declared {
            SharpError::runtime(format!("Variable already declared: {}", name)).report();
        }
        Flow::unit()
    }

    /// Set-or-create in the current frame: loop variables, function
    /// names, catch bindings.
    fn bind_local(&mut self, name: &str, value: Value) {
        if !self.current.borrow_mut().put(name, value) {
            SharpError::runtime(format!("Cannot assign to const variable: {}", name)).report();
        }
    }

    fn binary_value(op: BinaryOp, left: Value, right: Value) -> Value {
        match op {
            BinaryOp::Add => {
                // `+` concatenates when either side is a string.
                if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
                    Value::Str(format!("{}{}", left.concat_text(), right.concat_text()))
                } else {
                    Value::Number(left.as_number() + right.as_number())
                }
            }
            BinaryOp::Sub => Value::Number(left.as_number() - right.as_number()),
            BinaryOp::Mul => Value::Number(left.as_number() * right.as_number()),
            // IEEE semantics, division by zero included.
            BinaryOp::Div => Value::Number(left.as_number() / right.as_number()),
            BinaryOp::Mod => Value::Number(left.as_number() % right.as_number()),
            BinaryOp::Eq => Value::Bool(left.equals(&right)),
            BinaryOp::Neq => {
                Value::Bool(if left.comparable(&right) { !left.equals(&right) } else { true })
            }
            BinaryOp::Lt => Value::Bool(left.as_number() < right.as_number()),
            BinaryOp::Lte => Value::Bool(left.as_number() <= right.as_number()),
            BinaryOp::Gt => Value::Bool(left.as_number() > right.as_number()),
            BinaryOp::Gte => Value::Bool(left.as_number() >= right.as_number()),
            // Both sides are already evaluated: side effects run left to
            // right regardless of the outcome.
            BinaryOp::And => Value::Bool(left.is_truthy() && right.is_truthy()),
            BinaryOp::Or => Value::Bool(left.is_truthy() || right.is_truthy()),
        }
    }

    fn index_value(target: Value, index: Value) -> Value {
        match (target, index) {
            (Value::Array(elements), Value::Number(n)) => {
                let i = n as i64;
                if i >= 0 {
                    elements.into_iter().nth(i as usize).unwrap_or(Value::Null)
                } else {
                    Value::Null
                }
            }
            (Value::Map { keys, values }, index) => {
                let key = index.to_string();
                match keys.iter().position(|k| *k == key) {
                    Some(pos) => values.into_iter().nth(pos).unwrap_or(Value::Null),
                    None => Value::Null,
                }
            }
            _ => Value::Null,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn compound_op(op: AssignOp) -> Option<BinaryOp> {
    match op {
        AssignOp::Set => None,
        AssignOp::Add => Some(BinaryOp::Add),
        AssignOp::Sub => Some(BinaryOp::Sub),
        AssignOp::Mul => Some(BinaryOp::Mul),
        AssignOp::Div => Some(BinaryOp::Div),
        AssignOp::Mod => Some(BinaryOp::Mod),
    }
}
