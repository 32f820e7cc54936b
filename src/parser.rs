// File: src/parser.rs
//
// Recursive-descent parser for the SharpScript language.
// Consumes tokens pulled one at a time from the lexer with a single token
// of lookahead; the only non-destructive peek (save/restore of the lexer
// cursor) distinguishes `for (x in e)` from the C-style `for (init; ...)`.
//
// The parser is error tolerant: diagnostics go to stderr with the source
// line and the offending construct is replaced by an empty statement or a
// null expression, so a single mistake never aborts the parse.
//
// `#include`/`#involve` directives are resolved here: the referenced file
// is lexed and parsed with a fresh lexer/parser and its block is spliced
// in place of the directive. Paths are tried literally and then under a
// `src/` prefix; a per-parser guard set makes repeat inclusion a no-op.

use crate::ast::{AssignOp, BinaryOp, DeclKind, Expr, Param, Stmt, UnaryOp};
use crate::errors::SharpError;
use crate::lexer::{Lexer, Token, TokenKind};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct Parser {
    lexer: Lexer,
    current: Token,
    included: HashSet<String>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current, included: HashSet::new() }
    }

    /// Parses the whole input into a single block. Trailing semicolons
    /// between top-level statements are consumed silently.
    pub fn parse(&mut self) -> Stmt {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            statements.push(self.statement());
            if self.check(TokenKind::Semicolon) {
                self.advance();
            }
        }
        Stmt::Block(statements)
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        SharpError::parse(
            format!("unexpected token '{}', expected {}", self.current.text, what),
            self.current.line,
        )
        .report();
        false
    }

    /// Fetches the token after the current one without consuming it.
    fn peek_next(&mut self) -> Token {
        let state = self.lexer.save();
        let token = self.lexer.next_token();
        self.lexer.restore(state);
        token
    }

    fn unexpected(&mut self) -> Expr {
        SharpError::parse(
            format!("unexpected token '{}'", self.current.text),
            self.current.line,
        )
        .report();
        self.advance();
        Expr::Null
    }

    // --- statements ---

    fn statement(&mut self) -> Stmt {
        match self.current.kind {
            TokenKind::Semicolon | TokenKind::Error => {
                self.advance();
                Stmt::Empty
            }
            // Reserved with no defined effect.
            TokenKind::New => {
                self.advance();
                Stmt::Empty
            }
            TokenKind::Include | TokenKind::Involve => self.include_statement(),
            TokenKind::Namespace => self.namespace_statement(),
            TokenKind::Enum => self.enum_statement(),
            TokenKind::Class | TokenKind::Struct => self.class_statement(),
            TokenKind::Const => self.declaration(DeclKind::Const),
            TokenKind::Insert => self.declaration(DeclKind::Insert),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Function => self.function_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::Break => {
                self.advance();
                Stmt::Break
            }
            TokenKind::Continue => {
                self.advance();
                Stmt::Continue
            }
            TokenKind::Match => self.match_statement(),
            TokenKind::Try => self.try_statement(),
            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Mod => self.word_assignment(),
            _ => self.simple_statement(),
        }
    }

    /// Assignment, bare call, or expression statement. Also used for the
    /// init and increment slots of a C-style `for`.
    fn simple_statement(&mut self) -> Stmt {
        let expr = self.expression();
        if let Expr::Identifier(name) = &expr {
            let op = match self.current.kind {
                TokenKind::Assign => Some(AssignOp::Set),
                TokenKind::PlusAssign => Some(AssignOp::Add),
                TokenKind::MinusAssign => Some(AssignOp::Sub),
                TokenKind::MulAssign => Some(AssignOp::Mul),
                TokenKind::DivAssign => Some(AssignOp::Div),
                TokenKind::ModAssign => Some(AssignOp::Mod),
                _ => None,
            };
            if let Some(op) = op {
                let name = name.clone();
                self.advance();
                let value = self.expression();
                return Stmt::Assign { name, op, decl: None, type_name: None, value };
            }
            if matches!(self.current.kind, TokenKind::Inc | TokenKind::Dec) {
                let op = if self.check(TokenKind::Inc) { AssignOp::Add } else { AssignOp::Sub };
                let name = name.clone();
                self.advance();
                return Stmt::Assign {
                    name,
                    op,
                    decl: None,
                    type_name: None,
                    value: Expr::Number(1.0),
                };
            }
        }
        Stmt::Expr(expr)
    }

    fn declaration(&mut self, kind: DeclKind) -> Stmt {
        let keyword = if kind == DeclKind::Const { "const" } else { "&insert" };
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse(
                format!("expected identifier after {}", keyword),
                self.current.line,
            )
            .report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        let type_name = if self.accept(TokenKind::Colon) {
            if self.check(TokenKind::Identifier) {
                let t = self.current.text.clone();
                self.advance();
                Some(t)
            } else {
                SharpError::parse("expected type name after ':'", self.current.line).report();
                None
            }
        } else {
            None
        };
        self.expect(TokenKind::Assign, "'='");
        let value = self.expression();
        Stmt::Assign { name, op: AssignOp::Set, decl: Some(kind), type_name, value }
    }

    /// `add x = e` and friends: the word operator doubles as a compound
    /// assignment keyword in statement position.
    fn word_assignment(&mut self) -> Stmt {
        let op = match self.current.kind {
            TokenKind::Add => AssignOp::Add,
            TokenKind::Sub => AssignOp::Sub,
            TokenKind::Mul => AssignOp::Mul,
            TokenKind::Div => AssignOp::Div,
            _ => AssignOp::Mod,
        };
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse("expected identifier after keyword assignment", self.current.line)
                .report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        self.expect(TokenKind::Assign, "'='");
        let value = self.expression();
        Stmt::Assign { name, op, decl: None, type_name: None, value }
    }

    fn if_statement(&mut self) -> Stmt {
        self.advance();
        self.expect(TokenKind::LParen, "'('");
        let condition = self.expression();
        self.expect(TokenKind::RParen, "')'");
        self.accept(TokenKind::Arrow);
        let then_block = Box::new(self.block());
        let else_block = if self.accept(TokenKind::Else) {
            self.accept(TokenKind::Arrow);
            Some(Box::new(self.block()))
        } else {
            None
        };
        Stmt::If { condition, then_block, else_block }
    }

    fn while_statement(&mut self) -> Stmt {
        self.advance();
        self.expect(TokenKind::LParen, "'('");
        let condition = self.expression();
        self.expect(TokenKind::RParen, "')'");
        self.accept(TokenKind::Arrow);
        let body = Box::new(self.block());
        Stmt::While { condition, body }
    }

    fn for_statement(&mut self) -> Stmt {
        self.advance();
        self.expect(TokenKind::LParen, "'('");

        if self.check(TokenKind::Identifier) && self.peek_next().kind == TokenKind::In {
            let var = self.current.text.clone();
            self.advance(); // variable
            self.advance(); // in
            let iterable = self.expression();
            self.expect(TokenKind::RParen, "')'");
            self.accept(TokenKind::Arrow);
            let body = Box::new(self.block());
            return Stmt::ForIn { var, iterable, body };
        }

        let init = Box::new(self.for_clause());
        self.expect(TokenKind::Semicolon, "';'");
        let condition = self.expression();
        self.expect(TokenKind::Semicolon, "';'");
        let increment = Box::new(self.for_clause());
        self.expect(TokenKind::RParen, "')'");
        self.accept(TokenKind::Arrow);
        let body = Box::new(self.block());
        Stmt::For { init, condition, increment, body }
    }

    fn for_clause(&mut self) -> Stmt {
        match self.current.kind {
            TokenKind::Const => self.declaration(DeclKind::Const),
            TokenKind::Insert => self.declaration(DeclKind::Insert),
            _ => self.simple_statement(),
        }
    }

    fn function_statement(&mut self) -> Stmt {
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse("expected function name", self.current.line).report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        self.expect(TokenKind::LParen, "'('");
        let params = self.parameter_list();
        self.expect(TokenKind::RParen, "')'");
        self.accept(TokenKind::Arrow);
        let body = Box::new(self.block());
        Stmt::Function { name, params, body }
    }

    /// Parameter list: either the single keyword `void` (no parameters) or
    /// `name [= default], ...`.
    fn parameter_list(&mut self) -> Vec<Param> {
        let mut params = Vec::new();
        if self.accept(TokenKind::Void) {
            return params;
        }
        while self.check(TokenKind::Identifier) {
            let name = self.current.text.clone();
            self.advance();
            let default = if self.accept(TokenKind::Assign) { Some(self.expression()) } else { None };
            params.push(Param { name, default });
            if !self.accept(TokenKind::Comma) {
                break;
            }
        }
        params
    }

    fn return_statement(&mut self) -> Stmt {
        self.advance();
        let value = if matches!(
            self.current.kind,
            TokenKind::RBrace | TokenKind::Eof | TokenKind::Semicolon
        ) {
            None
        } else {
            Some(self.expression())
        };
        Stmt::Return(value)
    }

    fn namespace_statement(&mut self) -> Stmt {
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse("expected namespace name", self.current.line).report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        let body = Box::new(self.block());
        Stmt::Namespace { name, body }
    }

    fn enum_statement(&mut self) -> Stmt {
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse("expected enum name", self.current.line).report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        self.expect(TokenKind::LBrace, "'{'");
        let mut members = Vec::new();
        let mut next_value = 0.0;
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            if !self.check(TokenKind::Identifier) {
                SharpError::parse("expected enum member", self.current.line).report();
                break;
            }
            let member = self.current.text.clone();
            self.advance();
            let value = if self.accept(TokenKind::Assign) {
                // Only a plain numeric literal participates; anything else
                // keeps the running counter.
                match self.expression() {
                    Expr::Number(n) => n,
                    _ => next_value,
                }
            } else {
                next_value
            };
            next_value = value + 1.0;
            members.push((member, value));
            self.accept(TokenKind::Comma);
        }
        self.expect(TokenKind::RBrace, "'}'");
        Stmt::Enum { name, members }
    }

    fn class_statement(&mut self) -> Stmt {
        self.advance();
        if !self.check(TokenKind::Identifier) {
            SharpError::parse("expected class name", self.current.line).report();
            return Stmt::Empty;
        }
        let name = self.current.text.clone();
        self.advance();
        let base = if self.accept(TokenKind::Colon) {
            if self.check(TokenKind::Identifier) {
                let b = self.current.text.clone();
                self.advance();
                Some(b)
            } else {
                None
            }
        } else {
            None
        };
        let body = Box::new(self.block());
        Stmt::Class { name, base, body }
    }

    fn match_statement(&mut self) -> Stmt {
        self.advance();
        self.expect(TokenKind::LParen, "'('");
        let scrutinee = self.expression();
        self.expect(TokenKind::RParen, "')'");
        self.expect(TokenKind::LBrace, "'{'");
        let mut cases = Vec::new();
        let mut default = None;
        loop {
            while self.accept(TokenKind::Semicolon) {}
            match self.current.kind {
                TokenKind::Case => {
                    self.advance();
                    let pattern = self.expression();
                    self.expect(TokenKind::Colon, "':'");
                    let body = self.case_body();
                    cases.push((pattern, body));
                }
                TokenKind::Default => {
                    self.advance();
                    self.expect(TokenKind::Colon, "':'");
                    default = Some(Box::new(self.case_body()));
                }
                _ => break,
            }
        }
        self.expect(TokenKind::RBrace, "'}'");
        Stmt::Match { scrutinee, cases, default }
    }

    fn case_body(&mut self) -> Stmt {
        if self.check(TokenKind::LBrace) {
            self.block()
        } else {
            self.statement()
        }
    }

    fn try_statement(&mut self) -> Stmt {
        self.advance();
        let body = Box::new(self.block());
        let mut catch_name = None;
        let mut catch_body = None;
        if self.accept(TokenKind::Catch) {
            if self.accept(TokenKind::LParen) {
                if self.check(TokenKind::Identifier) {
                    catch_name = Some(self.current.text.clone());
                    self.advance();
                } else {
                    SharpError::parse("expected error name in catch", self.current.line).report();
                }
                self.expect(TokenKind::RParen, "')'");
            }
            catch_body = Some(Box::new(self.block()));
        }
        let finally_body =
            if self.accept(TokenKind::Finally) { Some(Box::new(self.block())) } else { None };
        Stmt::Try { body, catch_name, catch_body, finally_body }
    }

    fn include_statement(&mut self) -> Stmt {
        let path = self.current.text.clone();
        self.advance();

        let full = if Path::new(&path).exists() { path } else { format!("src/{}", path) };
        if self.included.contains(&full) {
            return Stmt::Empty;
        }
        self.included.insert(full.clone());

        let source = match fs::read_to_string(&full) {
            Ok(source) => source,
            Err(_) => {
                SharpError::include(format!("could not open {}", full)).report();
                return Stmt::Empty;
            }
        };
        // Included files get their own lexer and parser (and with them a
        // fresh include guard).
        let mut nested = Parser::new(Lexer::new(&source));
        nested.parse()
    }

    /// A braced statement sequence, or a single statement when no brace
    /// follows (`if (x == 3) break;`).
    fn block(&mut self) -> Stmt {
        if !self.check(TokenKind::LBrace) {
            return self.statement();
        }
        self.advance();
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            statements.push(self.statement());
        }
        self.expect(TokenKind::RBrace, "'}'");
        Stmt::Block(statements)
    }

    // --- expressions, lowest precedence first ---

    fn expression(&mut self) -> Expr {
        self.logical_or()
    }

    fn binary_chain(
        &mut self,
        operand: fn(&mut Parser) -> Expr,
        op_of: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Expr {
        let mut left = operand(self);
        while let Some(op) = op_of(self.current.kind) {
            self.advance();
            let right = operand(self);
            left = Expr::Binary { op, left: Box::new(left), right: Box::new(right) };
        }
        left
    }

    fn logical_or(&mut self) -> Expr {
        self.binary_chain(Parser::logical_and, |kind| match kind {
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        })
    }

    fn logical_and(&mut self) -> Expr {
        self.binary_chain(Parser::equality, |kind| match kind {
            TokenKind::And => Some(BinaryOp::And),
            _ => None,
        })
    }

    fn equality(&mut self) -> Expr {
        self.binary_chain(Parser::comparison, |kind| match kind {
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::Neq => Some(BinaryOp::Neq),
            _ => None,
        })
    }

    fn comparison(&mut self) -> Expr {
        self.binary_chain(Parser::additive, |kind| match kind {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Lte => Some(BinaryOp::Lte),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Gte => Some(BinaryOp::Gte),
            _ => None,
        })
    }

    fn additive(&mut self) -> Expr {
        self.binary_chain(Parser::multiplicative, |kind| match kind {
            TokenKind::Add => Some(BinaryOp::Add),
            TokenKind::Sub => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn multiplicative(&mut self) -> Expr {
        self.binary_chain(Parser::unary, |kind| match kind {
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::Div),
            TokenKind::Mod => Some(BinaryOp::Mod),
            _ => None,
        })
    }

    fn unary(&mut self) -> Expr {
        let op = match self.current.kind {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Sub => Some(UnaryOp::Neg),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            return Expr::Unary { op, operand: Box::new(self.unary()) };
        }
        self.postfix()
    }

    /// Postfix indexing, left associative so `a[b][c]` nests correctly.
    fn postfix(&mut self) -> Expr {
        let mut left = self.primary();
        while self.accept(TokenKind::LBracket) {
            let index = self.expression();
            self.expect(TokenKind::RBracket, "']'");
            left = Expr::Index { target: Box::new(left), index: Box::new(index) };
        }
        left
    }

    fn primary(&mut self) -> Expr {
        match self.current.kind {
            TokenKind::Number => {
                let value = number_value(&self.current.text);
                self.advance();
                Expr::Number(value)
            }
            TokenKind::Str => {
                let text = self.current.text.clone();
                self.advance();
                Expr::Str(text)
            }
            TokenKind::True => {
                self.advance();
                Expr::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                Expr::Bool(false)
            }
            TokenKind::Null => {
                self.advance();
                Expr::Null
            }
            TokenKind::LBracket => self.array_literal(),
            TokenKind::LBrace => self.map_literal(),
            TokenKind::Identifier => {
                let name = self.current.text.clone();
                self.advance();
                if self.check(TokenKind::LParen) {
                    let args = self.arguments();
                    Expr::Call { name, args }
                } else {
                    Expr::Identifier(name)
                }
            }
            TokenKind::Print
            | TokenKind::Input
            | TokenKind::Len
            | TokenKind::Type
            | TokenKind::Output
            | TokenKind::ErrorFn
            | TokenKind::Warning
            | TokenKind::Help => {
                let name = match self.current.kind {
                    TokenKind::Print => "system.print",
                    TokenKind::Input => "system.input",
                    TokenKind::Len => "system.len",
                    TokenKind::Type => "system.type",
                    TokenKind::Output => "system.output",
                    TokenKind::ErrorFn => "system.error",
                    TokenKind::Warning => "system.warning",
                    _ => "system.help",
                };
                self.advance();
                let args = self.arguments();
                Expr::Call { name: name.to_string(), args }
            }
            TokenKind::LParen => self.paren_or_lambda(),
            _ => self.unexpected(),
        }
    }

    fn array_literal(&mut self) -> Expr {
        self.advance(); // [
        let mut elements = Vec::new();
        while !self.check(TokenKind::RBracket) && !self.check(TokenKind::Eof) {
            elements.push(self.expression());
            self.accept(TokenKind::Comma);
        }
        self.expect(TokenKind::RBracket, "']'");
        Expr::Array(elements)
    }

    fn map_literal(&mut self) -> Expr {
        self.advance(); // {
        let mut keys = Vec::new();
        let mut values = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            keys.push(self.expression());
            self.expect(TokenKind::Colon, "':'");
            values.push(self.expression());
            self.accept(TokenKind::Comma);
        }
        self.expect(TokenKind::RBrace, "'}'");
        Expr::Map { keys, values }
    }

    /// Argument list including the surrounding parentheses.
    fn arguments(&mut self) -> Vec<Expr> {
        let mut args = Vec::new();
        if !self.expect(TokenKind::LParen, "'('") {
            return args;
        }
        while !self.check(TokenKind::RParen) && !self.check(TokenKind::Eof) {
            args.push(self.expression());
            self.accept(TokenKind::Comma);
        }
        self.expect(TokenKind::RParen, "')'");
        args
    }

    /// A parenthesized form is a lambda iff the closing `)` is immediately
    /// followed by `=>`; in that case every enclosed expression must be an
    /// identifier and becomes a parameter name.
    fn paren_or_lambda(&mut self) -> Expr {
        let line = self.current.line;
        self.advance(); // (

        if self.accept(TokenKind::RParen) {
            if self.accept(TokenKind::Arrow) {
                let body = Box::new(self.block());
                return Expr::Lambda { params: Vec::new(), body };
            }
            SharpError::parse("expected expression inside parentheses", line).report();
            return Expr::Null;
        }

        let mut exprs = vec![self.expression()];
        while self.accept(TokenKind::Comma) {
            exprs.push(self.expression());
        }
        self.expect(TokenKind::RParen, "')'");

        if self.accept(TokenKind::Arrow) {
            let mut params = Vec::new();
            for expr in exprs {
                match expr {
                    Expr::Identifier(name) => params.push(Param { name, default: None }),
                    _ => {
                        SharpError::parse("lambda parameters must be identifiers", line).report();
                        return Expr::Null;
                    }
                }
            }
            let body = Box::new(self.block());
            return Expr::Lambda { params, body };
        }

        if exprs.len() > 1 {
            SharpError::parse("unexpected ',' in parenthesized expression", line).report();
        }
        exprs.swap_remove(0)
    }
}

/// Numeric literal text to value. The lexer accepts runs of digits and
/// dots; like `atof`, everything after a second dot is ignored.
fn number_value(text: &str) -> f64 {
    if let Ok(value) = text.parse() {
        return value;
    }
    let mut seen_dot = false;
    let end = text
        .find(|c: char| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(0.0)
}
