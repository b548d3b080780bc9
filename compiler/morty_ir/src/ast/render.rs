//! Canonical source rendering.
//!
//! Prefix and infix expressions are always wrapped in parentheses, so the
//! rendered text shows exactly how the parser grouped operators:
//! `-a * b` renders as `((-a) * b)`.

use std::fmt::{self, Display, Formatter, Write};

use super::{Block, Expr, ExprKind, FunctionLiteral, Ident, Program, Stmt, StmtKind};

/// Write `items` separated by `", "`.
fn comma_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write `stmts` separated by `sep`. An expression statement followed by
/// another statement keeps its `;`, so `a; (b)` does not read back as the
/// call `a(b)`.
fn statements(f: &mut Formatter<'_>, stmts: &[Stmt], sep: char) -> fmt::Result {
    for (i, stmt) in stmts.iter().enumerate() {
        if i > 0 {
            f.write_char(sep)?;
        }
        write!(f, "{stmt}")?;
        if matches!(stmt.kind, StmtKind::Expression(_)) && i + 1 < stmts.len() {
            f.write_char(';')?;
        }
    }
    Ok(())
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One top-level statement per line.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        statements(f, &self.statements, '\n')
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        if !self.statements.is_empty() {
            f.write_char(' ')?;
            statements(f, &self.statements, ' ')?;
        }
        f.write_str(" }")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StmtKind::Return(Some(value)) => write!(f, "return {value};"),
            StmtKind::Return(None) => f.write_str("return;"),
            StmtKind::Expression(expr) => write!(f, "{expr}"),
            StmtKind::Block(block) => write!(f, "{block}"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Str(value) => write!(f, "\"{value}\""),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Prefix { op, operand } => write!(f, "({}{operand})", op.as_symbol()),
            ExprKind::Infix { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {alt}")?;
                }
                Ok(())
            }
            ExprKind::Function(func) => write!(f, "{func}"),
            ExprKind::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                comma_separated(f, arguments)?;
                f.write_char(')')
            }
            ExprKind::Array(elements) => {
                f.write_char('[')?;
                comma_separated(f, elements)?;
                f.write_char(']')
            }
        }
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_char('(')?;
        comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}
