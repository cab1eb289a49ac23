//! The abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! Every node remembers the region of the source it was parsed from, so that errors found while
//! expanding or simplifying can point back at the offending part of the input.

use std::ops::Range;

/// A number literal, such as `2` or `0.5`. The digits are kept as written so that decimals can be
/// converted to exact rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitNum {
    pub value: String,
    pub span: Range<usize>,
}

/// A symbol, such as `x` or `ab`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    pub name: String,
    pub span: Range<usize>,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(LitNum),
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

/// A parenthesized expression, such as `(x + 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren {
    pub expr: Box<Expr>,
    pub span: Range<usize>,
}

/// A function call, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: LitSym,
    pub args: Vec<Expr>,
    pub span: Range<usize>,
}

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

/// A unary operation, such as `-x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary {
    pub operand: Box<Expr>,
    pub op: UnaryOp,
    pub span: Range<usize>,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

/// A binary operation, such as `x + 1`. Implicit multiplication (`2x`) is parsed as
/// [`BinOp::Mul`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub lhs: Box<Expr>,
    pub op: BinOp,
    pub rhs: Box<Expr>,
    pub span: Range<usize>,
}

/// Represents a general algebraic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(x)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
        }
    }
}
