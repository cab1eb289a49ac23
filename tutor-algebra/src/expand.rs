//! Expansion of parsed expressions into [`Polynomial`]s.
//!
//! Expansion multiplies out every product and integer power, then combines like terms. The
//! result is the canonical polynomial form of the expression, so `(x + y)^2` and
//! `x^2 + 2xy + y^2` expand to the same value.
//!
//! Only polynomial expressions can be expanded. Function calls, divisions by anything other than
//! a nonzero constant, and exponents that are not small non-negative integers are reported as
//! errors pointing at the offending part of the input.

use crate::{
    error,
    parser::ast::{BinOp, Call, Expr, LitNum, Literal, UnaryOp},
    polynomial::{Polynomial, MAX_TERMS},
    primitive::rational_from_str,
};
use rug::Rational;
use std::ops::Range;
use tutor_error::Error;

/// The largest exponent (in magnitude) that will be expanded.
pub const MAX_EXPONENT: u32 = 64;

/// Expands the expression into a polynomial.
pub fn expand_expr(expr: &Expr) -> Result<Polynomial, Error> {
    match expr {
        Expr::Literal(Literal::Number(num)) => number(num).map(Polynomial::constant),
        Expr::Literal(Literal::Symbol(sym)) => Ok(Polynomial::symbol(sym.name.as_str())),
        Expr::Paren(paren) => expand_expr(&paren.expr),
        Expr::Call(call) => Err(unsupported_call(call)),
        Expr::Unary(unary) => {
            let operand = expand_expr(&unary.operand)?;
            Ok(match unary.op {
                UnaryOp::Neg => -operand,
                UnaryOp::Pos => operand,
            })
        },
        Expr::Binary(binary) => {
            let lhs = expand_expr(&binary.lhs)?;
            match binary.op {
                BinOp::Add => Ok(lhs + expand_expr(&binary.rhs)?),
                BinOp::Sub => Ok(lhs - expand_expr(&binary.rhs)?),
                BinOp::Mul => {
                    let rhs = expand_expr(&binary.rhs)?;
                    lhs.checked_mul(&rhs).ok_or_else(|| too_large(binary.span.clone()))
                },
                BinOp::Div => {
                    let rhs = expand_expr(&binary.rhs)?;
                    let divisor = rhs.as_constant()
                        .ok_or_else(|| Error::new(vec![binary.rhs.span()], error::NonConstantDivisor))?;
                    if divisor == 0 {
                        return Err(Error::new(vec![binary.rhs.span()], error::DivisionByZero));
                    }
                    Ok(lhs.scale(&divisor.recip()))
                },
                BinOp::Exp => {
                    let exp = integer_exponent(&binary.rhs)?;
                    let exp = u32::try_from(exp)
                        .map_err(|_| Error::new(vec![binary.rhs.span()], error::NegativeExponent))?;
                    lhs.checked_pow(exp).ok_or_else(|| too_large(binary.span.clone()))
                },
            }
        },
    }
}

/// Converts a number literal to an exact rational.
pub(crate) fn number(num: &LitNum) -> Result<Rational, Error> {
    rational_from_str(&num.value).ok_or_else(|| {
        Error::new(vec![num.span.clone()], error::InvalidNumber { literal: num.value.clone() })
    })
}

/// Evaluates an exponent, which must expand to an integer constant no larger than
/// [`MAX_EXPONENT`] in magnitude.
pub(crate) fn integer_exponent(expr: &Expr) -> Result<i64, Error> {
    let span = expr.span();
    let value = expand_expr(expr)?
        .as_constant()
        .ok_or_else(|| Error::new(vec![span.clone()], error::SymbolicExponent))?;

    if *value.denom() != 1 {
        return Err(Error::new(vec![span], error::FractionalExponent { value: value.to_string() }));
    }

    value.numer()
        .to_i64()
        .filter(|exp| exp.unsigned_abs() <= u64::from(MAX_EXPONENT))
        .ok_or_else(|| Error::new(vec![span], error::ExponentTooLarge { max: MAX_EXPONENT }))
}

/// Creates the error for a function call.
pub(crate) fn unsupported_call(call: &Call) -> Error {
    Error::new(vec![call.span.clone()], error::UnsupportedFunction { name: call.name.name.clone() })
}

/// Creates the error for an operation whose result would be too large.
pub(crate) fn too_large(span: Range<usize>) -> Error {
    Error::new(vec![span], error::ExpressionTooLarge { max: MAX_TERMS })
}
