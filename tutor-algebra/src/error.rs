//! Errors that can occur while expanding or simplifying a parsed expression.

use ariadne::Fmt;
use tutor_attrs::ErrorKind;
use tutor_error::{ErrorKind, EXPR};

/// A number literal could not be converted to an exact rational.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The literal as written.
    pub literal: String,
}

/// A function call appeared where only polynomial arithmetic is supported.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot expand the function call `{}`", name),
    labels = ["this call"],
    help = format!("only {} are supported", "sums, products, quotients, and integer powers".fg(EXPR)),
)]
pub struct UnsupportedFunction {
    /// The name of the function.
    pub name: String,
}

/// The divisor of a quotient evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// A polynomial was divided by an expression containing symbols while expanding.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot expand a division by an expression containing symbols",
    labels = ["this divisor contains symbols"],
    help = "the result is not a polynomial; simplifying the expression may still work",
)]
pub struct NonConstantDivisor;

/// An exponent contained symbols.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be a constant",
    labels = ["this exponent contains symbols"],
)]
pub struct SymbolicExponent;

/// An exponent was not an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be an integer",
    labels = [format!("this exponent evaluates to {}", value.fg(EXPR))],
)]
pub struct FractionalExponent {
    /// The value of the exponent.
    pub value: String,
}

/// A negative exponent was used while expanding.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must not be negative",
    labels = ["this exponent is negative"],
    help = "negative powers are only supported when simplifying",
)]
pub struct NegativeExponent;

/// An exponent was too large to expand in bounded time.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is too large",
    labels = [format!("exponents larger than {} in magnitude are not expanded", max)],
)]
pub struct ExponentTooLarge {
    /// The largest supported exponent.
    pub max: u32,
}

/// Expanding the expression would produce too many terms.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too large to expand",
    labels = ["expanding this produces too many terms"],
    help = format!("at most {} terms are supported", max),
)]
pub struct ExpressionTooLarge {
    /// The largest supported number of terms.
    pub max: usize,
}
