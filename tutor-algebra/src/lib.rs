//! Light algebraic equivalence checking.
//!
//! This crate answers two questions about short, textual algebraic expressions, such as one side
//! of a student's equation:
//!
//! - What is the expression's canonical polynomial form? See [`expand()`].
//! - Do two expressions describe the same rational function? See [`equivalent()`], which
//!   compares the [`Simplified`] forms of both.
//!
//! Both operations are exact: coefficients are arbitrary-precision rationals, and every
//! operation is bounded in the size of the polynomials it will build, so even adversarial input
//! such as `(a+b+c+d)^64` fails quickly with an error instead of running for a long time. The
//! length and nesting depth of the input are limited as well, so no input can exhaust the stack.
//!
//! ```
//! use tutor_algebra::{equivalent, expand};
//!
//! let lhs = expand("(x + y)^2").unwrap();
//! let rhs = expand("x^2 + y^2").unwrap();
//! assert_eq!((lhs - rhs).to_string(), "2*x*y");
//!
//! assert!(equivalent("(x^2 - 1) / (x - 1)", "x + 1").unwrap());
//! assert!(!equivalent("2 + 2", "5").unwrap());
//! ```
//!
//! Every failure is a [`tutor_error::Error`], which carries the span of the offending part of the
//! input where there is one, so it can be rendered as a report with
//! [`tutor_error::Error::report_to_stderr`].

pub mod error;
pub mod expand;
pub mod parser;
pub mod polynomial;
mod primitive;
pub mod simplify;
pub mod tokenizer;

pub use polynomial::{Monomial, Polynomial, Term};
pub use simplify::Simplified;

use parser::{ast::Expr, Parser};
use tutor_error::Error;

/// Parses the source into an expression. The entire source must be a single expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// Parses and expands the source into its canonical polynomial form.
pub fn expand(source: &str) -> Result<Polynomial, Error> {
    expand::expand_expr(&parse(source)?)
}

/// Parses and simplifies the source into a quotient of polynomials.
pub fn simplify(source: &str) -> Result<Simplified, Error> {
    simplify::simplify_expr(&parse(source)?)
}

/// Parses and simplifies both sources, returning true if they describe the same rational
/// function.
pub fn equivalent(lhs: &str, rhs: &str) -> Result<bool, Error> {
    simplify(lhs)?.try_eq(&simplify(rhs)?)
}
