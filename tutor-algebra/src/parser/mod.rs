//! A recursive-descent parser for plain algebraic expressions.
//!
//! The grammar is intentionally small. It covers sums and products (including implicit
//! multiplication such as `2x` or `3(x + 1)`), unary signs, right-associative powers written with
//! `^` or `**`, parentheses, and function calls. Symbols are single letters, and a call is a name
//! of two or more letters directly followed by `(`.
//!
//! ```text
//! sum     = product (("+" | "-") product)*
//! product = unary (("*" | "/") unary | power)*
//! unary   = ("-" | "+") unary | power
//! power   = primary (("^" | "**") unary)?
//! primary = number | letter | name "(" args ")" | "(" sum ")"
//! ```
//!
//! Input is limited to [`MAX_TOKENS`] tokens and [`MAX_DEPTH`] levels of nesting, so that neither
//! the parser nor any later pass over the tree can exhaust the stack.

pub mod ast;
pub mod error;

use ast::{BinOp, Binary, Call, Expr, LitNum, LitSym, Literal, Paren, Unary, UnaryOp};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use tutor_error::{Error, ErrorKind};

/// The largest number of tokens, not counting whitespace, in an expression. The depth of the
/// syntax tree never exceeds the number of tokens, so this bounds the recursion of every pass
/// over the tree.
pub const MAX_TOKENS: usize = 512;

/// The deepest parentheses, call arguments, signs, and exponents may be nested.
pub const MAX_DEPTH: usize = 128;

/// The tokens that can begin an operand.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Name,
    TokenKind::OpenParen,
    TokenKind::Sub,
];

/// A high-level parser for algebraic expressions. This is the type to use to parse an arbitrary
/// piece of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting depth.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if there
    /// is none.
    fn span(&self) -> Range<usize> {
        self.peek().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without moving the cursor.
    fn peek(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                return Ok(token.clone());
            }
        }

        Err(self.error(error::UnexpectedEof))
    }

    /// Consumes the next token if it is of the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Runs the parse function one nesting level deeper, failing with an error pointing at
    /// `span` if that exceeds [`MAX_DEPTH`].
    fn nested<T>(
        &mut self,
        span: Range<usize>,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(vec![span], error::NestingTooDeep { max: MAX_DEPTH }));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses a complete expression. The entire input must be consumed, and may contain at most
    /// [`MAX_TOKENS`] tokens.
    pub fn try_parse_full(&mut self) -> Result<Expr, Error> {
        let length = self.tokens.iter().filter(|token| !token.is_whitespace()).count();
        if length > MAX_TOKENS {
            let span = 0..self.eof_span().end;
            return Err(Error::new(vec![span], error::ExpressionTooLong { max: MAX_TOKENS }));
        }

        let expr = self.parse_sum()?;

        match self.peek() {
            None => Ok(expr),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(error::UnclosedParenthesis { opening: false }))
            },
            Some(token) => {
                let span = token.span.start..self.eof_span().end;
                Err(Error::new(vec![span], error::ExpectedEof))
            },
        }
    }

    /// Parses terms separated by `+` or `-`.
    fn parse_sum(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_product()?;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Add) => BinOp::Add,
                Some(TokenKind::Sub) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.next_token()?;

            let rhs = self.parse_product()?;
            lhs = binary(lhs, op, rhs);
        }
    }

    /// Parses factors separated by `*`, `/`, or nothing at all (implicit multiplication).
    fn parse_product(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_unary()?;

        loop {
            match self.peek_kind() {
                Some(TokenKind::Mul) => {
                    self.next_token()?;
                    let rhs = self.parse_unary()?;
                    lhs = binary(lhs, BinOp::Mul, rhs);
                },
                Some(TokenKind::Div) => {
                    self.next_token()?;
                    let rhs = self.parse_unary()?;
                    lhs = binary(lhs, BinOp::Div, rhs);
                },
                Some(kind) if kind.starts_operand() => {
                    // a sign cannot start an implicit factor: `2 -x` is a subtraction
                    let rhs = self.parse_power()?;
                    lhs = binary(lhs, BinOp::Mul, rhs);
                },
                _ => return Ok(lhs),
            }
        }
    }

    /// Parses a signed operand.
    fn parse_unary(&mut self) -> Result<Expr, Error> {
        let op = match self.peek_kind() {
            Some(TokenKind::Sub) => UnaryOp::Neg,
            Some(TokenKind::Add) => UnaryOp::Pos,
            _ => return self.parse_power(),
        };
        let token = self.next_token()?;

        let operand = self.nested(token.span.clone(), Self::parse_unary)?;
        let span = token.span.start..operand.span().end;
        Ok(Expr::Unary(Unary { operand: Box::new(operand), op, span }))
    }

    /// Parses a primary expression, optionally raised to a power. Powers are right-associative,
    /// and the exponent may carry its own sign (`x^-1`).
    fn parse_power(&mut self) -> Result<Expr, Error> {
        let base = self.parse_primary()?;

        if let Some(op) = self.eat(TokenKind::Exp) {
            let exp = self.nested(op.span, Self::parse_unary)?;
            Ok(binary(base, BinOp::Exp, exp))
        } else {
            Ok(base)
        }
    }

    /// Parses a number, symbol, function call, or parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, Error> {
        let token = self.next_token()?;

        match token.kind {
            TokenKind::Int | TokenKind::Float => Ok(Expr::Literal(Literal::Number(LitNum {
                value: token.lexeme.to_string(),
                span: token.span,
            }))),
            TokenKind::Name => {
                let name = LitSym { name: token.lexeme.to_string(), span: token.span };

                // a single letter before a parenthesis is a factor, as in `a(b + c)`; only
                // longer names, which the tokenizer keeps whole before `(`, are calls
                match self.tokens.get(self.cursor) {
                    Some(next) if next.kind == TokenKind::OpenParen && name.name.len() > 1 => {
                        self.parse_call(name)
                    },
                    _ => Ok(Expr::Literal(Literal::Symbol(name))),
                }
            },
            TokenKind::OpenParen => {
                if let Some(close) = self.eat(TokenKind::CloseParen) {
                    return Err(Error::new(vec![token.span.start..close.span.end], error::EmptyParenthesis));
                }

                let expr = self.nested(token.span.clone(), Self::parse_sum)?;
                let close = self.expect_close_paren(&token)?;
                Ok(Expr::Paren(Paren {
                    expr: Box::new(expr),
                    span: token.span.start..close.span.end,
                }))
            },
            TokenKind::CloseParen => Err(Error::new(
                vec![token.span],
                error::UnclosedParenthesis { opening: false },
            )),
            found => Err(Error::new(vec![token.span], error::UnexpectedToken {
                expected: OPERAND_START,
                found,
            })),
        }
    }

    /// Parses the argument list of a function call. The cursor must be on the opening
    /// parenthesis.
    fn parse_call(&mut self, name: LitSym) -> Result<Expr, Error> {
        let open = self.next_token()?;
        let mut args = Vec::new();

        if self.peek_kind() != Some(TokenKind::CloseParen) {
            loop {
                args.push(self.nested(open.span.clone(), Self::parse_sum)?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        let close = self.expect_close_paren(&open)?;
        let span = name.span.start..close.span.end;
        Ok(Expr::Call(Call { name, args, span }))
    }

    /// Consumes the closing parenthesis matching `open`.
    fn expect_close_paren(&mut self, open: &Token<'source>) -> Result<Token<'source>, Error> {
        match self.peek_kind() {
            Some(TokenKind::CloseParen) => self.next_token(),
            None => Err(Error::new(vec![open.span.clone()], error::UnclosedParenthesis { opening: true })),
            Some(found) => Err(self.error(error::UnexpectedToken {
                expected: &[TokenKind::CloseParen],
                found,
            })),
        }
    }
}

/// Builds a binary expression spanning both operands.
fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
    let span = lhs.span().start..rhs.span().end;
    Expr::Binary(Binary { lhs: Box::new(lhs), op, rhs: Box::new(rhs), span })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sym(name: &str, span: Range<usize>) -> Box<Expr> {
        Box::new(Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span })))
    }

    fn num(value: &str, span: Range<usize>) -> Box<Expr> {
        Box::new(Expr::Literal(Literal::Number(LitNum { value: value.to_string(), span })))
    }

    #[test]
    fn binomial_square() {
        let expr = Parser::new("(a+b)^2").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: sym("a", 1..2),
                    op: BinOp::Add,
                    rhs: sym("b", 3..4),
                    span: 1..4,
                })),
                span: 0..5,
            })),
            op: BinOp::Exp,
            rhs: num("2", 6..7),
            span: 0..7,
        }));
    }

    #[test]
    fn implicit_multiplication() {
        let expr = Parser::new("4x^2").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: num("4", 0..1),
            op: BinOp::Mul,
            rhs: Box::new(Expr::Binary(Binary {
                lhs: sym("x", 1..2),
                op: BinOp::Exp,
                rhs: num("2", 3..4),
                span: 1..4,
            })),
            span: 0..4,
        }));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        let expr = Parser::new("-x^2").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: sym("x", 1..2),
                op: BinOp::Exp,
                rhs: num("2", 3..4),
                span: 1..4,
            })),
            op: UnaryOp::Neg,
            span: 0..4,
        }));
    }

    #[test]
    fn right_associative_power() {
        let expr = Parser::new("x^y**z").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: sym("x", 0..1),
            op: BinOp::Exp,
            rhs: Box::new(Expr::Binary(Binary {
                lhs: sym("y", 2..3),
                op: BinOp::Exp,
                rhs: sym("z", 5..6),
                span: 2..6,
            })),
            span: 0..6,
        }));
    }

    #[test]
    fn function_call() {
        let expr = Parser::new("max(x, 2)").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "max".to_string(), span: 0..3 },
            args: vec![*sym("x", 4..5), *num("2", 7..8)],
            span: 0..9,
        }));
    }

    #[test]
    fn letter_before_parenthesis_is_a_factor() {
        let expr = Parser::new("a(b)").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: sym("a", 0..1),
            op: BinOp::Mul,
            rhs: Box::new(Expr::Paren(Paren { expr: sym("b", 2..3), span: 1..4 })),
            span: 0..4,
        }));
    }

    #[test]
    fn adjacent_letters_multiply() {
        let expr = Parser::new("xy^2").try_parse_full().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: sym("x", 0..1),
            op: BinOp::Mul,
            rhs: Box::new(Expr::Binary(Binary {
                lhs: sym("y", 1..2),
                op: BinOp::Exp,
                rhs: num("2", 3..4),
                span: 1..4,
            })),
            span: 0..4,
        }));
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = Parser::new("(x + 1").try_parse_full().unwrap_err();
        assert_eq!(err.spans, vec![0..1]);
        assert_eq!(err.downcast_ref(), Some(&error::UnclosedParenthesis { opening: true }));

        let err = Parser::new("x + 1)").try_parse_full().unwrap_err();
        assert_eq!(err.spans, vec![5..6]);
        assert_eq!(err.downcast_ref(), Some(&error::UnclosedParenthesis { opening: false }));
    }

    #[test]
    fn empty_parenthesis() {
        let err = Parser::new("2 * ( )").try_parse_full().unwrap_err();
        assert_eq!(err.spans, vec![4..7]);
        assert!(err.is::<error::EmptyParenthesis>());
    }

    #[test]
    fn trailing_operator() {
        let err = Parser::new("x +").try_parse_full().unwrap_err();
        assert!(err.is::<error::UnexpectedEof>());
    }

    #[test]
    fn equals_sign_is_rejected() {
        let err = Parser::new("x = 1").try_parse_full().unwrap_err();
        assert_eq!(err.spans, vec![2..5]);
        assert!(err.is::<error::ExpectedEof>());
    }

    #[test]
    fn too_long() {
        let source = format!("{}x", "x+".repeat(MAX_TOKENS));
        let err = Parser::new(&source).try_parse_full().unwrap_err();
        assert_eq!(err.spans, vec![0..source.len()]);
        assert_eq!(err.downcast_ref(), Some(&error::ExpressionTooLong { max: MAX_TOKENS }));

        // whitespace does not count
        let source = format!("x{}", " ".repeat(4 * MAX_TOKENS));
        assert!(Parser::new(&source).try_parse_full().is_ok());
    }

    #[test]
    fn nesting_limit() {
        let source = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(Parser::new(&source).try_parse_full().is_ok());

        let depth = MAX_DEPTH + 1;
        let cases = [
            (format!("{}x{}", "(".repeat(depth), ")".repeat(depth)), MAX_DEPTH),
            (format!("{}x", "-".repeat(depth)), MAX_DEPTH),
            (format!("{}x", "x^".repeat(depth)), 2 * MAX_DEPTH + 1),
            (format!("{}x{}", "max(".repeat(depth), ")".repeat(depth)), 4 * MAX_DEPTH + 3),
        ];
        for (source, position) in cases {
            let err = Parser::new(&source).try_parse_full().unwrap_err();
            assert_eq!(err.spans, vec![position..position + 1], "{}", source);
            assert!(err.is::<error::NestingTooDeep>());
        }
    }

    #[test]
    fn unexpected_token() {
        let err = Parser::new("* x").try_parse_full().unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&error::UnexpectedToken {
            expected: OPERAND_START,
            found: TokenKind::Mul,
        }));
    }
}
