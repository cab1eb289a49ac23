pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, so that the
/// parser can look ahead freely.
///
/// Symbols are single letters: a run of letters such as `xy` becomes one [`TokenKind::Name`] per
/// letter, so that `2xy` reads as `2*x*y`. The exception is a run directly followed by an opening
/// parenthesis, such as `sin(`, which is kept whole as the name of a function.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();

        // anything the lexer cannot classify is left for the parser to reject
        let kind = kind.unwrap_or(TokenKind::Symbol);
        if kind == TokenKind::Name && !lexer.remainder().starts_with('(') {
            // names are ASCII, so every letter is one byte long
            tokens.extend((0..lexeme.len()).map(|i| Token {
                span: span.start + i..span.start + i + 1,
                kind,
                lexeme: &lexeme[i..i + 1],
            }));
        } else {
            tokens.push(Token { span, kind, lexeme });
        }
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter().map(|token| (token.kind, token.lexeme)).collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn binomial() {
        compare_tokens(
            "(x + y)^2",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn numbers_and_double_star() {
        compare_tokens(
            "3.25x ** .5 - 2",
            [
                (TokenKind::Float, "3.25"),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Exp, "**"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn letters_are_separate_symbols() {
        compare_tokens(
            "2xy + sin(ab)",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Name, "x"),
                (TokenKind::Name, "y"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "a"),
                (TokenKind::Name, "b"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn unknown_symbols() {
        compare_tokens(
            "a = b",
            [
                (TokenKind::Name, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "b"),
            ],
        );
    }
}
