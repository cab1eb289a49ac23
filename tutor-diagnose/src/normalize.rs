use std::{fmt, ops::Deref};

/// An expression with all whitespace removed and all letters lowercased, ready for pattern
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Normalized(String);

impl Normalized {
    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Normalized {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Removes every whitespace character and lowercases every letter.
pub fn normalize(text: &str) -> Normalized {
    Normalized(
        text.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_case() {
        assert_eq!(normalize("D/DX ( X^2 ) = x").as_str(), "d/dx(x^2)=x");
        assert_eq!(normalize("\t(a + b)^2\n=\u{00a0}a^2 + b^2 ").as_str(), "(a+b)^2=a^2+b^2");
        assert_eq!(normalize("").as_str(), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "d/dx(x^2) = x",
            "  (A+B)^2 = A^2 + B^2",
            "2 + 2 = 4",
            "ΣX = Ǆ",
            "\u{2003}x\u{3000}",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
